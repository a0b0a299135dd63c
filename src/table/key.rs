//! Subscript keys for frame lookups
//!
//! A frame can be addressed three ways: one column by name, several columns
//! by a list of names, or a positional slice of rows.

use ndarray::{Array1, Slice};
use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use super::view::FastFrame;
use crate::error::{FrameError, Result};

/// Positional row slice with sequence-slicing semantics
///
/// Negative bounds count from the end and out-of-range bounds are clamped.
/// With a negative step the walk starts at `start` (default: last row) and
/// moves down to `end` exclusive (default: past the first row).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowSlice {
    pub start: Option<isize>,
    pub end: Option<isize>,
    pub step: isize,
}

impl RowSlice {
    pub fn new(start: Option<isize>, end: Option<isize>, step: isize) -> Self {
        Self { start, end, step }
    }

    /// Resolve against `len` rows into an ndarray slice plus its row count
    pub fn resolve(self, len: usize) -> Result<(Slice, usize)> {
        let step = self.step;
        if step == 0 {
            return Err(FrameError::ZeroStep);
        }
        let len = len as isize;

        if step > 0 {
            let clamp = |i: isize| if i < 0 { (i + len).max(0) } else { i.min(len) };
            let start = self.start.map(clamp).unwrap_or(0);
            let end = self.end.map(clamp).unwrap_or(len).max(start);
            let count = (end - start + step - 1) / step;
            return Ok((Slice::new(start, Some(end), step), count as usize));
        }

        // -1 stands for "before the first row"
        let clamp = |i: isize| {
            if i < 0 {
                (i + len).max(-1)
            } else {
                i.min(len - 1)
            }
        };
        let start = self.start.map(clamp).unwrap_or(len - 1);
        let end = self.end.map(clamp).unwrap_or(-1);
        if start <= end {
            return Ok((Slice::new(0, Some(0), 1), 0));
        }
        let count = (start - end - 1) / -step + 1;
        // ndarray walks [end+1, start+1) backwards from its last element
        Ok((Slice::new(end + 1, Some(start + 1), step), count as usize))
    }
}

impl From<Slice> for RowSlice {
    fn from(s: Slice) -> Self {
        RowSlice::new(Some(s.start), s.end, s.step)
    }
}

impl From<Range<usize>> for RowSlice {
    fn from(r: Range<usize>) -> Self {
        RowSlice::new(Some(r.start as isize), Some(r.end as isize), 1)
    }
}

impl From<RangeFrom<usize>> for RowSlice {
    fn from(r: RangeFrom<usize>) -> Self {
        RowSlice::new(Some(r.start as isize), None, 1)
    }
}

impl From<RangeTo<usize>> for RowSlice {
    fn from(r: RangeTo<usize>) -> Self {
        RowSlice::new(None, Some(r.end as isize), 1)
    }
}

impl From<RangeFull> for RowSlice {
    fn from(_: RangeFull) -> Self {
        RowSlice::new(None, None, 1)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Key<'a> {
    /// A single column by name
    Column(&'a str),

    /// Several columns by name, in the requested order
    Columns(Vec<&'a str>),

    /// Positional row slice
    Rows(RowSlice),
}

/// Result of a keyed lookup
#[derive(Debug)]
pub enum Selection<'f> {
    /// Borrowed contiguous column
    Column(&'f Array1<f64>),

    /// New frame (row slice or column subset)
    Frame(FastFrame),
}

impl<'f> Selection<'f> {
    pub fn into_column(self) -> Option<&'f Array1<f64>> {
        match self {
            Selection::Column(c) => Some(c),
            Selection::Frame(_) => None,
        }
    }

    pub fn into_frame(self) -> Option<FastFrame> {
        match self {
            Selection::Frame(f) => Some(f),
            Selection::Column(_) => None,
        }
    }
}

impl<'a> From<&'a str> for Key<'a> {
    fn from(name: &'a str) -> Self {
        Key::Column(name)
    }
}

impl<'a> From<&'a String> for Key<'a> {
    fn from(name: &'a String) -> Self {
        Key::Column(name.as_str())
    }
}

impl<'a> From<&'a [&'a str]> for Key<'a> {
    fn from(names: &'a [&'a str]) -> Self {
        Key::Columns(names.to_vec())
    }
}

impl<'a, const N: usize> From<[&'a str; N]> for Key<'a> {
    fn from(names: [&'a str; N]) -> Self {
        Key::Columns(names.to_vec())
    }
}

impl<'a> From<Vec<&'a str>> for Key<'a> {
    fn from(names: Vec<&'a str>) -> Self {
        Key::Columns(names)
    }
}

impl From<RowSlice> for Key<'_> {
    fn from(slice: RowSlice) -> Self {
        Key::Rows(slice)
    }
}

impl From<Slice> for Key<'_> {
    fn from(slice: Slice) -> Self {
        Key::Rows(slice.into())
    }
}

impl From<Range<usize>> for Key<'_> {
    fn from(r: Range<usize>) -> Self {
        Key::Rows(r.into())
    }
}

impl From<RangeFrom<usize>> for Key<'_> {
    fn from(r: RangeFrom<usize>) -> Self {
        Key::Rows(r.into())
    }
}

impl From<RangeTo<usize>> for Key<'_> {
    fn from(r: RangeTo<usize>) -> Self {
        Key::Rows(r.into())
    }
}

impl From<RangeFull> for Key<'_> {
    fn from(r: RangeFull) -> Self {
        Key::Rows(r.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_conversions() {
        assert_eq!(Key::from("D"), Key::Column("D"));
        assert_eq!(Key::from(["A", "C"]), Key::Columns(vec!["A", "C"]));
        assert_eq!(Key::from(0..2), Key::Rows(RowSlice::new(Some(0), Some(2), 1)));
        assert_eq!(Key::from(..), Key::Rows(RowSlice::new(None, None, 1)));
    }

    fn resolved(s: RowSlice, len: usize) -> (Slice, usize) {
        s.resolve(len).unwrap()
    }

    #[test]
    fn test_resolve_positive_step() {
        assert_eq!(resolved(RowSlice::new(Some(-2), None, 1), 5), (Slice::new(3, Some(5), 1), 2));
        assert_eq!(resolved(RowSlice::new(Some(1), Some(99), 2), 5), (Slice::new(1, Some(5), 2), 2));
        assert_eq!(resolved(RowSlice::new(Some(4), Some(1), 1), 5).1, 0);
    }

    #[test]
    fn test_resolve_negative_step() {
        // [3:0:-1] -> 3, 2, 1
        assert_eq!(resolved(RowSlice::new(Some(3), Some(0), -1), 5), (Slice::new(1, Some(4), -1), 3));
        // [0:4:-1] -> empty
        assert_eq!(resolved(RowSlice::new(Some(0), Some(4), -1), 5).1, 0);
        // [::-1] -> all rows reversed
        assert_eq!(resolved(RowSlice::new(None, None, -1), 5), (Slice::new(0, Some(5), -1), 5));
        // [0::-1] -> just row 0
        assert_eq!(resolved(RowSlice::new(Some(0), None, -1), 5), (Slice::new(0, Some(1), -1), 1));
        // [-1:-4:-2] -> 4, 2
        assert_eq!(resolved(RowSlice::new(Some(-1), Some(-4), -2), 5), (Slice::new(2, Some(5), -2), 2));
    }

    #[test]
    fn test_resolve_zero_step() {
        assert!(matches!(
            RowSlice::new(None, None, 0).resolve(3),
            Err(FrameError::ZeroStep)
        ));
    }
}
