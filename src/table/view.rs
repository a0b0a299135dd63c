//! Fast frame: array-backed view of a table
//!
//! Holds column names, a name -> position map, and the data in up to two
//! physical layouts (see [`super::layout`]). Whichever layout an operation
//! needs is built from the other on first use and then kept:
//! - column lookups and column selection read the column-major layout
//! - row slicing reads whichever layout is already there
//! - appends produce a row-major layout
//! - column assignment produces a column-major layout and drops the
//!   row-major one

use std::cell::OnceCell;
use std::collections::HashMap;
use std::ops::Index;

use ndarray::{concatenate, Array1, Array2, ArrayView1, Axis};

use super::key::{Key, RowSlice, Selection};
use super::layout::{self, Materialized};
use super::{Column, Table};
use crate::error::{FrameError, Result};

#[derive(Clone, Debug, Default)]
pub struct FastFrame {
    columns: Vec<String>,
    col2idx: HashMap<String, usize>,
    nrows: usize,
    /// Row-major layout, shape (nrows, ncols)
    rows: OnceCell<Array2<f64>>,
    /// Column-major layout, one contiguous array per column
    cols: OnceCell<Vec<Array1<f64>>>,
}

fn index_names(columns: &[String]) -> HashMap<String, usize> {
    // Later duplicates overwrite earlier ones.
    columns
        .iter()
        .enumerate()
        .map(|(i, c)| (c.clone(), i))
        .collect()
}

fn collect_names<I>(names: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    names.into_iter().map(Into::into).collect()
}

impl FastFrame {
    /// Empty frame: no columns, no rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a conventional table
    ///
    /// Only the column-major layout is built; each table column is widened
    /// to f64 independently, so the table is never coerced into one matrix.
    pub fn from_table(table: &Table) -> Result<Self> {
        let cols: Vec<Array1<f64>> = table
            .columns
            .iter()
            .map(|c| Array1::from(c.to_f64_vec()))
            .collect();
        Self::from_columns(table.names.clone(), cols)
    }

    /// Build from a row-major matrix; its width must match the names
    pub fn from_rows<I>(names: I, rows: Array2<f64>) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let columns = collect_names(names);
        if rows.ncols() != columns.len() {
            return Err(FrameError::WidthMismatch {
                expected: columns.len(),
                actual: rows.ncols(),
            });
        }
        Ok(Self {
            col2idx: index_names(&columns),
            columns,
            nrows: rows.nrows(),
            rows: OnceCell::from(if rows.is_standard_layout() {
                rows
            } else {
                rows.as_standard_layout().into_owned()
            }),
            cols: OnceCell::new(),
        })
    }

    /// Build from per-column arrays; all columns must have the same length
    pub fn from_columns<I>(names: I, cols: Vec<Array1<f64>>) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let columns = collect_names(names);
        if cols.len() != columns.len() {
            return Err(FrameError::WidthMismatch {
                expected: columns.len(),
                actual: cols.len(),
            });
        }
        let nrows = cols.first().map(|c| c.len()).unwrap_or(0);
        if let Some((name, col)) = columns.iter().zip(&cols).find(|(_, c)| c.len() != nrows) {
            return Err(FrameError::LengthMismatch {
                column: name.clone(),
                expected: nrows,
                actual: col.len(),
            });
        }
        Ok(Self {
            col2idx: index_names(&columns),
            columns,
            nrows,
            rows: OnceCell::new(),
            cols: OnceCell::from(cols),
        })
    }

    /// Positional accessor; the frame already indexes by position
    #[inline]
    pub fn iloc(&self) -> &Self {
        self
    }

    pub fn names(&self) -> &[String] {
        &self.columns
    }

    /// Column names in order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.columns.iter()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.col2idx.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.col2idx.contains_key(name)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nrows == 0
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// (rows, columns)
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.columns.len())
    }

    /// Which layouts are currently built
    pub fn materialized(&self) -> Materialized {
        Materialized {
            rows: self.rows.get().is_some(),
            columns: self.cols.get().is_some(),
        }
    }

    /// Row-major layout, built from the columns on first use
    pub fn row_data(&self) -> &Array2<f64> {
        self.rows.get_or_init(|| {
            log::debug!(
                "building row-major layout ({} x {})",
                self.nrows,
                self.columns.len()
            );
            let cols = self.cols.get().map(Vec::as_slice).unwrap_or(&[]);
            layout::stack_columns(cols, self.nrows)
        })
    }

    /// Column-major layout, built from the rows on first use
    pub fn column_data(&self) -> &[Array1<f64>] {
        self.cols.get_or_init(|| {
            log::debug!(
                "building column-major layout ({} x {})",
                self.nrows,
                self.columns.len()
            );
            match self.rows.get() {
                Some(rows) => layout::split_columns(rows.view()),
                None => Vec::new(),
            }
        })
    }

    pub fn row(&self, i: usize) -> Option<ArrayView1<'_, f64>> {
        (i < self.nrows).then(|| self.row_data().row(i))
    }

    pub fn try_column(&self, name: &str) -> Option<&Array1<f64>> {
        let i = self.position(name)?;
        self.column_data().get(i)
    }

    /// Contiguous data of one column
    pub fn column(&self, name: &str) -> Result<&Array1<f64>> {
        self.try_column(name)
            .ok_or_else(|| FrameError::ColumnNotFound(name.to_string()))
    }

    /// Subscript by column name, list of names, or row slice
    pub fn get<'k>(&self, key: impl Into<Key<'k>>) -> Result<Selection<'_>> {
        match key.into() {
            Key::Column(name) => self.column(name).map(Selection::Column),
            Key::Columns(names) => self.select(&names).map(Selection::Frame),
            Key::Rows(slice) => self.slice(slice).map(Selection::Frame),
        }
    }

    /// Positional row slice
    ///
    /// See [`RowSlice`] for bound and step handling; out-of-range bounds
    /// are clamped to the frame.
    pub fn slice<S: Into<RowSlice>>(&self, slice: S) -> Result<FastFrame> {
        let (slice, count) = slice.into().resolve(self.nrows)?;
        log::trace!("slicing {} rows with {:?}", self.nrows, slice);

        let mut out = FastFrame {
            columns: self.columns.clone(),
            col2idx: self.col2idx.clone(),
            ..FastFrame::default()
        };
        if let Some(rows) = self.rows.get() {
            let sliced = rows
                .slice_axis(Axis(0), slice)
                .as_standard_layout()
                .into_owned();
            out.nrows = sliced.nrows();
            out.rows = OnceCell::from(sliced);
        } else {
            let cols: Vec<Array1<f64>> = self
                .column_data()
                .iter()
                .map(|c| c.slice_axis(Axis(0), slice).to_owned())
                .collect();
            out.nrows = count;
            out.cols = OnceCell::from(cols);
        }
        Ok(out)
    }

    /// Row slice over a plain range
    pub fn rows<R: Into<RowSlice>>(&self, range: R) -> Result<FastFrame> {
        self.slice(range)
    }

    /// New frame holding the named columns in the given order
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<FastFrame> {
        let data = self.column_data();
        let mut cols = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let i = self
                .position(name)
                .ok_or_else(|| FrameError::ColumnNotFound(name.to_string()))?;
            cols.push(data[i].clone());
        }
        log::trace!("selected {} of {} columns", cols.len(), self.columns.len());

        let columns: Vec<String> = names.iter().map(|n| n.as_ref().to_string()).collect();
        Ok(FastFrame {
            col2idx: index_names(&columns),
            columns,
            nrows: self.nrows,
            rows: OnceCell::new(),
            cols: OnceCell::from(cols),
        })
    }

    /// Assign a column
    ///
    /// An existing column is overwritten; an unknown name is appended as a
    /// new last column. The data length must equal the row count, except on
    /// a frame with no columns and no rows, which takes the data's length.
    /// The name map only changes once the data has been accepted.
    pub fn set_column<D: Into<Array1<f64>>>(&mut self, name: &str, data: D) -> Result<()> {
        let data = data.into();
        let expected = if self.columns.is_empty() && self.nrows == 0 {
            data.len()
        } else {
            self.nrows
        };
        if data.len() != expected {
            return Err(FrameError::LengthMismatch {
                column: name.to_string(),
                expected,
                actual: data.len(),
            });
        }

        let mut cols = self.take_columns();
        match self.position(name) {
            Some(i) => cols[i] = data,
            None => {
                cols.push(data);
                self.col2idx.insert(name.to_string(), self.columns.len());
                self.columns.push(name.to_string());
            }
        }
        self.nrows = expected;
        self.cols = OnceCell::from(cols);
        Ok(())
    }

    /// Overwrite every value of an existing column with `value`
    ///
    /// Unknown names are an error: a new column needs full-length data,
    /// see [`FastFrame::set_column`].
    pub fn fill_column(&mut self, name: &str, value: f64) -> Result<()> {
        let i = self
            .position(name)
            .ok_or_else(|| FrameError::ColumnNotFound(name.to_string()))?;
        let mut cols = self.take_columns();
        cols[i].fill(value);
        self.cols = OnceCell::from(cols);
        Ok(())
    }

    /// Append the rows of `frames` below this frame's rows
    ///
    /// Frames are matched by position; every frame must have the same width.
    /// Afterwards only the row-major layout is kept.
    pub fn append(&mut self, frames: &[FastFrame]) -> Result<()> {
        let width = self.width();
        for frame in frames {
            if frame.width() != width {
                return Err(FrameError::WidthMismatch {
                    expected: width,
                    actual: frame.width(),
                });
            }
            if frame.columns != self.columns {
                log::warn!(
                    "appending frame with columns {:?} onto {:?}; matching by position",
                    frame.columns,
                    self.columns
                );
            }
        }
        if frames.is_empty() {
            return Ok(());
        }

        let rows = {
            let mut views = Vec::with_capacity(frames.len() + 1);
            views.push(self.row_data().view());
            views.extend(frames.iter().map(|f| f.row_data().view()));
            concatenate(Axis(0), &views)?
        };
        log::debug!("appended {} frames, {} -> {} rows", frames.len(), self.nrows, rows.nrows());

        self.nrows = rows.nrows();
        self.rows = OnceCell::from(rows);
        self.cols = OnceCell::new();
        Ok(())
    }

    /// Rebuild a conventional table (all columns F64)
    pub fn to_table(&self) -> Table {
        Table {
            names: self.columns.clone(),
            columns: self
                .column_data()
                .iter()
                .map(|c| Column::F64(c.to_vec()))
                .collect(),
        }
    }

    /// Take the column-major layout out of the frame, dropping the row one
    fn take_columns(&mut self) -> Vec<Array1<f64>> {
        let cols = match self.cols.take() {
            Some(cols) => cols,
            None => match self.rows.get() {
                Some(rows) => layout::split_columns(rows.view()),
                None => Vec::new(),
            },
        };
        self.rows.take();
        cols
    }
}

impl Index<&str> for FastFrame {
    type Output = Array1<f64>;

    /// # Panics
    /// Panics if the column does not exist.
    fn index(&self, name: &str) -> &Array1<f64> {
        match self.try_column(name) {
            Some(col) => col,
            None => panic!("column not found: {}", name),
        }
    }
}

impl<'a> IntoIterator for &'a FastFrame {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

/// Anything a frame can be built from
pub trait IntoFrame {
    fn into_frame(self) -> Result<FastFrame>;
}

impl IntoFrame for FastFrame {
    fn into_frame(self) -> Result<FastFrame> {
        Ok(self)
    }
}

impl IntoFrame for &Table {
    fn into_frame(self) -> Result<FastFrame> {
        FastFrame::from_table(self)
    }
}

impl IntoFrame for Table {
    fn into_frame(self) -> Result<FastFrame> {
        FastFrame::from_table(&self)
    }
}

/// Frames pass through unchanged; tables are converted
pub fn to_frame<T: IntoFrame>(src: T) -> Result<FastFrame> {
    src.into_frame()
}

/// First frame with all following frames appended
pub fn fast_concat(frames: Vec<FastFrame>) -> Result<FastFrame> {
    let mut iter = frames.into_iter();
    let mut first = iter.next().ok_or(FrameError::NoFrames)?;
    let rest: Vec<FastFrame> = iter.collect();
    first.append(&rest)?;
    Ok(first)
}
