//! Table-like text rendering of frames
//!
//! Layout: a header line of right-aligned column names, then one line per
//! row with the positional index left-aligned and values right-aligned.
//! All values in one column share the same number of decimals.

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::table::FastFrame;

/// Rendering configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Frames longer than this are truncated to head and tail
    pub max_rows: usize,
    /// Rows shown (head + tail) when truncated
    pub min_rows: usize,
    /// Upper bound on decimals per value
    pub precision: usize,
    /// Text for NaN
    pub na_rep: String,
    /// Spaces between columns
    pub spacing: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_rows: 60,
            min_rows: 10,
            precision: 6,
            na_rep: "NaN".to_string(),
            spacing: 2,
        }
    }
}

/// Fewest decimals (at least one) that reproduce `v`, capped at `precision`
fn decimals_needed(v: f64, precision: usize) -> usize {
    let precision = precision.max(1);
    (1..=precision)
        .find(|&d| format!("{:.*}", d, v).parse::<f64>().ok() == Some(v))
        .unwrap_or(precision)
}

fn format_value(v: f64, decimals: usize, opts: &RenderOptions) -> String {
    if v.is_nan() {
        opts.na_rep.clone()
    } else if v.is_infinite() {
        let sign = if v > 0.0 { "" } else { "-" };
        format!("{}inf", sign)
    } else {
        format!("{:.*}", decimals, v)
    }
}

impl FastFrame {
    /// Render with explicit options; `Display` uses the defaults
    pub fn render(&self, opts: &RenderOptions) -> String {
        let mut out = String::new();
        let nrows = self.len();

        if self.width() == 0 {
            let index: Vec<String> = (0..nrows).map(|i| i.to_string()).collect();
            let _ = write!(
                out,
                "Empty FastFrame\nColumns: []\nIndex: [{}]",
                index.join(", ")
            );
            return out;
        }
        if nrows == 0 {
            let _ = write!(
                out,
                "Empty FastFrame\nColumns: [{}]\nIndex: []",
                self.names().join(", ")
            );
            return out;
        }

        let head = ((opts.min_rows + 1) / 2).min(nrows);
        let tail = (opts.min_rows / 2).min(nrows - head);
        let truncated = nrows > opts.max_rows && head + tail < nrows;
        let shown: Vec<usize> = if truncated {
            (0..head).chain(nrows - tail..nrows).collect()
        } else {
            (0..nrows).collect()
        };

        let data = self.column_data();
        let cells: Vec<Vec<String>> = data
            .iter()
            .map(|col| {
                let decimals = shown
                    .iter()
                    .map(|&i| col[i])
                    .filter(|v| v.is_finite())
                    .map(|v| decimals_needed(v, opts.precision))
                    .max()
                    .unwrap_or(1);
                shown.iter().map(|&i| format_value(col[i], decimals, opts)).collect()
            })
            .collect();

        let widths: Vec<usize> = self
            .names()
            .iter()
            .zip(&cells)
            .map(|(name, col)| {
                col.iter()
                    .map(String::len)
                    .chain(std::iter::once(name.len()))
                    .chain(truncated.then_some(3))
                    .max()
                    .unwrap_or(0)
            })
            .collect();
        let index_labels: Vec<String> = shown.iter().map(|i| i.to_string()).collect();
        let index_width = index_labels
            .iter()
            .map(String::len)
            .chain(truncated.then_some(2))
            .max()
            .unwrap_or(0);
        let gap = " ".repeat(opts.spacing);

        out.push_str(&" ".repeat(index_width));
        for (name, &w) in self.names().iter().zip(&widths) {
            let _ = write!(out, "{}{:>w$}", gap, name, w = w);
        }

        let write_ellipsis = |out: &mut String| {
            let _ = write!(out, "\n{:<w$}", "..", w = index_width);
            for &w in &widths {
                let _ = write!(out, "{}{:>w$}", gap, "...", w = w);
            }
        };
        for (pos, label) in index_labels.iter().enumerate() {
            if truncated && pos == head {
                write_ellipsis(&mut out);
            }
            let _ = write!(out, "\n{:<w$}", label, w = index_width);
            for (col, &w) in cells.iter().zip(&widths) {
                let _ = write!(out, "{}{:>w$}", gap, col[pos], w = w);
            }
        }
        if truncated && tail == 0 {
            write_ellipsis(&mut out);
        }

        if truncated {
            let _ = write!(out, "\n\n[{} rows x {} columns]", nrows, self.width());
        }
        out
    }
}

impl fmt::Display for FastFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&RenderOptions::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array2};

    fn doc_frame() -> FastFrame {
        let rows = array![[f64::NAN, 2.0, f64::NAN, 0.0], [3.0, 4.0, f64::NAN, 1.0]];
        FastFrame::from_rows(["A", "B", "C", "D"], rows).unwrap()
    }

    #[test]
    fn test_render_basic() {
        let expected = "     A    B    C    D\n\
                        0  NaN  2.0  NaN  0.0\n\
                        1  3.0  4.0  NaN  1.0";
        assert_eq!(doc_frame().to_string(), expected);
    }

    #[test]
    fn test_column_shares_decimals() {
        let ff = FastFrame::from_rows(["x"], array![[1.0], [2.25], [-0.5]]).unwrap();
        assert_eq!(ff.to_string(), "       x\n0   1.00\n1   2.25\n2  -0.50");
    }

    #[test]
    fn test_precision_cap_and_na_rep() {
        let opts = RenderOptions {
            precision: 2,
            na_rep: "-".to_string(),
            spacing: 1,
            ..RenderOptions::default()
        };
        let ff = FastFrame::from_rows(["v"], array![[1.0 / 3.0], [f64::NAN]]).unwrap();
        assert_eq!(ff.render(&opts), "     v\n0 0.33\n1    -");
    }

    #[test]
    fn test_truncated_render() {
        let rows = Array2::from_shape_fn((100, 1), |(i, _)| i as f64);
        let ff = FastFrame::from_rows(["n"], rows).unwrap();
        let opts = RenderOptions { max_rows: 10, min_rows: 4, ..RenderOptions::default() };
        let text = ff.render(&opts);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "0    0.0");
        assert_eq!(lines[3], "..   ...");
        assert_eq!(lines[4], "98  98.0");
        assert_eq!(lines.last(), Some(&"[100 rows x 1 columns]"));
    }

    #[test]
    fn test_odd_min_rows_favours_head() {
        let rows = Array2::from_shape_fn((100, 1), |(i, _)| i as f64);
        let ff = FastFrame::from_rows(["n"], rows).unwrap();
        let opts = RenderOptions { max_rows: 10, min_rows: 3, ..RenderOptions::default() };
        let text = ff.render(&opts);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[1], "0    0.0");
        assert_eq!(lines[2], "1    1.0");
        assert_eq!(lines[3], "..   ...");
        assert_eq!(lines[4], "99  99.0");
    }

    #[test]
    fn test_empty_renders() {
        assert_eq!(
            FastFrame::new().to_string(),
            "Empty FastFrame\nColumns: []\nIndex: []"
        );
        let ff = FastFrame::from_rows(["a", "b"], Array2::zeros((0, 2))).unwrap();
        assert_eq!(ff.to_string(), "Empty FastFrame\nColumns: [a, b]\nIndex: []");
    }

    #[test]
    fn test_options_from_json() {
        let opts: RenderOptions = serde_json::from_str(r#"{"max_rows": 5, "na_rep": ""}"#).unwrap();
        assert_eq!(opts.max_rows, 5);
        assert_eq!(opts.na_rep, "");
        assert_eq!(opts.min_rows, 10);
        assert_eq!(opts.spacing, 2);
    }
}
