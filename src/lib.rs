//! fastframe: array-backed fast access for tabular data
//!
//! Wraps a conventional, label-addressed table in a frame whose data lives in
//! contiguous numeric arrays. Column lookups by name and positional row
//! slices become direct array operations.
//!
//! ```
//! use fastframe::{Column, FastFrame, Table};
//!
//! let table = Table::new(
//!     vec!["A".to_string(), "D".to_string()],
//!     vec![Column::F64(vec![f64::NAN, 3.0, 4.0]), Column::I64(vec![0, 1, 5])],
//! )
//! .unwrap();
//! let ff = FastFrame::from_table(&table).unwrap();
//!
//! assert_eq!(ff["D"].to_vec(), vec![0.0, 1.0, 5.0]);
//! assert_eq!(ff.rows(0..2).unwrap().len(), 2);
//! ```

pub mod error;
pub mod io;
pub mod render;
pub mod table;

pub use error::{FrameError, Result};
pub use render::RenderOptions;
pub use table::{
    fast_concat, to_frame, Column, FastFrame, IntoFrame, Key, Layout, Materialized, RowSlice,
    Selection, Table, NULL_I64,
};
