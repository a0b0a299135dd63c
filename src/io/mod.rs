//! Loading conventional tables from external formats

pub mod csv;

pub use self::csv::{read_csv, read_csv_path, write_csv};
