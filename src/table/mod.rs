//! Core table, column and frame types

pub mod column;
pub mod key;
pub mod layout;
#[allow(clippy::module_inception)]
pub mod table;
pub mod view;

pub use column::{Column, NULL_I64};
pub use key::{Key, RowSlice, Selection};
pub use layout::{Layout, Materialized};
pub use table::Table;
pub use view::{fast_concat, to_frame, FastFrame, IntoFrame};
