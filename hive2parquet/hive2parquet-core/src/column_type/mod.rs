//! Hive column type model.

mod display;
mod types;

pub use display::format_list;
pub use types::{ColumnType, PrimitiveKind, StructField, StructFields};
