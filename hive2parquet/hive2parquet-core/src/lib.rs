//! Parquet-independent Hive column type model for `hive2parquet`.
//!
//! This crate describes the *input* side of schema conversion: the resolved
//! Hive type of each table column ([`ColumnType`]). Parsing Hive DDL type
//! strings is left to the catalog layer; values here are built directly.
//!
//! `Display` renders the Hive type string, which is what error messages use
//! to identify an offending type.

mod column_type;

pub use column_type::{ColumnType, PrimitiveKind, StructField, StructFields, format_list};
