//! Hive to Parquet schema conversion for `hive2parquet`.
//!
//! [`convert`] turns a Hive table schema (parallel column name / column type
//! lists from `hive2parquet-core`) into a Parquet message type, built with the
//! `parquet` crate's schema API.
//!
//! Nested types follow Hive's legacy Parquet layout so that files stay
//! readable by Hive and other readers that expect it:
//! - `array<T>` becomes a `LIST` group holding a repeated `bag` group with a
//!   single `array_element` field.
//! - `map<K,V>` becomes a `MAP` group holding a repeated `map` group with a
//!   `REQUIRED` `key` and an `OPTIONAL` `value`.
//! - `struct<...>` becomes a plain group with one child per member.
//!
//! # Typical Flow
//! ```rust
//! use hive2parquet_core::{ColumnType, PrimitiveKind};
//! use hive2parquet_parquet::convert;
//!
//! let names = ["id", "tags"];
//! let types = [
//!     ColumnType::from(PrimitiveKind::Long),
//!     ColumnType::list(PrimitiveKind::String),
//! ];
//! let schema = convert(&names, &types).unwrap();
//! assert_eq!(schema.name(), "hive_schema");
//! assert_eq!(schema.get_fields().len(), 2);
//! ```
pub mod error;
pub mod schema_convert;

/// Re-export of [`error::SchemaConvertError`].
pub use error::SchemaConvertError;
/// Re-exports from [`schema_convert`].
pub use schema_convert::{convert, convert_to_descriptor, format_parquet_schema};

/// Name of the root message type.
pub const HIVE_SCHEMA_NAME: &str = "hive_schema";
/// Repeated wrapper group inside a `LIST` group.
pub const LIST_WRAPPER_NAME: &str = "bag";
/// Element field inside the list wrapper group.
pub const LIST_ELEMENT_NAME: &str = "array_element";
/// Repeated key/value group inside a `MAP` group.
pub const MAP_WRAPPER_NAME: &str = "map";
pub const MAP_KEY_NAME: &str = "key";
pub const MAP_VALUE_NAME: &str = "value";
