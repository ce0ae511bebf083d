use parquet::errors::ParquetError;
use thiserror::Error;

/// Errors produced while converting a Hive schema to a Parquet schema.
///
/// Every variant is terminal: conversion stops at the first failure and no
/// partial schema is returned.
#[derive(Debug, Error)]
pub enum SchemaConvertError {
    /// Column name and column type lists differ in length.
    #[error("mismatched hive column names and types: names {names}, types {types}")]
    SchemaMismatch { names: String, types: String },

    /// A Hive type that is recognized but has no Parquet mapping yet.
    #[error("{type_name} type not implemented")]
    UnsupportedType { type_name: &'static str },

    /// A Hive type outside the categories this converter knows about.
    #[error("unknown type: {descriptor}")]
    UnknownType { descriptor: String },

    #[error(transparent)]
    Parquet(#[from] ParquetError),
}
