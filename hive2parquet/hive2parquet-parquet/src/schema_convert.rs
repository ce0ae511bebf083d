use std::sync::Arc;

use hive2parquet_core::{ColumnType, PrimitiveKind, StructFields, format_list};
use parquet::{
    basic::{ConvertedType, LogicalType, Repetition, Type as PhysicalType},
    schema::{
        printer::print_schema,
        types::{SchemaDescriptor, Type, TypePtr},
    },
};

use crate::{
    HIVE_SCHEMA_NAME, LIST_ELEMENT_NAME, LIST_WRAPPER_NAME, MAP_KEY_NAME, MAP_VALUE_NAME,
    MAP_WRAPPER_NAME, error::SchemaConvertError,
};

type Result<T> = std::result::Result<T, SchemaConvertError>;

// ---------------------------------------------------------------------------
// Hive columns -> Parquet message type
// ---------------------------------------------------------------------------

/// Converts Hive columns into a Parquet message type named
/// [`HIVE_SCHEMA_NAME`].
///
/// `column_names` and `column_types` are parallel lists and must have the same
/// length. Every top-level column becomes an `OPTIONAL` field, in input order.
/// The first type without a Parquet mapping aborts the conversion.
pub fn convert<S: AsRef<str>>(column_names: &[S], column_types: &[ColumnType]) -> Result<Type> {
    let fields = convert_types(column_names, column_types)?;
    tracing::debug!(columns = fields.len(), "converted hive schema to parquet");
    let schema = Type::group_type_builder(HIVE_SCHEMA_NAME)
        .with_fields(fields)
        .build()?;
    Ok(schema)
}

/// Same as [`convert`], wrapped in a [`SchemaDescriptor`] to expose leaf
/// column paths and definition/repetition levels.
pub fn convert_to_descriptor<S: AsRef<str>>(
    column_names: &[S],
    column_types: &[ColumnType],
) -> Result<SchemaDescriptor> {
    let schema = convert(column_names, column_types)?;
    Ok(SchemaDescriptor::new(Arc::new(schema)))
}

/// Renders a Parquet schema in message-type text form.
pub fn format_parquet_schema(schema: &Type) -> String {
    let mut buf = Vec::new();
    print_schema(&mut buf, schema);
    String::from_utf8_lossy(&buf).into_owned()
}

fn convert_types<S: AsRef<str>>(
    column_names: &[S],
    column_types: &[ColumnType],
) -> Result<Vec<TypePtr>> {
    if column_names.len() != column_types.len() {
        return Err(SchemaConvertError::SchemaMismatch {
            names: format_list(column_names.iter().map(<S as AsRef<str>>::as_ref)),
            types: format_list(column_types),
        });
    }

    column_names
        .iter()
        .zip(column_types)
        .map(|(name, column_type)| {
            let name = name.as_ref();
            tracing::trace!(column = name, %column_type, "converting column");
            convert_type(name, column_type, Repetition::OPTIONAL).map(Arc::new)
        })
        .collect()
}

fn convert_type(name: &str, column_type: &ColumnType, repetition: Repetition) -> Result<Type> {
    match column_type {
        ColumnType::Primitive(kind) => convert_primitive(name, *kind, repetition),
        ColumnType::List(element) => convert_array(name, element, repetition),
        ColumnType::Struct(fields) => convert_struct(name, fields, repetition),
        ColumnType::Map { key, value } => convert_map(name, key, value, repetition),
        ColumnType::Union(_) => Err(SchemaConvertError::UnsupportedType {
            type_name: column_type.type_name(),
        }),
    }
}

fn convert_primitive(name: &str, kind: PrimitiveKind, repetition: Repetition) -> Result<Type> {
    let physical = match kind {
        // Plain BINARY without a UTF8 annotation, as Hive writes strings.
        PrimitiveKind::String => PhysicalType::BYTE_ARRAY,
        PrimitiveKind::Int | PrimitiveKind::Short | PrimitiveKind::Byte => PhysicalType::INT32,
        PrimitiveKind::Long => PhysicalType::INT64,
        PrimitiveKind::Double => PhysicalType::DOUBLE,
        PrimitiveKind::Float => PhysicalType::FLOAT,
        PrimitiveKind::Boolean => PhysicalType::BOOLEAN,
        PrimitiveKind::Binary
        | PrimitiveKind::Timestamp
        | PrimitiveKind::Void
        | PrimitiveKind::Unknown => {
            return Err(SchemaConvertError::UnsupportedType {
                type_name: kind.type_name(),
            });
        }
        PrimitiveKind::Date
        | PrimitiveKind::Decimal { .. }
        | PrimitiveKind::Varchar(_)
        | PrimitiveKind::Char(_) => {
            return Err(SchemaConvertError::UnknownType {
                descriptor: kind.to_string(),
            });
        }
    };

    let field = Type::primitive_type_builder(name, physical)
        .with_repetition(repetition)
        .build()?;
    Ok(field)
}

// group <name> (LIST) {
//   repeated group bag {
//     optional <element> array_element;
//   }
// }
fn convert_array(name: &str, element: &ColumnType, repetition: Repetition) -> Result<Type> {
    let element = convert_type(LIST_ELEMENT_NAME, element, Repetition::OPTIONAL)?;
    let bag = Type::group_type_builder(LIST_WRAPPER_NAME)
        .with_repetition(Repetition::REPEATED)
        .with_fields(vec![Arc::new(element)])
        .build()?;

    let list = Type::group_type_builder(name)
        .with_repetition(repetition)
        .with_logical_type(Some(LogicalType::List))
        .with_fields(vec![Arc::new(bag)])
        .build()?;
    Ok(list)
}

fn convert_struct(name: &str, fields: &StructFields, repetition: Repetition) -> Result<Type> {
    let children = fields
        .iter()
        .map(|field| {
            convert_type(&field.name, &field.column_type, Repetition::OPTIONAL).map(Arc::new)
        })
        .collect::<Result<Vec<_>>>()?;

    let group = Type::group_type_builder(name)
        .with_repetition(repetition)
        .with_fields(children)
        .build()?;
    Ok(group)
}

// group <name> (MAP) {
//   repeated group map (MAP_KEY_VALUE) {
//     required <key> key;
//     optional <value> value;
//   }
// }
fn convert_map(
    name: &str,
    key: &ColumnType,
    value: &ColumnType,
    repetition: Repetition,
) -> Result<Type> {
    // Map keys can never be null.
    let key = convert_type(MAP_KEY_NAME, key, Repetition::REQUIRED)?;
    let value = convert_type(MAP_VALUE_NAME, value, Repetition::OPTIONAL)?;

    let entries = Type::group_type_builder(MAP_WRAPPER_NAME)
        .with_repetition(Repetition::REPEATED)
        .with_converted_type(ConvertedType::MAP_KEY_VALUE)
        .with_fields(vec![Arc::new(key), Arc::new(value)])
        .build()?;

    let map = Type::group_type_builder(name)
        .with_repetition(repetition)
        .with_logical_type(Some(LogicalType::Map))
        .with_fields(vec![Arc::new(entries)])
        .build()?;
    Ok(map)
}
