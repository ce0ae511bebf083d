use std::fmt::{Display, Formatter, Result};

use super::{ColumnType, PrimitiveKind};

/// Renders the Hive type string, e.g. `decimal(10,2)` or `varchar(20)`.
impl Display for PrimitiveKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            PrimitiveKind::Decimal { precision, scale } => {
                write!(f, "decimal({precision},{scale})")
            }
            PrimitiveKind::Varchar(len) => write!(f, "varchar({len})"),
            PrimitiveKind::Char(len) => write!(f, "char({len})"),
            other => f.write_str(other.type_name()),
        }
    }
}

/// Renders the Hive type string, e.g. `map<string,array<int>>` or
/// `struct<x:int,y:string>`.
impl Display for ColumnType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ColumnType::Primitive(kind) => write!(f, "{kind}"),
            ColumnType::List(element) => write!(f, "array<{element}>"),
            ColumnType::Map { key, value } => write!(f, "map<{key},{value}>"),
            ColumnType::Struct(fields) => {
                f.write_str("struct<")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{}:{}", field.name, field.column_type)?;
                }
                f.write_str(">")
            }
            ColumnType::Union(variants) => {
                f.write_str("uniontype<")?;
                write_joined(f, variants, ",")?;
                f.write_str(">")
            }
        }
    }
}

/// Formats a sequence as a bracketed, comma separated list: `[a, b]`.
///
/// Used to report whole column lists in diagnostics.
pub fn format_list<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    let mut out = String::from("[");
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&item.to_string());
    }
    out.push(']');
    out
}

fn write_joined(f: &mut Formatter<'_>, items: &[ColumnType], sep: &str) -> Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
