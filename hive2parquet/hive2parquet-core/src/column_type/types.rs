use std::ops::Deref;

/// Hive primitive type categories.
///
/// `Date`, `Decimal`, `Varchar` and `Char` are valid Hive types that have no
/// Parquet mapping in this workspace; they are kept so that callers can pass
/// any resolved Hive column through the converter and get a typed error back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    Int,
    Short,
    Byte,
    Long,
    Double,
    Float,
    Boolean,
    Binary,
    Timestamp,
    Void,
    Unknown,
    Date,
    Decimal { precision: u8, scale: u8 },
    Varchar(u32),
    Char(u32),
}

impl PrimitiveKind {
    /// Hive category name, without type parameters.
    pub fn type_name(&self) -> &'static str {
        match self {
            PrimitiveKind::String => "string",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Short => "smallint",
            PrimitiveKind::Byte => "tinyint",
            PrimitiveKind::Long => "bigint",
            PrimitiveKind::Double => "double",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Binary => "binary",
            PrimitiveKind::Timestamp => "timestamp",
            PrimitiveKind::Void => "void",
            PrimitiveKind::Unknown => "unknown",
            PrimitiveKind::Date => "date",
            PrimitiveKind::Decimal { .. } => "decimal",
            PrimitiveKind::Varchar(_) => "varchar",
            PrimitiveKind::Char(_) => "char",
        }
    }
}

/// Hive column type descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColumnType {
    Primitive(PrimitiveKind),
    List(Box<ColumnType>),
    Struct(StructFields),
    Map {
        key: Box<ColumnType>,
        value: Box<ColumnType>,
    },
    Union(Vec<ColumnType>),
}

impl ColumnType {
    pub fn list(element: impl Into<ColumnType>) -> Self {
        ColumnType::List(Box::new(element.into()))
    }

    pub fn map(key: impl Into<ColumnType>, value: impl Into<ColumnType>) -> Self {
        ColumnType::Map {
            key: Box::new(key.into()),
            value: Box::new(value.into()),
        }
    }

    pub fn struct_of(fields: impl Into<StructFields>) -> Self {
        ColumnType::Struct(fields.into())
    }

    pub fn union_of(variants: Vec<ColumnType>) -> Self {
        ColumnType::Union(variants)
    }

    pub fn is_primitive(&self) -> bool {
        matches!(self, ColumnType::Primitive(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ColumnType::Primitive(kind) => kind.type_name(),
            ColumnType::List(_) => "array",
            ColumnType::Struct(_) => "struct",
            ColumnType::Map { .. } => "map",
            ColumnType::Union(_) => "uniontype",
        }
    }
}

impl From<PrimitiveKind> for ColumnType {
    fn from(value: PrimitiveKind) -> Self {
        ColumnType::Primitive(value)
    }
}

/// Named member of a Hive struct type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructField {
    pub name: String,
    pub column_type: ColumnType,
}

impl StructField {
    pub fn new(name: impl Into<String>, column_type: impl Into<ColumnType>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
        }
    }
}

/// Ordered struct members. Declaration order is significant and preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct StructFields(pub Vec<StructField>);

impl StructFields {
    pub fn new(fields: Vec<StructField>) -> Self {
        Self(fields)
    }

    pub fn as_slice(&self) -> &[StructField] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StructField> {
        self.0.iter()
    }
}

impl From<Vec<StructField>> for StructFields {
    fn from(value: Vec<StructField>) -> Self {
        Self(value)
    }
}

impl From<StructFields> for Vec<StructField> {
    fn from(value: StructFields) -> Self {
        value.0
    }
}

impl AsRef<[StructField]> for StructFields {
    fn as_ref(&self) -> &[StructField] {
        self.as_slice()
    }
}

impl Deref for StructFields {
    type Target = [StructField];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
