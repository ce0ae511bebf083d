use hive2parquet_core::{ColumnType, PrimitiveKind, StructField, StructFields};

#[test]
fn struct_field_new_sets_all_fields() {
    let field = StructField::new("count", PrimitiveKind::Long);
    assert_eq!(field.name, "count");
    assert_eq!(field.column_type, ColumnType::Primitive(PrimitiveKind::Long));
}

#[test]
fn constructors_box_nested_types() {
    let list = ColumnType::list(PrimitiveKind::Int);
    match list {
        ColumnType::List(element) => {
            assert_eq!(*element, ColumnType::Primitive(PrimitiveKind::Int))
        }
        other => panic!("expected list, got {other:?}"),
    }

    let map = ColumnType::map(PrimitiveKind::String, ColumnType::list(PrimitiveKind::Int));
    match map {
        ColumnType::Map { key, value } => {
            assert_eq!(*key, ColumnType::Primitive(PrimitiveKind::String));
            assert!(matches!(*value, ColumnType::List(_)));
        }
        other => panic!("expected map, got {other:?}"),
    }
}

#[test]
fn struct_fields_keep_declaration_order() {
    let fields: StructFields = vec![
        StructField::new("z", PrimitiveKind::Int),
        StructField::new("a", PrimitiveKind::String),
        StructField::new("m", PrimitiveKind::Double),
    ]
    .into();

    let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["z", "a", "m"]);
    assert_eq!(fields.len(), 3);
    assert!(!fields.is_empty());
    assert_eq!(fields[1].name, "a");
}

#[test]
fn type_name_uses_hive_category_names() {
    assert_eq!(ColumnType::from(PrimitiveKind::Short).type_name(), "smallint");
    assert_eq!(ColumnType::from(PrimitiveKind::Byte).type_name(), "tinyint");
    assert_eq!(ColumnType::from(PrimitiveKind::Long).type_name(), "bigint");
    assert_eq!(
        ColumnType::from(PrimitiveKind::Decimal {
            precision: 10,
            scale: 2
        })
        .type_name(),
        "decimal"
    );
    assert_eq!(ColumnType::list(PrimitiveKind::Int).type_name(), "array");
    assert_eq!(
        ColumnType::map(PrimitiveKind::Int, PrimitiveKind::Int).type_name(),
        "map"
    );
    assert_eq!(ColumnType::struct_of(StructFields::default()).type_name(), "struct");
    assert_eq!(ColumnType::union_of(vec![]).type_name(), "uniontype");
}

#[test]
fn is_primitive_only_for_primitive_variant() {
    assert!(ColumnType::from(PrimitiveKind::Void).is_primitive());
    assert!(!ColumnType::list(PrimitiveKind::Int).is_primitive());
    assert!(!ColumnType::union_of(vec![PrimitiveKind::Int.into()]).is_primitive());
}
