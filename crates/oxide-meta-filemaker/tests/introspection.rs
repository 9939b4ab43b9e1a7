//! Integration tests for FileMaker table introspection.
//!
//! These tests drive [`FileMakerTableDefinition`] with in-memory table
//! handles and check the column list it produces.

mod common;
use common::*;

use std::error::Error as _;
use std::thread;

use oxide_meta_core::{
    DefaultValue, ElementSource, Field, IntrospectError, SqlDataType, TableDefinition,
};
use oxide_meta_filemaker::{data_type, FileMakerTableDefinition};

#[test]
fn ordinals_are_contiguous_and_follow_field_order() {
    let fields = mixed_fields();
    let table = FileMakerTableDefinition::new(MockTable::new("People", fields.clone()));

    let columns = table.extract_columns().unwrap();

    assert_eq!(columns.len(), fields.len());
    for (i, (column, field)) in columns.iter().zip(&fields).enumerate() {
        assert_eq!(column.ordinal, i);
        assert_eq!(column.name, field.name);
    }
}

#[test]
fn facets_pass_through_verbatim() {
    let fields = vec![
        Field::new("A", "varchar").length(u32::MAX),
        Field::new("B", "decimal").precision(38, 37).not_null(),
        Field::new("C", "mystery").length(7).precision(9, 3),
    ];
    let table = FileMakerTableDefinition::new(MockTable::new("Facets", fields.clone()));

    let columns = table.extract_columns().unwrap();

    for (column, field) in columns.iter().zip(&fields) {
        let ty = &column.data_type;
        assert_eq!(ty.type_name, field.type_name);
        assert_eq!(ty.length, field.length);
        assert_eq!(ty.precision, field.precision);
        assert_eq!(ty.scale, field.scale);
        assert_eq!(ty.nullable, field.nullable);
    }
}

#[test]
fn names_are_not_normalized() {
    let fields = vec![
        Field::new("Invoice Date", "date"),
        Field::new("  padded  ", "varchar"),
        Field::new("Ünïcode", "varchar"),
    ];
    let table = FileMakerTableDefinition::new(MockTable::new("Names", fields));

    let names: Vec<String> = table
        .extract_columns()
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();

    assert_eq!(names, ["Invoice Date", "  padded  ", "Ünïcode"]);
}

#[test]
fn empty_table_yields_no_columns() {
    let table = FileMakerTableDefinition::new(MockTable::new("Empty", Vec::new()));
    assert!(table.extract_columns().unwrap().is_empty());
}

#[test]
fn categories_come_from_the_registry() {
    let table = FileMakerTableDefinition::new(MockTable::new("People", mixed_fields()));

    let categories: Vec<SqlDataType> = table
        .extract_columns()
        .unwrap()
        .iter()
        .map(|c| c.data_type.sql_type)
        .collect();

    assert_eq!(
        categories,
        [
            SqlDataType::Double,
            SqlDataType::Varchar,
            SqlDataType::Varchar,
            SqlDataType::Double,
            SqlDataType::Blob,
            SqlDataType::Varbinary,
            SqlDataType::Longvarbinary,
            SqlDataType::Date,
            SqlDataType::Time,
            SqlDataType::Timestamp,
            SqlDataType::Other,
        ]
    );
}

#[test]
fn failure_mid_enumeration_discards_partial_columns() {
    let table =
        FileMakerTableDefinition::new(MockTable::new("People", mixed_fields()).failing_after(4));

    let err = table.extract_columns().unwrap_err();

    let IntrospectError::DriverFailure { table: name, source } = &err else {
        panic!("expected a driver failure, got {err:?}");
    };
    assert_eq!(name, "crm.People");
    assert_eq!(source.to_string(), "connection lost");
    assert_eq!(err.source().unwrap().to_string(), "connection lost");
}

#[test]
fn failure_before_first_field() {
    let table =
        FileMakerTableDefinition::new(MockTable::new("People", mixed_fields()).failing_after(0));

    assert!(matches!(
        table.extract_columns(),
        Err(IntrospectError::DriverFailure { .. })
    ));
}

#[test]
fn failure_without_schema_names_bare_table() {
    let mut mock = MockTable::new("Orders", Vec::new()).failing_after(0);
    mock.schema = None;
    let table = FileMakerTableDefinition::new(mock);

    assert_eq!(table.extract_columns().unwrap_err().table(), "Orders");
}

#[test]
fn defaults_use_filemaker_literals() {
    let fields = vec![
        Field::new("Flag", "int").default(DefaultValue::Boolean(false)),
        Field::new("Born", "date").default(DefaultValue::Date("1970-01-01".into())),
        Field::new("Note", "varchar").default(DefaultValue::Null),
        Field::new("Plain", "varchar"),
    ];
    let table = FileMakerTableDefinition::new(MockTable::new("Defaults", fields));

    let defaults: Vec<Option<String>> = table
        .extract_columns()
        .unwrap()
        .into_iter()
        .map(|c| c.data_type.default)
        .collect();

    assert_eq!(
        defaults,
        [
            Some("0".to_string()),
            Some("DATE '1970-01-01'".to_string()),
            Some("NULL".to_string()),
            None,
        ]
    );
}

#[test]
fn renderer_failure_is_returned_with_its_own_error() {
    let fields = vec![
        Field::new("Status", "varchar").default(DefaultValue::String("new".into())),
        Field::new("Created", "timestamp")
            .default(DefaultValue::Expression("CURRENT_TIMESTAMP".into())),
        Field::new("Notes", "varchar"),
    ];
    let table =
        FileMakerTableDefinition::with_renderer(MockTable::new("Tickets", fields), LiteralsOnly);

    let err = table.extract_columns().unwrap_err();

    let IntrospectError::Render {
        table: name,
        column,
        ..
    } = &err
    else {
        panic!("expected a render failure, got {err:?}");
    };
    assert_eq!(name, "crm.Tickets");
    assert_eq!(column, "Created");
    let cause = err
        .source()
        .and_then(|e| e.downcast_ref::<UnrenderableDefault>())
        .unwrap();
    assert_eq!(cause, &UnrenderableDefault("CURRENT_TIMESTAMP".into()));
}

#[test]
fn renderer_that_accepts_every_default_yields_columns() {
    let fields = vec![Field::new("Status", "varchar").default(DefaultValue::Boolean(true))];
    let table =
        FileMakerTableDefinition::with_renderer(MockTable::new("Tickets", fields), LiteralsOnly);

    let columns = table.extract_columns().unwrap();

    assert_eq!(columns[0].data_type.default.as_deref(), Some("TRUE"));
}

#[test]
fn table_definition_memoizes_introspection() {
    let definition = TableDefinition::new(
        Some("crm".into()),
        "People",
        FileMakerTableDefinition::new(MockTable::new("People", mixed_fields())),
    );

    let first = definition.columns().unwrap().as_ptr();
    let second = definition.columns().unwrap().as_ptr();

    assert_eq!(first, second);
    assert_eq!(
        definition.column_ignore_case("balance").unwrap().unwrap().ordinal,
        3
    );
}

#[test]
fn table_definition_surfaces_driver_failure() {
    let definition = TableDefinition::new(
        Some("crm".into()),
        "People",
        FileMakerTableDefinition::new(MockTable::new("People", mixed_fields()).failing_after(2)),
    );

    assert!(definition.columns().is_err());
    assert!(definition.column("ID").is_err());
}

#[test]
fn element_source_matches_extract_columns() {
    let table = FileMakerTableDefinition::new(MockTable::new("People", mixed_fields()));
    assert_eq!(table.elements().unwrap(), table.extract_columns().unwrap());
}

#[test]
fn shared_definition_and_registry_are_read_concurrently() {
    let definition = TableDefinition::new(
        Some("crm".into()),
        "People",
        FileMakerTableDefinition::new(MockTable::new("People", mixed_fields())),
    );
    let names: Vec<String> = mixed_fields().into_iter().map(|f| f.type_name).collect();

    let results: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    let columns = definition.columns().unwrap().to_vec();
                    let resolved: Vec<_> = names
                        .iter()
                        .map(|name| data_type::resolve(name).map(|native| native.constant))
                        .collect();
                    (columns, resolved)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let (columns, resolved) = &results[0];
    assert_eq!(columns.len(), 11);
    assert_eq!(resolved[0], Some("INT"));
    assert_eq!(resolved[10], None);
    for result in &results[1..] {
        assert_eq!(&result.0, columns);
        assert_eq!(&result.1, resolved);
    }
}
