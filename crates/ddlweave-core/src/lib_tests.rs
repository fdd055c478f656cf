use super::*;

#[test]
fn sort_direction_parses_case_insensitively() {
    assert_eq!("asc".parse(), Ok(SortDirection::Ascending));
    assert_eq!("DESC".parse(), Ok(SortDirection::Descending));
    assert_eq!("Desc".parse(), Ok(SortDirection::Descending));
    assert_eq!(
        "sideways".parse::<SortDirection>(),
        Err(UnknownSortDirection("sideways".to_string()))
    );
}

#[test]
fn type_display() {
    assert_eq!(TypeDefinition::new("integer").to_string(), "integer");
    assert_eq!(TypeDefinition::sized("varchar", 100).to_string(), "varchar(100)");
    assert_eq!(TypeDefinition::decimal("numeric", 10, 2).to_string(), "numeric(10, 2)");
}

#[test]
fn column_defaults_to_nullable() {
    let column = ColumnDefinition::new("Name");
    assert!(column.is_nullable);
    assert!(column.identity.is_none());
    assert!(column.default.is_none());
}

#[test]
fn referenced_tables_are_deduplicated() {
    let mut table = TableDefinition::new("note");
    for (name, target) in [("FK_a", "user"), ("FK_b", "tag"), ("FK_c", "user")] {
        table.foreign_keys.push(ForeignKeyDefinition {
            name: Some(name.to_string()),
            column_names: vec!["x".to_string()],
            referenced_table_name: target.to_string(),
            referenced_column_names: vec!["id".to_string()],
        });
    }

    assert_eq!(table.referenced_tables(), vec!["user", "tag"]);
}

#[test]
fn clause_accessors() {
    let clause = Clause::from(IndexDefinition::new(true));
    assert_eq!(clause.kind_name(), "index");
    assert!(clause.as_table().is_none());
    assert!(clause.as_index().is_some_and(|i| i.is_unique));
    assert!(clause.into_index().is_some());
}

#[test]
fn clause_json_is_tagged_and_sparse() {
    let table = TableDefinition {
        columns: vec![
            ColumnDefinition::new("Id")
                .with_type(TypeDefinition::new("integer"))
                .nullable(false),
        ],
        ..TableDefinition::new("Person")
    };

    let json = serde_json::to_string(&Clause::Table(table.clone())).unwrap();
    assert_eq!(
        json,
        r#"{"clause":"table","name":"Person","columns":[{"name":"Id","type":{"name":"integer"},"is_nullable":false}]}"#
    );

    let back: Clause = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Clause::Table(table));
}
