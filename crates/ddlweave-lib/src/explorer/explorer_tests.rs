use ddlweave_core::{SortDirection, TableDefinition};
use indoc::indoc;

use super::*;
use crate::Error;
use crate::engine::SyntaxError;

const SCHEMA: &str = indoc! {"
    CREATE TABLE [order_line](
        [id] integer NOT NULL PRIMARY KEY AUTOINCREMENT,
        [order_id] integer NOT NULL,
        [product_id] integer NOT NULL,
        CONSTRAINT [FK_line_order] FOREIGN KEY([order_id]) REFERENCES [orders]([id]),
        CONSTRAINT [FK_line_product] FOREIGN KEY([product_id]) REFERENCES [product]([id]));

    CREATE TABLE [orders](
        [id] integer NOT NULL PRIMARY KEY,
        [customer_id] integer NOT NULL,
        [placed_at] datetime NOT NULL DEFAULT CURRENT_TIMESTAMP,
        CONSTRAINT [FK_orders_customer] FOREIGN KEY([customer_id]) REFERENCES [customer]([id]));

    CREATE TABLE [customer](
        [id] integer NOT NULL PRIMARY KEY,
        [name] varchar(100) NOT NULL);

    CREATE TABLE [product]([id] integer NOT NULL PRIMARY KEY, [title] text);

    CREATE UNIQUE INDEX [UX_customer_name] ON [customer]([name]);
    CREATE INDEX [IX_orders_placed] ON [orders]([placed_at] DESC, [customer_id]);
    CREATE INDEX [IX_orders_customer] ON [orders]([customer_id]);
"};

fn explorer() -> SchemaExplorer<'static, MemoryCatalog> {
    SchemaExplorer::new(MemoryCatalog::from_script(SCHEMA).unwrap()).unwrap()
}

fn names(tables: &[TableDefinition]) -> Vec<&str> {
    tables.iter().map(|t| t.name.as_str()).collect()
}

#[test]
fn catalog_from_script() {
    let catalog = MemoryCatalog::from_script(SCHEMA).unwrap();
    assert_eq!(catalog.len(), 7);

    let entries = catalog.entries().unwrap();
    assert_eq!(entries[0].kind, ObjectKind::Table);
    assert_eq!(entries[0].name, "order_line");
    assert!(entries[0].sql.starts_with("CREATE TABLE [order_line]("));
    assert_eq!(
        entries[5],
        CatalogEntry::index(
            "IX_orders_placed",
            "orders",
            "CREATE INDEX [IX_orders_placed] ON [orders]([placed_at] DESC, [customer_id])"
        )
    );
}

#[test]
fn table_names_are_sorted_and_skip_internal_objects() {
    let mut catalog = MemoryCatalog::from_script(SCHEMA).unwrap();
    catalog.add_table("sqlite_sequence", "CREATE TABLE sqlite_sequence(name,seq)");

    let explorer = SchemaExplorer::new(catalog).unwrap();
    assert_eq!(
        explorer.table_names().unwrap(),
        ["customer", "order_line", "orders", "product"]
    );
    assert!(explorer.table_exists("orders").unwrap());
    assert!(!explorer.table_exists("sqlite_sequence").unwrap());
    assert!(!explorer.table_exists("Orders").unwrap());
}

#[test]
fn get_table() {
    let explorer = explorer();
    let orders = explorer.get_table("orders", false).unwrap();

    assert_eq!(orders.columns.len(), 3);
    assert_eq!(orders.primary_key.as_ref().unwrap().columns, ["id"]);
    assert_eq!(orders.foreign_keys[0].referenced_table_name, "customer");
    assert_eq!(
        orders.columns[2].default.as_deref(),
        Some("CURRENT_TIMESTAMP")
    );
    assert!(orders.indexes.is_empty());

    let orders = explorer.get_table("orders", true).unwrap();
    let index_names: Vec<_> = orders.indexes.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(index_names, ["IX_orders_customer", "IX_orders_placed"]);
    assert_eq!(
        orders.indexes[1].columns[0].direction,
        SortDirection::Descending
    );
}

#[test]
fn missing_table() {
    let explorer = explorer();
    assert_eq!(
        explorer.get_table("nope", true).unwrap_err(),
        ExplorerError::TableNotFound {
            name: "nope".to_string(),
        }
    );
    assert_eq!(
        explorer.get_table_indexes("nope").unwrap_err().to_string(),
        "table `nope` does not exist"
    );
}

#[test]
fn table_indexes() {
    let explorer = explorer();
    let indexes = explorer.get_table_indexes("customer").unwrap();
    assert_eq!(indexes.len(), 1);
    assert!(indexes[0].is_unique);
    assert!(explorer.get_table_indexes("product").unwrap().is_empty());
}

#[test]
fn tables_by_name() {
    let tables = explorer().get_tables(false, None).unwrap();
    assert_eq!(names(&tables), ["customer", "order_line", "orders", "product"]);
}

#[test]
fn tables_by_dependency() {
    let explorer = explorer();

    let tables = explorer.get_tables(true, Some(true)).unwrap();
    assert_eq!(names(&tables), ["customer", "orders", "product", "order_line"]);
    assert_eq!(tables[1].indexes.len(), 2);

    let tables = explorer.get_tables(false, Some(false)).unwrap();
    assert_eq!(names(&tables), ["order_line", "product", "orders", "customer"]);
}

#[test]
fn arrange_ignores_self_references_and_breaks_cycles() {
    let catalog: MemoryCatalog = [
        CatalogEntry::table(
            "a",
            "CREATE TABLE a(id int, b_id int, FOREIGN KEY (b_id) REFERENCES b(id))",
        ),
        CatalogEntry::table(
            "b",
            "CREATE TABLE b(id int, a_id int, FOREIGN KEY (a_id) REFERENCES a(id))",
        ),
        CatalogEntry::table(
            "c",
            "CREATE TABLE c(id int, parent int, b_id int, \
             FOREIGN KEY (parent) REFERENCES c(id), FOREIGN KEY (b_id) REFERENCES b(id))",
        ),
        CatalogEntry::table("d", "CREATE TABLE d(id int)"),
    ]
    .into_iter()
    .collect();

    let tables = SchemaExplorer::new(catalog)
        .unwrap()
        .get_tables(false, Some(true))
        .unwrap();
    assert_eq!(names(&tables), ["d", "a", "b", "c"]);
}

#[test]
fn arrange_keeps_tables_sharing_a_name() {
    let tables: Vec<TableDefinition> = [
        "CREATE TABLE a(id int, b_id int, FOREIGN KEY (b_id) REFERENCES b(id))",
        "CREATE TABLE a(other int)",
        "CREATE TABLE b(id int)",
    ]
    .into_iter()
    .flat_map(|sql| crate::sqlite::parse(sql).unwrap())
    .filter_map(|clause| clause.into_table())
    .collect();

    let arranged = arrange_tables(tables.clone(), true);
    assert_eq!(names(&arranged), ["a", "b", "a"]);
    assert_eq!(arranged[0].columns[0].name, "other");
    assert_eq!(arranged[2].columns[0].name, "id");

    let arranged = arrange_tables(tables, false);
    assert_eq!(names(&arranged), ["a", "b", "a"]);
    assert_eq!(arranged[0].columns[0].name, "id");
}

#[test]
fn unexpected_clauses() {
    let mut catalog = MemoryCatalog::new();
    catalog.add_table("t", "CREATE INDEX ix ON t(a)");
    catalog.add_index("ix", "u", "CREATE TABLE u(a int)");
    catalog.add_table("u", "CREATE TABLE u(a int)");

    let explorer = SchemaExplorer::new(catalog).unwrap();
    assert_eq!(
        explorer.get_table("t", false).unwrap_err(),
        ExplorerError::UnexpectedClauses {
            name: "t".to_string(),
            expected: "table",
            found: 1,
        }
    );
    assert_eq!(
        explorer.get_table("u", true).unwrap_err().to_string(),
        "statement of `ix` does not define a single index (1 clauses)"
    );
}

#[test]
fn parse_errors_carry_the_object_name() {
    let mut catalog = MemoryCatalog::from_script(SCHEMA).unwrap();
    catalog.add_table("view_like", "CREATE VIEW v AS SELECT 1");

    let explorer = SchemaExplorer::new(catalog).unwrap();
    let err = explorer.get_tables(false, None).unwrap_err();
    assert!(err.is_statement_error());
    assert!(matches!(
        &err,
        ExplorerError::Parse {
            name,
            source: Error::Syntax(SyntaxError::UnexpectedToken { .. }),
        } if name == "view_like"
    ));
    assert_eq!(
        err.to_string(),
        "cannot parse `view_like`: unexpected 'VIEW' at 1:8, expected 'TABLE', 'UNIQUE' or 'INDEX'"
    );
}

#[test]
fn lenient_mode_skips_bad_statements() {
    let mut catalog = MemoryCatalog::from_script(SCHEMA).unwrap();
    catalog.add_table("view_like", "CREATE VIEW v AS SELECT 1");
    catalog.add_index("IX_product_title", "product", "CREATE INDEX ix ON product(title COLLATE NOCASE)");

    let explorer = SchemaExplorer::new(catalog).unwrap();
    let (tables, skipped) = explorer.get_tables_lenient(true).unwrap();

    assert_eq!(names(&tables), ["customer", "order_line", "orders", "product"]);
    assert!(tables[3].indexes.is_empty());

    let skipped: Vec<_> = skipped
        .iter()
        .map(|err| match err {
            ExplorerError::Parse { name, .. } => name.as_str(),
            other => panic!("unexpected {other}"),
        })
        .collect();
    assert_eq!(skipped, ["IX_product_title", "view_like"]);
}

#[test]
fn lenient_mode_skips_rejected_values() {
    let mut catalog = MemoryCatalog::new();
    catalog.add_table("a", "CREATE TABLE a(x varchar(-1))");
    catalog.add_table("b", "CREATE TABLE b(x int PRIMARY KEY, y int PRIMARY KEY)");
    catalog.add_table("c", "CREATE TABLE c(x int)");

    let explorer = SchemaExplorer::new(catalog).unwrap();
    let (tables, skipped) = explorer.get_tables_lenient(false).unwrap();

    assert_eq!(names(&tables), ["c"]);
    let skipped: Vec<_> = skipped.iter().map(ToString::to_string).collect();
    assert_eq!(
        skipped,
        [
            "cannot parse `a`: invalid integer -1 at 1:26: type arguments must be non-negative integers",
            "cannot parse `b`: table `b` declares more than one primary key",
        ]
    );
}

#[test]
fn catalog_errors_propagate() {
    struct Broken;

    impl Catalog for Broken {
        fn entries(&self) -> Result<Vec<CatalogEntry>, CatalogError> {
            Err(CatalogError::new("disk on fire"))
        }
    }

    let explorer = SchemaExplorer::new(Broken).unwrap();
    assert_eq!(
        explorer.table_names().unwrap_err(),
        ExplorerError::Catalog(CatalogError::new("disk on fire"))
    );
    assert_eq!(
        explorer.get_tables_lenient(false).unwrap_err().to_string(),
        "catalog read failed: disk on fire"
    );
}
