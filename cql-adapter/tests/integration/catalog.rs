use std::sync::Arc;

use cql_adapter::catalog::{TABLE_TYPE_LABEL, VIEW_TYPE_LABEL};
use cql_adapter::{
    Adapter, Catalog, CatalogItem, ClusterMetadataSource, HostConnection, SchemaSource,
    SystemSchemaSource,
};

use crate::utils::{create_keyspace, run, setup_tracing, test_adapter};

fn find<'a>(items: &'a [CatalogItem], label: &str) -> &'a CatalogItem {
    items
        .iter()
        .find(|item| item.label == label)
        .unwrap_or_else(|| panic!("no item labelled {label}"))
}

fn columns(relation: &CatalogItem) -> Vec<(&str, &str)> {
    relation
        .children
        .iter()
        .map(|column| (column.label.as_str(), column.type_label.as_str()))
        .collect()
}

async fn catalog_with(source: Arc<dyn SchemaSource>) -> (Catalog, String) {
    let connection = test_adapter([])
        .with_schema_source(source)
        .connect()
        .await
        .unwrap();
    let ks = create_keyspace(&connection).await;
    run(
        &connection,
        &format!("CREATE TABLE {ks}.t (id uuid PRIMARY KEY, score int, name text, tags list<int>)"),
    )
    .await;
    run(
        &connection,
        &format!("CREATE TABLE {ks}.events (day date, at timestamp, payload blob, PRIMARY KEY (day, at))"),
    )
    .await;

    let catalog = connection.get_catalog().await.unwrap();
    run(&connection, &format!("DROP KEYSPACE {ks}")).await;
    (catalog, ks)
}

#[tokio::test]
#[ignore = "requires a running cluster"]
async fn system_keyspaces_are_listed() {
    setup_tracing();
    let connection = test_adapter([]).connect().await.unwrap();
    let catalog = connection.get_catalog().await.unwrap();

    let system_schema = find(&catalog.items, "system_schema");
    assert_eq!(system_schema.qualified_identifier, r#""system_schema""#);
    let keyspaces = find(&system_schema.children, "keyspaces");
    assert_eq!(keyspaces.type_label, TABLE_TYPE_LABEL);
    assert_eq!(
        keyspaces.qualified_identifier,
        r#""system_schema"."keyspaces""#
    );
    assert!(!keyspaces.is_leaf());
    assert!(keyspaces.children.iter().all(CatalogItem::is_leaf));
}

#[tokio::test]
#[ignore = "requires a running cluster"]
async fn cluster_metadata_catalog_orders_key_columns_first() {
    setup_tracing();
    let (catalog, ks) = catalog_with(Arc::new(ClusterMetadataSource)).await;
    let keyspace = find(&catalog.items, &ks);

    let labels: Vec<&str> = keyspace.children.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["events", "t"]);

    let table = find(&keyspace.children, "t");
    assert_eq!(table.qualified_identifier, format!(r#""{ks}"."t""#));
    assert_eq!(
        columns(table),
        [("id", "uuid"), ("name", "s"), ("score", "#"), ("tags", "[]")]
    );
    assert_eq!(
        table.children[0].qualified_identifier,
        format!(r#""{ks}"."t"."id""#)
    );
    assert_eq!(
        columns(find(&keyspace.children, "events")),
        [("day", "d"), ("at", "s"), ("payload", "b")]
    );
}

#[tokio::test]
#[ignore = "requires a running cluster"]
async fn system_schema_catalog_sorts_columns_by_name() {
    setup_tracing();
    let (catalog, ks) = catalog_with(Arc::new(SystemSchemaSource)).await;
    let keyspace = find(&catalog.items, &ks);

    assert_eq!(
        columns(find(&keyspace.children, "t")),
        [("id", "uuid"), ("name", "s"), ("score", "#"), ("tags", "?")]
    );
    assert_eq!(
        columns(find(&keyspace.children, "events")),
        [("at", "s"), ("day", "d"), ("payload", "blob")]
    );
}

#[tokio::test]
#[ignore = "requires a running cluster with materialized views enabled"]
async fn views_follow_tables() {
    setup_tracing();
    let connection = test_adapter([]).connect().await.unwrap();
    let ks = create_keyspace(&connection).await;
    run(
        &connection,
        &format!("CREATE TABLE {ks}.users (id int PRIMARY KEY, email text)"),
    )
    .await;
    run(
        &connection,
        &format!(
            "CREATE MATERIALIZED VIEW {ks}.by_email AS SELECT * FROM {ks}.users \
             WHERE email IS NOT NULL AND id IS NOT NULL PRIMARY KEY (email, id)"
        ),
    )
    .await;

    let catalog = connection.get_catalog().await.unwrap();
    let keyspace = find(&catalog.items, &ks);
    let children: Vec<(&str, &str)> = keyspace
        .children
        .iter()
        .map(|item| (item.label.as_str(), item.type_label.as_str()))
        .collect();
    assert_eq!(
        children,
        [("users", TABLE_TYPE_LABEL), ("by_email", VIEW_TYPE_LABEL)]
    );

    run(&connection, &format!("DROP KEYSPACE {ks}")).await;
}

#[tokio::test]
#[ignore = "requires a running cluster"]
async fn catalog_reflects_schema_changes() {
    setup_tracing();
    let connection = test_adapter([]).connect().await.unwrap();
    let ks = create_keyspace(&connection).await;

    let before = connection.get_catalog().await.unwrap();
    assert!(find(&before.items, &ks).is_leaf());

    run(&connection, &format!("CREATE TABLE {ks}.fresh (k int PRIMARY KEY)")).await;
    let after = connection.get_catalog().await.unwrap();
    assert_eq!(columns(find(&find(&after.items, &ks).children, "fresh")), [("k", "#")]);

    run(&connection, &format!("DROP KEYSPACE {ks}")).await;
}
