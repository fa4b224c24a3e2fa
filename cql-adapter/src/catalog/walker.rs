use tracing::debug;

use super::schema::{KeyspaceSchema, RelationSchema, SchemaSnapshot};
use super::{
    qualify, quote, Catalog, CatalogItem, KEYSPACE_TYPE_LABEL, TABLE_TYPE_LABEL, VIEW_TYPE_LABEL,
};
use crate::types::label_for;

/// Renders a schema snapshot into a catalog tree.
///
/// Keyspaces keep the snapshot order. Within a keyspace, tables come first,
/// then materialized views; columns keep the snapshot order as well.
/// Every identifier segment is double-quoted.
pub fn build_catalog(snapshot: &SchemaSnapshot) -> Catalog {
    let items: Vec<CatalogItem> = snapshot.keyspaces.iter().map(keyspace_item).collect();
    debug!(keyspaces = items.len(), "Built catalog");
    Catalog { items }
}

fn keyspace_item(keyspace: &KeyspaceSchema) -> CatalogItem {
    let identifier = quote(&keyspace.name);
    let children = keyspace
        .tables
        .iter()
        .map(|table| relation_item(&identifier, table, TABLE_TYPE_LABEL))
        .chain(
            keyspace
                .views
                .iter()
                .map(|view| relation_item(&identifier, view, VIEW_TYPE_LABEL)),
        )
        .collect();
    CatalogItem::new(identifier, &keyspace.name, KEYSPACE_TYPE_LABEL, children)
}

fn relation_item(parent: &str, relation: &RelationSchema, type_label: &str) -> CatalogItem {
    let identifier = qualify(parent, &relation.name);
    let columns = relation
        .columns
        .iter()
        .map(|column| {
            CatalogItem::new(
                qualify(&identifier, &column.name),
                &column.name,
                label_for(column.raw_type.as_raw()),
                Vec::new(),
            )
        })
        .collect();
    CatalogItem::new(identifier, &relation.name, type_label, columns)
}
