//! The browsable tree of database objects shown by the host.
//!
//! A [Catalog] holds one [CatalogItem] per keyspace; keyspaces hold tables
//! and materialized views, which hold their columns. The tree is rebuilt from
//! scratch on every request, see [build_catalog] and [SchemaSource].

mod schema;
mod source;
mod walker;

pub use schema::{ColumnSchema, KeyspaceSchema, RelationSchema, SchemaSnapshot};
pub use source::{ClusterMetadataSource, SchemaSource, SystemSchemaSource};
pub use walker::build_catalog;

/// Type label of keyspace items.
pub const KEYSPACE_TYPE_LABEL: &str = "ks";
/// Type label of table items.
pub const TABLE_TYPE_LABEL: &str = "t";
/// Type label of materialized view items.
pub const VIEW_TYPE_LABEL: &str = "v";

/// Root of the catalog tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    /// Keyspace items, in snapshot order.
    pub items: Vec<CatalogItem>,
}

/// A node of the catalog tree.
///
/// The qualified identifier of a parent is a strict prefix of the qualified
/// identifiers of its children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogItem {
    /// Fully quoted dotted path, e.g. `"ks"."table"."col"`.
    pub qualified_identifier: String,
    /// Name to insert into a query. Same as the qualified identifier.
    pub query_name: String,
    /// Display name.
    pub label: String,
    /// Short type code for columns, or one of `ks`, `t`, `v` for containers.
    pub type_label: String,
    /// Children in display order. Empty for columns.
    pub children: Vec<CatalogItem>,
}

impl CatalogItem {
    /// Creates an item whose query name equals its qualified identifier.
    pub fn new(
        qualified_identifier: String,
        label: impl Into<String>,
        type_label: impl Into<String>,
        children: Vec<CatalogItem>,
    ) -> Self {
        Self {
            query_name: qualified_identifier.clone(),
            qualified_identifier,
            label: label.into(),
            type_label: type_label.into(),
            children,
        }
    }

    /// Whether this item has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Wraps an identifier segment in double quotes.
///
/// Embedded double quotes are left as they are.
pub(crate) fn quote(segment: &str) -> String {
    format!("\"{segment}\"")
}

/// Appends a quoted segment to an already qualified identifier.
pub(crate) fn qualify(parent: &str, segment: &str) -> String {
    format!("{parent}.{}", quote(segment))
}
