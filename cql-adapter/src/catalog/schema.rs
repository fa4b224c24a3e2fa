//! Ordered schema snapshots.
//!
//! The driver keeps schema metadata in hash maps, and `system_schema` rows
//! come back in storage order. Both are turned into the explicit, ordered
//! structures below before the catalog is rendered.

use std::collections::HashMap;

use itertools::Itertools;
use scylla::cluster::metadata::{Column, Keyspace, Table};
use scylla::cluster::ClusterState;
use tracing::warn;

use crate::types::RawTypeBuf;

/// Point-in-time view of the cluster schema.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchemaSnapshot {
    /// Keyspaces in presentation order.
    pub keyspaces: Vec<KeyspaceSchema>,
}

/// A keyspace with its tables and materialized views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyspaceSchema {
    /// Keyspace name.
    pub name: String,
    /// Tables in presentation order.
    pub tables: Vec<RelationSchema>,
    /// Materialized views in presentation order.
    pub views: Vec<RelationSchema>,
}

/// A table or a materialized view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelationSchema {
    /// Table or view name.
    pub name: String,
    /// Columns in presentation order.
    pub columns: Vec<ColumnSchema>,
}

/// A column and its raw type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSchema {
    /// Column name.
    pub name: String,
    /// Type as received from the metadata path that produced this column.
    pub raw_type: RawTypeBuf,
}

impl SchemaSnapshot {
    /// Captures the schema held by the driver's cluster state.
    ///
    /// Keyspaces, tables and views are ordered by name. See
    /// [RelationSchema::from_driver_table] for column order.
    pub fn from_cluster_state(state: &ClusterState) -> Self {
        let keyspaces = sorted_by_name(state.keyspaces_iter())
            .map(|(name, keyspace)| KeyspaceSchema::from_driver_keyspace(name, keyspace))
            .collect();
        Self { keyspaces }
    }
}

impl KeyspaceSchema {
    /// Captures a keyspace from the driver's schema metadata.
    pub fn from_driver_keyspace(name: &str, keyspace: &Keyspace) -> Self {
        let tables = sorted_by_name(&keyspace.tables)
            .map(|(name, table)| RelationSchema::from_driver_table(name, table))
            .collect();
        let views = sorted_by_name(&keyspace.views)
            .map(|(name, view)| RelationSchema::from_driver_table(name, &view.view_metadata))
            .collect();
        Self {
            name: name.to_owned(),
            tables,
            views,
        }
    }
}

impl RelationSchema {
    /// Captures a table (or the table part of a view) from driver metadata.
    ///
    /// Columns follow the primary key: partition key columns, then clustering
    /// columns, each in key order, then the remaining columns by name.
    pub fn from_driver_table(name: &str, table: &Table) -> Self {
        Self {
            name: name.to_owned(),
            columns: order_driver_columns(
                name,
                &table.partition_key,
                &table.clustering_key,
                &table.columns,
                |column: &Column| RawTypeBuf::from(&column.typ),
            ),
        }
    }

    /// Builds a relation from `(column_name, type)` rows of `system_schema.columns`.
    ///
    /// Columns are sorted ascending by name, whatever order the rows came in.
    pub fn from_column_rows(
        name: impl Into<String>,
        rows: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let columns = rows
            .into_iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(name, typ)| ColumnSchema {
                name,
                raw_type: RawTypeBuf::CqlName(typ),
            })
            .collect();
        Self {
            name: name.into(),
            columns,
        }
    }
}

fn sorted_by_name<K, V>(entries: impl IntoIterator<Item = (K, V)>) -> impl Iterator<Item = (K, V)>
where
    K: AsRef<str>,
{
    entries
        .into_iter()
        .sorted_by(|(a, _), (b, _)| a.as_ref().cmp(b.as_ref()))
}

fn order_driver_columns<C>(
    relation: &str,
    partition_key: &[String],
    clustering_key: &[String],
    columns: &HashMap<String, C>,
    raw_type: impl Fn(&C) -> RawTypeBuf,
) -> Vec<ColumnSchema> {
    let key_columns = partition_key.iter().chain(clustering_key);
    let other_columns = columns
        .keys()
        .filter(|name| !partition_key.contains(*name) && !clustering_key.contains(*name))
        .sorted();

    key_columns
        .chain(other_columns)
        .filter_map(|name| match columns.get(name) {
            Some(column) => Some(ColumnSchema {
                name: name.clone(),
                raw_type: raw_type(column),
            }),
            None => {
                // Only key columns can be missing here.
                warn!(relation, column = %name, "Key column has no metadata, skipping");
                None
            }
        })
        .collect()
}
