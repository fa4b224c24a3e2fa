//! Metadata read paths producing [SchemaSnapshot]s.

use async_trait::async_trait;
use futures::TryStreamExt;
use scylla::client::session::Session;
use scylla::deserialize::row::DeserializeRow;
use scylla::serialize::row::SerializeRow;
use scylla::statement::unprepared::Statement;
use tracing::{debug, trace};

use super::schema::{KeyspaceSchema, RelationSchema, SchemaSnapshot};
use crate::errors::{CatalogError, SchemaFetchError, SchemaFetchErrorKind};

const METADATA_QUERY_PAGE_SIZE: i32 = 1024;

/// Reads the cluster schema on behalf of a connection.
///
/// Implementations perform live reads against the cluster. Failures are
/// returned as they are; no retries, no partial snapshots.
#[async_trait]
pub trait SchemaSource: std::fmt::Debug + Send + Sync {
    /// Reads the current schema.
    async fn snapshot(&self, session: &Session) -> Result<SchemaSnapshot, CatalogError>;
}

/// Reads the schema from the metadata the driver maintains.
///
/// The driver metadata is refreshed first, so the snapshot reflects the
/// cluster at call time, including DDL issued through this session.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClusterMetadataSource;

#[async_trait]
impl SchemaSource for ClusterMetadataSource {
    async fn snapshot(&self, session: &Session) -> Result<SchemaSnapshot, CatalogError> {
        session.refresh_metadata().await?;
        let state = session.get_cluster_state();
        let snapshot = SchemaSnapshot::from_cluster_state(&state);
        debug!(
            keyspaces = snapshot.keyspaces.len(),
            "Read schema from cluster metadata"
        );
        Ok(snapshot)
    }
}

/// Reads the schema by querying the `system_schema` keyspace.
///
/// Types are reported as textual CQL names. Tables, views and columns are
/// sorted by name.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemSchemaSource;

impl SystemSchemaSource {
    async fn relation(
        session: &Session,
        keyspace: &str,
        name: String,
    ) -> Result<RelationSchema, CatalogError> {
        trace!(keyspace, relation = %name, "Reading columns");
        let rows = query_rows::<(String, String)>(
            session,
            "SELECT column_name, type FROM system_schema.columns WHERE keyspace_name = ? AND table_name = ?",
            "system_schema.columns",
            (keyspace, name.as_str()),
        )
        .await?;
        Ok(RelationSchema::from_column_rows(name, rows))
    }

    async fn relations(
        session: &Session,
        keyspace: &str,
        query_str: &str,
        table: &'static str,
    ) -> Result<Vec<RelationSchema>, CatalogError> {
        let mut names: Vec<String> = query_rows::<(String,)>(session, query_str, table, (keyspace,))
            .await?
            .into_iter()
            .map(|(name,)| name)
            .collect();
        names.sort();

        let mut relations = Vec::with_capacity(names.len());
        for name in names {
            relations.push(Self::relation(session, keyspace, name).await?);
        }
        Ok(relations)
    }
}

#[async_trait]
impl SchemaSource for SystemSchemaSource {
    async fn snapshot(&self, session: &Session) -> Result<SchemaSnapshot, CatalogError> {
        let keyspace_names = query_rows::<(String,)>(
            session,
            "SELECT keyspace_name FROM system_schema.keyspaces",
            "system_schema.keyspaces",
            (),
        )
        .await?;

        let mut keyspaces = Vec::with_capacity(keyspace_names.len());
        for (name,) in keyspace_names {
            trace!(keyspace = %name, "Reading tables and views");
            let tables = Self::relations(
                session,
                &name,
                "SELECT table_name FROM system_schema.tables WHERE keyspace_name = ?",
                "system_schema.tables",
            )
            .await?;
            let views = Self::relations(
                session,
                &name,
                "SELECT view_name FROM system_schema.views WHERE keyspace_name = ?",
                "system_schema.views",
            )
            .await?;
            keyspaces.push(KeyspaceSchema {
                name,
                tables,
                views,
            });
        }

        debug!(keyspaces = keyspaces.len(), "Read schema from system_schema");
        Ok(SchemaSnapshot { keyspaces })
    }
}

async fn query_rows<R>(
    session: &Session,
    query_str: &str,
    table: &'static str,
    values: impl SerializeRow,
) -> Result<Vec<R>, CatalogError>
where
    R: 'static + for<'frame, 'metadata> DeserializeRow<'frame, 'metadata>,
{
    let fetch = async {
        let mut statement = Statement::new(query_str);
        statement.set_page_size(METADATA_QUERY_PAGE_SIZE);

        let rows = session
            .query_iter(statement, values)
            .await?
            .rows_stream::<R>()?
            .try_collect::<Vec<_>>()
            .await?;
        Ok::<_, SchemaFetchErrorKind>(rows)
    };
    fetch
        .await
        .map_err(|error| CatalogError::from(SchemaFetchError { error, table }))
}
