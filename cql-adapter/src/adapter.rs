//! The adapter entry point.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::catalog::{ClusterMetadataSource, SchemaSource};
use crate::connection::CqlConnection;
use crate::errors::ConnectionError;
use crate::host::Adapter;
use crate::options::{AdapterOption, ConnectOptions, ADAPTER_OPTIONS};

/// Adapter for Cassandra and ScyllaDB clusters.
///
/// # Example
/// ```rust,no_run
/// # use cql_adapter::{CqlAdapter, Adapter, HostConnection};
/// # async fn check_only_compiles() -> Result<(), Box<dyn std::error::Error>> {
/// let adapter = CqlAdapter::from_values([("host", "127.0.0.1"), ("keyspace", "system")])?;
/// let connection = adapter.connect().await?;
/// let catalog = connection.get_catalog().await?;
/// for keyspace in &catalog.items {
///     println!("{}", keyspace.label);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct CqlAdapter {
    options: ConnectOptions,
    schema_source: Arc<dyn SchemaSource>,
}

impl CqlAdapter {
    /// Adapter connecting with the given settings. The catalog is read from
    /// the driver's cluster metadata.
    pub fn new(options: ConnectOptions) -> Self {
        Self {
            options,
            schema_source: Arc::new(ClusterMetadataSource),
        }
    }

    /// Adapter built from host option values, see [ConnectOptions::from_values].
    pub fn from_values<'a>(
        values: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ConnectionError> {
        ConnectOptions::from_values(values).map(Self::new)
    }

    /// Changes where catalogs are read from.
    pub fn with_schema_source(mut self, schema_source: Arc<dyn SchemaSource>) -> Self {
        self.schema_source = schema_source;
        self
    }

    /// Connection settings of this adapter.
    pub fn connect_options(&self) -> &ConnectOptions {
        &self.options
    }
}

#[async_trait]
impl Adapter for CqlAdapter {
    type Connection = CqlConnection;

    fn options() -> &'static [AdapterOption] {
        &ADAPTER_OPTIONS
    }

    async fn connect(&self) -> Result<CqlConnection, ConnectionError> {
        debug!(
            node = %self.options.known_node(),
            keyspace = self.options.keyspace.as_deref(),
            "Connecting"
        );
        let session = self.options.session_builder().build().await?;
        Ok(CqlConnection::new(session, self.schema_source.clone()))
    }
}
