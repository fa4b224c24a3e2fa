//! SQL IDE adapter for [Apache Cassandra®](https://cassandra.apache.org/) and
//! [Scylla](https://scylladb.com) clusters, built on the `scylla` driver.
//!
//! The adapter gives a host editor everything it needs to work with a
//! cluster:
//! * a [connection](CqlConnection) that prepares and executes statements,
//! * [cursors](CqlCursor) reporting result columns with short type codes,
//! * a [catalog](Catalog) tree of keyspaces, tables, views and columns,
//! * keyword [completions](completions::Completion),
//! * a transaction mode toggle that cycles the default consistency level.
//!
//! # Connecting
//! Options are given as name/value pairs, the way a host collects them from
//! its command line or configuration file:
//!
//! ```rust,no_run
//! use cql_adapter::{Adapter, CqlAdapter, HostConnection, HostCursor};
//! use std::error::Error;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn Error>> {
//!     let adapter = CqlAdapter::from_values([
//!         ("host", "127.0.0.1"),
//!         ("port", "9042"),
//!         ("consistency-level", "QUORUM"),
//!     ])?;
//!     let connection = adapter.connect().await?;
//!
//!     let mut cursor = connection
//!         .execute("SELECT keyspace_name FROM system_schema.keyspaces")
//!         .await?
//!         .set_limit(10);
//!     println!("{:?}", cursor.columns());
//!     if let Some(rows) = cursor.fetch_all().await? {
//!         println!("{} rows", rows.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Catalog
//! The catalog is rebuilt from scratch on each [HostConnection::get_catalog]
//! call. By default the schema comes from the driver's cluster metadata;
//! [SystemSchemaSource] reads the `system_schema` tables directly instead.

pub mod adapter;
pub mod catalog;
pub mod completions;
pub mod connection;
pub mod cursor;
pub mod errors;
pub mod host;
pub mod options;
pub mod transaction;
pub mod types;

pub use adapter::CqlAdapter;
pub use catalog::{
    build_catalog, Catalog, CatalogItem, ClusterMetadataSource, SchemaSnapshot, SchemaSource,
    SystemSchemaSource,
};
pub use connection::CqlConnection;
pub use cursor::CqlCursor;
pub use errors::{CatalogError, ConnectionError, QueryError};
pub use host::{Adapter, HostConnection, HostCursor};
pub use options::ConnectOptions;
pub use transaction::TransactionMode;
