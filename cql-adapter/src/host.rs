//! The interface the host drives.
//!
//! A host lists an adapter's [options](Adapter::options), builds the adapter
//! from the user's values, connects, and then talks to the resulting
//! [HostConnection] and its [HostCursor]s.

use async_trait::async_trait;

use crate::catalog::Catalog;
use crate::completions::Completion;
use crate::errors::{CatalogError, ConnectionError, QueryError};
use crate::options::AdapterOption;
use crate::transaction::TransactionMode;
use scylla::value::Row;

/// Entry point of an adapter.
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Connection type produced by [Adapter::connect].
    type Connection: HostConnection;

    /// Options this adapter accepts.
    fn options() -> &'static [AdapterOption]
    where
        Self: Sized;

    /// Opens a connection.
    async fn connect(&self) -> Result<Self::Connection, ConnectionError>;
}

/// An open connection.
#[async_trait]
pub trait HostConnection: Send + Sync {
    /// Cursor type produced by [HostConnection::execute].
    type Cursor: HostCursor;

    /// Greeting shown once connected.
    fn init_message(&self) -> &str;

    /// Prepares a statement for execution.
    async fn execute(&self, query: &str) -> Result<Self::Cursor, QueryError>;

    /// Checks a statement without executing it.
    ///
    /// Returns the query when it is valid and an empty string when it has a
    /// syntax error.
    async fn validate(&self, query: &str) -> Result<String, QueryError>;

    /// Reads the schema and renders it as a fresh catalog.
    async fn get_catalog(&self) -> Result<Catalog, CatalogError>;

    /// Completions offered in the editor.
    fn get_completions(&self) -> Vec<Completion>;

    /// Current transaction mode, if the connection has any.
    fn transaction_mode(&self) -> Option<TransactionMode>;

    /// Switches to the next transaction mode and returns it.
    ///
    /// The cycle continues from the current mode, which initially is the
    /// one configured at connect time.
    fn toggle_transaction_mode(&mut self) -> Option<TransactionMode>;

    /// Closes the connection.
    fn close(self)
    where
        Self: Sized;
}

/// A prepared statement, ready to be fetched.
#[async_trait]
pub trait HostCursor: Send + Sync {
    /// Result column names with short type codes.
    fn columns(&self) -> Vec<(String, String)>;

    /// Caps the number of rows [HostCursor::fetch_all] returns. A limit of
    /// zero means no limit.
    fn set_limit(self, limit: usize) -> Self
    where
        Self: Sized;

    /// Executes the statement. `None` when it returns no rows.
    async fn fetch_all(&mut self) -> Result<Option<Vec<Row>>, QueryError>;
}
