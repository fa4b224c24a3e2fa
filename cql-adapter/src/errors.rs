//! Errors returned by the adapter.
//!
//! Driver errors are carried unchanged; the enums below only say in which
//! phase they happened, which is what the host shows as the error title.

use scylla::deserialize::{DeserializationError, TypeCheckError};
use scylla::errors::{
    ExecutionError, MetadataError, NewSessionError, NextRowError, PagerExecutionError,
    PrepareError,
};
use scylla::response::query_result::{IntoRowsResultError, RowsError};
use thiserror::Error;

/// Title shown by the host for [ConnectionError]s.
pub const CONNECTION_ERROR_TITLE: &str = "Harlequin could not connect to Cassandra.";
/// Title shown by the host when a statement failed to prepare.
pub const PREPARE_ERROR_TITLE: &str =
    "Harlequin encountered an error while preparing your query.";
/// Title shown by the host when a statement failed to execute.
pub const EXECUTE_ERROR_TITLE: &str =
    "Harlequin encountered an error while executing your query.";
/// Title shown by the host when the catalog could not be read.
pub const CATALOG_ERROR_TITLE: &str = "Harlequin could not read the Cassandra schema.";

/// Failure to establish a connection.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ConnectionError {
    /// An option value did not pass validation.
    #[error("Invalid value {value:?} for option `{option}`: {reason}")]
    InvalidOption {
        /// Option name, as listed in the adapter options.
        option: &'static str,
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The driver could not create a session.
    #[error(transparent)]
    NewSession(#[from] NewSessionError),
}

impl ConnectionError {
    /// Error title for the host.
    pub fn title(&self) -> &'static str {
        CONNECTION_ERROR_TITLE
    }
}

/// Failure to prepare or execute a statement.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum QueryError {
    /// Preparing the statement failed, e.g. on a syntax error.
    #[error(transparent)]
    Prepare(#[from] PrepareError),

    /// Unpaged execution failed.
    #[error(transparent)]
    Execute(#[from] ExecutionError),

    /// The first page of a paged execution failed.
    #[error(transparent)]
    Pager(#[from] PagerExecutionError),

    /// Result rows could not be read as generic rows.
    #[error(transparent)]
    TypeCheck(#[from] TypeCheckError),

    /// Fetching or deserializing a subsequent row failed.
    #[error(transparent)]
    NextRow(#[from] NextRowError),

    /// Metadata of an unpaged result could not be read.
    #[error(transparent)]
    IntoRows(#[from] IntoRowsResultError),

    /// Rows of an unpaged result could not be read as generic rows.
    #[error(transparent)]
    Rows(#[from] RowsError),

    /// A row of an unpaged result could not be deserialized.
    #[error(transparent)]
    Deserialization(#[from] DeserializationError),
}

impl QueryError {
    /// Error title for the host.
    pub fn title(&self) -> &'static str {
        match self {
            QueryError::Prepare(_) => PREPARE_ERROR_TITLE,
            _ => EXECUTE_ERROR_TITLE,
        }
    }
}

/// Failure to read the schema the catalog is built from.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogError {
    /// Refreshing the driver's cluster metadata failed.
    #[error("Failed to refresh cluster metadata: {0}")]
    Refresh(#[from] MetadataError),

    /// Querying a `system_schema` table failed.
    #[error(transparent)]
    SchemaFetch(#[from] SchemaFetchError),
}

impl CatalogError {
    /// Error title for the host.
    pub fn title(&self) -> &'static str {
        CATALOG_ERROR_TITLE
    }
}

/// Error returned when querying a schema table failed.
#[derive(Error, Debug)]
#[error("Failed to fetch {table}: {error}")]
pub struct SchemaFetchError {
    /// The underlying driver error.
    #[source]
    pub error: SchemaFetchErrorKind,
    /// The queried table.
    pub table: &'static str,
}

/// Driver error that made a schema query fail.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SchemaFetchErrorKind {
    /// The query was rejected or its first page could not be fetched.
    #[error(transparent)]
    Pager(#[from] PagerExecutionError),

    /// Rows did not have the expected column types.
    #[error(transparent)]
    TypeCheck(#[from] TypeCheckError),

    /// A subsequent page could not be fetched or a row could not be read.
    #[error(transparent)]
    NextRow(#[from] NextRowError),
}
