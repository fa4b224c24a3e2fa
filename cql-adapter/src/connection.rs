//! Connections to a cluster.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use scylla::client::execution_profile::ExecutionProfileHandle;
use scylla::client::session::Session;
use scylla::errors::{DbError, PrepareError, RequestAttemptError};
use tracing::debug;

use crate::catalog::{build_catalog, Catalog, SchemaSource};
use crate::completions::{keyword_completions, Completion};
use crate::cursor::CqlCursor;
use crate::errors::{CatalogError, QueryError};
use crate::host::HostConnection;
use crate::transaction::{consistency_name, TransactionMode};

/// Greeting shown by the host once connected.
pub const INIT_MESSAGE: &str = "Connected to Cassandra.";

/// An open connection to a cluster.
///
/// Cursors created by [HostConnection::execute] share the connection's
/// session. The transaction mode toggle remaps the session's default
/// execution profile, so it affects cursors created earlier as well.
pub struct CqlConnection {
    session: Arc<Session>,
    default_profile: ExecutionProfileHandle,
    schema_source: Arc<dyn SchemaSource>,
}

impl CqlConnection {
    /// Wraps an established session.
    pub fn new(session: Session, schema_source: Arc<dyn SchemaSource>) -> Self {
        let default_profile = session.get_default_execution_profile_handle().clone();
        Self {
            session: Arc::new(session),
            default_profile,
            schema_source,
        }
    }

    /// The underlying driver session.
    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }
}

impl fmt::Debug for CqlConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CqlConnection")
            .field("default_profile", &self.default_profile)
            .field("schema_source", &self.schema_source)
            .finish_non_exhaustive()
    }
}

fn is_syntax_error(error: &PrepareError) -> bool {
    matches!(
        error,
        PrepareError::AllAttemptsFailed {
            first_attempt: RequestAttemptError::DbError(DbError::SyntaxError, _),
            ..
        }
    )
}

#[async_trait]
impl HostConnection for CqlConnection {
    type Cursor = CqlCursor;

    fn init_message(&self) -> &str {
        INIT_MESSAGE
    }

    async fn execute(&self, query: &str) -> Result<CqlCursor, QueryError> {
        let statement = self.session.prepare(query).await?;
        Ok(CqlCursor::new(self.session.clone(), statement))
    }

    async fn validate(&self, query: &str) -> Result<String, QueryError> {
        match self.session.prepare(query).await {
            Ok(_) => Ok(query.to_owned()),
            Err(error) if is_syntax_error(&error) => Ok(String::new()),
            Err(error) => Err(error.into()),
        }
    }

    async fn get_catalog(&self) -> Result<Catalog, CatalogError> {
        let snapshot = self.schema_source.snapshot(&self.session).await?;
        Ok(build_catalog(&snapshot))
    }

    fn get_completions(&self) -> Vec<Completion> {
        keyword_completions()
    }

    fn transaction_mode(&self) -> Option<TransactionMode> {
        Some(TransactionMode::new(
            self.default_profile.to_profile().get_consistency(),
        ))
    }

    /// Advances the session's default consistency along
    /// [CONSISTENCY_CYCLE](crate::transaction::CONSISTENCY_CYCLE), starting
    /// from the configured level: with the default `LOCAL_ONE`, the first
    /// toggle wraps to `ANY`.
    fn toggle_transaction_mode(&mut self) -> Option<TransactionMode> {
        let current = self.transaction_mode()?;
        let next = current.next();
        let profile = self
            .default_profile
            .pointee_to_builder()
            .consistency(next.consistency())
            .build();
        self.default_profile.map_to_another_profile(profile);
        debug!(
            from = consistency_name(current.consistency()),
            to = consistency_name(next.consistency()),
            "Switched default consistency"
        );
        Some(next)
    }

    fn close(self) {
        debug!("Closing connection");
        drop(self.session);
    }
}
