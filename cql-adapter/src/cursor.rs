//! Cursors over prepared statements.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use scylla::client::session::Session;
use scylla::response::query_result::ColumnSpecs;
use scylla::statement::prepared::PreparedStatement;
use scylla::value::Row;
use tracing::trace;

use crate::errors::QueryError;
use crate::host::HostCursor;
use crate::types::label_for_column_type;

/// A prepared statement together with the session that executes it.
///
/// Statements whose prepared metadata announces result columns are fetched
/// page by page, stopping once the limit is reached. Other statements
/// (schema changes, writes, conditional writes) are executed in one round
/// trip; conditional writes still report their `[applied]` rows.
pub struct CqlCursor {
    session: Arc<Session>,
    statement: PreparedStatement,
    limit: Option<usize>,
    // Columns of the last fetched result, when it differs from the prepared metadata.
    fetched_columns: Option<Vec<(String, String)>>,
}

impl CqlCursor {
    pub(crate) fn new(session: Arc<Session>, statement: PreparedStatement) -> Self {
        Self {
            session,
            statement,
            limit: None,
            fetched_columns: None,
        }
    }

    /// The prepared statement behind this cursor.
    pub fn statement(&self) -> &PreparedStatement {
        &self.statement
    }

    /// Row limit, if set. A limit of zero counts as unset.
    pub fn limit(&self) -> Option<usize> {
        effective_limit(self.limit)
    }

    fn row_cap(&self) -> usize {
        self.limit().unwrap_or(usize::MAX)
    }

    async fn fetch_pages(&self) -> Result<Vec<Row>, QueryError> {
        let rows = self
            .session
            .execute_iter(self.statement.clone(), ())
            .await?
            .rows_stream::<Row>()?
            .take(self.row_cap())
            .try_collect()
            .await?;
        Ok(rows)
    }

    async fn fetch_unpaged(&mut self) -> Result<Option<Vec<Row>>, QueryError> {
        let result = self.session.execute_unpaged(&self.statement, ()).await?;
        if !result.is_rows() {
            return Ok(None);
        }
        let rows_result = result.into_rows_result()?;
        self.fetched_columns = Some(labelled_columns(rows_result.column_specs()));
        let rows = rows_result
            .rows::<Row>()?
            .take(self.row_cap())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(rows))
    }
}

fn effective_limit(limit: Option<usize>) -> Option<usize> {
    limit.filter(|limit| *limit > 0)
}

impl fmt::Debug for CqlCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CqlCursor")
            .field("statement", &self.statement.get_statement())
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

fn labelled_columns(specs: ColumnSpecs<'_, '_>) -> Vec<(String, String)> {
    specs
        .iter()
        .map(|spec| {
            (
                spec.name().to_owned(),
                label_for_column_type(spec.typ()).to_owned(),
            )
        })
        .collect()
}

#[async_trait]
impl HostCursor for CqlCursor {
    fn columns(&self) -> Vec<(String, String)> {
        match &self.fetched_columns {
            Some(columns) => columns.clone(),
            None => labelled_columns(self.statement.get_result_set_col_specs()),
        }
    }

    fn set_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    async fn fetch_all(&mut self) -> Result<Option<Vec<Row>>, QueryError> {
        let rows = if !self.statement.get_result_set_col_specs().as_slice().is_empty() {
            Some(self.fetch_pages().await?)
        } else {
            self.fetch_unpaged().await?
        };
        trace!(
            rows = rows.as_ref().map(Vec::len),
            limit = self.limit(),
            "Fetched statement result"
        );
        Ok(rows)
    }
}
