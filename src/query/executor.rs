//! The query executor: one logical query in, one envelope out.
//!
//! The executor owns the request-level policies that are the same for every
//! backend: the caller-supplied timeout, the error taxonomy mapping, the
//! aggregate-degrade rule, and envelope assembly. Everything
//! backend-specific (predicate evaluation or pushdown, consistency) lives
//! behind the injected [`SalesStore`] handle — there is no module-level
//! connection state anywhere.

use crate::core::error::{QueryError, StoreError};
use crate::core::page::paginate;
use crate::core::stats::SalesTotals;
use crate::query::{ResultEnvelope, SalesQuery};
use crate::storage::{FilterOptions, SalesStore, StoreHealth};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Executes queries against an injected store handle.
///
/// Stateless apart from configuration; a single executor may serve
/// concurrent requests.
#[derive(Clone)]
pub struct QueryExecutor {
    store: Arc<dyn SalesStore>,
    timeout: Option<Duration>,
}

impl QueryExecutor {
    /// Create an executor over `store`, with no deadline.
    pub fn new(store: Arc<dyn SalesStore>) -> Self {
        Self { store, timeout: None }
    }

    /// Bound every store round-trip by `timeout`. An exceeded deadline
    /// fails with [`QueryError::Timeout`] instead of hanging.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Run one query and assemble the result envelope.
    ///
    /// Failure policy: an unreachable store or a failed count/find fails
    /// the request; a failed aggregate degrades to a zeroed statistics
    /// block while the page and pagination stay intact.
    pub async fn execute(&self, query: &SalesQuery) -> Result<ResultEnvelope, QueryError> {
        let outcome = self.bounded("query", self.store.execute(query)).await?;

        let pagination = paginate(outcome.total_items, &query.page);

        let statistics = match outcome.totals {
            Ok(totals) => totals,
            Err(err) => {
                tracing::warn!(
                    backend = self.store.backend_name(),
                    error = %err,
                    "aggregate failed, returning zeroed statistics"
                );
                SalesTotals::default()
            }
        };

        Ok(ResultEnvelope { data: outcome.records, pagination, statistics })
    }

    /// Distinct filter values and observed ranges for the dashboard widgets.
    pub async fn filter_options(&self) -> Result<FilterOptions, QueryError> {
        self.bounded("filter_options", self.store.filter_options())
            .await
    }

    /// Probe the store. Callers typically map an `Unavailable` result to a
    /// "service unavailable" response before attempting queries.
    pub async fn health(&self) -> Result<StoreHealth, QueryError> {
        self.bounded("health", self.store.health()).await
    }

    /// Apply the configured deadline to one store round-trip and lift store
    /// errors into the query taxonomy.
    async fn bounded<T>(
        &self,
        operation: &'static str,
        fut: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, QueryError> {
        match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, fut).await {
                Ok(result) => result.map_err(QueryError::from),
                Err(_) => Err(QueryError::Timeout { operation, waited: limit }),
            },
            None => fut.await.map_err(QueryError::from),
        }
    }
}
