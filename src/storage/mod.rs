//! Storage backends for the query engine.
//!
//! The [`SalesStore`] trait is the seam between the pure core and a concrete
//! backend. A backend owns its whole execution strategy — that is what lets
//! each one give the consistency story it can actually honor:
//!
//! - the in-memory backend filters one immutable snapshot once and derives
//!   count, page and totals from that single materialized sequence
//!   (trivially consistent);
//! - the MongoDB backend pushes the translated predicate down and issues
//!   count/find/aggregate as separate server operations, which is only as
//!   consistent as the server's read isolation — see the module docs of
//!   [`mongodb`] for the documented staleness window.

pub mod in_memory;
#[cfg(feature = "mongodb_backend")]
pub mod mongodb;

pub use in_memory::InMemorySalesStore;
#[cfg(feature = "mongodb_backend")]
pub use mongodb::MongoSalesStore;

use crate::core::error::StoreError;
use crate::core::record::SalesRecord;
use crate::core::stats::SalesTotals;
use crate::query::SalesQuery;
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Raw outcome of one logical query, before the executor assembles the
/// envelope.
///
/// `totals` is a nested result so a failed aggregate sub-operation can
/// travel alongside a successful count and page: the executor degrades it
/// to zeroed statistics instead of failing the request.
#[derive(Debug)]
pub struct StoreResult {
    /// Size of the full filtered set.
    pub total_items: u64,

    /// The requested page slice, already sorted.
    pub records: Vec<SalesRecord>,

    /// Totals over the full filtered set, or the aggregate failure.
    pub totals: Result<SalesTotals, StoreError>,
}

/// Observed bounds of the age field, for the dashboard's range widget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeBounds {
    pub min: i64,
    pub max: i64,
}

impl Default for AgeBounds {
    // The dashboard's slider defaults when no data is present.
    fn default() -> Self {
        Self { min: 0, max: 100 }
    }
}

/// Observed bounds of the date field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateBounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

/// Distinct values and observed ranges for populating filter widgets.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    pub regions: Vec<String>,
    pub genders: Vec<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub payment_methods: Vec<String>,
    pub age_range: AgeBounds,
    pub date_range: DateBounds,
}

/// Result of a health probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreHealth {
    /// Total records visible to the store.
    pub records: u64,
}

/// A queryable sales-record backend.
///
/// Implementations must reproduce the semantics of the reference predicate
/// ([`crate::core::predicate::matches`]), comparator and aggregator exactly;
/// the in-memory backend applies them directly and is the conformance
/// baseline for any pushdown translation.
#[async_trait]
pub trait SalesStore: Send + Sync {
    /// Short backend name used in error and trace context.
    fn backend_name(&self) -> &'static str;

    /// Run one logical query: count, page slice and totals for the same
    /// filtered set. See the implementation's docs for its consistency
    /// guarantees.
    async fn execute(&self, query: &SalesQuery) -> Result<StoreResult, StoreError>;

    /// Distinct filter values and observed ranges over the whole dataset.
    async fn filter_options(&self) -> Result<FilterOptions, StoreError>;

    /// Capability check: is the backend reachable, and how many records
    /// does it hold? Replaces connection-state flags — reachability is
    /// probed, not remembered.
    async fn health(&self) -> Result<StoreHealth, StoreError>;
}
