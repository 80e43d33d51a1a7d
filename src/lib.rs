//! # Salesdash
//!
//! The query engine of a sales-records browsing dashboard: filters, a search
//! term, a sort key and a page request go in; one consistent envelope of
//! page data, pagination metadata and whole-set statistics comes out.
//!
//! ## Features
//!
//! - **One predicate, two backends**: the in-memory evaluator is the single
//!   source of filtering truth; the MongoDB backend pushes an exactly
//!   equivalent translation down to the server.
//! - **Consistent envelopes**: count, page slice and aggregate totals are
//!   derived from one logical snapshot of the filtered set, never three
//!   drifting queries.
//! - **Lenient by policy**: malformed filter values are dropped, not
//!   rejected, and source-row coercion zero-fills instead of failing —
//!   explicit, named, and tested.
//! - **Typed failures**: unreachable store, fatal count/find errors and
//!   timeouts are distinct; a failed aggregate degrades to zeroed
//!   statistics instead of failing the request.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use salesdash::prelude::*;
//! use std::sync::Arc;
//!
//! let store = InMemorySalesStore::new(records);
//! let executor = QueryExecutor::new(Arc::new(store));
//!
//! let query = SalesQuery::from_pairs([
//!     ("search", "rao"),
//!     ("regions", "North"),
//!     ("sortBy", "quantity"),
//!     ("page", "2"),
//! ]);
//! let envelope = executor.execute(&query).await?;
//! println!("{} of {} records", envelope.data.len(), envelope.pagination.total_items);
//! ```

pub mod config;
pub mod core;
pub mod ingest;
pub mod query;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core types ===
    pub use crate::core::{
        error::{QueryError, StoreError},
        filter::{AgeRange, DateRange, FilterSpec},
        page::{PageRequest, PageWindow, Pagination, paginate},
        params::QueryParams,
        predicate::matches,
        record::SalesRecord,
        sort::{SortDirection, SortKey, SortSpec, compare, sort_records},
        stats::{SalesTotals, aggregate},
    };

    // === Query orchestration ===
    pub use crate::query::{QueryExecutor, ResultEnvelope, SalesQuery};

    // === Storage ===
    pub use crate::storage::{
        AgeBounds, DateBounds, FilterOptions, InMemorySalesStore, SalesStore, StoreHealth,
        StoreResult,
    };
    #[cfg(feature = "mongodb_backend")]
    pub use crate::storage::MongoSalesStore;

    // === Ingestion ===
    pub use crate::ingest::record_from_row;

    // === Config ===
    pub use crate::config::{DashboardConfig, MongoConfig, QuerySettings};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
}
