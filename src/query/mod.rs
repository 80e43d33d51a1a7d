//! Query assembly and orchestration.
//!
//! [`SalesQuery`] is the fully-normalized form of one dashboard request;
//! [`ResultEnvelope`] is what goes back. The [`executor::QueryExecutor`]
//! turns one into the other against any [`crate::storage::SalesStore`].

pub mod executor;

pub use executor::QueryExecutor;

use crate::core::filter::FilterSpec;
use crate::core::page::{PageRequest, Pagination};
use crate::core::params::QueryParams;
use crate::core::record::SalesRecord;
use crate::core::sort::SortSpec;
use crate::core::stats::SalesTotals;
use serde::{Deserialize, Serialize};

/// One normalized query: filter + search + sort + page.
///
/// Constructed fresh per request and discarded after use; nothing here
/// persists state across requests.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesQuery {
    pub search: String,
    pub filter: FilterSpec,
    pub sort: SortSpec,
    pub page: PageRequest,
}

impl SalesQuery {
    /// Normalize raw parameters into a query. Malformed values fall back to
    /// defaults or are dropped; this never fails.
    pub fn from_params(params: &QueryParams) -> Self {
        Self {
            search: params.search.clone().unwrap_or_default(),
            filter: FilterSpec::from_params(params),
            sort: SortSpec::from_params(params),
            page: PageRequest::from_params(params),
        }
    }

    /// Convenience: normalize straight from `(key, value)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        Self::from_params(&QueryParams::from_pairs(pairs))
    }
}

/// The complete response for one query: the page, pagination metadata, and
/// statistics over the full filtered set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub data: Vec<SalesRecord>,
    pub pagination: Pagination,
    pub statistics: SalesTotals,
}
