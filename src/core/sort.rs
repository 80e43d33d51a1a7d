//! Sort keys, directions and the total ordering used for record pages.
//!
//! The comparator is used with `slice::sort_by`, which is stable: records
//! with equal sort keys keep their relative input order in both directions.
//! That matters here because quantities and dates repeat frequently.

use crate::core::params::QueryParams;
use crate::core::record::SalesRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The sortable fields of a [`SalesRecord`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Date,
    Quantity,
    CustomerName,
}

impl SortKey {
    /// Parse the wire value (`date`, `quantity`, `customerName`).
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw {
            "date" => Some(Self::Date),
            "quantity" => Some(Self::Quantity),
            "customerName" => Some(Self::CustomerName),
            _ => None,
        }
    }

    /// Direction used when a key is selected without an explicit order:
    /// newest-first for dates, ascending for everything else.
    pub fn default_direction(self) -> SortDirection {
        match self {
            Self::Date => SortDirection::Desc,
            Self::Quantity | Self::CustomerName => SortDirection::Asc,
        }
    }

    /// The wire name of this key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Quantity => "quantity",
            Self::CustomerName => "customerName",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Parse the wire value (`asc`/`desc`, case-insensitive).
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw.to_ascii_lowercase().as_str() {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }
}

/// A chosen sort key plus direction. Defaults to `date desc`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Resolve the sort from raw parameters.
    ///
    /// An unknown `sortBy` falls back to `date`. A missing or unknown
    /// `sortOrder` falls back to the key's default direction.
    pub fn from_params(params: &QueryParams) -> Self {
        let key = params
            .sort_by
            .as_deref()
            .and_then(SortKey::from_param)
            .unwrap_or_default();
        let direction = params
            .sort_order
            .as_deref()
            .and_then(SortDirection::from_param)
            .unwrap_or_else(|| key.default_direction());
        Self { key, direction }
    }
}

/// Total ordering of two records under `spec`.
///
/// - `date`: chronological; a missing date compares as the earliest
///   possible instant.
/// - `quantity`: numeric (missing quantities were already coerced to 0 at
///   ingestion).
/// - `customerName`: case-insensitive lexical; missing names are empty
///   strings.
pub fn compare(a: &SalesRecord, b: &SalesRecord, spec: &SortSpec) -> Ordering {
    let base = match spec.key {
        // Option<DateTime> orders None first, i.e. as the earliest instant.
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Quantity => a.quantity.cmp(&b.quantity),
        SortKey::CustomerName => a
            .customer_name
            .to_lowercase()
            .cmp(&b.customer_name.to_lowercase()),
    };

    match spec.direction {
        SortDirection::Asc => base,
        SortDirection::Desc => base.reverse(),
    }
}

/// Stable in-place sort of a record sequence.
pub fn sort_records(records: &mut [SalesRecord], spec: &SortSpec) {
    records.sort_by(|a, b| compare(a, b, spec));
}
