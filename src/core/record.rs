//! The normalized sales-record value that the whole engine operates on.
//!
//! A `SalesRecord` is a read-only snapshot of one sales transaction, produced
//! by the ingestion boundary (see [`crate::ingest`]) or deserialized from the
//! backing store. The engine never mutates records; filtering, sorting and
//! aggregation all treat them as immutable values.
//!
//! Serde field names use the dashboard's camelCase wire format
//! (`customerName`, `pricePerUnit`, …) so a serialized result envelope has
//! the same JSON shape the dashboard consumes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// One normalized sales transaction.
///
/// Numeric fields default to zero and the date to `None` when the source
/// value was missing or unparsable — that coercion happens at the ingestion
/// boundary, never inside the engine. `final_amount <= total_amount` is
/// assumed but not enforced; the aggregator clamps the derived discount at
/// zero instead.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    /// Transaction timestamp; `None` when the source date was unparsable.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub customer_name: String,

    #[serde(default)]
    pub phone_number: String,

    /// Customer region, matched exactly by membership filters.
    #[serde(default)]
    pub region: String,

    #[serde(default)]
    pub gender: String,

    /// Customer age; 0 when the source value was unparsable.
    #[serde(default)]
    pub age: i64,

    #[serde(default)]
    pub product_category: String,

    #[serde(default)]
    pub product_name: String,

    /// Units sold; 0 when the source value was unparsable.
    #[serde(default)]
    pub quantity: i64,

    #[serde(default)]
    pub price_per_unit: f64,

    #[serde(default)]
    pub discount_percentage: f64,

    /// Pre-discount amount.
    #[serde(default)]
    pub total_amount: f64,

    /// Post-discount amount actually charged.
    #[serde(default)]
    pub final_amount: f64,

    #[serde(default)]
    pub payment_method: String,

    /// Tag set derived by splitting the comma-separated source field and
    /// trimming each entry.
    #[serde(default)]
    pub tags: BTreeSet<String>,

    #[serde(default)]
    pub order_status: String,
}
