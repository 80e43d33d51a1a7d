//! Aggregate totals over the full filtered set.
//!
//! Statistics always describe the entire filtered set, never the current
//! page, and are independent of sort order.

use crate::core::record::SalesRecord;
use serde::{Deserialize, Serialize};

/// The dashboard's summary-card numbers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTotals {
    /// Sum of units sold.
    pub total_units: i64,

    /// Sum of post-discount amounts.
    pub total_amount: f64,

    /// Total discount given, clamped at zero.
    pub total_discount: f64,

    /// Number of records in the filtered set.
    pub total_records: u64,
}

/// Reduce a filtered set to its totals.
///
/// The discount is derived from the two sums — `max(0, Σ total_amount −
/// Σ final_amount)` — rather than summing per-record differences, so
/// per-record negative discounts cannot cancel the system-wide total;
/// the zero clamp guards against upstream data where the discount total
/// would come out negative.
pub fn aggregate<'a, I>(records: I) -> SalesTotals
where
    I: IntoIterator<Item = &'a SalesRecord>,
{
    let mut total_units = 0i64;
    let mut total_amount = 0f64;
    let mut gross_amount = 0f64;
    let mut total_records = 0u64;

    for record in records {
        total_units += record.quantity;
        total_amount += record.final_amount;
        gross_amount += record.total_amount;
        total_records += 1;
    }

    SalesTotals {
        total_units,
        total_amount,
        total_discount: (gross_amount - total_amount).max(0.0),
        total_records,
    }
}
