//! Shared dataset builder for the integration suites.
//!
//! One deterministic dataset covering every filterable dimension: multiple
//! regions, genders, categories and payment methods, overlapping tags,
//! repeated quantities and dates (for stability checks), a dateless record,
//! and one record that violates the `final <= total` amount invariant.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod fixtures;
//! use fixtures::*;
//! ```

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use salesdash::prelude::*;
use std::collections::BTreeSet;

/// Build one record; `day` is a day-of-month in June 2023, 0 meaning "no
/// date".
pub fn record(
    name: &str,
    phone: &str,
    region: &str,
    gender: &str,
    age: i64,
    category: &str,
    payment: &str,
    tags: &str,
    quantity: i64,
    total: f64,
    final_amount: f64,
    day: u32,
) -> SalesRecord {
    let tags: BTreeSet<String> = tags
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();

    SalesRecord {
        date: (day > 0).then(|| Utc.with_ymd_and_hms(2023, 6, day, 12, 0, 0).unwrap()),
        customer_name: name.to_string(),
        phone_number: phone.to_string(),
        region: region.to_string(),
        gender: gender.to_string(),
        age,
        product_category: category.to_string(),
        product_name: format!("{category} item"),
        quantity,
        price_per_unit: if quantity > 0 { total / quantity as f64 } else { 0.0 },
        discount_percentage: if total > 0.0 { 100.0 * (total - final_amount) / total } else { 0.0 },
        total_amount: total,
        final_amount,
        payment_method: payment.to_string(),
        tags,
        order_status: "Delivered".to_string(),
    }
}

/// The standard ten-record dataset.
pub fn sample_records() -> Vec<SalesRecord> {
    vec![
        record("Asha Rao", "555-0101", "North", "Female", 34, "Electronics", "Card", "Clearance Sale, Popular", 3, 150.0, 135.0, 1),
        record("Meera Iyer", "555-0102", "South", "Female", 41, "Home", "UPI", "Premium", 5, 100.0, 100.0, 2),
        record("Dev Kumar", "555-0103", "North", "Male", 28, "Electronics", "Cash", "Popular", 5, 60.0, 54.0, 3),
        record("Zoya Khan", "555-0104", "East", "Female", 22, "Fashion", "Card", "New Arrival", 1, 80.0, 72.0, 3),
        record("Rahul Nair", "555-0105", "West", "Male", 55, "Home", "Card", "Clearance Sale", 2, 40.0, 30.0, 5),
        record("Irene D'Souza", "555-0106", "South", "Female", 37, "Fashion", "UPI", "Premium, Popular", 4, 200.0, 180.0, 8),
        record("Vikram Shah", "555-0107", "North", "Male", 45, "Grocery", "Cash", "", 7, 35.0, 35.0, 12),
        record("Leela Menon", "555-0108", "East", "Female", 30, "Grocery", "UPI", "Popular", 5, 50.0, 45.0, 12),
        // Dateless: excluded by any active date-range constraint.
        record("Omar Ali", "555-0109", "West", "Male", 63, "Electronics", "Card", "Refurb", 2, 120.0, 96.0, 0),
        // Violates final <= total; the aggregator's clamp rule covers it.
        record("Tara Bose", "555-0110", "South", "Female", 29, "Fashion", "Cash", "New Arrival, Sale", 1, 45.0, 50.0, 20),
    ]
}

/// Executor over the standard dataset.
pub fn sample_executor() -> QueryExecutor {
    QueryExecutor::new(std::sync::Arc::new(InMemorySalesStore::new(sample_records())))
}
