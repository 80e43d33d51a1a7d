//! Ingestion boundary: lenient coercion of raw source rows into records.
//!
//! The engine itself never coerces types — by the time a [`SalesRecord`]
//! reaches the filter/sort/aggregate core it is fully normalized. This
//! module is where that normalization happens, as an explicit, named policy:
//! **lenient coercion**. A value that does not parse becomes the field's
//! zero value (or `None` for the date) instead of failing the row. The same
//! spirit governs the request normalizers in [`crate::core::filter`].
//!
//! Reading the CSV (or any other source) off disk is a collaborator concern;
//! this module only turns one already-parsed row of raw strings into a
//! record.

use crate::core::record::SalesRecord;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::collections::{BTreeSet, HashMap};

// Column headers of the source dataset.
pub const COL_DATE: &str = "Date";
pub const COL_CUSTOMER_NAME: &str = "Customer Name";
pub const COL_PHONE_NUMBER: &str = "Phone Number";
pub const COL_REGION: &str = "Customer Region";
pub const COL_GENDER: &str = "Gender";
pub const COL_AGE: &str = "Age";
pub const COL_PRODUCT_CATEGORY: &str = "Product Category";
pub const COL_PRODUCT_NAME: &str = "Product Name";
pub const COL_QUANTITY: &str = "Quantity";
pub const COL_PRICE_PER_UNIT: &str = "Price per Unit";
pub const COL_DISCOUNT_PERCENTAGE: &str = "Discount Percentage";
pub const COL_TOTAL_AMOUNT: &str = "Total Amount";
pub const COL_FINAL_AMOUNT: &str = "Final Amount";
pub const COL_PAYMENT_METHOD: &str = "Payment Method";
pub const COL_TAGS: &str = "Tags";
pub const COL_ORDER_STATUS: &str = "Order Status";

/// Convert one raw row (header → raw string value) into a record.
///
/// Missing columns behave exactly like unparsable values: lenient coercion
/// to the zero value. This function cannot fail.
pub fn record_from_row(row: &HashMap<String, String>) -> SalesRecord {
    let get = |column: &str| row.get(column).map(String::as_str).unwrap_or("");

    SalesRecord {
        date: lenient_date(get(COL_DATE)),
        customer_name: get(COL_CUSTOMER_NAME).to_string(),
        phone_number: get(COL_PHONE_NUMBER).to_string(),
        region: get(COL_REGION).to_string(),
        gender: get(COL_GENDER).to_string(),
        age: lenient_int(get(COL_AGE)),
        product_category: get(COL_PRODUCT_CATEGORY).to_string(),
        product_name: get(COL_PRODUCT_NAME).to_string(),
        quantity: lenient_int(get(COL_QUANTITY)),
        price_per_unit: lenient_float(get(COL_PRICE_PER_UNIT)),
        discount_percentage: lenient_float(get(COL_DISCOUNT_PERCENTAGE)),
        total_amount: lenient_float(get(COL_TOTAL_AMOUNT)),
        final_amount: lenient_float(get(COL_FINAL_AMOUNT)),
        payment_method: get(COL_PAYMENT_METHOD).to_string(),
        tags: split_tags(get(COL_TAGS)),
        order_status: get(COL_ORDER_STATUS).to_string(),
    }
}

/// Lenient integer coercion: parse as integer, fall back to truncating a
/// float form (`"42.0"`), fall back to 0.
pub fn lenient_int(raw: &str) -> i64 {
    let raw = raw.trim();
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().map(|f| f as i64))
        .unwrap_or(0)
}

/// Lenient float coercion: parse or 0.0.
pub fn lenient_float(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}

/// Lenient date coercion. Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`,
/// `YYYY-MM-DDTHH:MM:SS` and bare `YYYY-MM-DD` (midnight UTC); anything
/// else becomes `None`.
pub fn lenient_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt.and_utc());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

/// Split a comma-separated tag field into a trimmed set, discarding empties.
pub fn split_tags(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Convenience: coerce a whole batch of rows.
pub fn records_from_rows<'a, I>(rows: I) -> Vec<SalesRecord>
where
    I: IntoIterator<Item = &'a HashMap<String, String>>,
{
    rows.into_iter().map(record_from_row).collect()
}
