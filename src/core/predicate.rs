//! The reference predicate deciding record inclusion.
//!
//! [`matches`] is the single source of semantic truth for filtering: any
//! pushdown translation (see [`crate::storage::mongodb`]) must produce
//! results identical to running this predicate over every record.

use crate::core::filter::FilterSpec;
use crate::core::record::SalesRecord;

/// Decide whether `record` satisfies every active constraint.
///
/// All constraints are independent and ANDed. Evaluation order is fixed for
/// deterministic short-circuit cost: search, membership sets, age range,
/// tags, date range.
pub fn matches(record: &SalesRecord, filter: &FilterSpec, search: &str) -> bool {
    // Search: case-insensitive substring of customer name OR phone number.
    let term = search.trim();
    if !term.is_empty() {
        let needle = term.to_lowercase();
        if !record.customer_name.to_lowercase().contains(&needle)
            && !record.phone_number.to_lowercase().contains(&needle)
        {
            return false;
        }
    }

    // Exact membership sets.
    if let Some(regions) = &filter.regions
        && !regions.contains(&record.region)
    {
        return false;
    }
    if let Some(genders) = &filter.genders
        && !genders.contains(&record.gender)
    {
        return false;
    }
    if let Some(categories) = &filter.categories
        && !categories.contains(&record.product_category)
    {
        return false;
    }
    if let Some(methods) = &filter.payment_methods
        && !methods.contains(&record.payment_method)
    {
        return false;
    }

    // Age range, inclusive both ends. min > max matches nothing.
    if let Some(range) = &filter.age_range {
        if range.min.is_some_and(|min| record.age < min) {
            return false;
        }
        if range.max.is_some_and(|max| record.age > max) {
            return false;
        }
    }

    // Tags: ANY filter tag is a case-insensitive substring of ANY record tag.
    if let Some(wanted_tags) = &filter.tags {
        let record_tags: Vec<String> = record.tags.iter().map(|t| t.to_lowercase()).collect();
        let hit = wanted_tags.iter().any(|wanted| {
            let wanted = wanted.to_lowercase();
            record_tags.iter().any(|tag| tag.contains(&wanted))
        });
        if !hit {
            return false;
        }
    }

    // Date range. A record without a date never matches an active range.
    if let Some(range) = &filter.date_range {
        let Some(date) = record.date else {
            return false;
        };
        if let Some(start) = range.start_instant()
            && date < start
        {
            return false;
        }
        if let Some(end) = range.end_instant()
            && date > end
        {
            return false;
        }
    }

    true
}
