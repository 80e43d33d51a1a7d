//! In-memory implementation of `SalesStore`.
//!
//! Holds one immutable snapshot of the dataset, fixed at construction.
//! Because the snapshot never changes, one `execute` call filters it once
//! into a materialized sequence and derives count, sorted page slice and
//! totals from that same sequence — the three results are consistent by
//! construction. Reloading data means building a new store.
//!
//! Concurrent queries share the snapshot read-only via `Arc` and need no
//! coordination.

use crate::core::error::StoreError;
use crate::core::predicate::matches;
use crate::core::record::SalesRecord;
use crate::core::sort::sort_records;
use crate::core::stats::aggregate;
use crate::query::SalesQuery;
use crate::storage::{AgeBounds, DateBounds, FilterOptions, SalesStore, StoreHealth, StoreResult};
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;

/// In-memory sales store over an immutable record snapshot.
#[derive(Clone)]
pub struct InMemorySalesStore {
    records: Arc<[SalesRecord]>,
}

impl InMemorySalesStore {
    /// Build a store over `records`. The order given here is the tie-break
    /// order stable sorting preserves.
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self { records: records.into() }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl SalesStore for InMemorySalesStore {
    fn backend_name(&self) -> &'static str {
        "in-memory"
    }

    async fn execute(&self, query: &SalesQuery) -> Result<StoreResult, StoreError> {
        // Filter once; everything below derives from this one sequence.
        let mut matched: Vec<SalesRecord> = self
            .records
            .iter()
            .filter(|record| matches(record, &query.filter, &query.search))
            .cloned()
            .collect();

        let total_items = matched.len() as u64;
        let totals = aggregate(&matched);

        sort_records(&mut matched, &query.sort);

        let window = query.page.window();
        let records: Vec<SalesRecord> = matched
            .into_iter()
            .skip(window.skip as usize)
            .take(window.limit as usize)
            .collect();

        Ok(StoreResult { total_items, records, totals: Ok(totals) })
    }

    async fn filter_options(&self) -> Result<FilterOptions, StoreError> {
        let mut regions = BTreeSet::new();
        let mut genders = BTreeSet::new();
        let mut categories = BTreeSet::new();
        let mut tags = BTreeSet::new();
        let mut payment_methods = BTreeSet::new();
        let mut age_bounds: Option<AgeBounds> = None;
        let mut date_bounds = DateBounds::default();

        for record in self.records.iter() {
            if !record.region.is_empty() {
                regions.insert(record.region.clone());
            }
            if !record.gender.is_empty() {
                genders.insert(record.gender.clone());
            }
            if !record.product_category.is_empty() {
                categories.insert(record.product_category.clone());
            }
            if !record.payment_method.is_empty() {
                payment_methods.insert(record.payment_method.clone());
            }
            tags.extend(record.tags.iter().cloned());

            age_bounds = Some(match age_bounds {
                Some(bounds) => AgeBounds {
                    min: bounds.min.min(record.age),
                    max: bounds.max.max(record.age),
                },
                None => AgeBounds { min: record.age, max: record.age },
            });

            if let Some(date) = record.date.map(|d| d.date_naive()) {
                date_bounds.min = Some(date_bounds.min.map_or(date, |d| d.min(date)));
                date_bounds.max = Some(date_bounds.max.map_or(date, |d| d.max(date)));
            }
        }

        Ok(FilterOptions {
            regions: regions.into_iter().collect(),
            genders: genders.into_iter().collect(),
            categories: categories.into_iter().collect(),
            tags: tags.into_iter().collect(),
            payment_methods: payment_methods.into_iter().collect(),
            age_range: age_bounds.unwrap_or_default(),
            date_range: date_bounds,
        })
    }

    async fn health(&self) -> Result<StoreHealth, StoreError> {
        Ok(StoreHealth { records: self.records.len() as u64 })
    }
}
