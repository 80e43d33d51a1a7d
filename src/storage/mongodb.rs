//! MongoDB storage backend using the official MongoDB async driver.
//!
//! Provides [`MongoSalesStore`], a pushdown implementation of
//! [`SalesStore`] backed by one collection of sales documents.
//!
//! # Feature flag
//!
//! This module is gated behind the `mongodb_backend` feature flag:
//! ```toml
//! [dependencies]
//! salesdash = { version = "0.1", features = ["mongodb_backend"] }
//! ```
//!
//! # Pushdown contract
//!
//! [`build_filter`] translates a [`FilterSpec`] plus search term into a
//! native filter document. The reference semantics are
//! [`crate::core::predicate::matches`]; the translation must select exactly
//! the documents that predicate would — the integration suite checks the
//! two backends against each other. All independent constraint groups are
//! combined with `$and` (the search `$or` group and the tag `$or` group
//! stay separate groups).
//!
//! # Serialization strategy
//!
//! Records are serialized via `serde_json::Value` as an intermediate format,
//! then converted to BSON documents. The `date` field is lifted from its
//! RFC 3339 string form to a native BSON datetime so range predicates and
//! sorts are chronological rather than lexical; it is lowered back on read.
//! MongoDB's generated `_id` is dropped on read.
//!
//! # Consistency
//!
//! One `execute` issues count, find and aggregate as three server
//! operations, concurrently for latency. MongoDB offers no snapshot
//! isolation across them here, so under concurrent writes the three
//! sub-results may observe different data versions. That staleness window
//! is an explicit, accepted tradeoff of this backend — callers needing a
//! hard guarantee should query the in-memory store over a fixed snapshot.

use crate::config::MongoConfig;
use crate::core::error::StoreError;
use crate::core::filter::FilterSpec;
use crate::core::record::SalesRecord;
use crate::core::sort::{SortKey, SortSpec};
use crate::core::stats::SalesTotals;
use crate::query::SalesQuery;
use crate::storage::{AgeBounds, DateBounds, FilterOptions, SalesStore, StoreHealth, StoreResult};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::options::{Collation, CollationStrength};
use mongodb::{Client, Database, IndexModel};

const BACKEND: &str = "mongodb";

/// Default collection name for sales documents.
pub const DEFAULT_COLLECTION: &str = "sales";

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Convert a record into a BSON document, lifting `date` to a native BSON
/// datetime.
fn record_to_document(record: &SalesRecord) -> Result<Document, StoreError> {
    let json = serde_json::to_value(record)
        .map_err(|e| StoreError::decode(BACKEND, format!("failed to serialize record: {e}")))?;
    let bson_val = mongodb::bson::to_bson(&json)
        .map_err(|e| StoreError::decode(BACKEND, format!("failed to convert to BSON: {e}")))?;

    let mut document = match bson_val {
        Bson::Document(d) => d,
        _ => return Err(StoreError::decode(BACKEND, "expected a BSON document")),
    };

    if let Some(Bson::String(raw)) = document.get("date").cloned() {
        let parsed = DateTime::parse_from_rfc3339(&raw).map_err(|e| {
            StoreError::decode(BACKEND, format!("record date '{raw}' is not RFC 3339: {e}"))
        })?;
        document.insert(
            "date",
            Bson::DateTime(mongodb::bson::DateTime::from_millis(
                parsed.with_timezone(&Utc).timestamp_millis(),
            )),
        );
    }

    Ok(document)
}

/// Convert a stored document back into a record, lowering the BSON datetime
/// and dropping MongoDB's `_id`.
fn document_to_record(mut document: Document) -> Result<SalesRecord, StoreError> {
    document.remove("_id");

    if let Some(Bson::DateTime(dt)) = document.get("date").cloned() {
        let lowered = DateTime::from_timestamp_millis(dt.timestamp_millis())
            .ok_or_else(|| StoreError::decode(BACKEND, "stored date is out of range"))?;
        document.insert("date", Bson::String(lowered.to_rfc3339()));
    }

    let json = Bson::Document(document).into_relaxed_extjson();
    serde_json::from_value(json)
        .map_err(|e| StoreError::decode(BACKEND, format!("failed to deserialize record: {e}")))
}

fn bson_datetime(instant: DateTime<Utc>) -> Bson {
    Bson::DateTime(mongodb::bson::DateTime::from_millis(
        instant.timestamp_millis(),
    ))
}

/// Read a numeric BSON field as f64, accepting any numeric representation
/// the server may choose for a sum.
fn numeric_f64(document: &Document, key: &str) -> Option<f64> {
    match document.get(key) {
        Some(Bson::Double(v)) => Some(*v),
        Some(Bson::Int32(v)) => Some(f64::from(*v)),
        Some(Bson::Int64(v)) => Some(*v as f64),
        _ => None,
    }
}

fn numeric_i64(document: &Document, key: &str) -> Option<i64> {
    match document.get(key) {
        Some(Bson::Int32(v)) => Some(i64::from(*v)),
        Some(Bson::Int64(v)) => Some(*v),
        Some(Bson::Double(v)) => Some(*v as i64),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Query translation
// ---------------------------------------------------------------------------

/// Translate a filter spec plus search term into a native filter document.
///
/// Mirrors the reference predicate exactly: every constraint group is
/// independent and ANDed; search and tag groups each OR internally. User
/// input inside `$regex` patterns is escaped — the dashboard's terms are
/// substrings, never patterns.
pub fn build_filter(filter: &FilterSpec, search: &str) -> Document {
    let mut clauses: Vec<Document> = Vec::new();

    let term = search.trim();
    if !term.is_empty() {
        let pattern = regex::escape(term);
        clauses.push(doc! {
            "$or": [
                { "customerName": { "$regex": pattern.as_str(), "$options": "i" } },
                { "phoneNumber": { "$regex": pattern.as_str(), "$options": "i" } },
            ]
        });
    }

    for (field, values) in [
        ("region", &filter.regions),
        ("gender", &filter.genders),
        ("productCategory", &filter.categories),
        ("paymentMethod", &filter.payment_methods),
    ] {
        if let Some(values) = values {
            let values: Vec<String> = values.iter().cloned().collect();
            let mut clause = Document::new();
            clause.insert(field, doc! { "$in": values });
            clauses.push(clause);
        }
    }

    if let Some(range) = &filter.age_range {
        let mut bounds = Document::new();
        if let Some(min) = range.min {
            bounds.insert("$gte", min);
        }
        if let Some(max) = range.max {
            bounds.insert("$lte", max);
        }
        if !bounds.is_empty() {
            clauses.push(doc! { "age": bounds });
        }
    }

    if let Some(tags) = &filter.tags {
        let tag_clauses: Vec<Document> = tags
            .iter()
            .map(|tag| {
                doc! { "tags": { "$elemMatch": {
                    "$regex": regex::escape(tag),
                    "$options": "i",
                } } }
            })
            .collect();
        clauses.push(doc! { "$or": tag_clauses });
    }

    if let Some(range) = &filter.date_range {
        let mut bounds = Document::new();
        if let Some(start) = range.start_instant() {
            bounds.insert("$gte", bson_datetime(start));
        }
        if let Some(end) = range.end_instant() {
            bounds.insert("$lte", bson_datetime(end));
        }
        if !bounds.is_empty() {
            // A null date never satisfies a range comparison, matching the
            // reference predicate's treatment of dateless records.
            clauses.push(doc! { "date": bounds });
        }
    }

    match clauses.len() {
        0 => Document::new(),
        1 => clauses.remove(0),
        _ => doc! { "$and": clauses },
    }
}

/// Translate the sort spec into a sort document.
///
/// `_id` is appended as a tiebreaker so pages of equal keys stay
/// deterministic; for sequentially inserted data it approximates the
/// stable input order the in-memory comparator preserves.
pub fn build_sort(spec: &SortSpec) -> Document {
    let direction = match spec.direction {
        crate::core::sort::SortDirection::Asc => 1,
        crate::core::sort::SortDirection::Desc => -1,
    };
    let mut sort = Document::new();
    sort.insert(spec.key.as_str(), direction);
    sort.insert("_id", 1);
    sort
}

// ---------------------------------------------------------------------------
// MongoSalesStore
// ---------------------------------------------------------------------------

/// Sales store backed by one MongoDB collection.
///
/// # Example
///
/// ```rust,ignore
/// use mongodb::Client;
/// use salesdash::storage::MongoSalesStore;
///
/// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
/// let store = MongoSalesStore::new(client.database("salesdash"));
/// store.ensure_indexes().await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoSalesStore {
    database: Database,
    collection: String,
}

impl MongoSalesStore {
    /// Create a store over the default `sales` collection.
    pub fn new(database: Database) -> Self {
        Self::with_collection(database, DEFAULT_COLLECTION)
    }

    /// Create a store over a specific collection.
    pub fn with_collection(database: Database, collection: impl Into<String>) -> Self {
        Self { database, collection: collection.into() }
    }

    /// Connect using configuration. Connection failures surface as the
    /// distinct unavailability error, never as empty results.
    pub async fn connect(config: &MongoConfig) -> Result<Self, StoreError> {
        let client = Client::with_uri_str(&config.uri)
            .await
            .map_err(|e| StoreError::unavailable(BACKEND, e))?;
        Ok(Self::with_collection(
            client.database(&config.database),
            config.collection.clone(),
        ))
    }

    /// Get a reference to the underlying database.
    pub fn database(&self) -> &Database {
        &self.database
    }

    fn collection(&self) -> mongodb::Collection<Document> {
        self.database.collection(&self.collection)
    }

    /// Create the query-supporting indexes. Idempotent — safe to call on
    /// every startup.
    pub async fn ensure_indexes(&self) -> Result<(), StoreError> {
        let indexes = vec![
            IndexModel::builder().keys(doc! { "region": 1 }).build(),
            IndexModel::builder().keys(doc! { "gender": 1 }).build(),
            IndexModel::builder().keys(doc! { "age": 1 }).build(),
            IndexModel::builder()
                .keys(doc! { "productCategory": 1 })
                .build(),
            IndexModel::builder()
                .keys(doc! { "paymentMethod": 1 })
                .build(),
            IndexModel::builder().keys(doc! { "date": -1 }).build(),
            IndexModel::builder().keys(doc! { "quantity": 1 }).build(),
        ];

        self.collection()
            .create_indexes(indexes)
            .await
            .map_err(|e| StoreError::operation(BACKEND, "create_indexes", e))?;

        Ok(())
    }

    /// Seed records into the collection, returning how many were inserted.
    ///
    /// This is the ingestion companion (datasets are loaded once, then
    /// queried); the engine itself has no write path.
    pub async fn insert_records(&self, records: &[SalesRecord]) -> Result<u64, StoreError> {
        if records.is_empty() {
            return Ok(0);
        }

        let documents: Vec<Document> = records
            .iter()
            .map(record_to_document)
            .collect::<Result<_, _>>()?;

        let result = self
            .collection()
            .insert_many(documents)
            .await
            .map_err(|e| StoreError::operation(BACKEND, "insert", e))?;

        Ok(result.inserted_ids.len() as u64)
    }

    async fn count(&self, filter: Document) -> Result<u64, StoreError> {
        self.collection()
            .count_documents(filter)
            .await
            .map_err(|e| StoreError::operation(BACKEND, "count", e))
    }

    async fn find_page(
        &self,
        filter: Document,
        query: &SalesQuery,
    ) -> Result<Vec<SalesRecord>, StoreError> {
        let window = query.page.window();
        let collection = self.collection();
        let mut find = collection
            .find(filter)
            .sort(build_sort(&query.sort))
            .skip(window.skip)
            .limit(window.limit.min(i64::MAX as u64) as i64);

        // The comparator's name ordering is case-insensitive; a strength-2
        // collation makes the server sort match it.
        if query.sort.key == SortKey::CustomerName {
            find = find.collation(
                Collation::builder()
                    .locale("en".to_string())
                    .strength(CollationStrength::Secondary)
                    .build(),
            );
        }

        let cursor = find
            .await
            .map_err(|e| StoreError::operation(BACKEND, "find", e))?;

        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::operation(BACKEND, "find", e))?;

        documents.into_iter().map(document_to_record).collect()
    }

    async fn aggregate_totals(&self, filter: Document) -> Result<SalesTotals, StoreError> {
        let pipeline = vec![
            doc! { "$match": filter },
            doc! { "$group": {
                "_id": Bson::Null,
                "totalUnits": { "$sum": "$quantity" },
                "totalAmount": { "$sum": "$finalAmount" },
                "grossAmount": { "$sum": "$totalAmount" },
                "totalRecords": { "$sum": 1 },
            }},
        ];

        let cursor = self
            .collection()
            .aggregate(pipeline)
            .await
            .map_err(|e| StoreError::operation(BACKEND, "aggregate", e))?;

        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::operation(BACKEND, "aggregate", e))?;

        let Some(group) = documents.first() else {
            // Empty filtered set: no group document is produced.
            return Ok(SalesTotals::default());
        };

        let total_units = numeric_i64(group, "totalUnits")
            .ok_or_else(|| StoreError::decode(BACKEND, "aggregate missing totalUnits"))?;
        let total_amount = numeric_f64(group, "totalAmount")
            .ok_or_else(|| StoreError::decode(BACKEND, "aggregate missing totalAmount"))?;
        let gross_amount = numeric_f64(group, "grossAmount")
            .ok_or_else(|| StoreError::decode(BACKEND, "aggregate missing grossAmount"))?;
        let total_records = numeric_i64(group, "totalRecords")
            .ok_or_else(|| StoreError::decode(BACKEND, "aggregate missing totalRecords"))?;

        Ok(SalesTotals {
            total_units,
            total_amount,
            // Derived from the two sums, clamped at zero — same rule as the
            // in-memory aggregator.
            total_discount: (gross_amount - total_amount).max(0.0),
            total_records: total_records.max(0) as u64,
        })
    }

    async fn distinct_strings(&self, field: &str) -> Result<Vec<String>, StoreError> {
        let values = self
            .collection()
            .distinct(field, doc! {})
            .await
            .map_err(|e| StoreError::operation(BACKEND, "distinct", e))?;

        let mut strings: Vec<String> = values
            .into_iter()
            .filter_map(|v| match v {
                Bson::String(s) if !s.is_empty() => Some(s),
                _ => None,
            })
            .collect();
        strings.sort();
        strings.dedup();
        Ok(strings)
    }

    async fn age_bounds(&self) -> Result<AgeBounds, StoreError> {
        let pipeline = vec![doc! { "$group": {
            "_id": Bson::Null,
            "min": { "$min": "$age" },
            "max": { "$max": "$age" },
        }}];

        let cursor = self
            .collection()
            .aggregate(pipeline)
            .await
            .map_err(|e| StoreError::operation(BACKEND, "aggregate", e))?;
        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::operation(BACKEND, "aggregate", e))?;

        Ok(documents
            .first()
            .and_then(|group| {
                Some(AgeBounds {
                    min: numeric_i64(group, "min")?,
                    max: numeric_i64(group, "max")?,
                })
            })
            .unwrap_or_default())
    }

    async fn date_bounds(&self) -> Result<DateBounds, StoreError> {
        let pipeline = vec![
            doc! { "$match": { "date": { "$ne": Bson::Null } } },
            doc! { "$group": {
                "_id": Bson::Null,
                "min": { "$min": "$date" },
                "max": { "$max": "$date" },
            }},
        ];

        let cursor = self
            .collection()
            .aggregate(pipeline)
            .await
            .map_err(|e| StoreError::operation(BACKEND, "aggregate", e))?;
        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::operation(BACKEND, "aggregate", e))?;

        let to_date = |bson: Option<&Bson>| -> Option<NaiveDate> {
            match bson {
                Some(Bson::DateTime(dt)) => {
                    DateTime::from_timestamp_millis(dt.timestamp_millis())
                        .map(|d| d.date_naive())
                }
                _ => None,
            }
        };

        Ok(documents
            .first()
            .map(|group| DateBounds {
                min: to_date(group.get("min")),
                max: to_date(group.get("max")),
            })
            .unwrap_or_default())
    }
}

#[async_trait]
impl SalesStore for MongoSalesStore {
    fn backend_name(&self) -> &'static str {
        BACKEND
    }

    /// Run count, find and aggregate concurrently against the translated
    /// filter. See the module docs for the consistency tradeoff.
    async fn execute(&self, query: &SalesQuery) -> Result<StoreResult, StoreError> {
        let filter = build_filter(&query.filter, &query.search);

        let (total_items, records, totals) = tokio::join!(
            self.count(filter.clone()),
            self.find_page(filter.clone(), query),
            self.aggregate_totals(filter),
        );

        Ok(StoreResult {
            total_items: total_items?,
            records: records?,
            totals,
        })
    }

    async fn filter_options(&self) -> Result<FilterOptions, StoreError> {
        let (regions, genders, categories, payment_methods, tags) = tokio::try_join!(
            self.distinct_strings("region"),
            self.distinct_strings("gender"),
            self.distinct_strings("productCategory"),
            self.distinct_strings("paymentMethod"),
            // distinct over an array field yields the distinct elements.
            self.distinct_strings("tags"),
        )?;

        let (age_range, date_range) = tokio::try_join!(self.age_bounds(), self.date_bounds())?;

        Ok(FilterOptions {
            regions,
            genders,
            categories,
            tags,
            payment_methods,
            age_range,
            date_range,
        })
    }

    async fn health(&self) -> Result<StoreHealth, StoreError> {
        self.database
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| StoreError::unavailable(BACKEND, e))?;

        let records = self.count(doc! {}).await?;
        Ok(StoreHealth { records })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::{AgeRange, DateRange};
    use crate::core::sort::SortDirection;
    use chrono::TimeZone;
    use std::collections::BTreeSet;

    fn set(values: &[&str]) -> Option<BTreeSet<String>> {
        Some(values.iter().map(|v| v.to_string()).collect())
    }

    // -----------------------------------------------------------------------
    // build_filter
    // -----------------------------------------------------------------------

    #[test]
    fn test_empty_query_builds_empty_filter() {
        let filter = build_filter(&FilterSpec::default(), "");
        assert!(filter.is_empty());
    }

    #[test]
    fn test_search_builds_escaped_or_group() {
        let filter = build_filter(&FilterSpec::default(), "a+b");
        let or = filter.get_array("$or").expect("search should be an $or");
        assert_eq!(or.len(), 2);

        // The '+' must be escaped — search terms are substrings, not patterns.
        let name_clause = or[0].as_document().unwrap();
        let regex = name_clause
            .get_document("customerName")
            .unwrap()
            .get_str("$regex")
            .unwrap();
        assert_eq!(regex, r"a\+b");
    }

    #[test]
    fn test_membership_becomes_in_clause() {
        let spec = FilterSpec { regions: set(&["North", "South"]), ..FilterSpec::default() };
        let filter = build_filter(&spec, "");
        let values = filter
            .get_document("region")
            .unwrap()
            .get_array("$in")
            .unwrap();
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn test_independent_groups_are_anded() {
        let spec = FilterSpec {
            tags: Some(vec!["sale".to_string()]),
            regions: set(&["North"]),
            ..FilterSpec::default()
        };
        let filter = build_filter(&spec, "rao");

        // Search group, region clause and tag group: three ANDed clauses.
        let and = filter.get_array("$and").expect("groups should be $and-ed");
        assert_eq!(and.len(), 3);
    }

    #[test]
    fn test_age_range_bounds_inclusive() {
        let spec = FilterSpec {
            age_range: Some(AgeRange { min: Some(20), max: Some(30) }),
            ..FilterSpec::default()
        };
        let filter = build_filter(&spec, "");
        let age = filter.get_document("age").unwrap();
        assert_eq!(age.get_i64("$gte").unwrap(), 20);
        assert_eq!(age.get_i64("$lte").unwrap(), 30);
    }

    #[test]
    fn test_date_range_uses_native_datetimes_covering_end_of_day() {
        let spec = FilterSpec {
            date_range: Some(DateRange {
                start: NaiveDate::from_ymd_opt(2023, 6, 1),
                end: NaiveDate::from_ymd_opt(2023, 6, 30),
            }),
            ..FilterSpec::default()
        };
        let filter = build_filter(&spec, "");
        let date = filter.get_document("date").unwrap();

        let start = date.get_datetime("$gte").unwrap().timestamp_millis();
        let end = date.get_datetime("$lte").unwrap().timestamp_millis();
        let expected_start = Utc
            .with_ymd_and_hms(2023, 6, 1, 0, 0, 0)
            .unwrap()
            .timestamp_millis();
        assert_eq!(start, expected_start);
        // End of 2023-06-30: 23:59:59.999.
        let expected_end = Utc
            .with_ymd_and_hms(2023, 6, 30, 23, 59, 59)
            .unwrap()
            .timestamp_millis()
            + 999;
        assert_eq!(end, expected_end);
    }

    #[test]
    fn test_tag_group_ors_elem_match_regexes() {
        let spec = FilterSpec {
            tags: Some(vec!["sale".to_string(), "new".to_string()]),
            ..FilterSpec::default()
        };
        let filter = build_filter(&spec, "");
        let or = filter.get_array("$or").unwrap();
        assert_eq!(or.len(), 2);

        let elem = or[0]
            .as_document()
            .unwrap()
            .get_document("tags")
            .unwrap()
            .get_document("$elemMatch")
            .unwrap();
        assert_eq!(elem.get_str("$regex").unwrap(), "sale");
        assert_eq!(elem.get_str("$options").unwrap(), "i");
    }

    // -----------------------------------------------------------------------
    // build_sort
    // -----------------------------------------------------------------------

    #[test]
    fn test_sort_directions_and_tiebreaker() {
        let sort = build_sort(&SortSpec::default());
        assert_eq!(sort.get_i32("date").unwrap(), -1);
        assert_eq!(sort.get_i32("_id").unwrap(), 1);

        let sort = build_sort(&SortSpec {
            key: SortKey::Quantity,
            direction: SortDirection::Asc,
        });
        assert_eq!(sort.get_i32("quantity").unwrap(), 1);
    }

    // -----------------------------------------------------------------------
    // document conversion
    // -----------------------------------------------------------------------

    #[test]
    fn test_record_document_roundtrip() {
        let record = SalesRecord {
            date: Some(Utc.with_ymd_and_hms(2023, 6, 15, 14, 30, 0).unwrap()),
            customer_name: "Asha Rao".to_string(),
            quantity: 3,
            final_amount: 90.5,
            tags: ["Popular", "Sale"].into_iter().map(String::from).collect(),
            ..SalesRecord::default()
        };

        let document = record_to_document(&record).expect("to document");
        // Stored as a native BSON datetime, not a string.
        assert!(matches!(document.get("date"), Some(Bson::DateTime(_))));

        let back = document_to_record(document).expect("from document");
        assert_eq!(back, record);
    }

    #[test]
    fn test_dateless_record_roundtrip() {
        let record = SalesRecord { customer_name: "Meera".to_string(), ..SalesRecord::default() };
        let document = record_to_document(&record).expect("to document");
        assert_eq!(document.get("date"), Some(&Bson::Null));

        let back = document_to_record(document).expect("from document");
        assert!(back.date.is_none());
    }

    #[test]
    fn test_read_drops_generated_id() {
        let record = SalesRecord::default();
        let mut document = record_to_document(&record).expect("to document");
        document.insert("_id", "generated-by-server");

        let back = document_to_record(document).expect("from document");
        assert_eq!(back, record);
    }

    // -----------------------------------------------------------------------
    // numeric coercion
    // -----------------------------------------------------------------------

    #[test]
    fn test_numeric_helpers_accept_server_chosen_widths() {
        let group = doc! { "a": 3_i32, "b": 4_i64, "c": 5.5_f64 };
        assert_eq!(numeric_i64(&group, "a"), Some(3));
        assert_eq!(numeric_i64(&group, "b"), Some(4));
        assert_eq!(numeric_f64(&group, "c"), Some(5.5));
        assert_eq!(numeric_f64(&group, "a"), Some(3.0));
        assert_eq!(numeric_f64(&group, "missing"), None);
    }
}
