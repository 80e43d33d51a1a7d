//! Canonical filter specification and its lenient normalizer.
//!
//! `FilterSpec` is the validated form of the raw request filters. Absence of
//! a field means "no constraint"; an empty list never survives normalization
//! as "match nothing". Malformed scalar bounds are dropped silently rather
//! than failing the request — the deliberate lenient policy of this engine,
//! mirrored by the ingestion boundary's lenient coercion.

use crate::core::params::QueryParams;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Inclusive age bounds. Either side may be open.
///
/// A range with `min > max` is kept as-is: it simply matches nothing, which
/// is a valid (empty) result set, not an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

/// Inclusive date bounds. The end bound covers its whole day.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// The first instant covered by the range: `start` at 00:00:00 UTC.
    pub fn start_instant(&self) -> Option<DateTime<Utc>> {
        self.start.map(|d| d.and_time(chrono::NaiveTime::MIN).and_utc())
    }

    /// The last instant covered by the range: `end` at 23:59:59.999 UTC.
    pub fn end_instant(&self) -> Option<DateTime<Utc>> {
        self.end
            .and_then(|d| d.and_hms_milli_opt(23, 59, 59, 999))
            .map(|dt| dt.and_utc())
    }
}

/// Normalized, optional-field specification of all active filter constraints
/// for one query.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSpec {
    /// Exact-membership region filter.
    pub regions: Option<BTreeSet<String>>,

    /// Exact-membership gender filter.
    pub genders: Option<BTreeSet<String>>,

    /// Exact-membership product-category filter.
    pub categories: Option<BTreeSet<String>>,

    /// Exact-membership payment-method filter.
    pub payment_methods: Option<BTreeSet<String>>,

    /// Tag substrings, matched case-insensitively with OR semantics against
    /// the record's tag set.
    pub tags: Option<Vec<String>>,

    pub age_range: Option<AgeRange>,

    pub date_range: Option<DateRange>,
}

impl FilterSpec {
    /// Normalize raw request parameters into a canonical spec.
    ///
    /// The lenient policy of this layer:
    /// - a list-valued filter is included only when at least one non-empty
    ///   value is present; an empty list is "absent", not "match nothing";
    /// - a numeric bound is included only when present, non-empty and
    ///   parsable as an integer — otherwise it is dropped silently;
    /// - a date bound (`YYYY-MM-DD`) is dropped silently when unparsable,
    ///   uniformly with the numeric bounds;
    /// - a range key is included only when at least one bound survived.
    ///
    /// No input, however malformed, makes this fail.
    pub fn from_params(params: &QueryParams) -> Self {
        let age_range = {
            let min = int_bound(params.age_min.as_deref());
            let max = int_bound(params.age_max.as_deref());
            (min.is_some() || max.is_some()).then_some(AgeRange { min, max })
        };

        let date_range = {
            let start = date_bound(params.date_start.as_deref());
            let end = date_bound(params.date_end.as_deref());
            (start.is_some() || end.is_some()).then_some(DateRange { start, end })
        };

        Self {
            regions: membership(&params.regions),
            genders: membership(&params.genders),
            categories: membership(&params.categories),
            payment_methods: membership(&params.payment_methods),
            tags: tag_list(&params.tags),
            age_range,
            date_range,
        }
    }

    /// True when no constraint is active — every record matches.
    pub fn is_unconstrained(&self) -> bool {
        self.regions.is_none()
            && self.genders.is_none()
            && self.categories.is_none()
            && self.payment_methods.is_none()
            && self.tags.is_none()
            && self.age_range.is_none()
            && self.date_range.is_none()
    }
}

/// Collect the non-empty values of a list filter, or `None` when nothing
/// survives.
fn membership(values: &[String]) -> Option<BTreeSet<String>> {
    let set: BTreeSet<String> = values.iter().filter(|v| !v.is_empty()).cloned().collect();
    (!set.is_empty()).then_some(set)
}

/// Tag filters keep their request order (they are substring patterns, not a
/// membership set).
fn tag_list(values: &[String]) -> Option<Vec<String>> {
    let tags: Vec<String> = values.iter().filter(|v| !v.is_empty()).cloned().collect();
    (!tags.is_empty()).then_some(tags)
}

fn int_bound(raw: Option<&str>) -> Option<i64> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse::<i64>().ok())
}

fn date_bound(raw: Option<&str>) -> Option<NaiveDate> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
}
