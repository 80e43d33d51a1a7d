//! Typed error handling for the query engine.
//!
//! Two layers, matching the engine's taxonomy:
//!
//! - [`StoreError`]: failures inside a storage backend, tagged with the
//!   backend and the sub-operation (`count`, `find`, `aggregate`, …) that
//!   failed.
//! - [`QueryError`]: what the executor surfaces to callers — a distinct
//!   precondition failure when the store is unreachable, a fatal store
//!   failure for count/find, or a timeout. An aggregate failure is *not*
//!   represented here: the executor degrades it to zeroed statistics
//!   instead of failing the request.
//!
//! Unparsable filter input is deliberately absent from this taxonomy: the
//! normalizers drop malformed values silently (the lenient policy), so bad
//! input never becomes an error.
//!
//! The engine never logs on the caller's behalf; these types carry enough
//! detail (operation name, underlying cause) for the caller to log and
//! report.

use std::fmt;
use std::time::Duration;

// =============================================================================
// Store Errors
// =============================================================================

/// Errors raised by a storage backend.
#[derive(Debug)]
pub enum StoreError {
    /// The backend cannot be reached at all. A precondition failure,
    /// distinct from a failure of an individual sub-operation.
    Unavailable {
        backend: String,
        message: String,
    },

    /// One sub-operation (`count`, `find`, `aggregate`, `distinct`, …)
    /// failed.
    Operation {
        backend: String,
        operation: String,
        message: String,
    },

    /// The backend returned a document the engine could not decode into a
    /// record.
    Decode {
        backend: String,
        message: String,
    },
}

impl StoreError {
    /// Tag an underlying backend failure with its sub-operation name.
    pub fn operation(backend: &str, operation: &str, err: impl fmt::Display) -> Self {
        Self::Operation {
            backend: backend.to_string(),
            operation: operation.to_string(),
            message: err.to_string(),
        }
    }

    /// Build an unavailability error for `backend`.
    pub fn unavailable(backend: &str, err: impl fmt::Display) -> Self {
        Self::Unavailable {
            backend: backend.to_string(),
            message: err.to_string(),
        }
    }

    /// Build a decode error for `backend`.
    pub fn decode(backend: &str, err: impl fmt::Display) -> Self {
        Self::Decode {
            backend: backend.to_string(),
            message: err.to_string(),
        }
    }

    /// The failed sub-operation, when this error carries one.
    pub fn operation_name(&self) -> Option<&str> {
        match self {
            Self::Operation { operation, .. } => Some(operation),
            Self::Unavailable { .. } | Self::Decode { .. } => None,
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { backend, message } => {
                write!(f, "Storage backend '{backend}' is unavailable: {message}")
            }
            Self::Operation { backend, operation, message } => {
                write!(f, "{backend} {operation} failed: {message}")
            }
            Self::Decode { backend, message } => {
                write!(f, "{backend} returned a malformed document: {message}")
            }
        }
    }
}

impl std::error::Error for StoreError {}

// =============================================================================
// Query Errors
// =============================================================================

/// Errors surfaced by the query executor.
#[derive(Debug)]
pub enum QueryError {
    /// The backing store is unreachable — a precondition failure callers
    /// typically map to "service unavailable". Never silently treated as
    /// zero results.
    Unavailable {
        backend: String,
        message: String,
    },

    /// A fatal store failure (count or find). The whole request fails; the
    /// engine does not retry internally.
    Store(StoreError),

    /// A store round-trip exceeded the caller-supplied deadline.
    Timeout {
        operation: &'static str,
        waited: Duration,
    },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { backend, message } => {
                write!(f, "Storage backend '{backend}' is unavailable: {message}")
            }
            Self::Store(err) => write!(f, "{err}"),
            Self::Timeout { operation, waited } => {
                write!(f, "{operation} timed out after {}ms", waited.as_millis())
            }
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Unavailable { .. } | Self::Timeout { .. } => None,
        }
    }
}

impl From<StoreError> for QueryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable { backend, message } => {
                Self::Unavailable { backend, message }
            }
            other => Self::Store(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_error_display_names_backend_and_operation() {
        let err = StoreError::operation("mongodb", "count", "connection reset");
        let text = err.to_string();
        assert!(text.contains("mongodb"));
        assert!(text.contains("count"));
        assert!(text.contains("connection reset"));
    }

    #[test]
    fn test_operation_name() {
        let err = StoreError::operation("mongodb", "aggregate", "boom");
        assert_eq!(err.operation_name(), Some("aggregate"));

        let err = StoreError::unavailable("mongodb", "no route to host");
        assert_eq!(err.operation_name(), None);
    }

    #[test]
    fn test_unavailable_maps_to_precondition_failure() {
        let err: QueryError = StoreError::unavailable("mongodb", "refused").into();
        assert!(matches!(err, QueryError::Unavailable { .. }));
    }

    #[test]
    fn test_other_store_errors_stay_fatal() {
        let err: QueryError = StoreError::operation("in-memory", "find", "boom").into();
        assert!(matches!(err, QueryError::Store(_)));
    }

    #[test]
    fn test_timeout_display_includes_duration() {
        let err = QueryError::Timeout {
            operation: "query",
            waited: Duration::from_millis(250),
        };
        assert!(err.to_string().contains("250ms"));
    }

    #[test]
    fn test_store_error_is_source_of_query_error() {
        use std::error::Error;
        let err = QueryError::Store(StoreError::decode("mongodb", "bad field"));
        assert!(err.source().is_some());
    }
}
