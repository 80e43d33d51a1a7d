//! Page requests, slice windows and pagination metadata.

use crate::core::params::QueryParams;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// A validated page request: `page >= 1`, `page_size >= 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: DEFAULT_PAGE, page_size: DEFAULT_PAGE_SIZE }
    }
}

impl PageRequest {
    /// Build a request, clamping both fields to at least 1.
    pub fn new(page: u64, page_size: u64) -> Self {
        Self { page: page.max(1), page_size: page_size.max(1) }
    }

    /// Resolve the request from raw parameters; unparsable or missing
    /// values fall back to the defaults (page 1, 10 per page).
    pub fn from_params(params: &QueryParams) -> Self {
        let page = params
            .page
            .as_deref()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_PAGE);
        let page_size = params
            .page_size
            .as_deref()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_PAGE_SIZE);
        Self::new(page, page_size)
    }

    /// The `(skip, limit)` slice window for this request.
    ///
    /// A window past the end of the data yields an empty page, not an error.
    pub fn window(&self) -> PageWindow {
        PageWindow {
            skip: (self.page - 1).saturating_mul(self.page_size),
            limit: self.page_size,
        }
    }
}

/// The slice of the filtered, sorted set to return.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub skip: u64,
    pub limit: u64,
}

/// Pagination metadata over the full filtered set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// Compute pagination metadata for `total_items` under `request`.
pub fn paginate(total_items: u64, request: &PageRequest) -> Pagination {
    let window = request.window();
    let total_pages = if total_items == 0 {
        0
    } else {
        total_items.div_ceil(request.page_size)
    };

    Pagination {
        current_page: request.page,
        page_size: request.page_size,
        total_items,
        total_pages,
        has_next_page: window.skip.saturating_add(request.page_size) < total_items,
        has_previous_page: request.page > 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(page: &str, page_size: &str) -> QueryParams {
        QueryParams {
            page: Some(page.to_string()),
            page_size: Some(page_size.to_string()),
            ..QueryParams::default()
        }
    }

    // === parsing ===

    #[test]
    fn test_defaults() {
        let request = PageRequest::from_params(&QueryParams::default());
        assert_eq!(request, PageRequest { page: 1, page_size: 10 });
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let request = PageRequest::from_params(&params("abc", "-5"));
        assert_eq!(request, PageRequest { page: 1, page_size: 10 });
    }

    #[test]
    fn test_zero_page_clamped_to_one() {
        let request = PageRequest::from_params(&params("0", "0"));
        assert_eq!(request, PageRequest { page: 1, page_size: 1 });
    }

    // === window ===

    #[test]
    fn test_window_math() {
        assert_eq!(PageRequest::new(1, 10).window(), PageWindow { skip: 0, limit: 10 });
        assert_eq!(PageRequest::new(3, 10).window(), PageWindow { skip: 20, limit: 10 });
        assert_eq!(PageRequest::new(2, 7).window(), PageWindow { skip: 7, limit: 7 });
    }

    // === metadata ===

    #[test]
    fn test_twenty_five_items_in_pages_of_ten() {
        let meta = paginate(25, &PageRequest::new(3, 10));
        assert_eq!(meta.total_pages, 3);
        assert!(!meta.has_next_page);
        assert!(meta.has_previous_page);

        let meta = paginate(25, &PageRequest::new(1, 10));
        assert!(meta.has_next_page);
        assert!(!meta.has_previous_page);
    }

    #[test]
    fn test_exact_division() {
        let meta = paginate(20, &PageRequest::new(2, 10));
        assert_eq!(meta.total_pages, 2);
        assert!(!meta.has_next_page);
    }

    #[test]
    fn test_empty_set_has_zero_pages() {
        let meta = paginate(0, &PageRequest::new(1, 10));
        assert_eq!(meta.total_pages, 0);
        assert!(!meta.has_next_page);
        assert!(!meta.has_previous_page);
    }

    #[test]
    fn test_page_past_the_end_is_valid() {
        let meta = paginate(5, &PageRequest::new(9, 10));
        assert_eq!(meta.total_pages, 1);
        assert!(!meta.has_next_page);
        assert!(meta.has_previous_page);
    }

    #[test]
    fn test_serializes_with_camel_case_names() {
        let meta = paginate(25, &PageRequest::new(2, 10));
        let json = serde_json::to_value(meta).expect("should serialize");
        assert_eq!(json["currentPage"], 2);
        assert_eq!(json["totalItems"], 25);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["hasNextPage"], true);
        assert_eq!(json["hasPreviousPage"], true);
    }
}
