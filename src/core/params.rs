//! Raw request parameters, before any normalization.
//!
//! `QueryParams` is the multi-valued string map a dashboard request arrives
//! as: repeated keys accumulate for the list-valued filters, scalar keys keep
//! the last value seen (matching URL query-string semantics). Values are kept
//! as raw strings here — parsing and the lenient drop policy live in the
//! normalizers ([`crate::core::filter::FilterSpec::from_params`] and
//! friends), not at this boundary.

/// Raw, unvalidated parameters for one query request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams {
    pub search: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub regions: Vec<String>,
    pub genders: Vec<String>,
    pub categories: Vec<String>,
    pub tags: Vec<String>,
    pub payment_methods: Vec<String>,
    pub age_min: Option<String>,
    pub age_max: Option<String>,
    pub date_start: Option<String>,
    pub date_end: Option<String>,
}

impl QueryParams {
    /// Build params from `(key, value)` pairs, e.g. a decoded query string.
    ///
    /// List-valued keys (`regions`, `genders`, `categories`, `tags`,
    /// `paymentMethods`) accumulate across repetitions; scalar keys keep the
    /// last value. Unknown keys are ignored.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut params = Self::default();

        for (key, value) in pairs {
            let value = value.into();
            match key.as_ref() {
                "search" => params.search = Some(value),
                "page" => params.page = Some(value),
                "pageSize" => params.page_size = Some(value),
                "sortBy" => params.sort_by = Some(value),
                "sortOrder" => params.sort_order = Some(value),
                "regions" => params.regions.push(value),
                "genders" => params.genders.push(value),
                "categories" => params.categories.push(value),
                "tags" => params.tags.push(value),
                "paymentMethods" => params.payment_methods.push(value),
                "ageMin" => params.age_min = Some(value),
                "ageMax" => params.age_max = Some(value),
                "dateStart" => params.date_start = Some(value),
                "dateEnd" => params.date_end = Some(value),
                _ => {}
            }
        }

        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_keys_accumulate() {
        let params = QueryParams::from_pairs([
            ("regions", "North"),
            ("regions", "South"),
            ("tags", "sale"),
        ]);

        assert_eq!(params.regions, vec!["North", "South"]);
        assert_eq!(params.tags, vec!["sale"]);
        assert!(params.genders.is_empty());
    }

    #[test]
    fn test_scalar_keys_keep_last_value() {
        let params = QueryParams::from_pairs([("page", "1"), ("page", "3")]);
        assert_eq!(params.page.as_deref(), Some("3"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let params = QueryParams::from_pairs([("bogus", "x"), ("search", "rao")]);
        assert_eq!(params.search.as_deref(), Some("rao"));
        assert_eq!(params, QueryParams {
            search: Some("rao".to_string()),
            ..QueryParams::default()
        });
    }

    #[test]
    fn test_empty_input_gives_defaults() {
        let params = QueryParams::from_pairs(Vec::<(String, String)>::new());
        assert_eq!(params, QueryParams::default());
    }
}
