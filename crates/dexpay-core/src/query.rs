//! List filters.
//!
//! Filters are serialized straight into the request query string. Unset
//! fields, empty strings and zero page/limit values are skipped; booleans
//! are sent whenever present, `false` included. Keys follow the declaration
//! order of the filter's fields.

use serde::Serialize;

/// `None` and `0` are not sent.
pub(crate) fn is_unset_number(value: &Option<u32>) -> bool {
    value.map_or(true, |v| v == 0)
}

/// `None` and `""` are not sent.
pub(crate) fn is_unset_str(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, str::is_empty)
}

/// Plain pagination parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListParams {
    /// 1-based page number.
    #[serde(skip_serializing_if = "is_unset_number")]
    pub page: Option<u32>,
    /// Page size.
    #[serde(skip_serializing_if = "is_unset_number")]
    pub limit: Option<u32>,
}

impl ListParams {
    /// Set the page number.
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Set the page size.
    #[must_use]
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn limit_only() {
        let params = ListParams::default().limit(10);
        assert_eq!(serde_json::to_value(params).unwrap(), json!({ "limit": 10 }));
    }

    #[test]
    fn zero_values_are_skipped() {
        let params = ListParams::default().page(0).limit(0);
        assert_eq!(serde_json::to_value(params).unwrap(), json!({}));
    }

    #[test]
    fn unset_helpers() {
        assert!(is_unset_number(&None));
        assert!(is_unset_number(&Some(0)));
        assert!(!is_unset_number(&Some(1)));
        assert!(is_unset_str(&None));
        assert!(is_unset_str(&Some(String::new())));
        assert!(!is_unset_str(&Some("a".into())));
    }
}
