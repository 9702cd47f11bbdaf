//! Key filtering.
//!
//! Restricts a parsed mapping to keys containing a given substring.

use std::collections::BTreeMap;

/// Case-sensitive substring filter over entry keys
#[derive(Debug, Clone, Default)]
pub struct KeyFilter {
    substring: Option<String>,
}

impl KeyFilter {
    /// Creates a new filter; `None` matches every key.
    ///
    /// # Examples
    /// ```
    /// use props2json::filter::KeyFilter;
    ///
    /// let filter = KeyFilter::new(Some("button".to_string()));
    /// assert!(filter.matches("controls.button.reset"));
    /// assert!(!filter.matches("title"));
    /// ```
    pub fn new(substring: Option<String>) -> Self {
        Self { substring }
    }

    /// Returns true if the key passes the filter.
    pub fn matches(&self, key: &str) -> bool {
        match &self.substring {
            Some(s) => key.contains(s),
            None => true,
        }
    }

    /// Returns the mapping restricted to matching keys.
    pub fn apply(&self, entries: BTreeMap<String, String>) -> BTreeMap<String, String> {
        if self.substring.is_none() {
            return entries;
        }
        entries
            .into_iter()
            .filter(|(key, _)| self.matches(key))
            .collect()
    }

    /// Returns true if a substring is set.
    pub fn is_active(&self) -> bool {
        self.substring.is_some()
    }
}
