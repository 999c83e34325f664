use std::collections::HashSet;

use crate::category::Category;

/// Per-category switch deciding whether a category takes part in replacement.
/// Categories never enabled are off.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementToggles {
    enabled: HashSet<Category>,
}

impl ReplacementToggles {
    /// Every category switched on.
    pub fn all() -> Self {
        Category::ALL.into_iter().collect()
    }

    pub fn with(mut self, category: Category, on: bool) -> Self {
        if on {
            self.enabled.insert(category);
        } else {
            self.enabled.remove(&category);
        }
        self
    }

    pub fn is_enabled(&self, category: Category) -> bool {
        self.enabled.contains(&category)
    }

    pub fn enabled_count(&self) -> usize {
        self.enabled.len()
    }
}

impl FromIterator<Category> for ReplacementToggles {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self {
            enabled: iter.into_iter().collect(),
        }
    }
}

/// The single place id that forces the custom substitute.
///
/// An empty key means no override is configured; it never matches, not even
/// buildings that arrive without a place id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideKey(Option<String>);

impl OverrideKey {
    pub fn new(place_id: impl Into<String>) -> Self {
        let place_id = place_id.into();
        if place_id.is_empty() {
            Self(None)
        } else {
            Self(Some(place_id))
        }
    }

    pub fn is_configured(&self) -> bool {
        self.0.is_some()
    }

    pub fn matches(&self, place_id: &str) -> bool {
        self.0.as_deref() == Some(place_id)
    }
}
