//! Building usage categories reported by the map host, and the typed keys
//! used to look up replacement directives.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::replacement_error::ReplacementError;

/// Primary use of a building as classified by the map host.
///
/// The set is closed: any other usage label is reported as unsupported and
/// never routed to a category directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Unspecified,
    Bar,
    Bank,
    Lodging,
    Cafe,
    Restaurant,
    EventVenue,
    TouristDestination,
    Shopping,
    School,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Unspecified,
        Category::Bar,
        Category::Bank,
        Category::Lodging,
        Category::Cafe,
        Category::Restaurant,
        Category::EventVenue,
        Category::TouristDestination,
        Category::Shopping,
        Category::School,
    ];

    /// Configuration name, as used for JSON keys and error field paths.
    pub fn name(self) -> &'static str {
        match self {
            Category::Unspecified => "unspecified",
            Category::Bar => "bar",
            Category::Bank => "bank",
            Category::Lodging => "lodging",
            Category::Cafe => "cafe",
            Category::Restaurant => "restaurant",
            Category::EventVenue => "event_venue",
            Category::TouristDestination => "tourist_destination",
            Category::Shopping => "shopping",
            Category::School => "school",
        }
    }

    /// Parse a usage label coming from the map host.
    ///
    /// Matching ignores case and `_`, `-` and space separators, so
    /// `EVENT_VENUE`, `EventVenue` and `event-venue` are all the same category.
    pub fn from_usage(label: &str) -> Result<Category, ReplacementError> {
        let folded: String = label
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        Category::ALL
            .into_iter()
            .find(|c| c.name().replace('_', "") == folded)
            .ok_or_else(|| ReplacementError::UnsupportedCategory(label.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Key into the style registry.
///
/// `Override` is the slot for the custom place-id override and `Suppressed`
/// the slot used to rescue buildings whose geometry was dropped by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleKey {
    Usage(Category),
    Override,
    Suppressed,
}

impl From<Category> for StyleKey {
    fn from(category: Category) -> Self {
        StyleKey::Usage(category)
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleKey::Usage(category) => write!(f, "{category}"),
            StyleKey::Override => f.write_str("custom"),
            StyleKey::Suppressed => f.write_str("suppressed"),
        }
    }
}
