use bevy::prelude::*;

/// Counters for what the replacement systems did since startup.
#[derive(Resource, Default, Debug, Clone, PartialEq, Eq)]
pub struct ReplacementStats {
    /// Buildings handed a style override before creation, custom ones included.
    pub styled: u32,
    /// Styled buildings that matched the override place id.
    pub custom_overrides: u32,
    /// Suppressed buildings that received a substitute child.
    pub rescued: u32,
    /// Usage labels outside the known category set.
    pub unsupported_categories: u32,
    /// Notifications naming an entity that no longer exists.
    pub missing_buildings: u32,
}

impl ReplacementStats {
    pub fn total_replaced(&self) -> u32 {
        self.styled + self.rescued
    }
}
