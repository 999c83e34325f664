//! Operator-supplied replacement configuration.
//!
//! Loaded once before startup (JSON via serde) and never changed afterwards.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::replacement_error::ReplacementError;
use crate::toggles::{OverrideKey, ReplacementToggles};

/// Config file read by the app when `CONFIG_PATH_ENV` is unset.
pub const DEFAULT_CONFIG_PATH: &str = "assets/replacement.json";

/// Environment variable that points the app at another config file.
pub const CONFIG_PATH_ENV: &str = "BUILDING_SWAP_CONFIG";

/// One substitute model slot: scene path, uniform scale, and the height the
/// model hovers above the building origin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectiveConfig {
    pub model: Option<String>,
    pub scale: f32,
    pub offset_y: f32,
}

impl Default for DirectiveConfig {
    fn default() -> Self {
        Self {
            model: None,
            scale: 1.0,
            offset_y: 0.0,
        }
    }
}

impl DirectiveConfig {
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: Some(model.into()),
            ..Default::default()
        }
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_offset_y(mut self, offset_y: f32) -> Self {
        self.offset_y = offset_y;
        self
    }

    /// Check this slot and return its model path. `field` is the config path
    /// of the slot (e.g. `categories.bank`) used in error messages.
    pub fn validate(&self, field: &str) -> Result<&str, ReplacementError> {
        let model = match self.model.as_deref().map(str::trim) {
            Some(path) if !path.is_empty() => path,
            _ => {
                return Err(ReplacementError::MissingModel {
                    field: format!("{field}.model"),
                })
            }
        };
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ReplacementError::InvalidScale {
                field: format!("{field}.scale"),
                scale: self.scale,
            });
        }
        Ok(model)
    }
}

/// Full replacement configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplacementConfig {
    /// Dedicated substitute per usage category.
    pub categories: BTreeMap<Category, DirectiveConfig>,
    /// Used for enabled categories without a dedicated entry.
    pub fallback: DirectiveConfig,
    /// Forced for the building whose place id equals `override_place_id`.
    pub custom: DirectiveConfig,
    /// Attached to buildings whose geometry the host suppressed.
    pub suppressed: DirectiveConfig,
    /// Which categories take part in replacement. Missing entries are off.
    pub enabled: BTreeMap<Category, bool>,
    /// Place id forced to the custom substitute. Empty disables the override.
    pub override_place_id: String,
    /// Rescue buildings whose geometry came out empty.
    pub replace_suppressed: bool,
}

impl Default for ReplacementConfig {
    fn default() -> Self {
        Self {
            categories: BTreeMap::new(),
            fallback: DirectiveConfig::default(),
            custom: DirectiveConfig::default(),
            suppressed: DirectiveConfig::default(),
            enabled: BTreeMap::new(),
            override_place_id: String::new(),
            replace_suppressed: true,
        }
    }
}

impl ReplacementConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ReplacementError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ReplacementError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Read and check a config file in one step, so a file that parses but
    /// leaves a slot without a model is rejected before anything starts.
    pub fn load_validated(path: impl AsRef<Path>) -> Result<Self, ReplacementError> {
        let config = Self::load(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every directive slot, reporting the first invalid one.
    pub fn validate(&self) -> Result<(), ReplacementError> {
        self.fallback.validate("fallback")?;
        self.custom.validate("custom")?;
        self.suppressed.validate("suppressed")?;
        for (category, directive) in &self.categories {
            directive.validate(&format!("categories.{}", category.name()))?;
        }
        Ok(())
    }

    pub fn toggles(&self) -> ReplacementToggles {
        self.enabled
            .iter()
            .filter(|(_, on)| **on)
            .map(|(category, _)| *category)
            .collect()
    }

    pub fn override_key(&self) -> OverrideKey {
        OverrideKey::new(self.override_place_id.clone())
    }
}
