use bevy::prelude::*;

use crate::config::DirectiveConfig;
use crate::replacement_error::ReplacementError;

/// Which substitute scene replaces a building, and how it sits under it.
///
/// Scale and vertical offset are baked into `local_transform` once, when the
/// directive is built; applying it never rescales anything again.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplacementDirective {
    model_path: String,
    scene: Handle<Scene>,
    local_transform: Transform,
}

impl ReplacementDirective {
    pub fn new(
        model_path: impl Into<String>,
        scene: Handle<Scene>,
        scale: f32,
        offset_y: f32,
    ) -> Self {
        Self {
            model_path: model_path.into(),
            scene,
            local_transform: Transform::from_xyz(0.0, offset_y, 0.0)
                .with_scale(Vec3::splat(scale)),
        }
    }

    /// Validate a config slot and load its scene through `load_scene`.
    pub fn from_config(
        config: &DirectiveConfig,
        field: &str,
        load_scene: &mut impl FnMut(&str) -> Handle<Scene>,
    ) -> Result<Self, ReplacementError> {
        let path = config.validate(field)?;
        let scene = load_scene(path);
        Ok(Self::new(path, scene, config.scale, config.offset_y))
    }

    pub fn model_path(&self) -> &str {
        &self.model_path
    }

    pub fn scene(&self) -> &Handle<Scene> {
        &self.scene
    }

    pub fn scale(&self) -> f32 {
        self.local_transform.scale.x
    }

    pub fn offset_y(&self) -> f32 {
        self.local_transform.translation.y
    }

    /// Local transform for the substitute when parented to a building: centered
    /// horizontally on the building origin, at the model's own height.
    pub fn placement(&self) -> Transform {
        self.local_transform
    }
}
