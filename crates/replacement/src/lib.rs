use bevy::prelude::*;

pub mod category;
pub mod config;
pub mod directive;
pub mod engine;
pub mod events;
pub mod replacement_error;
pub mod stats;
pub mod style_registry;
pub mod systems;
pub mod toggles;


pub use category::{Category, StyleKey};
pub use config::{DirectiveConfig, ReplacementConfig};
pub use directive::ReplacementDirective;
pub use engine::{ReplacementEngine, StyleDecision};
pub use events::{
    BuildingCreated, BuildingRenderState, BuildingWillCreate, StructureKind, StyleOverride,
    SubstituteModel, SuppressedRescued,
};
pub use replacement_error::ReplacementError;
pub use stats::ReplacementStats;
pub use style_registry::StyleRegistry;
pub use toggles::{OverrideKey, ReplacementToggles};

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Ordering of the replacement listeners inside `Update`. Host systems that
/// emit notifications should run before `ChooseStyles`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReplacementSet {
    ChooseStyles,
    RescueSuppressed,
}

/// Present when the plugin refused to start because of a bad configuration.
/// No listener systems are registered in that case.
#[derive(Resource, Debug)]
pub struct ReplacementStartupError(pub ReplacementError);

/// Validates the configuration, freezes the style registry and registers the
/// listeners for both host notification streams.
///
/// Substitute scenes are loaded through the `AssetServer` when one exists, so
/// `AssetPlugin` must be added before this plugin in a rendering app.
pub struct ReplacementPlugin {
    config: ReplacementConfig,
}

impl ReplacementPlugin {
    pub fn new(config: ReplacementConfig) -> Self {
        Self { config }
    }
}

impl Plugin for ReplacementPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<BuildingWillCreate>()
            .add_event::<BuildingCreated>()
            .init_resource::<ReplacementStats>();

        let asset_server = app.world().get_resource::<AssetServer>().cloned();
        let registry = StyleRegistry::build(&self.config, |path| match &asset_server {
            Some(server) => {
                server.load(bevy::gltf::GltfAssetLabel::Scene(0).from_asset(path.to_string()))
            }
            None => Handle::default(),
        });
        let registry = match registry {
            Ok(registry) => registry,
            Err(err) => {
                error!("Building replacement disabled: {err}");
                app.insert_resource(ReplacementStartupError(err));
                return;
            }
        };

        let toggles = self.config.toggles();
        let override_key = self.config.override_key();
        info!(
            "Building replacement ready: {} styles, {} categories enabled, \
             override {}, suppressed rescue {}",
            registry.style_count(),
            toggles.enabled_count(),
            if override_key.is_configured() { "set" } else { "unset" },
            if self.config.replace_suppressed { "on" } else { "off" },
        );
        for category in Category::ALL {
            if toggles.is_enabled(category) && !registry.has_dedicated(category) {
                info!(
                    "Category {category} has no dedicated model, using {}",
                    registry.fallback().model_path()
                );
            }
        }

        app.insert_resource(ReplacementEngine::new(
            registry,
            toggles,
            override_key,
            self.config.replace_suppressed,
        ))
        .configure_sets(
            Update,
            (ReplacementSet::ChooseStyles, ReplacementSet::RescueSuppressed).chain(),
        )
        .add_systems(
            Update,
            (
                systems::choose_building_styles.in_set(ReplacementSet::ChooseStyles),
                systems::rescue_suppressed_buildings.in_set(ReplacementSet::RescueSuppressed),
            ),
        );
    }
}
