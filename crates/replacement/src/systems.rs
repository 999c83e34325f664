//! Listener systems that turn host notifications into replacement decisions.

use std::collections::HashSet;

use bevy::prelude::*;

use crate::category::Category;
use crate::engine::ReplacementEngine;
use crate::events::{
    BuildingCreated, BuildingWillCreate, StyleOverride, SubstituteModel, SuppressedRescued,
};
use crate::stats::ReplacementStats;

/// Answer each pre-creation notification with a [`StyleOverride`] when the
/// engine picks a substitute. Unknown usage labels are reported once per
/// notification and only fall through to the override check.
pub fn choose_building_styles(
    mut commands: Commands,
    mut pending: EventReader<BuildingWillCreate>,
    engine: Res<ReplacementEngine>,
    mut stats: ResMut<ReplacementStats>,
) {
    for event in pending.read() {
        let category = match Category::from_usage(&event.usage) {
            Ok(category) => Some(category),
            Err(err) => {
                warn!("{err} ({:?} building {:?})", event.kind, event.building);
                stats.unsupported_categories += 1;
                None
            }
        };

        let decision = engine.decide_pre_creation(category, &event.place_id);
        let Some(directive) = decision.directive() else {
            continue;
        };
        let Some(mut building) = commands.get_entity(event.building) else {
            warn!(
                "Style chosen for missing building {:?}; skipping",
                event.building
            );
            stats.missing_buildings += 1;
            continue;
        };

        debug!(
            "Building {:?} ({:?}) styled with {}",
            event.building,
            event.kind,
            directive.model_path()
        );
        building.insert(StyleOverride(directive.clone()));
        stats.styled += 1;
        if decision.is_custom() {
            stats.custom_overrides += 1;
        }
    }
}

/// Replace buildings whose geometry came out empty with the suppressed
/// substitute.
///
/// Only the mesh components are stripped from the building; its visibility
/// is left alone so other children attached later still render. The
/// substitute is parented to the building, so despawning the building
/// removes it too.
pub fn rescue_suppressed_buildings(
    mut commands: Commands,
    mut created: EventReader<BuildingCreated>,
    engine: Res<ReplacementEngine>,
    already_rescued: Query<(), With<SuppressedRescued>>,
    mut stats: ResMut<ReplacementStats>,
) {
    let mut rescued_now = HashSet::new();
    for event in created.read() {
        let Some(directive) = engine.decide_post_creation(event.render_state) else {
            continue;
        };
        if already_rescued.contains(event.building) || !rescued_now.insert(event.building) {
            continue;
        }
        let Some(mut building) = commands.get_entity(event.building) else {
            warn!(
                "Suppressed building {:?} is gone before rescue; skipping",
                event.building
            );
            stats.missing_buildings += 1;
            continue;
        };

        building
            .remove::<(Mesh3d, MeshMaterial3d<StandardMaterial>)>()
            .insert(SuppressedRescued)
            .with_children(|parent| {
                parent.spawn((
                    SubstituteModel {
                        building: event.building,
                    },
                    SceneRoot(directive.scene().clone()),
                    directive.placement(),
                ));
            });
        debug!(
            "Rescued suppressed {:?} building {:?} with {}",
            event.kind,
            event.building,
            directive.model_path()
        );
        stats.rescued += 1;
    }
}
