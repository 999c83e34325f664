use bevy::prelude::*;

use crate::events::{BuildingRenderState, StructureKind, SubstituteModel, SuppressedRescued};
use crate::test_harness::{base_config, TestScene};

#[test]
fn test_suppressed_building_gets_one_substitute_child() {
    let mut scene = TestScene::new(base_config());

    let building = scene.spawn_building(Vec3::new(40.0, 0.0, 72.0));
    scene
        .created(building, StructureKind::Extruded, BuildingRenderState::Suppressed)
        .tick();

    let substitutes = scene.substitutes_of(building);
    assert_eq!(substitutes.len(), 1);

    let substitute = substitutes[0];
    let transform = scene
        .world()
        .get::<Transform>(substitute)
        .expect("substitute transform");
    assert_eq!(transform.translation, Vec3::new(0.0, 8.0, 0.0));
    assert_eq!(
        scene.world().get::<SubstituteModel>(substitute).map(|s| s.building),
        Some(building)
    );
    assert!(scene.world().get::<SceneRoot>(substitute).is_some());
    assert_eq!(scene.stats().rescued, 1);
}

#[test]
fn test_rescue_hides_original_visuals_but_not_the_node() {
    let mut scene = TestScene::new(base_config());

    let building = scene.spawn_building(Vec3::ZERO);
    scene
        .created(building, StructureKind::Modeled, BuildingRenderState::Suppressed)
        .tick();

    let world = scene.world();
    assert!(world.get::<Mesh3d>(building).is_none());
    assert!(world.get::<MeshMaterial3d<StandardMaterial>>(building).is_none());
    assert!(world.get::<SuppressedRescued>(building).is_some());
    assert_ne!(
        world.get::<Visibility>(building).copied(),
        Some(Visibility::Hidden),
        "the building node itself must stay visible"
    );
}

#[test]
fn test_present_geometry_is_left_alone() {
    let mut scene = TestScene::new(base_config());

    let building = scene.spawn_building(Vec3::ZERO);
    scene
        .created(building, StructureKind::Extruded, BuildingRenderState::GeometryPresent)
        .tick();

    assert!(scene.substitutes_of(building).is_empty());
    assert!(scene.world().get::<Mesh3d>(building).is_some());
    assert_eq!(scene.stats().rescued, 0);
}

#[test]
fn test_rescue_disabled_leaves_suppressed_building_alone() {
    let mut config = base_config();
    config.replace_suppressed = false;
    let mut scene = TestScene::new(config);

    let building = scene.spawn_building(Vec3::ZERO);
    scene
        .created(building, StructureKind::Extruded, BuildingRenderState::Suppressed)
        .tick();

    assert!(scene.substitutes_of(building).is_empty());
    assert!(scene.world().get::<SuppressedRescued>(building).is_none());
}

#[test]
fn test_duplicate_notification_attaches_single_substitute() {
    let mut scene = TestScene::new(base_config());

    let building = scene.spawn_building(Vec3::ZERO);
    scene
        .created(building, StructureKind::Extruded, BuildingRenderState::Suppressed)
        .created(building, StructureKind::Extruded, BuildingRenderState::Suppressed)
        .tick();
    scene
        .created(building, StructureKind::Extruded, BuildingRenderState::Suppressed)
        .tick();

    assert_eq!(scene.substitutes_of(building).len(), 1);
    assert_eq!(scene.stats().rescued, 1);
}

#[test]
fn test_despawning_building_removes_substitute() {
    let mut scene = TestScene::new(base_config());

    let building = scene.spawn_building(Vec3::ZERO);
    scene
        .created(building, StructureKind::Extruded, BuildingRenderState::Suppressed)
        .tick();
    let substitute = scene.substitutes_of(building)[0];

    scene.world_mut().entity_mut(building).despawn_recursive();

    assert!(scene.world().get_entity(substitute).is_err());
}

#[test]
fn test_substitute_keeps_directive_scale() {
    let mut config = base_config();
    config.suppressed.scale = 3.0;
    let mut scene = TestScene::new(config);

    let building = scene.spawn_building(Vec3::ZERO);
    scene
        .created(building, StructureKind::Modeled, BuildingRenderState::Suppressed)
        .tick();

    let substitute = scene.substitutes_of(building)[0];
    let transform = scene.world().get::<Transform>(substitute).expect("transform");
    assert_eq!(transform.scale, Vec3::splat(3.0));
}
