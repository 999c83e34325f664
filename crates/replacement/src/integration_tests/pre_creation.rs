use bevy::prelude::*;

use crate::category::Category;
use crate::events::StructureKind;
use crate::test_harness::{base_config, TestScene};

#[test]
fn test_enabled_bank_is_styled_with_bank_model() {
    let mut config = base_config();
    config.enabled.insert(Category::Bank, true);
    let mut scene = TestScene::new(config);

    let bank = scene.spawn_building(Vec3::ZERO);
    scene.announce(bank, "BANK", "").tick();

    let style = scene.style_of(bank).expect("bank should be styled");
    assert_eq!(style.model_path(), "models/bank.glb");
    assert_eq!(scene.stats().styled, 1);
    assert_eq!(scene.stats().custom_overrides, 0);
}

#[test]
fn test_override_wins_despite_disabled_toggle() {
    let mut config = base_config();
    config.enabled.insert(Category::Bank, false);
    config.override_place_id = "place123".to_string();
    let mut scene = TestScene::new(config);

    let bank = scene.spawn_building(Vec3::ZERO);
    scene.announce(bank, "BANK", "place123").tick();

    let style = scene.style_of(bank).expect("override should apply");
    assert_eq!(style.model_path(), "models/custom.glb");
    assert_eq!(style.scale(), 1.2);
    assert_eq!(scene.stats().custom_overrides, 1);
}

#[test]
fn test_nothing_enabled_and_no_override_leaves_building_alone() {
    let mut scene = TestScene::new(base_config());

    let cafe = scene.spawn_building(Vec3::ZERO);
    scene.announce(cafe, "CAFE", "").tick();

    assert!(scene.style_of(cafe).is_none());
    assert_eq!(scene.stats().styled, 0);
}

#[test]
fn test_unknown_category_reports_once_and_keeps_host_geometry() {
    let mut config = base_config();
    config.enabled.insert(Category::Unspecified, true);
    let mut scene = TestScene::new(config);

    let parking = scene.spawn_building(Vec3::ZERO);
    scene.announce(parking, "ParkingStructure", "").tick();

    assert!(scene.style_of(parking).is_none());
    assert_eq!(scene.stats().unsupported_categories, 1);
    assert!(
        scene.world().get::<Mesh3d>(parking).is_some(),
        "host mesh must stay untouched"
    );
}

#[test]
fn test_unknown_category_does_not_disturb_other_buildings() {
    let mut config = base_config();
    config.enabled.insert(Category::Cafe, true);
    let mut scene = TestScene::new(config);

    let parking = scene.spawn_building(Vec3::ZERO);
    let cafe = scene.spawn_building(Vec3::X * 20.0);
    scene
        .announce(parking, "ParkingStructure", "")
        .announce(cafe, "Cafe", "")
        .tick();

    assert!(scene.style_of(parking).is_none());
    assert_eq!(
        scene.style_of(cafe).map(|s| s.model_path()),
        Some("models/cafe.glb")
    );
}

#[test]
fn test_enabled_category_without_model_uses_fallback() {
    let mut config = base_config();
    config.enabled.insert(Category::School, true);
    let mut scene = TestScene::new(config);

    let school = scene.spawn_building(Vec3::ZERO);
    scene.announce(school, "SCHOOL", "").tick();

    assert_eq!(
        scene.style_of(school).map(|s| s.model_path()),
        Some("models/fallback.glb")
    );
}

#[test]
fn test_both_structure_kinds_are_styled() {
    let mut config = base_config();
    config.enabled.insert(Category::Lodging, true);
    let mut scene = TestScene::new(config);

    let extruded = scene.spawn_building(Vec3::ZERO);
    let modeled = scene.spawn_building(Vec3::Z * 20.0);
    scene
        .announce_kind(extruded, StructureKind::Extruded, "LODGING", "")
        .announce_kind(modeled, StructureKind::Modeled, "LODGING", "")
        .tick();

    assert!(scene.style_of(extruded).is_some());
    assert!(scene.style_of(modeled).is_some());
    assert_eq!(scene.stats().styled, 2);
}

#[test]
fn test_repeated_announcement_gives_same_style() {
    let mut config = base_config();
    config.enabled.insert(Category::Cafe, true);
    let mut scene = TestScene::new(config);

    let cafe = scene.spawn_building(Vec3::ZERO);
    scene.announce(cafe, "CAFE", "").tick();
    let first = scene.style_of(cafe).cloned();
    scene.announce(cafe, "CAFE", "").tick();
    let second = scene.style_of(cafe).cloned();

    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn test_announcement_for_despawned_building_is_counted() {
    let mut config = base_config();
    config.enabled.insert(Category::Bank, true);
    let mut scene = TestScene::new(config);

    let bank = scene.spawn_building(Vec3::ZERO);
    assert!(scene.world_mut().despawn(bank));
    scene.announce(bank, "BANK", "").tick();

    assert_eq!(scene.stats().styled, 0);
    assert_eq!(scene.stats().missing_buildings, 1);
}
