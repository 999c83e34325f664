//! Stand-in map host: lays out a deterministic block of buildings, announces
//! them, generates geometry for the ones left unstyled and reports the result.
//!
//! Some lots are generated with an empty mesh to mimic the host dropping
//! geometry that is too complex to render.

use bevy::prelude::*;
use bevy::render::mesh::PrimitiveTopology;
use bevy::render::render_asset::RenderAssetUsages;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use replacement::{
    BuildingCreated, BuildingRenderState, BuildingWillCreate, ReplacementSet, StructureKind,
    StyleOverride,
};

/// Usage labels the demo host hands out. `PARKING_STRUCTURE` is not a known
/// category and exercises the unsupported path.
const USAGE_LABELS: [&str; 11] = [
    "UNSPECIFIED",
    "BAR",
    "BANK",
    "LODGING",
    "CAFE",
    "RESTAURANT",
    "EVENT_VENUE",
    "TOURIST_DESTINATION",
    "SHOPPING",
    "SCHOOL",
    "PARKING_STRUCTURE",
];

pub struct DemoMapPlugin;

impl Plugin for DemoMapPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DemoMapConfig>()
            .init_resource::<PendingLots>()
            .add_systems(Startup, (setup_scene, announce_lots))
            .add_systems(
                Update,
                build_lot_geometry
                    .after(ReplacementSet::ChooseStyles)
                    .before(ReplacementSet::RescueSuppressed),
            );
    }
}

#[derive(Resource, Debug, Clone)]
pub struct DemoMapConfig {
    /// Lots along each axis.
    pub lots_per_side: u32,
    /// Distance between lot centers in world units.
    pub spacing: f32,
    /// Chance that a lot's geometry comes out empty.
    pub suppressed_chance: f64,
    /// Seed so every run lays out the same map.
    pub seed: u64,
}

impl Default for DemoMapConfig {
    fn default() -> Self {
        Self {
            lots_per_side: 8,
            spacing: 24.0,
            suppressed_chance: 0.1,
            seed: 31415,
        }
    }
}

#[derive(Debug, Clone)]
struct PendingLot {
    building: Entity,
    kind: StructureKind,
    height: f32,
    suppressed: bool,
}

/// Lots announced to the replacement plugin that still need geometry.
#[derive(Resource, Default)]
struct PendingLots(Vec<PendingLot>);

fn setup_scene(mut commands: Commands) {
    commands.spawn((
        Camera3d::default(),
        Transform::from_xyz(-60.0, 140.0, -60.0).looking_at(Vec3::new(84.0, 0.0, 84.0), Vec3::Y),
    ));
    commands.spawn((
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(50.0, 200.0, 30.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn announce_lots(
    mut commands: Commands,
    config: Res<DemoMapConfig>,
    mut pending: ResMut<PendingLots>,
    mut will_create: EventWriter<BuildingWillCreate>,
) {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let mut lot_index = 0u32;

    for gx in 0..config.lots_per_side {
        for gz in 0..config.lots_per_side {
            let position = Vec3::new(gx as f32 * config.spacing, 0.0, gz as f32 * config.spacing);
            let building = commands
                .spawn((Transform::from_translation(position), Visibility::default()))
                .id();
            let kind = if rng.gen_bool(0.5) {
                StructureKind::Extruded
            } else {
                StructureKind::Modeled
            };
            let usage = USAGE_LABELS[rng.gen_range(0..USAGE_LABELS.len())];
            // Roughly a third of the lots carry a place id.
            let place_id = if rng.gen_bool(0.33) {
                format!("place-{lot_index:04}")
            } else {
                String::new()
            };

            will_create.send(BuildingWillCreate {
                building,
                kind,
                usage: usage.to_string(),
                place_id,
            });
            pending.0.push(PendingLot {
                building,
                kind,
                height: rng.gen_range(6.0..40.0),
                suppressed: rng.gen_bool(config.suppressed_chance),
            });
            lot_index += 1;
        }
    }
    info!("Demo host announced {lot_index} buildings");
}

fn build_lot_geometry(
    mut commands: Commands,
    mut pending: ResMut<PendingLots>,
    styles: Query<&StyleOverride>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut created: EventWriter<BuildingCreated>,
) {
    if pending.0.is_empty() {
        return;
    }
    let material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.78, 0.76, 0.72),
        perceptual_roughness: 0.9,
        ..default()
    });

    for lot in pending.0.drain(..) {
        if let Ok(style) = styles.get(lot.building) {
            // Styled lots never get host geometry; the substitute is the building.
            commands.entity(lot.building).with_children(|parent| {
                parent.spawn((SceneRoot(style.0.scene().clone()), style.0.placement()));
            });
            created.send(BuildingCreated {
                building: lot.building,
                kind: lot.kind,
                render_state: BuildingRenderState::GeometryPresent,
            });
            continue;
        }

        let mesh = if lot.suppressed {
            Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        } else {
            let mesh = Mesh::from(Cuboid::new(16.0, lot.height, 16.0));
            mesh.translated_by(Vec3::Y * lot.height * 0.5)
        };
        let render_state = BuildingRenderState::from_mesh(Some(&mesh));

        commands
            .entity(lot.building)
            .insert((Mesh3d(meshes.add(mesh)), MeshMaterial3d(material.clone())));
        created.send(BuildingCreated {
            building: lot.building,
            kind: lot.kind,
            render_state,
        });
    }
}
