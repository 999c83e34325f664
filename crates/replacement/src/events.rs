//! Notifications exchanged with the map host, and the components the
//! replacement systems write back onto building entities.

use bevy::prelude::*;

use crate::directive::ReplacementDirective;

// ---------------------------------------------------------------------------
// Host notifications
// ---------------------------------------------------------------------------

/// Geometry kind produced by the map host. Both kinds are routed through the
/// same decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
    /// Footprint extruded to a height.
    Extruded,
    /// Detailed modeled structure.
    Modeled,
}

/// Whether the host actually produced geometry for a building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildingRenderState {
    GeometryPresent,
    /// The host dropped the geometry, typically because the source mesh was
    /// too complex for the renderer.
    Suppressed,
}

impl BuildingRenderState {
    /// A missing mesh or one without vertices counts as suppressed.
    pub fn from_mesh(mesh: Option<&Mesh>) -> Self {
        match mesh {
            Some(mesh) if mesh.count_vertices() > 0 => BuildingRenderState::GeometryPresent,
            _ => BuildingRenderState::Suppressed,
        }
    }
}

/// Sent by the host before it generates geometry for `building`.
///
/// The replacement systems answer by inserting a [`StyleOverride`] on the
/// entity; the host must check for it before building its own mesh.
#[derive(Event, Debug, Clone)]
pub struct BuildingWillCreate {
    pub building: Entity,
    pub kind: StructureKind,
    /// Usage label as reported by the host (e.g. `"BANK"`).
    pub usage: String,
    /// Host place identifier; empty when the building has none.
    pub place_id: String,
}

/// Sent by the host once `building` exists in the world.
#[derive(Event, Debug, Clone)]
pub struct BuildingCreated {
    pub building: Entity,
    pub kind: StructureKind,
    pub render_state: BuildingRenderState,
}

// ---------------------------------------------------------------------------
// Components written back by the replacement systems
// ---------------------------------------------------------------------------

/// Style chosen for a building before its geometry is generated.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct StyleOverride(pub ReplacementDirective);

/// Substitute scene attached as a child of a suppressed building.
#[derive(Component, Debug)]
pub struct SubstituteModel {
    pub building: Entity,
}

/// Marks a building whose suppressed geometry has been replaced.
#[derive(Component, Debug)]
pub struct SuppressedRescued;
