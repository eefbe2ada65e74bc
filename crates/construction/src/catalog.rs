//! Structure catalog: what can be built, how large it is, and which scenes
//! render it.
//!
//! Scene handles are filled in by whoever loads the assets; the engine only
//! ever clones them into `SceneRoot`s.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::grid::{Footprint, TileType};

/// Number of scene variants a road mapping must provide, in
/// straight / corner / tee / cross order.
pub const ROAD_PIECE_COUNT: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StructureKind {
    Road,
    House,
    Apartment,
    Shop,
    Factory,
    Park,
}

#[derive(Debug, Clone)]
pub struct StructureMapping {
    pub kind: StructureKind,
    pub assigned_type: TileType,
    pub footprint: Footprint,
    pub variants: Vec<Handle<Scene>>,
    /// Pick a variant at random on each placement instead of always the first.
    pub random_variation: bool,
}

impl StructureMapping {
    pub fn new(kind: StructureKind, assigned_type: TileType, footprint: Footprint) -> Self {
        Self {
            kind,
            assigned_type,
            footprint,
            variants: Vec::new(),
            random_variation: false,
        }
    }

    pub fn with_variants(mut self, variants: Vec<Handle<Scene>>) -> Self {
        self.variants = variants;
        self
    }

    pub fn with_random_variation(mut self, random_variation: bool) -> Self {
        self.random_variation = random_variation;
        self
    }

    pub fn is_road(&self) -> bool {
        self.assigned_type == TileType::Road
    }
}

/// The four road scenes the autotiler chooses between.
#[derive(Debug, Clone)]
pub struct RoadPieceSet {
    pub straight: Handle<Scene>,
    pub corner: Handle<Scene>,
    pub tee: Handle<Scene>,
    pub cross: Handle<Scene>,
}

impl RoadPieceSet {
    pub fn from_mapping(mapping: &StructureMapping) -> Option<Self> {
        match mapping.variants.as_slice() {
            [straight, corner, tee, cross, ..] => Some(Self {
                straight: straight.clone(),
                corner: corner.clone(),
                tee: tee.clone(),
                cross: cross.clone(),
            }),
            _ => None,
        }
    }
}

#[derive(Resource, Debug, Default, Clone)]
pub struct StructureCatalog {
    mappings: Vec<StructureMapping>,
}

impl StructureCatalog {
    pub fn new(mappings: Vec<StructureMapping>) -> Self {
        let mut catalog = Self::default();
        for mapping in mappings {
            catalog.insert(mapping);
        }
        catalog
    }

    /// Add a mapping, replacing any existing one for the same kind.
    pub fn insert(&mut self, mapping: StructureMapping) {
        if let Some(existing) = self.mappings.iter_mut().find(|m| m.kind == mapping.kind) {
            *existing = mapping;
        } else {
            self.mappings.push(mapping);
        }
    }

    pub fn mapping_for(&self, kind: StructureKind) -> Option<&StructureMapping> {
        self.mappings.iter().find(|m| m.kind == kind)
    }

    pub fn mappings(&self) -> &[StructureMapping] {
        &self.mappings
    }

    /// Road pieces from the first road mapping that carries all of them.
    pub fn road_pieces(&self) -> Option<RoadPieceSet> {
        self.mappings
            .iter()
            .filter(|m| m.is_road())
            .find_map(RoadPieceSet::from_mapping)
    }
}
