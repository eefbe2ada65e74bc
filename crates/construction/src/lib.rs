use bevy::prelude::*;

pub mod build_rng;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod grid;
pub mod placement;
pub mod roads;
pub mod visuals;

#[cfg(test)]
pub mod test_harness;

use build_rng::BuildRng;
use catalog::StructureCatalog;
use controller::{
    apply_construction_commands, apply_tile_clicks, follow_highlight, BuildController,
    ConstructionCommand, HighlightCursor, PlacementFailed, TileClicked,
};
use grid::TileGrid;
use visuals::spawn_world_root;

/// Systems that turn construction commands and clicks into grid changes.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstructionSet;

/// Grid, catalog and build controller, plus the systems that drive them.
///
/// Resources are created with `init_resource`, so a grid or catalog inserted
/// before the plugin is added is kept.
pub struct ConstructionPlugin;

impl Plugin for ConstructionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TileGrid>()
            .init_resource::<StructureCatalog>()
            .init_resource::<BuildController>()
            .init_resource::<BuildRng>()
            .init_resource::<HighlightCursor>()
            .add_event::<ConstructionCommand>()
            .add_event::<TileClicked>()
            .add_event::<PlacementFailed>()
            .add_systems(Startup, spawn_world_root)
            .add_systems(
                Update,
                (
                    apply_construction_commands,
                    apply_tile_clicks,
                    follow_highlight,
                )
                    .chain()
                    .in_set(ConstructionSet),
            );
    }
}
