use bevy::prelude::*;

use crate::catalog::{StructureCatalog, ROAD_PIECE_COUNT};
use crate::grid::{GridPos, TileGrid};
use crate::visuals::VisualFactory;

use super::pieces::{classify, RoadNeighbors, RoadPiece};

/// Re-derive the road piece at `pos` from its current neighbours and replace
/// the tile's visual with it.
///
/// The old visual is destroyed first. If the catalog cannot supply the road
/// scenes the tile is left without a visual.
pub fn update_road<V: VisualFactory>(
    pos: GridPos,
    grid: &mut TileGrid,
    catalog: &StructureCatalog,
    visuals: &mut V,
) -> Option<RoadPiece> {
    let tile = grid.get_mut(pos)?;
    if !tile.is_road() {
        warn!(
            "update_road: tile ({}, {}) is {:?}, not a road",
            pos.x, pos.y, tile.tile_type
        );
        return None;
    }
    if let Some(old) = tile.visual.take() {
        visuals.destroy(old);
    }

    let neighbors = RoadNeighbors::from_grid(grid, pos);
    let piece = classify(neighbors);

    let Some(pieces) = catalog.road_pieces() else {
        error!(
            "update_road: no road mapping with {} variants, ({}, {}) left without a visual",
            ROAD_PIECE_COUNT, pos.x, pos.y
        );
        return None;
    };

    let visual = visuals.spawn(piece.variant.scene(&pieces), piece.transform(pos));
    if let Some(tile) = grid.get_mut(pos) {
        tile.visual = Some(visual);
    }
    Some(piece)
}

/// Refresh every road in `positions`, skipping any that stopped being roads.
pub fn update_roads<V: VisualFactory>(
    positions: &[GridPos],
    grid: &mut TileGrid,
    catalog: &StructureCatalog,
    visuals: &mut V,
) {
    for &pos in positions {
        if grid.is_road(pos) {
            update_road(pos, grid, catalog, visuals);
        }
    }
}
