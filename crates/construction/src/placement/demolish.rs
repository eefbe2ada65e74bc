use bevy::prelude::*;

use crate::catalog::StructureCatalog;
use crate::grid::{Footprint, GridPos, StructureLink, TileGrid, TileType};
use crate::roads::update_roads;
use crate::visuals::VisualFactory;

/// Remove whatever stands on `pos`.
///
/// Any tile of a multi-tile structure takes the whole structure with it.
/// Returns `false` when there was nothing to remove.
pub fn demolish<V: VisualFactory>(
    pos: GridPos,
    grid: &mut TileGrid,
    catalog: &StructureCatalog,
    visuals: &mut V,
) -> bool {
    let Some(tile) = grid.get(pos) else {
        return false;
    };
    if tile.is_empty() && tile.link.is_none() {
        return false;
    }
    let anchor = tile.anchor_pos().unwrap_or(pos);

    let footprint = match grid.get(anchor).map(|a| a.link) {
        Some(Some(StructureLink::Anchor { footprint })) => footprint,
        // Typed but never placed through `build`, e.g. seeded terrain.
        Some(None) if anchor == pos => Footprint::SINGLE,
        _ => {
            warn!(
                "demolish: ({}, {}) points at ({}, {}) which is not an anchor, clearing the tile alone",
                pos.x, pos.y, anchor.x, anchor.y
            );
            clear_tile(pos, grid, visuals);
            return true;
        }
    };

    let prior_type = grid.tile_type(anchor).unwrap_or_default();

    for (dx, dy) in footprint.offsets() {
        let Some(cell) = grid.offset(anchor, dx, dy) else {
            continue;
        };
        let belongs = cell == anchor || grid.get(cell).and_then(|t| t.parent()) == Some(anchor);
        if belongs {
            clear_tile(cell, grid, visuals);
        }
    }

    if prior_type == TileType::Road {
        let neighbors = grid.road_neighbors(anchor);
        update_roads(&neighbors, grid, catalog, visuals);
    }

    debug!(
        "demolished {:?} anchored at ({}, {})",
        prior_type, anchor.x, anchor.y
    );
    true
}

fn clear_tile<V: VisualFactory>(pos: GridPos, grid: &mut TileGrid, visuals: &mut V) {
    if let Some(tile) = grid.get_mut(pos) {
        tile.clear();
        if let Some(visual) = tile.visual.take() {
            visuals.destroy(visual);
        }
    }
}
