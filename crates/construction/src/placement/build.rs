use bevy::prelude::*;
use rand::Rng;

use crate::catalog::{StructureCatalog, StructureMapping};
use crate::grid::{GridPos, StructureLink, TileGrid, TileType};
use crate::roads::{update_road, update_roads};
use crate::visuals::VisualFactory;

use super::PlacementError;

/// Place `mapping` with its anchor at `origin`.
///
/// Every footprint tile must be on the grid and empty; otherwise nothing is
/// written and the reason is returned. Roads get their piece from the
/// autotiler, and adjacent roads are re-tiled to connect to the new one.
pub fn build<V: VisualFactory, R: Rng + ?Sized>(
    mapping: &StructureMapping,
    origin: GridPos,
    grid: &mut TileGrid,
    catalog: &StructureCatalog,
    visuals: &mut V,
    rng: &mut R,
) -> Result<(), PlacementError> {
    if let Err(err) = validate(mapping, origin, grid) {
        debug!(
            "build {:?} at ({}, {}) rejected: {:?}",
            mapping.kind, origin.x, origin.y, err
        );
        return Err(err);
    }

    commit(mapping, origin, grid);

    if mapping.is_road() {
        let neighbors = grid.road_neighbors(origin);
        update_road(origin, grid, catalog, visuals);
        update_roads(&neighbors, grid, catalog, visuals);
    } else {
        let index = pick_variant(mapping, rng);
        if let Some(scene) = mapping.variants.get(index) {
            let visual = visuals.spawn(scene, Transform::from_translation(origin.to_world()));
            if let Some(tile) = grid.get_mut(origin) {
                tile.visual = Some(visual);
            }
        }
    }

    debug!(
        "built {:?} at ({}, {}), footprint {}x{}",
        mapping.kind, origin.x, origin.y, mapping.footprint.width, mapping.footprint.height
    );
    Ok(())
}

fn validate(
    mapping: &StructureMapping,
    origin: GridPos,
    grid: &TileGrid,
) -> Result<(), PlacementError> {
    if mapping.assigned_type == TileType::Empty {
        return Err(PlacementError::EmptyType);
    }
    if mapping.footprint.is_empty() {
        return Err(PlacementError::EmptyFootprint);
    }
    if !mapping.is_road() && mapping.variants.is_empty() {
        return Err(PlacementError::MissingVariants);
    }

    for (dx, dy) in mapping.footprint.offsets() {
        let Some(pos) = grid.offset(origin, dx, dy) else {
            return Err(PlacementError::OutOfBounds {
                pos: GridPos::new(origin.x.saturating_add(dx), origin.y.saturating_add(dy)),
            });
        };
        match grid.get(pos) {
            Some(tile) if tile.is_empty() => {}
            _ => return Err(PlacementError::Occupied { pos }),
        }
    }
    Ok(())
}

fn commit(mapping: &StructureMapping, origin: GridPos, grid: &mut TileGrid) {
    let footprint = mapping.footprint;
    for (dx, dy) in footprint.offsets() {
        let Some(pos) = grid.offset(origin, dx, dy) else {
            continue;
        };
        if let Some(tile) = grid.get_mut(pos) {
            tile.tile_type = mapping.assigned_type;
            tile.link = Some(if pos == origin {
                StructureLink::Anchor { footprint }
            } else {
                StructureLink::Member { anchor: origin }
            });
        }
    }
}

/// Variant index for a new instance: always the first unless the mapping
/// asks for random variation, then uniform over all variants.
fn pick_variant<R: Rng + ?Sized>(mapping: &StructureMapping, rng: &mut R) -> usize {
    if mapping.random_variation && !mapping.variants.is_empty() {
        rng.gen_range(0..mapping.variants.len())
    } else {
        0
    }
}
