//! Build controller: which structure is selected, whether clicks build or
//! demolish, and the preview instance that follows the highlight cursor.
//!
//! Input handling lives elsewhere. It reports clicks as [`TileClicked`]
//! (already filtered for clicks over UI) and mode changes as
//! [`ConstructionCommand`].

mod systems;

use bevy::prelude::*;
use rand::Rng;

use crate::catalog::{StructureCatalog, StructureKind, StructureMapping};
use crate::grid::{GridPos, TileGrid};
use crate::placement::{build, demolish, PlacementError};
use crate::visuals::VisualFactory;

pub use systems::{apply_construction_commands, apply_tile_clicks, follow_highlight};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BuildMode {
    Disabled,
    Build,
    #[default]
    Demolish,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionCommand {
    Select(StructureKind),
    EnterBuildMode,
    EnterDemolishMode,
    Disable,
}

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileClicked {
    pub pos: GridPos,
}

/// Sent when a click in build mode could not place anything.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementFailed {
    pub pos: GridPos,
    pub error: PlacementError,
}

/// World position of the highlight cursor, written by whatever tracks the
/// pointer over the grid.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct HighlightCursor {
    pub position: Option<Vec3>,
}

#[derive(Resource, Debug, Default)]
pub struct BuildController {
    mode: BuildMode,
    selection: Option<StructureKind>,
    preview: Option<Entity>,
}

impl BuildController {
    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    pub fn selection(&self) -> Option<StructureKind> {
        self.selection
    }

    pub fn preview(&self) -> Option<Entity> {
        self.preview
    }

    /// A preview is shown while build mode has something selected.
    pub fn is_placing(&self) -> bool {
        self.preview.is_some()
    }

    /// Select what the next build click places. In build mode the preview is
    /// swapped for the new structure.
    pub fn set_selection<V: VisualFactory>(&mut self, mapping: &StructureMapping, visuals: &mut V) {
        self.selection = Some(mapping.kind);
        if self.mode == BuildMode::Build {
            self.clear_preview(visuals);
            self.preview = spawn_preview(mapping, visuals);
        }
    }

    pub fn enter_build_mode<V: VisualFactory>(
        &mut self,
        catalog: &StructureCatalog,
        visuals: &mut V,
    ) {
        self.mode = BuildMode::Build;
        if self.preview.is_some() {
            return;
        }
        if let Some(mapping) = self.selection.and_then(|kind| catalog.mapping_for(kind)) {
            self.preview = spawn_preview(mapping, visuals);
        }
    }

    pub fn enter_demolish_mode<V: VisualFactory>(&mut self, visuals: &mut V) {
        self.mode = BuildMode::Demolish;
        self.clear_preview(visuals);
    }

    pub fn disable<V: VisualFactory>(&mut self, visuals: &mut V) {
        self.mode = BuildMode::Disabled;
        self.clear_preview(visuals);
    }

    /// Act on a click at `pos` according to the current mode.
    pub fn apply_click<V: VisualFactory, R: Rng + ?Sized>(
        &self,
        pos: GridPos,
        grid: &mut TileGrid,
        catalog: &StructureCatalog,
        visuals: &mut V,
        rng: &mut R,
    ) -> Result<(), PlacementError> {
        match self.mode {
            BuildMode::Disabled => Ok(()),
            BuildMode::Demolish => {
                demolish(pos, grid, catalog, visuals);
                Ok(())
            }
            BuildMode::Build => {
                let kind = self.selection.ok_or(PlacementError::NoSelection)?;
                let mapping = catalog
                    .mapping_for(kind)
                    .ok_or(PlacementError::NotInCatalog(kind))?;
                build(mapping, pos, grid, catalog, visuals, rng)
            }
        }
    }

    fn clear_preview<V: VisualFactory>(&mut self, visuals: &mut V) {
        if let Some(preview) = self.preview.take() {
            visuals.destroy(preview);
        }
    }
}

fn spawn_preview<V: VisualFactory>(mapping: &StructureMapping, visuals: &mut V) -> Option<Entity> {
    let scene = mapping.variants.first()?;
    Some(visuals.spawn(scene, Transform::default()))
}
