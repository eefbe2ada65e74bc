//! Placement engine: validate and commit multi-tile structures, and tear them
//! down again.
//!
//! Both operations are all-or-nothing. A rejected build leaves the grid
//! untouched; a demolition clears every tile of the structure in one call.

mod build;
mod demolish;

use crate::catalog::StructureKind;
use crate::grid::GridPos;

pub use build::build;
pub use demolish::demolish;

/// Why a build request was turned into a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// The mapping assigns `TileType::Empty`.
    EmptyType,
    /// The mapping's footprint has no area.
    EmptyFootprint,
    /// A non-road mapping without any scene variants.
    MissingVariants,
    /// A footprint tile falls off the grid.
    OutOfBounds { pos: GridPos },
    /// A footprint tile is already built on.
    Occupied { pos: GridPos },
    /// Build mode without a selected structure.
    NoSelection,
    /// The selected structure has no catalog entry.
    NotInCatalog(StructureKind),
}
