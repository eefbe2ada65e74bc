//! Road autotiling: choose the straight / corner / tee / cross piece and its
//! rotation for a road tile from which of its four neighbours are roads.

mod pieces;
mod update;

pub use pieces::{classify, RoadNeighbors, RoadOrientation, RoadPiece, RoadVariant};
pub use update::{update_road, update_roads};
