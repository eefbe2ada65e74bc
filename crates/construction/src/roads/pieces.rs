use bevy::prelude::*;

use crate::catalog::RoadPieceSet;
use crate::config::TILE_SIZE;
use crate::grid::{Direction, GridPos, TileGrid};

/// Set of cardinal directions that hold a road, one bit per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RoadNeighbors(u8);

impl RoadNeighbors {
    pub const NONE: RoadNeighbors = RoadNeighbors(0);
    pub const ALL: RoadNeighbors = RoadNeighbors(0b1111);

    fn bit(dir: Direction) -> u8 {
        1 << (dir.ordinal() - 1)
    }

    pub fn from_directions(dirs: impl IntoIterator<Item = Direction>) -> Self {
        dirs.into_iter().fold(Self::NONE, Self::with)
    }

    /// Directions whose neighbour is on the grid and is a road.
    pub fn from_grid(grid: &TileGrid, pos: GridPos) -> Self {
        Self::from_directions(
            grid.neighbors4(pos)
                .filter(|&(_, n)| grid.is_road(n))
                .map(|(dir, _)| dir),
        )
    }

    pub fn with(self, dir: Direction) -> Self {
        Self(self.0 | Self::bit(dir))
    }

    pub fn contains(self, dir: Direction) -> bool {
        self.0 & Self::bit(dir) != 0
    }

    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Present directions in ascending ordinal order.
    pub fn directions(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }

    pub fn ordinals(self) -> Vec<u8> {
        self.directions().map(Direction::ordinal).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoadVariant {
    Straight,
    Corner,
    Tee,
    Cross,
}

impl RoadVariant {
    /// Position of this piece in the road mapping's variant list.
    pub fn index(self) -> usize {
        match self {
            RoadVariant::Straight => 0,
            RoadVariant::Corner => 1,
            RoadVariant::Tee => 2,
            RoadVariant::Cross => 3,
        }
    }

    pub fn scene(self, pieces: &RoadPieceSet) -> &Handle<Scene> {
        match self {
            RoadVariant::Straight => &pieces.straight,
            RoadVariant::Corner => &pieces.corner,
            RoadVariant::Tee => &pieces.tee,
            RoadVariant::Cross => &pieces.cross,
        }
    }
}

/// Yaw applied to a road piece. The meshes pivot on a tile corner, so every
/// rotation carries a fixed shift that puts the mesh back on its own tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoadOrientation {
    Unrotated,
    Quarter,
    Half,
    NegativeQuarter,
}

impl RoadOrientation {
    pub fn yaw_degrees(self) -> f32 {
        match self {
            RoadOrientation::Unrotated => 0.0,
            RoadOrientation::Quarter => 90.0,
            RoadOrientation::Half => 180.0,
            RoadOrientation::NegativeQuarter => -90.0,
        }
    }

    pub fn rotation(self) -> Quat {
        Quat::from_rotation_y(self.yaw_degrees().to_radians())
    }

    /// Shift in tiles along (x, 0, z).
    pub fn offset(self) -> Vec3 {
        let tiles = match self {
            RoadOrientation::Unrotated => Vec3::ZERO,
            RoadOrientation::Quarter => Vec3::new(0.0, 0.0, 1.0),
            RoadOrientation::Half => Vec3::new(1.0, 0.0, 1.0),
            RoadOrientation::NegativeQuarter => Vec3::new(1.0, 0.0, 0.0),
        };
        tiles * TILE_SIZE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoadPiece {
    pub variant: RoadVariant,
    pub orientation: RoadOrientation,
}

impl RoadPiece {
    pub fn transform(self, pos: GridPos) -> Transform {
        Transform::from_translation(pos.to_world() + self.orientation.offset())
            .with_rotation(self.orientation.rotation())
    }
}

/// Pick the road piece for a neighbour set.
///
/// Base meshes: the straight runs east-west, the corner joins south and west,
/// the tee is closed to the north.
pub fn classify(neighbors: RoadNeighbors) -> RoadPiece {
    use RoadOrientation::*;
    use RoadVariant::*;

    let n = neighbors.contains(Direction::North);
    let e = neighbors.contains(Direction::East);
    let s = neighbors.contains(Direction::South);
    let w = neighbors.contains(Direction::West);

    let (variant, orientation) = match (n, e, s, w) {
        // isolated and dead ends
        (false, false, false, false) => (Straight, Unrotated),
        (false, true, false, false) | (false, false, false, true) => (Straight, Unrotated),
        (true, false, false, false) | (false, false, true, false) => (Straight, Quarter),
        // straight through
        (false, true, false, true) => (Straight, Unrotated),
        (true, false, true, false) => (Straight, Quarter),
        // corners
        (false, false, true, true) => (Corner, Unrotated),
        (true, false, false, true) => (Corner, Quarter),
        (true, true, false, false) => (Corner, Half),
        (false, true, true, false) => (Corner, NegativeQuarter),
        // tees, named by the missing arm
        (false, true, true, true) => (Tee, Unrotated),
        (true, false, true, true) => (Tee, Quarter),
        (true, true, false, true) => (Tee, Half),
        (true, true, true, false) => (Tee, NegativeQuarter),
        (true, true, true, true) => (Cross, Unrotated),
    };

    RoadPiece {
        variant,
        orientation,
    }
}
