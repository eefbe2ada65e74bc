use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{GRID_HEIGHT, GRID_WIDTH, TILE_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum TileType {
    #[default]
    Empty,
    Road,
    Residential,
    Commercial,
    Industrial,
    Park,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
}

impl GridPos {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// World-space position of the tile's origin corner on the ground plane.
    /// Grid `y` runs along world `z`.
    pub fn to_world(self) -> Vec3 {
        Vec3::new(self.x as f32 * TILE_SIZE, 0.0, self.y as f32 * TILE_SIZE)
    }
}

impl From<(usize, usize)> for GridPos {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

/// Cardinal neighbour direction. North is +y, East is +x.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All directions in ordinal order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Stable ordinal, North = 1 through West = 4.
    pub fn ordinal(self) -> u8 {
        match self {
            Direction::North => 1,
            Direction::East => 2,
            Direction::South => 3,
            Direction::West => 4,
        }
    }

    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (0, 1),
            Direction::East => (1, 0),
            Direction::South => (0, -1),
            Direction::West => (-1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

/// Size of a structure in tiles, measured from its anchor towards +x / +y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Footprint {
    pub width: usize,
    pub height: usize,
}

impl Footprint {
    pub const SINGLE: Footprint = Footprint {
        width: 1,
        height: 1,
    };

    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Offsets covered by the footprint, row by row.
    pub fn offsets(self) -> impl Iterator<Item = (usize, usize)> {
        (0..self.height).flat_map(move |dy| (0..self.width).map(move |dx| (dx, dy)))
    }
}

/// How a tile takes part in a placed structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StructureLink {
    /// Origin cell of the structure. Carries the footprint so removal only
    /// has to visit the covered cells.
    Anchor { footprint: Footprint },
    /// Any other covered cell.
    Member { anchor: GridPos },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pos: GridPos,
    pub tile_type: TileType,
    pub link: Option<StructureLink>,
    /// Rendered instance for this tile, owned by the visual layer.
    pub visual: Option<Entity>,
}

impl Tile {
    fn new(pos: GridPos) -> Self {
        Self {
            pos,
            tile_type: TileType::Empty,
            link: None,
            visual: None,
        }
    }

    pub fn pos(&self) -> GridPos {
        self.pos
    }

    pub fn is_empty(&self) -> bool {
        self.tile_type == TileType::Empty
    }

    pub fn is_road(&self) -> bool {
        self.tile_type == TileType::Road
    }

    pub fn is_anchor(&self) -> bool {
        matches!(self.link, Some(StructureLink::Anchor { .. }))
    }

    /// Anchor this tile points at. `None` for anchors and unlinked tiles.
    pub fn parent(&self) -> Option<GridPos> {
        match self.link {
            Some(StructureLink::Member { anchor }) => Some(anchor),
            _ => None,
        }
    }

    /// Anchor of the structure covering this tile, the tile itself for anchors.
    pub fn anchor_pos(&self) -> Option<GridPos> {
        match self.link {
            Some(StructureLink::Anchor { .. }) => Some(self.pos),
            Some(StructureLink::Member { anchor }) => Some(anchor),
            None => None,
        }
    }

    pub fn footprint(&self) -> Option<Footprint> {
        match self.link {
            Some(StructureLink::Anchor { footprint }) => Some(footprint),
            _ => None,
        }
    }

    /// Reset type and link. The visual is left for the caller to destroy.
    pub(crate) fn clear(&mut self) {
        self.tile_type = TileType::Empty;
        self.link = None;
    }
}

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct TileGrid {
    tiles: Vec<Tile>,
    pub width: usize,
    pub height: usize,
}

impl Default for TileGrid {
    fn default() -> Self {
        Self::new(GRID_WIDTH, GRID_HEIGHT)
    }
}

impl TileGrid {
    pub fn new(width: usize, height: usize) -> Self {
        let tiles = (0..height)
            .flat_map(|y| (0..width).map(move |x| Tile::new(GridPos::new(x, y))))
            .collect();
        Self {
            tiles,
            width,
            height,
        }
    }

    #[inline]
    fn index(&self, pos: GridPos) -> usize {
        pos.y * self.width + pos.x
    }

    #[inline]
    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    #[inline]
    pub fn get(&self, pos: GridPos) -> Option<&Tile> {
        if self.in_bounds(pos) {
            Some(&self.tiles[self.index(pos)])
        } else {
            None
        }
    }

    #[inline]
    pub fn get_mut(&mut self, pos: GridPos) -> Option<&mut Tile> {
        if self.in_bounds(pos) {
            let idx = self.index(pos);
            Some(&mut self.tiles[idx])
        } else {
            None
        }
    }

    pub fn tile_type(&self, pos: GridPos) -> Option<TileType> {
        self.get(pos).map(|t| t.tile_type)
    }

    pub fn is_road(&self, pos: GridPos) -> bool {
        self.get(pos).is_some_and(Tile::is_road)
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// `pos` shifted by a non-negative offset, if still on the grid.
    pub fn offset(&self, pos: GridPos, dx: usize, dy: usize) -> Option<GridPos> {
        let target = GridPos::new(pos.x.checked_add(dx)?, pos.y.checked_add(dy)?);
        self.in_bounds(target).then_some(target)
    }

    pub fn neighbor(&self, pos: GridPos, dir: Direction) -> Option<GridPos> {
        let (dx, dy) = dir.offset();
        let x = pos.x.checked_add_signed(dx)?;
        let y = pos.y.checked_add_signed(dy)?;
        let target = GridPos::new(x, y);
        self.in_bounds(target).then_some(target)
    }

    /// In-bounds cardinal neighbours in ordinal order.
    pub fn neighbors4(&self, pos: GridPos) -> impl Iterator<Item = (Direction, GridPos)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.neighbor(pos, dir).map(|n| (dir, n)))
    }

    /// Positions of neighbouring road tiles, captured before any mutation.
    pub fn road_neighbors(&self, pos: GridPos) -> Vec<GridPos> {
        self.neighbors4(pos)
            .filter(|&(_, n)| self.is_road(n))
            .map(|(_, n)| n)
            .collect()
    }
}
