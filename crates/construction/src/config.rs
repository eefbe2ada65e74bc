use bevy::math::Vec3;

pub const GRID_WIDTH: usize = 64;
pub const GRID_HEIGHT: usize = 64;

/// World-space edge length of one tile. Road piece offsets are expressed in
/// multiples of this.
pub const TILE_SIZE: f32 = 1.0;

/// The highlight cursor sits one tile in on both axes relative to the
/// footprint origin, so the preview is drawn at `cursor - PREVIEW_OFFSET`.
pub const PREVIEW_OFFSET: Vec3 = Vec3::new(TILE_SIZE, 0.0, TILE_SIZE);
