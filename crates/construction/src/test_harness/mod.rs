//! # TestTown: headless harness for construction tests
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + `ConstructionPlugin`, a
//! small grid and the fixture catalog. Builder methods queue commands and
//! clicks; `tick()` runs one update.


pub use fixtures::*;
pub use recording::RecordingVisuals;

use bevy::app::App;
use bevy::prelude::*;

use crate::build_rng::BuildRng;
use crate::catalog::StructureKind;
use crate::controller::{
    BuildController, ConstructionCommand, HighlightCursor, PlacementFailed, TileClicked,
};
use crate::grid::{GridPos, Tile, TileGrid, TileType};
use crate::roads::{RoadOrientation, RoadPiece, RoadVariant};
use crate::visuals::{PlacedVisual, WorldRoot};
use crate::{ConstructionPlugin, ConstructionSet};

/// Every `PlacementFailed` seen since the town was created.
#[derive(Resource, Default)]
struct FailureLog(Vec<PlacementFailed>);

fn record_failures(mut reader: EventReader<PlacementFailed>, mut log: ResMut<FailureLog>) {
    log.0.extend(reader.read().copied());
}

pub struct TestTown {
    app: App,
}

impl TestTown {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Empty `width` x `height` grid with the fixture catalog.
    pub fn new(width: usize, height: usize) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(TileGrid::new(width, height));
        app.insert_resource(test_catalog());
        app.add_plugins(ConstructionPlugin);
        app.init_resource::<FailureLog>();
        app.add_systems(Update, record_failures.after(ConstructionSet));

        // Startup spawns the world root.
        app.update();
        Self { app }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.app.insert_resource(BuildRng::from_seed(seed));
        self
    }

    // -----------------------------------------------------------------------
    // Input
    // -----------------------------------------------------------------------

    pub fn command(&mut self, command: ConstructionCommand) -> &mut Self {
        self.app.world_mut().send_event(command);
        self
    }

    pub fn select(&mut self, kind: StructureKind) -> &mut Self {
        self.command(ConstructionCommand::Select(kind))
    }

    pub fn build_mode(&mut self) -> &mut Self {
        self.command(ConstructionCommand::EnterBuildMode)
    }

    pub fn demolish_mode(&mut self) -> &mut Self {
        self.command(ConstructionCommand::EnterDemolishMode)
    }

    pub fn disable(&mut self) -> &mut Self {
        self.command(ConstructionCommand::Disable)
    }

    pub fn click(&mut self, x: usize, y: usize) -> &mut Self {
        self.app.world_mut().send_event(TileClicked {
            pos: GridPos::new(x, y),
        });
        self
    }

    pub fn move_cursor(&mut self, position: Vec3) -> &mut Self {
        self.app.world_mut().resource_mut::<HighlightCursor>().position = Some(position);
        self
    }

    /// Select, enter build mode and click, one update per step.
    pub fn place(&mut self, kind: StructureKind, x: usize, y: usize) -> &mut Self {
        self.select(kind).build_mode().tick().click(x, y).tick()
    }

    /// Enter demolish mode and click.
    pub fn bulldoze(&mut self, x: usize, y: usize) -> &mut Self {
        self.demolish_mode().tick().click(x, y).tick()
    }

    pub fn tick(&mut self) -> &mut Self {
        self.app.update();
        self
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn grid(&self) -> &TileGrid {
        self.app.world().resource::<TileGrid>()
    }

    pub fn controller(&self) -> &BuildController {
        self.app.world().resource::<BuildController>()
    }

    pub fn tile(&self, x: usize, y: usize) -> &Tile {
        self.grid()
            .get(GridPos::new(x, y))
            .expect("tile outside the test grid")
    }

    pub fn failures(&self) -> &[PlacementFailed] {
        &self.app.world().resource::<FailureLog>().0
    }

    pub fn entity_exists(&self, entity: Entity) -> bool {
        self.app.world().entities().contains(entity)
    }

    pub fn scene_of(&self, entity: Entity) -> Option<Handle<Scene>> {
        self.app
            .world()
            .get::<SceneRoot>(entity)
            .map(|root| root.0.clone())
    }

    pub fn transform_of(&self, entity: Entity) -> Option<Transform> {
        self.app.world().get::<Transform>(entity).copied()
    }

    pub fn parent_of(&self, entity: Entity) -> Option<Entity> {
        self.app.world().get::<Parent>(entity).map(|p| p.get())
    }

    pub fn world_root(&mut self) -> Option<Entity> {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<Entity, With<WorldRoot>>();
        query.iter(world).next()
    }

    pub fn placed_visual_count(&mut self) -> usize {
        let world = self.app.world_mut();
        let mut query = world.query_filtered::<(), With<PlacedVisual>>();
        query.iter(world).count()
    }

    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    pub fn assert_tile_type(&self, x: usize, y: usize, expected: TileType) {
        assert_eq!(
            self.tile(x, y).tile_type,
            expected,
            "tile ({x}, {y}) has the wrong type"
        );
    }

    pub fn assert_road_piece(
        &self,
        x: usize,
        y: usize,
        variant: RoadVariant,
        orientation: RoadOrientation,
    ) {
        let visual = self
            .tile(x, y)
            .visual
            .unwrap_or_else(|| panic!("road ({x}, {y}) has no visual"));
        let expected_scene = scene(match variant {
            RoadVariant::Straight => ROAD_STRAIGHT,
            RoadVariant::Corner => ROAD_CORNER,
            RoadVariant::Tee => ROAD_TEE,
            RoadVariant::Cross => ROAD_CROSS,
        });
        assert_eq!(
            self.scene_of(visual),
            Some(expected_scene),
            "road ({x}, {y}) shows the wrong piece"
        );
        let expected = RoadPiece {
            variant,
            orientation,
        }
        .transform(GridPos::new(x, y));
        let actual = self
            .transform_of(visual)
            .unwrap_or_else(|| panic!("road ({x}, {y}) visual has no transform"));
        assert!(
            actual.translation.abs_diff_eq(expected.translation, 1e-5),
            "road ({x}, {y}) at {:?}, expected {:?}",
            actual.translation,
            expected.translation
        );
        assert!(
            actual.rotation.abs_diff_eq(expected.rotation, 1e-5),
            "road ({x}, {y}) rotated {:?}, expected {:?}",
            actual.rotation,
            expected.rotation
        );
    }
}
