use bevy::prelude::*;

use crate::build_rng::BuildRng;
use crate::catalog::StructureCatalog;
use crate::config::PREVIEW_OFFSET;
use crate::grid::TileGrid;
use crate::visuals::{PlacedVisual, SceneVisuals, WorldRoot};

use super::{
    BuildController, ConstructionCommand, HighlightCursor, PlacementFailed, TileClicked,
};

pub fn apply_construction_commands(
    mut commands: Commands,
    mut events: EventReader<ConstructionCommand>,
    mut controller: ResMut<BuildController>,
    catalog: Res<StructureCatalog>,
    root: Query<Entity, With<WorldRoot>>,
) {
    let mut visuals = SceneVisuals::new(&mut commands, root.get_single().ok());
    for command in events.read() {
        match *command {
            ConstructionCommand::Select(kind) => match catalog.mapping_for(kind) {
                Some(mapping) => controller.set_selection(mapping, &mut visuals),
                None => warn!("select: {:?} is not in the structure catalog", kind),
            },
            ConstructionCommand::EnterBuildMode => {
                controller.enter_build_mode(&catalog, &mut visuals);
            }
            ConstructionCommand::EnterDemolishMode => controller.enter_demolish_mode(&mut visuals),
            ConstructionCommand::Disable => controller.disable(&mut visuals),
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn apply_tile_clicks(
    mut commands: Commands,
    mut clicks: EventReader<TileClicked>,
    mut failures: EventWriter<PlacementFailed>,
    controller: Res<BuildController>,
    mut grid: ResMut<TileGrid>,
    catalog: Res<StructureCatalog>,
    mut rng: ResMut<BuildRng>,
    root: Query<Entity, With<WorldRoot>>,
) {
    let mut visuals = SceneVisuals::new(&mut commands, root.get_single().ok());
    for click in clicks.read() {
        if let Err(error) =
            controller.apply_click(click.pos, &mut grid, &catalog, &mut visuals, &mut rng.0)
        {
            failures.send(PlacementFailed {
                pos: click.pos,
                error,
            });
        }
    }
}

/// Keep the preview instance under the highlight cursor.
pub fn follow_highlight(
    cursor: Res<HighlightCursor>,
    controller: Res<BuildController>,
    mut transforms: Query<&mut Transform, With<PlacedVisual>>,
) {
    let (Some(preview), Some(position)) = (controller.preview(), cursor.position) else {
        return;
    };
    if let Ok(mut transform) = transforms.get_mut(preview) {
        transform.translation = position - PREVIEW_OFFSET;
    }
}
