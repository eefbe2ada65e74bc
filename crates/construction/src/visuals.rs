use bevy::prelude::*;

/// Parent entity for every placed road and building instance.
#[derive(Component, Debug, Default)]
pub struct WorldRoot;

/// Marker on scene instances spawned for tiles (and the build preview).
#[derive(Component, Debug, Default)]
pub struct PlacedVisual;

/// Spawns and destroys the rendered instances tiles point at.
///
/// The placement engine and road autotiler only ever talk to this trait, so
/// they can run against a recording fake in tests.
pub trait VisualFactory {
    fn spawn(&mut self, scene: &Handle<Scene>, transform: Transform) -> Entity;

    /// Destroying an entity that is already gone must be a no-op.
    fn destroy(&mut self, visual: Entity);
}

/// `VisualFactory` backed by `Commands`: every instance is a `SceneRoot`
/// parented under the [`WorldRoot`].
pub struct SceneVisuals<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    root: Option<Entity>,
}

impl<'a, 'w, 's> SceneVisuals<'a, 'w, 's> {
    pub fn new(commands: &'a mut Commands<'w, 's>, root: Option<Entity>) -> Self {
        Self { commands, root }
    }
}

impl VisualFactory for SceneVisuals<'_, '_, '_> {
    fn spawn(&mut self, scene: &Handle<Scene>, transform: Transform) -> Entity {
        let mut entity = self
            .commands
            .spawn((PlacedVisual, SceneRoot(scene.clone()), transform));
        if let Some(root) = self.root {
            entity.set_parent(root);
        }
        entity.id()
    }

    fn destroy(&mut self, visual: Entity) {
        if let Some(entity) = self.commands.get_entity(visual) {
            entity.despawn_recursive();
        }
    }
}

pub fn spawn_world_root(mut commands: Commands, existing: Query<(), With<WorldRoot>>) {
    if existing.is_empty() {
        commands.spawn((
            WorldRoot,
            Name::new("World root"),
            Transform::default(),
            Visibility::default(),
        ));
    }
}
