//! Scene plugin driving the per-tick simulation.
//!
//! `SpellwalkPlugin` is headless: it needs Bevy's scheduling, `Time` and
//! keyboard state but no window or renderer. Rendering concerns live in
//! [`crate::presentation`] behind the `render` feature.

use bevy::input::ButtonInput;
use bevy::prelude::*;

use crate::player::{
    player_movement_system, spawn_player_system, sync_player_transform_system, Player,
    WorldPosition,
};
use crate::settings::{MapInfo, PlayerSettings};
use crate::spell::SpellPlugin;

/// System set containing every per-tick simulation system.
///
/// Presentation systems that read simulated state run after this set;
/// systems feeding platform input into the simulation run before it.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SimulationSet;

/// Bevy plugin installing the walking and spell-drawing scene.
///
/// # Responsibilities
///
/// - Initialises [`MapInfo`], [`PlayerSettings`] and the keyboard state
///   unless the host inserted them first.
/// - Spawns the player at startup.
/// - Moves and animates the player each tick.
/// - Installs [`SpellPlugin`] for pointer gestures.
///
/// # Examples
///
/// ```
/// use bevy::prelude::*;
/// use spellwalk::SpellwalkPlugin;
///
/// let mut app = App::new();
/// app.add_plugins(MinimalPlugins).add_plugins(SpellwalkPlugin);
/// app.update();
/// ```
#[derive(Debug, Default)]
pub struct SpellwalkPlugin;

impl Plugin for SpellwalkPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<Player>();
        app.register_type::<WorldPosition>();

        app.init_resource::<MapInfo>();
        app.init_resource::<PlayerSettings>();
        app.init_resource::<ButtonInput<KeyCode>>();

        app.add_plugins(SpellPlugin);

        app.add_systems(Startup, spawn_player_system);
        app.add_systems(
            Update,
            (player_movement_system, sync_player_transform_system)
                .chain()
                .in_set(SimulationSet),
        );
    }
}
