//! Player entity: spawning, keyboard movement and walk animation.
//!
//! The player's authoritative position is [`WorldPosition`], in scene
//! coordinates (y grows downwards, matching [`MapInfo`]). Its `Transform`
//! is derived from it each tick with y flipped into Bevy's world space.

use bevy::input::ButtonInput;
use bevy::prelude::*;
use bevy_ecs::system::SystemParam;
use log::info;

use crate::animation::AnimationState;
use crate::movement::{resolve_movement_with_speed, MoveInput};
use crate::settings::{MapInfo, PlayerSettings};
use crate::PLAYER_DEPTH;

/// Marker component for the player-controlled character.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct Player;

/// Position in scene coordinates.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Deref, DerefMut)]
#[reflect(Component, Default)]
pub struct WorldPosition(pub Vec2);

/// Current animation state of a character.
#[derive(Component, Default, Debug, Clone, Copy, PartialEq, Eq, Deref, DerefMut)]
pub struct PlayerAnimation(pub AnimationState);

/// Name of the sprite atlas frame a character should display.
#[derive(Component, Default, Debug, Clone, PartialEq, Eq, Deref)]
pub struct SpriteFrame(pub String);

/// Converts scene coordinates to Bevy world coordinates.
#[must_use]
pub const fn scene_to_world(point: Vec2) -> Vec2 {
    Vec2::new(point.x, -point.y)
}

/// Converts Bevy world coordinates to scene coordinates.
#[must_use]
pub const fn world_to_scene(point: Vec2) -> Vec2 {
    Vec2::new(point.x, -point.y)
}

/// Per-tick inputs needed to move the player.
#[derive(SystemParam)]
pub struct MovementContext<'w> {
    keyboard: Res<'w, ButtonInput<KeyCode>>,
    time: Res<'w, Time>,
    settings: Res<'w, PlayerSettings>,
}

impl MovementContext<'_> {
    /// Displacement to apply this tick.
    fn step(&self) -> Vec2 {
        resolve_movement_with_speed(
            MoveInput::from_keys(&self.keyboard),
            self.settings.move_speed,
        )
    }
}

/// Spawns the player at the map's spawn point.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn spawn_player_system(mut commands: Commands, map: Res<MapInfo>) {
    let spawn = map.spawn_position();
    let animation = AnimationState::default();
    commands.spawn((
        Player,
        Name::new("Player"),
        WorldPosition(spawn),
        PlayerAnimation(animation),
        SpriteFrame(animation.frame_name()),
        Transform::from_translation(scene_to_world(spawn).extend(PLAYER_DEPTH)),
    ));
    info!("player spawned at ({}, {})", spawn.x, spawn.y);
}

/// Moves the player from keyboard input and advances its animation.
///
/// `SpriteFrame` is only written when the frame name changes so that
/// change detection downstream reflects visible frame changes.
pub fn player_movement_system(
    ctx: MovementContext,
    mut players: Query<(&mut WorldPosition, &mut PlayerAnimation, &mut SpriteFrame), With<Player>>,
) {
    let step = ctx.step();
    let now = ctx.time.elapsed();
    for (mut position, mut animation, mut frame) in &mut players {
        if step != Vec2::ZERO {
            **position += step;
        }
        **animation = animation.next(step.x, step.y, now);
        let name = animation.frame_name();
        if frame.0 != name {
            frame.0 = name;
        }
    }
}

/// Mirrors [`WorldPosition`] onto the player's `Transform`.
pub fn sync_player_transform_system(
    mut players: Query<(&WorldPosition, &mut Transform), (With<Player>, Changed<WorldPosition>)>,
) {
    for (position, mut transform) in &mut players {
        transform.translation = scene_to_world(**position).extend(PLAYER_DEPTH);
    }
}
