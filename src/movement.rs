//! Keyboard-driven player displacement.
//!
//! Turns the held state of the four movement keys into the vector added to
//! the player's world position each tick.

use bevy::input::ButtonInput;
use bevy::prelude::*;

use crate::MOVE_SPEED;

/// Directional key states sampled once per tick.
///
/// Captures whether each movement key (WASD or arrow keys) is currently held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "This struct represents the pressed state of exactly four directional keys."
)]
pub struct MoveInput {
    /// Whether an "up" key (W or `ArrowUp`) is held.
    pub up: bool,
    /// Whether a "down" key (S or `ArrowDown`) is held.
    pub down: bool,
    /// Whether a "left" key (A or `ArrowLeft`) is held.
    pub left: bool,
    /// Whether a "right" key (D or `ArrowRight`) is held.
    pub right: bool,
}

impl MoveInput {
    /// Reads the movement keys from Bevy's keyboard state.
    #[must_use]
    pub fn from_keys(keyboard: &ButtonInput<KeyCode>) -> Self {
        Self {
            up: keyboard.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp]),
            down: keyboard.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]),
            left: keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]),
            right: keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]),
        }
    }

    /// Unnormalised axis sums in scene coordinates (y grows downwards).
    ///
    /// Opposing keys cancel each other out.
    #[must_use]
    pub const fn raw_axes(self) -> (i8, i8) {
        const fn held(flag: bool) -> i8 {
            if flag {
                1
            } else {
                0
            }
        }

        let horizontal = held(self.right) - held(self.left);
        let vertical = held(self.down) - held(self.up);
        (horizontal, vertical)
    }
}

/// Computes this tick's displacement using the default [`MOVE_SPEED`].
///
/// # Examples
///
/// ```
/// use spellwalk::movement::{resolve_movement, MoveInput};
///
/// let step = resolve_movement(MoveInput { right: true, ..Default::default() });
/// assert!((step.x - 5.0).abs() < f32::EPSILON);
///
/// let still = resolve_movement(MoveInput { up: true, down: true, ..Default::default() });
/// assert_eq!(still, bevy::math::Vec2::ZERO);
/// ```
#[must_use]
pub fn resolve_movement(input: MoveInput) -> Vec2 {
    resolve_movement_with_speed(input, MOVE_SPEED)
}

/// Computes this tick's displacement scaled to `speed` world units.
///
/// Diagonal movement is normalised so it is no faster than moving along a
/// single axis. With no effective input the result is exactly
/// [`Vec2::ZERO`].
#[must_use]
pub fn resolve_movement_with_speed(input: MoveInput, speed: f32) -> Vec2 {
    let (horizontal, vertical) = input.raw_axes();
    let raw = Vec2::new(f32::from(horizontal), f32::from(vertical));
    raw.normalize_or_zero() * speed
}
