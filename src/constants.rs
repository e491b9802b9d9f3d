//! Tuning constants shared by the simulation core and the scene plugin.
//!
//! Runtime-overridable values (movement speed, map layout) have matching
//! fields on the resources in [`crate::settings`]; these constants provide
//! their defaults.

use std::time::Duration;

/// Player displacement per tick, in world units, once the input direction has
/// been normalised.
pub const MOVE_SPEED: f32 = 5.0;

/// Walk-cycle cadence in frames per second, independent of the tick rate.
pub const ANIMATION_FPS: u64 = 15;

/// Minimum wall-clock interval between two walk-cycle frame advances.
pub const FRAME_INTERVAL: Duration = Duration::from_nanos(1_000_000_000 / ANIMATION_FPS);

/// Number of frames in one walk cycle.
pub const WALK_CYCLE_FRAMES: u8 = 8;

/// Minimum wall-clock interval between two accepted spell samples, capping
/// pointer sampling at roughly 30 Hz.
pub const SAMPLE_INTERVAL: Duration = Duration::from_micros(33_300);

/// Width of the playable world in world units.
pub const MAP_WIDTH: f32 = 10_000.0;
/// Height of the playable world in world units.
pub const MAP_HEIGHT: f32 = 10_000.0;
/// Horizontal spawn coordinate of the player.
pub const SPAWN_X: f32 = 5_000.0;
/// Vertical spawn coordinate of the player.
pub const SPAWN_Y: f32 = 5_000.0;

/// Render depth of the player sprite, above the ground layer.
pub const PLAYER_DEPTH: f32 = 1.0;
