//! Walk/idle sprite animation driven by movement and wall-clock time.
//!
//! [`AnimationState`] is a small `Copy` value. Each tick the scene replaces
//! it with the result of [`AnimationState::next`]; the transition never
//! mutates the previous state, so it can be exercised in isolation.
//!
//! The walk cycle advances at [`FRAME_INTERVAL`] regardless of how often the
//! scene ticks. A frame only advances once strictly more than one interval
//! has elapsed since the last visible frame change.

use std::time::Duration;

use bevy::prelude::*;

use crate::direction::Direction;
use crate::{FRAME_INTERVAL, WALK_CYCLE_FRAMES};

/// Whether the character is moving this tick.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Motion {
    /// Moving; the walk cycle is playing.
    Walking,
    /// Standing still on the facing direction's base pose.
    #[default]
    Idle,
}

/// Animation state of a single character.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationState {
    /// Walk-cycle frame, always below [`WALK_CYCLE_FRAMES`]. Zero while idle.
    pub frame: u8,
    /// Current motion mode.
    pub motion: Motion,
    /// Direction the sprite is drawn facing.
    pub facing: Direction,
    /// Time of the last visible frame change.
    pub last_frame_change: Duration,
}

impl AnimationState {
    /// Produces the state for this tick from the displacement `(dx, dy)` and
    /// the current time `now`.
    ///
    /// A stationary displacement keeps the previous facing. The frame resets
    /// to zero whenever the motion mode changes or the character is idle,
    /// and `last_frame_change` is stamped whenever the frame number differs
    /// from the previous one.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::Duration;
    /// use spellwalk::animation::{AnimationState, Motion};
    /// use spellwalk::Direction;
    ///
    /// let prev = AnimationState {
    ///     frame: 7,
    ///     motion: Motion::Walking,
    ///     facing: Direction::E,
    ///     last_frame_change: Duration::ZERO,
    /// };
    /// let next = prev.next(1.0, 0.0, Duration::from_millis(100));
    /// assert_eq!(next.frame, 0);
    /// assert_eq!(next.last_frame_change, Duration::from_millis(100));
    /// ```
    #[must_use]
    pub fn next(self, dx: f32, dy: f32, now: Duration) -> Self {
        let motion = if dx != 0.0 || dy != 0.0 {
            Motion::Walking
        } else {
            Motion::Idle
        };

        let elapsed = now.saturating_sub(self.last_frame_change);
        let frame_change_due = elapsed > FRAME_INTERVAL;

        let frame = if motion == self.motion && motion == Motion::Walking {
            (self.frame + u8::from(frame_change_due)) % WALK_CYCLE_FRAMES
        } else {
            0
        };

        let facing = Direction::closest(dx, dy).unwrap_or(self.facing);

        let last_frame_change = if frame == self.frame {
            self.last_frame_change
        } else {
            now
        };

        Self {
            frame,
            motion,
            facing,
            last_frame_change,
        }
    }

    /// Sprite atlas frame name for this state.
    ///
    /// Idle states use the bare direction (`"n"`); walking states append the
    /// one-based cycle frame (`"ne_p3"`).
    #[must_use]
    pub fn frame_name(&self) -> String {
        match self.motion {
            Motion::Idle => self.facing.as_str().to_owned(),
            Motion::Walking => format!("{}_p{}", self.facing, self.frame + 1),
        }
    }
}

/// Free-function form of [`AnimationState::next`].
#[must_use]
pub fn next_animation_state(
    prev: AnimationState,
    dx: f32,
    dy: f32,
    now: Duration,
) -> AnimationState {
    prev.next(dx, dy, now)
}
