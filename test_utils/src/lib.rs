//! Utility helpers for tests.
//!
//! Shared by the unit tests of the `spellwalk` crate and its behavioural
//! suites under `tests/`.

use std::time::Duration;

use approx::abs_diff_eq;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use spellwalk::{SpellBounds, SpellwalkPlugin};

/// Tolerance used when comparing accumulated world positions.
pub const POSITION_TOLERANCE: f32 = 1e-2;

/// Shorthand for a millisecond duration.
#[must_use]
pub const fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

/// Shorthand for a bounding box literal.
#[must_use]
pub const fn bounds(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> SpellBounds {
    SpellBounds {
        min_x,
        min_y,
        max_x,
        max_y,
    }
}

/// Assert that `actual` lies within `tolerance` of `expected` on both axes.
///
/// # Panics
/// Panics with both vectors in the message if either axis is out of range.
pub fn assert_vec2_near(actual: Vec2, expected: Vec2, tolerance: f32) {
    assert!(
        abs_diff_eq!(actual.x, expected.x, epsilon = tolerance)
            && abs_diff_eq!(actual.y, expected.y, epsilon = tolerance),
        "expected {expected:?} (±{tolerance}), got {actual:?}"
    );
}

/// Builds a windowless app running the scene with a fixed tick length.
///
/// Bevy's clock reports zero elapsed time on the first update and advances
/// by exactly `tick` on every update after that.
#[must_use]
pub fn headless_app(tick: Duration) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(tick));
    app.add_plugins(SpellwalkPlugin);
    app
}
