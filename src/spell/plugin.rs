//! Bevy plugin turning pointer gestures into spell casts.
//!
//! Gesture edges are published as [`GestureStarted`] and [`GestureEnded`]
//! events. Observers feed them to the [`SpellRecorder`] resource and publish
//! the finalised outline as a [`SpellCast`]. Recorder failures surface as
//! [`SpellGestureError`] events and are logged.

use bevy::ecs::prelude::On;
use bevy::prelude::*;
use log::{debug, error, info, trace};
use thiserror::Error;

use super::{SampleOutcome, SpellBounds, SpellError, SpellRecorder};
use crate::scene::SimulationSet;

/// Pointer state supplied by the platform layer each tick.
///
/// `world` is expressed in scene coordinates (y grows downwards).
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Whether the drawing button is held.
    pub pressed: bool,
    /// Pointer position in the world.
    pub world: Vec2,
}

/// A draw gesture began at `origin`.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct GestureStarted {
    /// World position of the pointer when the gesture began.
    pub origin: Vec2,
}

/// The live draw gesture ended.
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GestureEnded;

/// A spell outline was completed.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SpellCast {
    /// Bounding box of every accepted point, origin included.
    pub bounds: SpellBounds,
}

/// Stage of the gesture lifecycle in which a [`SpellGestureError`] arose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// Handling [`GestureStarted`].
    Start,
    /// Sampling the pointer during a gesture.
    Sample,
    /// Handling [`GestureEnded`].
    End,
}

/// Event raised when the recorder rejects a gesture signal.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{phase:?}: {source}")]
pub struct SpellGestureError {
    /// Where the failure occurred.
    pub phase: GesturePhase,
    /// The recorder's reason for rejecting the signal.
    pub source: SpellError,
}

impl SpellGestureError {
    /// Convenience constructor used by systems to emit error events.
    #[must_use]
    pub const fn new(phase: GesturePhase, source: SpellError) -> Self {
        Self { phase, source }
    }
}

/// Publishes gesture events on pointer press and release edges.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn pointer_gesture_system(
    pointer: Res<PointerState>,
    mut was_pressed: Local<bool>,
    mut commands: Commands,
) {
    match (*was_pressed, pointer.pressed) {
        (false, true) => commands.trigger(GestureStarted {
            origin: pointer.world,
        }),
        (true, false) => commands.trigger(GestureEnded),
        _ => {}
    }
    *was_pressed = pointer.pressed;
}

/// Samples the pointer into the live spell while the button is held.
///
/// A held button with no live gesture (for example after a host triggered
/// [`GestureEnded`] mid-drag) is reported every tick as a
/// [`SpellGestureError`] in the [`GesturePhase::Sample`] phase.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn sample_spell_system(
    time: Res<Time>,
    pointer: Res<PointerState>,
    mut recorder: ResMut<SpellRecorder>,
    mut commands: Commands,
) {
    if !pointer.pressed {
        return;
    }
    match recorder.sample(pointer.world, time.elapsed()) {
        Ok(SampleOutcome::Accepted) => trace!("spell point at {}", pointer.world),
        Ok(SampleOutcome::Throttled) => {}
        Err(e) => commands.trigger(SpellGestureError::new(GesturePhase::Sample, e)),
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn begin_spell(
    event: On<GestureStarted>,
    mut recorder: ResMut<SpellRecorder>,
    mut commands: Commands,
) {
    let GestureStarted { origin } = *event.event();
    match recorder.start(origin) {
        Ok(()) => debug!("spell gesture started at {origin}"),
        Err(e) => commands.trigger(SpellGestureError::new(GesturePhase::Start, e)),
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn finish_spell(
    _event: On<GestureEnded>,
    mut recorder: ResMut<SpellRecorder>,
    mut commands: Commands,
) {
    let points = recorder.active().map_or(0, |path| path.len());
    match recorder.finish() {
        Ok(bounds) => {
            debug!("spell gesture ended with {points} points");
            commands.trigger(SpellCast { bounds });
        }
        Err(e) => commands.trigger(SpellGestureError::new(GesturePhase::End, e)),
    }
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_spell_cast(event: On<SpellCast>) {
    let SpellCast { bounds } = *event.event();
    let center = bounds.center();
    info!(
        "spell cast: {bounds:?} centre=({}, {}) size={}x{}",
        center.x,
        center.y,
        bounds.width(),
        bounds.height()
    );
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn log_spell_error(event: On<SpellGestureError>) {
    let SpellGestureError { phase, source } = event.event();
    error!("spell gesture error during {phase:?}: {source}");
}

/// Bevy plugin recording spell gestures from [`PointerState`].
///
/// # Responsibilities
///
/// - Initialises [`PointerState`] and [`SpellRecorder`] unless the host
///   inserted its own.
/// - Detects press/release edges and publishes gesture events.
/// - Samples the pointer while a gesture is live.
/// - Logs completed casts and rejected gesture signals.
#[derive(Debug, Default)]
pub struct SpellPlugin;

impl Plugin for SpellPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>();
        app.init_resource::<SpellRecorder>();

        app.add_observer(begin_spell);
        app.add_observer(finish_spell);
        app.add_observer(log_spell_cast);
        app.add_observer(log_spell_error);

        app.add_systems(
            Update,
            (pointer_gesture_system, sample_spell_system)
                .chain()
                .in_set(SimulationSet),
        );
    }
}
