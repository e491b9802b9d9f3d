//! Freehand spell drawing.
//!
//! While the pointer is held, the scene records a polygon outline at a
//! capped sampling rate. Releasing the pointer finalises the outline and
//! reports its bounding box as a [`SpellCast`].
//!
//! [`SpellPath`] and [`SpellRecorder`] are plain values with no ECS
//! dependencies; [`SpellPlugin`] connects them to pointer gestures.

mod path;
pub mod plugin;
mod recorder;

use thiserror::Error;

pub use path::{SpellBounds, SpellPath};
pub use plugin::{
    pointer_gesture_system, sample_spell_system, GestureEnded, GesturePhase, GestureStarted,
    PointerState, SpellCast, SpellGestureError, SpellPlugin,
};
pub use recorder::{SampleOutcome, SpellRecorder};

/// Invalid-state conditions raised by the spell recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpellError {
    /// A gesture started while another one was still live.
    #[error("a spell gesture is already in progress")]
    GestureInProgress,
    /// A sample or gesture end arrived with no live gesture.
    #[error("no spell gesture is in progress")]
    NoActiveGesture,
    /// A path was finalised without any points.
    #[error("spell path has no points")]
    EmptyPath,
}
