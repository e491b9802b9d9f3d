//! Rate-limited capture of the live spell gesture.

use std::time::Duration;

use bevy::prelude::*;

use super::{SpellBounds, SpellError, SpellPath};
use crate::SAMPLE_INTERVAL;

/// Result of offering a pointer sample to the recorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleOutcome {
    /// The point was appended to the live path.
    Accepted,
    /// The point arrived too soon after the previous accepted sample and was
    /// dropped.
    Throttled,
}

/// Owner of the single live spell path and the sampling clock.
///
/// The last accepted sample time is shared across gestures: a new gesture
/// that starts immediately after another one ended is still throttled
/// against the previous gesture's final sample.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct SpellRecorder {
    active: Option<SpellPath>,
    last_sample: Option<Duration>,
    sample_interval: Duration,
}

impl Default for SpellRecorder {
    fn default() -> Self {
        Self::with_interval(SAMPLE_INTERVAL)
    }
}

impl SpellRecorder {
    /// Creates a recorder that accepts at most one sample per `interval`.
    #[must_use]
    pub const fn with_interval(interval: Duration) -> Self {
        Self {
            active: None,
            last_sample: None,
            sample_interval: interval,
        }
    }

    /// Begins a gesture at `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`SpellError::GestureInProgress`] if a gesture is already live;
    /// the live gesture is left untouched.
    pub fn start(&mut self, origin: Vec2) -> Result<(), SpellError> {
        if self.active.is_some() {
            return Err(SpellError::GestureInProgress);
        }
        self.active = Some(SpellPath::new(origin));
        Ok(())
    }

    /// Offers the pointer position `point` sampled at `now`.
    ///
    /// The sample is accepted when none has been accepted before or at least
    /// one sampling interval has passed since the last accepted one.
    ///
    /// # Errors
    ///
    /// Returns [`SpellError::NoActiveGesture`] when no gesture is live.
    pub fn sample(&mut self, point: Vec2, now: Duration) -> Result<SampleOutcome, SpellError> {
        let path = self.active.as_mut().ok_or(SpellError::NoActiveGesture)?;
        let due = self
            .last_sample
            .is_none_or(|last| now.saturating_sub(last) >= self.sample_interval);
        if !due {
            return Ok(SampleOutcome::Throttled);
        }
        path.push(point);
        self.last_sample = Some(now);
        Ok(SampleOutcome::Accepted)
    }

    /// Ends the live gesture and returns its bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`SpellError::NoActiveGesture`] when no gesture is live, or
    /// [`SpellError::EmptyPath`] if the path somehow holds no points.
    pub fn finish(&mut self) -> Result<SpellBounds, SpellError> {
        self.active
            .take()
            .ok_or(SpellError::NoActiveGesture)?
            .finish()
    }

    /// The live path, if a gesture is in progress.
    #[must_use]
    pub const fn active(&self) -> Option<&SpellPath> {
        self.active.as_ref()
    }

    /// Returns `true` while a gesture is in progress.
    #[must_use]
    pub const fn is_drawing(&self) -> bool {
        self.active.is_some()
    }

    /// Time of the last accepted sample, across all gestures.
    #[must_use]
    pub const fn last_sample(&self) -> Option<Duration> {
        self.last_sample
    }
}
