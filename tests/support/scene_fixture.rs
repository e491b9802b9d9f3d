//! Shared fixture for behavioural tests of the headless scene.
//!
//! The fixture owns a `ThreadSafeApp` running `SpellwalkPlugin` under
//! `MinimalPlugins` with a fixed tick length. Every scenario starts from
//! [`SceneFixture::reset`], which replaces the app with a fresh one, so
//! examples never observe state left behind by an earlier `then` block.

use std::sync::MutexGuard;
use std::time::Duration;

use bevy::ecs::prelude::On;
use bevy::input::ButtonInput;
use bevy::prelude::*;
use spellwalk::{
    AnimationState, GestureEnded, GestureStarted, Player, PlayerAnimation, PointerState,
    SpellBounds, SpellCast, SpellGestureError, SpellRecorder, SpriteFrame, WorldPosition,
};
use test_utils::headless_app;

use crate::thread_safe_app::{lock_app, share, SharedApp, ThreadSafeApp};

/// Everything the scene announced while the fixture was watching.
#[derive(Resource, Debug, Default)]
struct SceneLog {
    casts: Vec<SpellBounds>,
    errors: Vec<SpellGestureError>,
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn record_cast(event: On<SpellCast>, mut log: ResMut<SceneLog>) {
    log.casts.push(event.event().bounds);
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn record_error(event: On<SpellGestureError>, mut log: ResMut<SceneLog>) {
    log.errors.push(*event.event());
}

fn build_app(tick_length: Duration) -> App {
    let mut app = headless_app(tick_length);
    app.init_resource::<SceneLog>();
    app.add_observer(record_cast);
    app.add_observer(record_error);
    app.finish();
    app.cleanup();
    app
}

/// Headless scene shared across rspec closures.
#[derive(Debug, Clone)]
pub struct SceneFixture {
    app: SharedApp,
    tick_length: Duration,
}

impl SceneFixture {
    /// Builds a scene whose clock advances by `tick_length` per tick.
    #[must_use]
    pub fn bootstrap(tick_length: Duration) -> Self {
        Self {
            app: share(build_app(tick_length)),
            tick_length,
        }
    }

    /// Locks the underlying `App` for direct inspection or mutation.
    pub fn app_guard(&self) -> MutexGuard<'_, ThreadSafeApp> {
        lock_app(&self.app)
    }

    /// Discards the running scene and starts a fresh one.
    pub fn reset(&self) {
        let mut app = self.app_guard();
        *app = ThreadSafeApp(build_app(self.tick_length));
    }

    /// Advances the scene by `ticks` updates.
    pub fn tick(&self, ticks: usize) {
        let mut app = self.app_guard();
        for _ in 0..ticks {
            app.update();
        }
    }

    /// Holds `key` down.
    pub fn press_key(&self, key: KeyCode) {
        let mut app = self.app_guard();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(key);
    }

    /// Lets go of every key.
    pub fn release_keys(&self) {
        let mut app = self.app_guard();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .release_all();
    }

    /// Moves the pointer to `world`, pressing or releasing the draw button.
    pub fn pointer(&self, world: Vec2, pressed: bool) {
        let mut app = self.app_guard();
        app.world_mut()
            .insert_resource(PointerState { pressed, world });
    }

    /// Signals the start of a gesture directly, bypassing the pointer.
    pub fn start_gesture(&self, origin: Vec2) {
        let mut app = self.app_guard();
        let world = app.world_mut();
        world.trigger(GestureStarted { origin });
        world.flush();
    }

    /// Signals the end of a gesture directly, bypassing the pointer.
    pub fn end_gesture(&self) {
        let mut app = self.app_guard();
        let world = app.world_mut();
        world.trigger(GestureEnded);
        world.flush();
    }

    fn player<R>(
        &self,
        read: impl FnOnce(&WorldPosition, &PlayerAnimation, &SpriteFrame) -> R,
    ) -> R {
        let mut app = self.app_guard();
        let world = app.world_mut();
        let mut query = world
            .query_filtered::<(&WorldPosition, &PlayerAnimation, &SpriteFrame), With<Player>>();
        let (position, animation, frame) = query
            .single(world)
            .unwrap_or_else(|e| panic!("expected exactly one player: {e}"));
        read(position, animation, frame)
    }

    /// The player's position in scene coordinates.
    pub fn player_position(&self) -> Vec2 {
        self.player(|position, _, _| **position)
    }

    /// The player's animation state.
    pub fn animation(&self) -> AnimationState {
        self.player(|_, animation, _| **animation)
    }

    /// The sprite frame the player is showing.
    pub fn sprite_frame(&self) -> String {
        self.player(|_, _, frame| frame.0.clone())
    }

    /// Number of points in the gesture being drawn, if any.
    pub fn live_points(&self) -> Option<usize> {
        let app = self.app_guard();
        app.world()
            .resource::<SpellRecorder>()
            .active()
            .map(|path| path.len())
    }

    /// Outlines cast so far, oldest first.
    pub fn casts(&self) -> Vec<SpellBounds> {
        let app = self.app_guard();
        app.world().resource::<SceneLog>().casts.clone()
    }

    /// Gesture errors reported so far, oldest first.
    pub fn errors(&self) -> Vec<SpellGestureError> {
        let app = self.app_guard();
        app.world().resource::<SceneLog>().errors.clone()
    }
}
