//! Runtime configuration resources.
//!
//! Every resource has a `Default` matching [`crate::constants`]. Hosts may
//! insert their own values before adding [`crate::SpellwalkPlugin`]; the
//! plugin only initialises resources that are missing. The binary can also
//! read a [`SceneConfig`] from a JSON file:
//!
//! ```json
//! {
//!   "map": { "width": 10000, "height": 10000, "spawn": { "x": 5000, "y": 5000 } },
//!   "player": { "move_speed": 5 }
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{MAP_HEIGHT, MAP_WIDTH, MOVE_SPEED, SPAWN_X, SPAWN_Y};

/// A point in scene coordinates, as written in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate, growing downwards.
    pub y: f32,
}

impl From<SpawnPoint> for Vec2 {
    fn from(point: SpawnPoint) -> Self {
        Self::new(point.x, point.y)
    }
}

/// Size of the world and where the player enters it.
///
/// The extent spans `0..=width` by `0..=height` in scene coordinates. It is
/// used to check that the spawn point lies on the map; the player is free
/// to walk past the edges once spawned.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapInfo {
    /// World width in world units.
    pub width: f32,
    /// World height in world units.
    pub height: f32,
    /// Player spawn point.
    pub spawn: SpawnPoint,
}

impl Default for MapInfo {
    fn default() -> Self {
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            spawn: SpawnPoint {
                x: SPAWN_X,
                y: SPAWN_Y,
            },
        }
    }
}

impl MapInfo {
    /// Spawn point as a vector.
    #[must_use]
    pub fn spawn_position(&self) -> Vec2 {
        self.spawn.into()
    }

    /// Returns `true` when `point` lies on the map, edges included.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

/// Player tuning.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerSettings {
    /// Displacement per tick in world units while a movement key is held.
    pub move_speed: f32,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            move_speed: MOVE_SPEED,
        }
    }
}

/// Complete scene configuration as read from disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// World layout.
    pub map: MapInfo,
    /// Player tuning.
    pub player: PlayerSettings,
}

impl SceneConfig {
    /// Parses a configuration from JSON text. Missing fields keep their
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid JSON for this schema or the
    /// values are out of range.
    pub fn from_json(text: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(text).context("invalid scene configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or fails
    /// [`SceneConfig::from_json`].
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read scene configuration {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("in {}", path.display()))
    }

    /// Inserts the configured resources into `app`, replacing any existing
    /// values.
    pub fn insert_into(self, app: &mut App) {
        app.insert_resource(self.map);
        app.insert_resource(self.player);
    }

    fn validate(&self) -> anyhow::Result<()> {
        ensure!(
            self.map.width > 0.0 && self.map.height > 0.0,
            "map size must be positive, got {}x{}",
            self.map.width,
            self.map.height
        );
        let spawn = self.map.spawn_position();
        ensure!(
            self.map.contains(spawn),
            "spawn point ({}, {}) lies outside the {}x{} map",
            spawn.x,
            spawn.y,
            self.map.width,
            self.map.height
        );
        ensure!(
            self.player.move_speed.is_finite() && self.player.move_speed >= 0.0,
            "move_speed must be a non-negative number, got {}",
            self.player.move_speed
        );
        Ok(())
    }
}
