//! Presentation layer plugin owning the camera, sprites and overlays.
//!
//! `PresentationPlugin` is a passive observer of simulation state: it reads
//! [`WorldPosition`](crate::player::WorldPosition), [`SpriteFrame`] and the
//! live spell path, and writes only visual components. The single exception
//! is [`PointerState`], which it fills from the window cursor before the
//! simulation runs.

use bevy::input::ButtonInput;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use log::warn;

use crate::atlas::{atlas_index, ATLAS_COLUMNS, ATLAS_ROWS};
use crate::player::{scene_to_world, world_to_scene, Player, SpriteFrame};
use crate::scene::SimulationSet;
use crate::spell::{PointerState, SpellRecorder};

#[cfg(feature = "text")]
use crate::player::WorldPosition;

/// Background colour behind the world (aquamarine, `#7FFFD4`).
pub const BACKGROUND_COLOR: Color = Color::srgb(0.498, 1.0, 0.831);

/// Colour of the spell stroke while it is being drawn.
pub const SPELL_STROKE_COLOR: Color = Color::srgb(1.0, 0.0, 0.0);

/// Marker component for the main presentation camera.
///
/// Entities with this component follow the player and define the mapping
/// from cursor position to world position.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component, Default)]
pub struct CameraController;

/// Where to find the player's sprite sheet and how it is sliced.
///
/// The sheet must follow the grid described in [`crate::atlas`].
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SpriteSheet {
    /// Asset-server path of the sheet image.
    pub image_path: String,
    /// Size of one frame in pixels.
    pub tile_size: UVec2,
}

impl Default for SpriteSheet {
    fn default() -> Self {
        Self {
            image_path: "human/human.png".to_owned(),
            tile_size: UVec2::splat(64),
        }
    }
}

/// Spawns the presentation camera at startup if no camera exists.
///
/// If a `Camera2d` already exists (e.g. spawned by the host application), this
/// system does nothing to avoid creating duplicate cameras.
fn camera_setup(mut commands: Commands, cameras: Query<&Camera2d>) {
    if cameras.is_empty() {
        commands.spawn((Camera2d, CameraController, Name::new("PresentationCamera")));
    }
}

/// Keeps the camera centred on the player.
pub fn camera_follow_system(
    players: Query<&Transform, (With<Player>, Without<CameraController>)>,
    mut cameras: Query<&mut Transform, (With<CameraController>, Without<Player>)>,
) {
    let Ok(player) = players.single() else {
        return;
    };
    let Ok(mut camera) = cameras.single_mut() else {
        return;
    };
    camera.translation.x = player.translation.x;
    camera.translation.y = player.translation.y;
}

/// Copies the left mouse button and cursor world position into
/// [`PointerState`].
///
/// The position is left unchanged while the cursor is outside the window.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn track_pointer_system(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<CameraController>>,
    mut pointer: ResMut<PointerState>,
) {
    pointer.pressed = buttons.pressed(MouseButton::Left);

    let Ok(window) = windows.single() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    if let Ok(world) = camera.viewport_to_world_2d(camera_transform, cursor) {
        pointer.world = world_to_scene(world);
    }
}

/// Gives newly spawned players their atlas sprite.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
fn attach_player_sprite_system(
    mut commands: Commands,
    sheet: Res<SpriteSheet>,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    players: Query<(Entity, &SpriteFrame), Added<Player>>,
) {
    for (entity, frame) in &players {
        let layout = layouts.add(TextureAtlasLayout::from_grid(
            sheet.tile_size,
            ATLAS_COLUMNS,
            ATLAS_ROWS,
            None,
            None,
        ));
        let index = atlas_index(frame).unwrap_or_default();
        commands.entity(entity).insert(Sprite::from_atlas_image(
            asset_server.load(sheet.image_path.clone()),
            TextureAtlas { layout, index },
        ));
    }
}

/// Points each sprite's atlas at its current [`SpriteFrame`].
pub fn apply_sprite_frame_system(
    mut sprites: Query<(&SpriteFrame, &mut Sprite), Changed<SpriteFrame>>,
) {
    for (frame, mut sprite) in &mut sprites {
        let Some(atlas) = sprite.texture_atlas.as_mut() else {
            continue;
        };
        match atlas_index(frame) {
            Some(index) => atlas.index = index,
            None => warn!("no atlas cell for sprite frame {:?}", frame.as_str()),
        }
    }
}

/// Draws the live spell outline.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy system parameters use `Res<T>` by value."
)]
pub fn draw_spell_stroke_system(recorder: Res<SpellRecorder>, mut gizmos: Gizmos) {
    if let Some(path) = recorder.active() {
        gizmos.linestrip_2d(
            path.points().iter().copied().map(scene_to_world),
            SPELL_STROKE_COLOR,
        );
    }
}

/// Marker for the screen-fixed coordinates readout.
#[cfg(feature = "text")]
#[derive(Component, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CoordsText;

/// Text shown by the coordinates readout for `position`.
#[cfg(feature = "text")]
#[must_use]
pub fn coords_label(position: Vec2) -> String {
    format!("coords: {}, {}", position.x, position.y)
}

#[cfg(feature = "text")]
fn coords_hud_setup(mut commands: Commands) {
    commands.spawn((
        Text::new(coords_label(Vec2::ZERO)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(200.0),
            top: Val::Px(200.0),
            ..default()
        },
        CoordsText,
        Name::new("CoordsText"),
    ));
}

/// Refreshes the coordinates readout from the player's position.
#[cfg(feature = "text")]
pub fn coords_hud_system(
    players: Query<&WorldPosition, (With<Player>, Changed<WorldPosition>)>,
    mut labels: Query<&mut Text, With<CoordsText>>,
) {
    let Ok(position) = players.single() else {
        return;
    };
    for mut text in &mut labels {
        text.0 = coords_label(**position);
    }
}

/// Plugin owning camera setup and presentation layer systems.
///
/// # Responsibilities
///
/// - Spawns the main `Camera2d` with `CameraController` marker at startup.
/// - Feeds cursor state into [`PointerState`] before the simulation.
/// - After the simulation: follows the player with the camera, applies
///   sprite frames and draws the spell stroke.
/// - With the `text` feature, shows a coordinates readout.
///
/// # Examples
///
/// ```ignore
/// use bevy::prelude::*;
/// use spellwalk::{PresentationPlugin, SpellwalkPlugin};
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins((SpellwalkPlugin, PresentationPlugin))
///     .run();
/// ```
#[derive(Debug)]
pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<CameraController>();
        app.init_resource::<SpriteSheet>();
        app.insert_resource(ClearColor(BACKGROUND_COLOR));
        app.add_systems(Startup, camera_setup);
        app.add_systems(Update, track_pointer_system.before(SimulationSet));
        app.add_systems(
            Update,
            (
                camera_follow_system,
                attach_player_sprite_system,
                apply_sprite_frame_system,
                draw_spell_stroke_system,
            )
                .chain()
                .after(SimulationSet),
        );

        #[cfg(feature = "text")]
        {
            app.add_systems(Startup, coords_hud_setup);
            app.add_systems(Update, coords_hud_system.after(SimulationSet));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camera_controller_debug_format() {
        let controller = CameraController;
        assert_eq!(format!("{controller:?}"), "CameraController");
    }

    #[test]
    fn default_sprite_sheet_is_sensible() {
        let sheet = SpriteSheet::default();
        assert!(sheet.tile_size.x > 0 && sheet.tile_size.y > 0);
        assert!(sheet.image_path.ends_with(".png"));
    }

    #[cfg(feature = "text")]
    #[test]
    fn coords_label_formats_both_axes() {
        assert_eq!(coords_label(Vec2::new(5000.0, 4995.0)), "coords: 5000, 4995");
    }
}
