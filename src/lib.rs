#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the Spellwalk scene logic.
//!
//! The simulation core ([`direction`], [`movement`], [`animation`],
//! [`spell`]) is plain Rust over `glam` vectors. [`SpellwalkPlugin`] runs it
//! once per Bevy tick; [`PresentationPlugin`] (feature `render`) draws it.
pub mod animation;
pub mod atlas;
pub mod constants;
pub mod direction;
pub mod logging;
pub mod movement;
pub mod player;
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub mod presentation;
pub mod scene;
pub mod settings;
pub mod spell;
pub use constants::*;

// Re-export commonly used items
pub use animation::{next_animation_state, AnimationState, Motion};
pub use direction::{closest_direction, Direction};
pub use logging::init as init_logging;
pub use movement::{resolve_movement, resolve_movement_with_speed, MoveInput};
pub use player::{Player, PlayerAnimation, SpriteFrame, WorldPosition};
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub use presentation::PresentationPlugin;
pub use scene::{SimulationSet, SpellwalkPlugin};
pub use settings::{MapInfo, PlayerSettings, SceneConfig};
pub use spell::{
    GestureEnded, GestureStarted, PointerState, SpellBounds, SpellCast, SpellError,
    SpellGestureError, SpellPath, SpellRecorder,
};

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use spellwalk::prelude::*;
    //! ```

    pub use crate::AnimationState;
    pub use crate::Direction;
    pub use crate::MoveInput;
    pub use crate::PointerState;
    pub use crate::SpellCast;
    pub use crate::SpellwalkPlugin;
    pub use crate::WorldPosition;
}
