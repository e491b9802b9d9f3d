//! Sprite atlas layout for the player character.
//!
//! The sheet is a grid with one row per [`Direction`] in [`Direction::ALL`]
//! order. Column 0 holds the idle pose, columns 1 to 8 hold the walk cycle.
//! Frame names follow [`crate::animation::AnimationState::frame_name`].

use crate::direction::Direction;
use crate::WALK_CYCLE_FRAMES;

/// Columns in the sprite sheet: the idle pose plus every walk frame.
pub const ATLAS_COLUMNS: u32 = 1 + WALK_CYCLE_FRAMES as u32;

/// Rows in the sprite sheet, one per facing direction.
pub const ATLAS_ROWS: u32 = Direction::ALL.len() as u32;

/// Separator between the direction prefix and the walk frame number.
const WALK_MARKER: &str = "_p";

/// Returns the atlas index of a frame name such as `"n"` or `"se_p4"`.
///
/// Unknown directions and walk frames outside `1..=8` yield `None`.
///
/// # Examples
///
/// ```
/// use spellwalk::atlas::atlas_index;
///
/// assert_eq!(atlas_index("w"), Some(0));
/// assert_eq!(atlas_index("w_p1"), Some(1));
/// assert_eq!(atlas_index("nw"), Some(9));
/// assert_eq!(atlas_index("w_p9"), None);
/// ```
#[must_use]
pub fn atlas_index(frame_name: &str) -> Option<usize> {
    let (prefix, column) = match frame_name.split_once(WALK_MARKER) {
        Some((prefix, number)) => (prefix, walk_column(number)?),
        None => (frame_name, 0),
    };
    let direction = Direction::ALL
        .into_iter()
        .find(|dir| dir.as_str() == prefix)?;
    Some(direction.index() * ATLAS_COLUMNS as usize + column)
}

/// Parses a one-based walk frame number into its atlas column.
fn walk_column(number: &str) -> Option<usize> {
    let frame: u8 = number.parse().ok()?;
    (1..=WALK_CYCLE_FRAMES)
        .contains(&frame)
        .then_some(usize::from(frame))
}
