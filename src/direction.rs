//! Eight-way compass directions derived from a movement vector.
//!
//! Scene coordinates grow rightwards on x and downwards on y, so a negative
//! `dy` points north.

use std::cmp::Ordering;
use std::fmt;

use bevy::prelude::*;

/// One of the eight compass directions a sprite can face.
#[derive(Reflect, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// West.
    W,
    /// North-west.
    NW,
    /// North.
    #[default]
    N,
    /// North-east.
    NE,
    /// East.
    E,
    /// South-east.
    SE,
    /// South.
    S,
    /// South-west.
    SW,
}

impl Direction {
    /// Every direction in the fixed lookup order used by sprite sheets.
    pub const ALL: [Self; 8] = [
        Self::W,
        Self::NW,
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
    ];

    /// Returns the direction closest to the displacement `(dx, dy)`.
    ///
    /// Only the sign of each component is considered. A stationary input
    /// yields `None` so callers can keep their previous facing.
    ///
    /// # Examples
    ///
    /// ```
    /// use spellwalk::Direction;
    ///
    /// assert_eq!(Direction::closest(1.0, -1.0), Some(Direction::NE));
    /// assert_eq!(Direction::closest(0.0, 3.5), Some(Direction::S));
    /// assert_eq!(Direction::closest(0.0, 0.0), None);
    /// ```
    #[must_use]
    pub fn closest(dx: f32, dy: f32) -> Option<Self> {
        match (sign(dx), sign(dy)) {
            (Ordering::Greater, Ordering::Equal) => Some(Self::E),
            (Ordering::Less, Ordering::Equal) => Some(Self::W),
            (Ordering::Greater, Ordering::Greater) => Some(Self::SE),
            (Ordering::Greater, Ordering::Less) => Some(Self::NE),
            (Ordering::Less, Ordering::Greater) => Some(Self::SW),
            (Ordering::Less, Ordering::Less) => Some(Self::NW),
            (Ordering::Equal, Ordering::Less) => Some(Self::N),
            (Ordering::Equal, Ordering::Greater) => Some(Self::S),
            (Ordering::Equal, Ordering::Equal) => None,
        }
    }

    /// Lowercase name used as the sprite frame prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::W => "w",
            Self::NW => "nw",
            Self::N => "n",
            Self::NE => "ne",
            Self::E => "e",
            Self::SE => "se",
            Self::S => "s",
            Self::SW => "sw",
        }
    }

    /// Position of this direction within [`Direction::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-function form of [`Direction::closest`].
#[must_use]
pub fn closest_direction(dx: f32, dy: f32) -> Option<Direction> {
    Direction::closest(dx, dy)
}

/// Sign of `value`, treating NaN as zero.
fn sign(value: f32) -> Ordering {
    value.partial_cmp(&0.0).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::east(1.0, 0.0, Direction::E)]
    #[case::west(-1.0, 0.0, Direction::W)]
    #[case::south_east(1.0, 1.0, Direction::SE)]
    #[case::north_east(1.0, -1.0, Direction::NE)]
    #[case::south_west(-1.0, 1.0, Direction::SW)]
    #[case::north_west(-1.0, -1.0, Direction::NW)]
    #[case::north(0.0, -1.0, Direction::N)]
    #[case::south(0.0, 1.0, Direction::S)]
    fn sign_pairs_map_to_compass_points(
        #[case] dx: f32,
        #[case] dy: f32,
        #[case] expected: Direction,
    ) {
        assert_eq!(Direction::closest(dx, dy), Some(expected));
    }

    #[test]
    fn stationary_input_has_no_direction() {
        assert_eq!(closest_direction(0.0, 0.0), None);
        assert_eq!(closest_direction(-0.0, 0.0), None);
    }

    #[test]
    fn every_direction_is_reachable_exactly_once() {
        let signs = [-1.0, 0.0, 1.0];
        let mut hits = Vec::new();
        for dx in signs {
            for dy in signs {
                if let Some(dir) = Direction::closest(dx, dy) {
                    hits.push(dir);
                }
            }
        }
        assert_eq!(hits.len(), 8);
        for dir in Direction::ALL {
            assert_eq!(hits.iter().filter(|hit| **hit == dir).count(), 1);
        }
    }

    #[rstest]
    #[case::scaled(3.535_534, -3.535_534, Some(Direction::NE))]
    #[case::large(-250.0, 0.0, Some(Direction::W))]
    #[case::nan_x(f32::NAN, 1.0, Some(Direction::S))]
    #[case::nan_both(f32::NAN, f32::NAN, None)]
    fn magnitude_is_ignored(#[case] dx: f32, #[case] dy: f32, #[case] expected: Option<Direction>) {
        assert_eq!(Direction::closest(dx, dy), expected);
    }

    #[test]
    fn all_is_indexed_in_order() {
        for (i, dir) in Direction::ALL.iter().enumerate() {
            assert_eq!(dir.index(), i);
        }
    }

    #[test]
    fn display_uses_lowercase_name() {
        assert_eq!(Direction::NW.to_string(), "nw");
        assert_eq!(format!("{}", Direction::S), "s");
    }
}
