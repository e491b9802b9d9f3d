//! Freehand spell outline with an incrementally tracked bounding box.

use bevy::math::Vec2;

use super::SpellError;

/// Axis-aligned bounding box of a spell outline, in scene coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpellBounds {
    /// Smallest x of any point.
    pub min_x: f32,
    /// Smallest y of any point.
    pub min_y: f32,
    /// Largest x of any point.
    pub max_x: f32,
    /// Largest y of any point.
    pub max_y: f32,
}

impl SpellBounds {
    /// Degenerate box covering the single point `point`.
    #[must_use]
    pub const fn at(point: Vec2) -> Self {
        Self {
            min_x: point.x,
            min_y: point.y,
            max_x: point.x,
            max_y: point.y,
        }
    }

    /// Grows the box so it covers `point`.
    ///
    /// Each bound is checked on its own: a point may extend one axis while
    /// lying inside the existing range of the other.
    pub fn extend(&mut self, point: Vec2) {
        self.min_x = self.min_x.min(point.x);
        self.min_y = self.min_y.min(point.y);
        self.max_x = self.max_x.max(point.x);
        self.max_y = self.max_y.max(point.y);
    }

    /// Horizontal extent of the box.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    /// Vertical extent of the box.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(
            (self.min_x + self.max_x) * 0.5,
            (self.min_y + self.max_y) * 0.5,
        )
    }
}

/// Points of a spell being drawn, in drawing order.
///
/// A path always starts with the gesture origin, so its bounds are defined
/// from the moment it exists.
#[derive(Debug, Clone, PartialEq)]
pub struct SpellPath {
    points: Vec<Vec2>,
    bounds: SpellBounds,
}

impl SpellPath {
    /// Starts a path at the gesture origin.
    #[must_use]
    pub fn new(origin: Vec2) -> Self {
        Self {
            points: vec![origin],
            bounds: SpellBounds::at(origin),
        }
    }

    /// Appends a sampled point.
    pub fn push(&mut self, point: Vec2) {
        self.points.push(point);
        self.bounds.extend(point);
    }

    /// Points recorded so far, origin first.
    #[must_use]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Number of recorded points, including the origin.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no points have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Bounding box of every point recorded so far.
    #[must_use]
    pub const fn bounds(&self) -> SpellBounds {
        self.bounds
    }

    /// Consumes the path and returns its final bounding box.
    ///
    /// # Errors
    ///
    /// Returns [`SpellError::EmptyPath`] if the path holds no points.
    pub fn finish(self) -> Result<SpellBounds, SpellError> {
        if self.points.is_empty() {
            return Err(SpellError::EmptyPath);
        }
        Ok(self.bounds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn rect(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> SpellBounds {
        SpellBounds {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    fn covers(outer: SpellBounds, inner: SpellBounds) -> bool {
        outer.min_x <= inner.min_x
            && outer.min_y <= inner.min_y
            && outer.max_x >= inner.max_x
            && outer.max_y >= inner.max_y
    }

    #[test]
    fn new_path_holds_only_the_origin() {
        let path = SpellPath::new(Vec2::new(10.0, 10.0));
        assert_eq!(path.points(), &[Vec2::new(10.0, 10.0)]);
        assert_eq!(path.bounds(), SpellBounds::at(Vec2::new(10.0, 10.0)));
        assert!(!path.is_empty());
    }

    #[test]
    fn points_keep_drawing_order() {
        let mut path = SpellPath::new(Vec2::ZERO);
        path.push(Vec2::new(3.0, 1.0));
        path.push(Vec2::new(-2.0, 4.0));
        assert_eq!(
            path.points(),
            &[Vec2::ZERO, Vec2::new(3.0, 1.0), Vec2::new(-2.0, 4.0)]
        );
        assert_eq!(path.len(), 3);
    }

    #[rstest]
    #[case::extends_min_x_only(Vec2::new(-5.0, 2.0), rect(-5.0, 0.0, 4.0, 4.0))]
    #[case::extends_max_y_only(Vec2::new(1.0, 9.0), rect(0.0, 0.0, 4.0, 9.0))]
    #[case::extends_both_axes(Vec2::new(6.0, -3.0), rect(0.0, -3.0, 6.0, 4.0))]
    #[case::inside(Vec2::new(2.0, 2.0), rect(0.0, 0.0, 4.0, 4.0))]
    fn bounds_extend_each_axis_independently(
        #[case] point: Vec2,
        #[case] expected: SpellBounds,
    ) {
        let mut path = SpellPath::new(Vec2::ZERO);
        path.push(Vec2::new(4.0, 4.0));
        path.push(point);
        assert_eq!(path.bounds(), expected);
    }

    #[test]
    fn bounds_never_shrink() {
        let points = [
            Vec2::new(12.0, -4.0),
            Vec2::new(3.0, 3.0),
            Vec2::new(-7.5, 20.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(40.0, -30.0),
        ];
        let mut path = SpellPath::new(Vec2::new(1.0, 1.0));
        for point in points {
            let before = path.bounds();
            path.push(point);
            let after = path.bounds();
            assert!(covers(after, before), "{after:?} lost area of {before:?}");
            assert!(after.min_x <= point.x && point.x <= after.max_x);
            assert!(after.min_y <= point.y && point.y <= after.max_y);
        }
    }

    #[test]
    fn finish_includes_origin() {
        let mut path = SpellPath::new(Vec2::new(10.0, 10.0));
        path.push(Vec2::new(50.0, 10.0));
        path.push(Vec2::new(50.0, 60.0));
        let bounds = path.finish();
        assert_eq!(
            bounds,
            Ok(SpellBounds {
                min_x: 10.0,
                min_y: 10.0,
                max_x: 50.0,
                max_y: 60.0,
            })
        );
    }

    #[test]
    fn derived_measurements() {
        let bounds = SpellBounds {
            min_x: 10.0,
            min_y: 10.0,
            max_x: 50.0,
            max_y: 60.0,
        };
        assert_eq!(bounds.width(), 40.0);
        assert_eq!(bounds.height(), 50.0);
        assert_eq!(bounds.center(), Vec2::new(30.0, 35.0));
    }

    #[test]
    fn single_point_path_has_degenerate_bounds() {
        let bounds = SpellPath::new(Vec2::new(-3.0, 8.0)).finish();
        assert_eq!(bounds, Ok(SpellBounds::at(Vec2::new(-3.0, 8.0))));
        assert!(bounds.is_ok_and(|b| b.width() == 0.0 && b.height() == 0.0));
    }
}
