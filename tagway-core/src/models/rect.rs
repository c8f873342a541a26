use serde::{Deserialize, Serialize};

/// An axis aligned rectangle in layout coordinates.
#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[must_use]
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Half open containment, the right and bottom edges are outside the box.
    #[must_use]
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        !self.is_empty()
            && x >= f64::from(self.x)
            && x < f64::from(self.right())
            && y >= f64::from(self.y)
            && y < f64::from(self.bottom())
    }

    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// The intersection of both boxes, `None` when they do not overlap.
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Option<Self> {
        if !self.intersects(other) {
            return None;
        }
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        Some(Self {
            x,
            y,
            w: self.right().min(other.right()) - x,
            h: self.bottom().min(other.bottom()) - y,
        })
    }

    /// The smallest box containing both. Empty boxes are ignored.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Self {
            x,
            y,
            w: self.right().max(other.right()) - x,
            h: self.bottom().max(other.bottom()) - y,
        }
    }

    /// Shortest squared distance from a point to this box, zero when inside.
    #[must_use]
    pub fn distance_squared(&self, x: f64, y: f64) -> f64 {
        let cx = x.clamp(f64::from(self.x), f64::from(self.right()));
        let cy = y.clamp(f64::from(self.y), f64::from(self.bottom()));
        (x - cx).powi(2) + (y - cy).powi(2)
    }

    /// Keeps the box reachable inside `bounds`. The size is at least one unit on each axis. A box
    /// lying past the right or bottom edge is pulled back so its far edge touches that edge, a box
    /// lying (border included) before the left or top edge is moved onto that edge.
    pub fn apply_bounds(&mut self, bounds: &Self, border: i32) {
        self.w = self.w.max(1);
        self.h = self.h.max(1);

        if self.x >= bounds.right() {
            self.x = bounds.right() - self.w;
        }
        if self.y >= bounds.bottom() {
            self.y = bounds.bottom() - self.h;
        }
        if self.x + self.w + 2 * border <= bounds.x {
            self.x = bounds.x;
        }
        if self.y + self.h + 2 * border <= bounds.y {
            self.y = bounds.y;
        }
    }

    /// Scales every component, rounding to the nearest unit.
    #[must_use]
    pub fn scaled(&self, scale: f64) -> Self {
        if (scale - 1.0).abs() < f64::EPSILON {
            return *self;
        }
        let round = |v: i32| (f64::from(v) * scale).round() as i32;
        Self {
            x: round(self.x),
            y: round(self.y),
            w: round(self.w),
            h: round(self.h),
        }
    }

    /// The same box expressed relative to `origin`.
    #[must_use]
    pub const fn relative_to(&self, origin: &Self) -> Self {
        Self {
            x: self.x - origin.x,
            y: self.y - origin.y,
            w: self.w,
            h: self.h,
        }
    }

    /// The box with `border` removed on every side.
    #[must_use]
    pub const fn shrink(&self, border: i32) -> Self {
        Self {
            x: self.x + border,
            y: self.y + border,
            w: self.w - 2 * border,
            h: self.h - 2 * border,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_should_enforce_a_minimum_size() {
        let mut rect = Rect::new(10, 10, 0, -5);
        rect.apply_bounds(&Rect::new(0, 0, 100, 100), 0);
        assert_eq!(rect, Rect::new(10, 10, 1, 1));
    }

    #[test]
    fn a_box_past_the_far_edges_is_pulled_back() {
        let mut rect = Rect::new(150, 120, 40, 30);
        rect.apply_bounds(&Rect::new(0, 0, 100, 100), 1);
        assert_eq!(rect, Rect::new(60, 70, 40, 30));
    }

    #[test]
    fn a_box_before_the_near_edges_is_moved_onto_them() {
        let mut rect = Rect::new(-60, -40, 50, 30);
        rect.apply_bounds(&Rect::new(0, 0, 100, 100), 2);
        assert_eq!(rect, Rect::new(0, 0, 50, 30));
    }

    #[test]
    fn a_partially_visible_box_is_left_alone() {
        let mut rect = Rect::new(-20, 90, 50, 30);
        rect.apply_bounds(&Rect::new(0, 0, 100, 100), 0);
        assert_eq!(rect, Rect::new(-20, 90, 50, 30));
    }

    #[test]
    fn containment_is_half_open() {
        let rect = Rect::new(0, 0, 10, 10);
        assert!(rect.contains_point(0.0, 0.0));
        assert!(rect.contains_point(9.5, 9.5));
        assert!(!rect.contains_point(10.0, 5.0));
        assert!(!Rect::new(0, 0, 0, 10).contains_point(0.0, 0.0));
    }

    #[test]
    fn scaling_rounds_to_nearest() {
        let rect = Rect::new(1, 3, 5, 7).scaled(1.5);
        assert_eq!(rect, Rect::new(2, 5, 8, 11));
    }

    #[test]
    fn union_ignores_empty_boxes() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(100, 0, 50, 200);
        assert_eq!(a.union(&b), Rect::new(0, 0, 150, 200));
        assert_eq!(Rect::default().union(&b), b);
    }

    #[test]
    fn intersection_of_disjoint_boxes_is_none() {
        let a = Rect::new(0, 0, 100, 100);
        assert_eq!(a.intersection(&Rect::new(100, 0, 10, 10)), None);
        assert_eq!(
            a.intersection(&Rect::new(90, -10, 20, 20)),
            Some(Rect::new(90, 0, 10, 10))
        );
    }
}
