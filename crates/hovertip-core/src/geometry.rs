#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are pixel coordinates in viewport space (origin at top-left,
//! y growing downward), stored as `f32` because hosts report fractional
//! positions. Every type carries a `sanitized` form that normalizes
//! non-finite components and negative extents to zero, so downstream
//! placement math is total over arbitrary caller input.

/// Normalize a single coordinate: non-finite or negative becomes zero.
#[inline]
fn sanitize(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

/// A point in viewport coordinates.
///
/// Also used as a placement result: the tooltip's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Copy with non-finite or negative components normalized to zero.
    #[inline]
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self::new(sanitize(self.x), sanitize(self.y))
    }
}

/// A measured tooltip size in pixels.
///
/// The host measures the tooltip's natural rendered dimensions (off-screen or
/// invisible) before asking for a position, so placement never causes a
/// visible jump.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Copy with non-finite or negative dimensions normalized to zero.
    #[inline]
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self::new(sanitize(self.width), sanitize(self.height))
    }
}

/// A rectangle in viewport coordinates.
///
/// This is the trigger-geometry snapshot: the host reads the trigger's live
/// bounding box on every show request (elements move under scroll and layout
/// shift), so a `Rect` is never cached across placement calls.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width in pixels.
    pub width: f32,
    /// Height in pixels.
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from a position and a size.
    #[inline]
    pub const fn from_point_size(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Left edge. Alias for `self.x`.
    #[inline]
    pub const fn left(&self) -> f32 {
        self.x
    }

    /// Top edge. Alias for `self.y`.
    #[inline]
    pub const fn top(&self) -> f32 {
        self.y
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Horizontal center.
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    /// Vertical center.
    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle (right/bottom edges inclusive,
    /// since a tooltip flush against the padded bound still counts as inside).
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Check if `other` lies entirely within this rectangle.
    #[inline]
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.left() >= self.left()
            && other.top() >= self.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Compute the intersection with another rectangle, returning `None` if no overlap.
    pub fn intersection_opt(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Rect::new(x, y, right - x, bottom - y))
        } else {
            None
        }
    }

    /// Shrink the rectangle by a uniform margin on all sides.
    ///
    /// Width and height clamp to zero when the margin eats the whole rect.
    #[must_use]
    pub fn inset(&self, margin: f32) -> Rect {
        let margin = sanitize(margin);
        Rect::new(
            self.x + margin,
            self.y + margin,
            (self.width - margin * 2.0).max(0.0),
            (self.height - margin * 2.0).max(0.0),
        )
    }

    /// Copy with non-finite components normalized and negative extents zeroed.
    #[must_use]
    pub fn sanitized(&self) -> Rect {
        Rect::new(
            sanitize(self.x),
            sanitize(self.y),
            sanitize(self.width),
            sanitize(self.height),
        )
    }
}

/// Current window inner dimensions.
///
/// Read fresh on every placement call; a resize invalidates any cached value,
/// so there is deliberately no caching helper here.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Create a new viewport.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// The full viewport as a rectangle at the origin.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// The placement region: viewport bounds shrunk by the edge padding.
    #[inline]
    pub fn inset(&self, padding: f32) -> Rect {
        self.bounds().inset(padding)
    }

    /// Check if either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Copy with non-finite or negative dimensions normalized to zero.
    #[inline]
    #[must_use]
    pub fn sanitized(&self) -> Self {
        Self::new(sanitize(self.width), sanitize(self.height))
    }
}
