#![forbid(unsafe_code)]

//! Viewport-aware tooltip placement.
//!
//! Given a trigger's bounding rectangle, a tooltip's measured size, and the
//! current viewport, [`resolve`] computes a fixed position that keeps the
//! tooltip fully inside the padded viewport:
//!
//! 1. Candidate position on the preferred side ([`Side::Above`] centers on
//!    the trigger, [`Side::Right`] top-aligns next to it).
//! 2. Flip to the opposite side when the preferred side lacks room.
//! 3. Final clamp on both axes — always applied, and the step that actually
//!    enforces the containment guarantee; the flip is only a nicer-placement
//!    heuristic the clamp overrides when it still doesn't fit.
//!
//! The functions here are pure and total: any combination of finite or
//! non-finite inputs yields a position, never an error. Inputs are sanitized
//! first (non-finite and negative components become zero), and a tooltip
//! larger than the padded viewport clamps to the padded origin on that axis,
//! accepting visual overflow as the explicit last resort.
//!
//! ```
//! use hovertip_core::geometry::{Rect, Size, Viewport};
//! use hovertip_layout::{compute_position, PlacementOptions};
//!
//! let trigger = Rect::new(600.0, 300.0, 100.0, 20.0);
//! let tooltip = Size::new(320.0, 80.0);
//! let viewport = Viewport::new(1280.0, 720.0);
//!
//! let pos = compute_position(trigger, tooltip, viewport, &PlacementOptions::default());
//! // Centered above the trigger: 600 + 50 - 160, 300 - 80 - 15.
//! assert_eq!((pos.x, pos.y), (490.0, 205.0));
//! ```

use bitflags::bitflags;
use hovertip_core::geometry::{Point, Rect, Size, Viewport};

/// Side of the trigger a tooltip is placed on.
///
/// `Above` and `Right` are the usual preferred sides; `Below` and `Left`
/// exist so a flip resolves to a nameable side, and may also be requested
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Above the trigger, horizontally centered on it.
    #[default]
    Above,
    /// Below the trigger, horizontally centered on it.
    Below,
    /// Left of the trigger, top-aligned with it.
    Left,
    /// Right of the trigger, top-aligned with it.
    Right,
}

impl Side {
    /// The side a failed placement flips to.
    #[must_use]
    pub const fn opposite(self) -> Side {
        match self {
            Side::Above => Side::Below,
            Side::Below => Side::Above,
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Whether this side places the tooltip along the vertical axis.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Side::Above | Side::Below)
    }
}

bitflags! {
    /// Fallback steps that fired while resolving a placement.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Adjustment: u8 {
        /// The preferred side lacked room; the opposite side was used.
        const FLIPPED    = 0b0001;
        /// The final clamp moved the tooltip horizontally.
        const CLAMPED_X  = 0b0010;
        /// The final clamp moved the tooltip vertically.
        const CLAMPED_Y  = 0b0100;
    }
}

/// Tuning knobs for placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementOptions {
    /// Side to try first.
    pub preferred_side: Side,
    /// Minimum distance the tooltip keeps from every viewport edge.
    /// Default: 15.0
    pub edge_padding: f32,
    /// Distance between the trigger (or cursor) and the tooltip.
    /// Default: 15.0
    pub gap: f32,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            preferred_side: Side::Above,
            edge_padding: 15.0,
            gap: 15.0,
        }
    }
}

impl PlacementOptions {
    /// Options with a different preferred side and default paddings.
    #[must_use]
    pub fn preferring(side: Side) -> Self {
        Self {
            preferred_side: side,
            ..Self::default()
        }
    }

    fn sane_padding(&self) -> f32 {
        if self.edge_padding.is_finite() && self.edge_padding > 0.0 {
            self.edge_padding
        } else {
            0.0
        }
    }

    fn sane_gap(&self) -> f32 {
        if self.gap.is_finite() && self.gap > 0.0 {
            self.gap
        } else {
            0.0
        }
    }
}

/// A resolved placement: where the tooltip goes and how it got there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Top-left corner of the tooltip, in viewport coordinates.
    pub position: Point,
    /// Side of the trigger the tooltip ended up on.
    pub side: Side,
    /// Fallback steps that fired.
    pub adjustments: Adjustment,
}

impl Placement {
    /// The rectangle the tooltip will occupy.
    #[must_use]
    pub fn rect(&self, tooltip: Size) -> Rect {
        Rect::from_point_size(self.position, tooltip.sanitized())
    }
}

/// Resolve a tooltip placement next to a trigger.
///
/// Pure and total: no side effects, identical inputs give identical output,
/// and every input (including NaN, infinities, and negative extents) yields
/// an in-bounds position. Applying the position is the caller's job.
#[must_use]
pub fn resolve(
    trigger: Rect,
    tooltip: Size,
    viewport: Viewport,
    options: &PlacementOptions,
) -> Placement {
    let trigger = trigger.sanitized();
    let tooltip = tooltip.sanitized();
    let viewport = viewport.sanitized();
    let pad = options.sane_padding();
    let gap = options.sane_gap();

    let mut side = options.preferred_side;
    let mut pos = candidate(trigger, tooltip, gap, side);
    let mut adjustments = Adjustment::empty();

    // Flip when the preferred side lacks room inside the padded bounds. The
    // cross axis is left to the final clamp.
    let needs_flip = match side {
        Side::Above => pos.y < pad,
        Side::Below => pos.y + tooltip.height > viewport.height - pad,
        Side::Right => pos.x + tooltip.width > viewport.width - pad,
        Side::Left => pos.x < pad,
    };
    if needs_flip {
        side = side.opposite();
        pos = candidate(trigger, tooltip, gap, side);
        adjustments |= Adjustment::FLIPPED;

        #[cfg(feature = "tracing")]
        tracing::trace!(?side, "placement flipped");
    }

    // Final clamp, both axes, regardless of side. min() first so an
    // oversized tooltip lands on the padded origin rather than centering
    // off-screen.
    let clamped_x = pos.x.min(viewport.width - tooltip.width - pad).max(pad);
    let clamped_y = pos.y.min(viewport.height - tooltip.height - pad).max(pad);
    if clamped_x != pos.x {
        adjustments |= Adjustment::CLAMPED_X;
    }
    if clamped_y != pos.y {
        adjustments |= Adjustment::CLAMPED_Y;
    }

    #[cfg(feature = "tracing")]
    if !adjustments.is_empty() {
        tracing::trace!(x = clamped_x, y = clamped_y, ?adjustments, "placement adjusted");
    }

    Placement {
        position: Point::new(clamped_x, clamped_y),
        side,
        adjustments,
    }
}

/// Compute the tooltip position next to a trigger.
///
/// Shorthand for [`resolve`] when the caller only needs the coordinates.
#[must_use]
pub fn compute_position(
    trigger: Rect,
    tooltip: Size,
    viewport: Viewport,
    options: &PlacementOptions,
) -> Point {
    resolve(trigger, tooltip, viewport, options).position
}

/// Compute a cursor-anchored tooltip position.
///
/// The tooltip trails below-right of the pointer by `gap`, flips to the
/// opposite side of the pointer per axis when it would overflow, and is
/// clamped into the padded viewport like every other placement.
#[must_use]
pub fn compute_cursor_position(
    cursor: Point,
    tooltip: Size,
    viewport: Viewport,
    options: &PlacementOptions,
) -> Point {
    let cursor = cursor.sanitized();
    let tooltip = tooltip.sanitized();
    let viewport = viewport.sanitized();
    let pad = options.sane_padding();
    let gap = options.sane_gap();

    let mut x = cursor.x + gap;
    let mut y = cursor.y + gap;

    if x + tooltip.width > viewport.width - pad {
        x = cursor.x - tooltip.width - gap;
    }
    if y + tooltip.height > viewport.height - pad {
        y = cursor.y - tooltip.height - gap;
    }

    Point::new(
        x.min(viewport.width - tooltip.width - pad).max(pad),
        y.min(viewport.height - tooltip.height - pad).max(pad),
    )
}

/// Unclamped candidate position for a side.
fn candidate(trigger: Rect, tooltip: Size, gap: f32, side: Side) -> Point {
    match side {
        Side::Above => Point::new(
            trigger.center_x() - tooltip.width / 2.0,
            trigger.top() - tooltip.height - gap,
        ),
        Side::Below => Point::new(
            trigger.center_x() - tooltip.width / 2.0,
            trigger.bottom() + gap,
        ),
        Side::Right => Point::new(trigger.right() + gap, trigger.top()),
        Side::Left => Point::new(trigger.left() - tooltip.width - gap, trigger.top()),
    }
}
