#![forbid(unsafe_code)]

//! Coalescing for high-frequency reposition triggers.
//!
//! Hosts can deliver a flood of pointer-move, scroll, and resize events
//! during rapid interaction. Repositioning a visible tooltip on each one
//! wastes work: only the most recent pointer position and viewport size
//! matter, and any number of scrolls collapse into "trigger geometry is
//! stale, re-measure it".
//!
//! [`ReflowCoalescer`] applies a "latest wins" strategy: pushes never
//! reposition anything, and the caller drains at most three triggers per
//! frame via [`flush`](ReflowCoalescer::flush).

use crate::geometry::{Point, Viewport};

/// A reason to recompute a visible tooltip's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReflowTrigger {
    /// The window was resized; carries the new viewport bounds.
    ViewportResized(Viewport),
    /// The page scrolled; trigger geometry must be re-read.
    Scrolled,
    /// The pointer moved; carries the latest position (cursor-anchored
    /// tooltips follow it).
    PointerMoved(Point),
}

/// Coalesces reposition triggers so each flush yields at most one of each kind.
///
/// Not thread-safe; owned by the single event-processing loop. All
/// operations are O(1) and the coalescer holds at most three pending
/// triggers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReflowCoalescer {
    /// Pending resize (latest viewport wins).
    pending_viewport: Option<Viewport>,

    /// At least one scroll arrived since the last flush.
    scroll_dirty: bool,

    /// Pending pointer move (latest position wins).
    pending_pointer: Option<Point>,
}

impl ReflowCoalescer {
    /// Create an empty coalescer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a trigger. Never delivers anything by itself.
    pub fn push(&mut self, trigger: ReflowTrigger) {
        match trigger {
            ReflowTrigger::ViewportResized(viewport) => {
                self.pending_viewport = Some(viewport);
            }
            ReflowTrigger::Scrolled => {
                self.scroll_dirty = true;
            }
            ReflowTrigger::PointerMoved(pos) => {
                self.pending_pointer = Some(pos);
            }
        }
    }

    /// Whether any trigger is pending.
    #[inline]
    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending_viewport.is_some() || self.scroll_dirty || self.pending_pointer.is_some()
    }

    /// Drain all pending triggers.
    ///
    /// Order is fixed: resize first (it changes the bounds everything else is
    /// clamped against), then scroll, then pointer move. After `flush` the
    /// coalescer is empty.
    pub fn flush(&mut self) -> Vec<ReflowTrigger> {
        let mut out = Vec::with_capacity(3);
        if let Some(viewport) = self.pending_viewport.take() {
            out.push(ReflowTrigger::ViewportResized(viewport));
        }
        if self.scroll_dirty {
            self.scroll_dirty = false;
            out.push(ReflowTrigger::Scrolled);
        }
        if let Some(pos) = self.pending_pointer.take() {
            out.push(ReflowTrigger::PointerMoved(pos));
        }
        out
    }
}
