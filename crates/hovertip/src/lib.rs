#![forbid(unsafe_code)]

//! hovertip public facade crate.
//!
//! Re-exports the placement engine and the interaction plumbing from the
//! internal crates, plus a lightweight prelude for day-to-day usage.
//!
//! The host UI layer supplies geometry snapshots (trigger rectangle, measured
//! tooltip size, current viewport) and applies the returned positions; this
//! library never touches the DOM, the screen, or the clock on its own.
//!
//! ```
//! use hovertip::prelude::*;
//!
//! let mut hover = HoverController::default();
//!
//! // Pointer enters a trigger: the host measures the tooltip, then asks
//! // where to put it.
//! if let Some(HoverEffect::Show { .. }) = hover.pointer_enter(1) {
//!     let trigger = Rect::new(100.0, 20.0, 100.0, 20.0);
//!     let tooltip = Size::new(320.0, 80.0);
//!     let viewport = Viewport::new(1280.0, 720.0);
//!
//!     let placement = resolve(trigger, tooltip, viewport, &PlacementOptions::default());
//!     // Too close to the top edge: flipped below the trigger.
//!     assert_eq!(placement.side, Side::Below);
//!     assert_eq!(placement.position.y, 55.0);
//! }
//! ```

// --- Core re-exports -------------------------------------------------------

pub use hovertip_core::content::{ContentRegistry, TooltipContent};
pub use hovertip_core::geometry::{Point, Rect, Size, Viewport};
pub use hovertip_core::hover::{HoverConfig, HoverController, HoverEffect};
pub use hovertip_core::reflow::{ReflowCoalescer, ReflowTrigger};

// --- Layout re-exports -----------------------------------------------------

pub use hovertip_layout::{
    compute_cursor_position, compute_position, resolve, Adjustment, Placement, PlacementOptions,
    Side,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        compute_cursor_position, compute_position, resolve, ContentRegistry, HoverConfig,
        HoverController, HoverEffect, Placement, PlacementOptions, Point, Rect, ReflowCoalescer,
        ReflowTrigger, Side, Size, TooltipContent, Viewport,
    };

    pub use crate::{core, layout};
}

pub use hovertip_core as core;
pub use hovertip_layout as layout;
