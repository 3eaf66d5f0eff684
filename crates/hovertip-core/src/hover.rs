#![forbid(unsafe_code)]

//! Hover show/hide lifecycle with a cancelable hide delay.
//!
//! Hiding is debounced: on pointer-leave the tooltip stays visible for a
//! short grace period, and a pointer-enter arriving before the deadline
//! cancels the pending hide. This removes flicker when the pointer skims
//! across the gap between a trigger and its tooltip, or between adjacent
//! triggers.
//!
//! # Invariants
//!
//! 1. At most one hide deadline is outstanding; every transition clears and
//!    replaces it.
//! 2. A show request always wins over a pending hide, regardless of target.
//! 3. At most one tooltip is visible per controller; entering a new target
//!    replaces the previous one.
//!
//! The controller never reads the clock itself: callers pass `Instant`s in,
//! which keeps the state machine deterministic under test.

use std::time::{Duration, Instant};

/// Configuration for the hover lifecycle.
#[derive(Debug, Clone)]
pub struct HoverConfig {
    /// Grace period between pointer-leave and the tooltip actually hiding.
    /// Default: 200ms
    pub hide_delay: Duration,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            hide_delay: Duration::from_millis(200),
        }
    }
}

/// A visibility change the host must apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEffect {
    /// Measure, position, and show the tooltip for `target`.
    Show {
        /// Trigger that should now own the tooltip.
        target: u64,
        /// Previously visible trigger, if this show replaces one.
        replaces: Option<u64>,
    },
    /// Hide the tooltip for `target`.
    Hide {
        /// Trigger whose tooltip timed out.
        target: u64,
    },
}

/// The single outstanding hide timer.
#[derive(Debug, Clone, Copy)]
struct PendingHide {
    target: u64,
    deadline: Instant,
}

/// Stateful show/hide controller for one tooltip surface.
///
/// Feed pointer transitions via [`pointer_enter`](HoverController::pointer_enter)
/// and [`pointer_leave`](HoverController::pointer_leave), and poll
/// [`tick`](HoverController::tick) from the frame or event loop to fire
/// delayed hides.
#[derive(Debug)]
pub struct HoverController {
    config: HoverConfig,

    /// Trigger whose tooltip is currently visible (None = hidden).
    visible: Option<u64>,

    /// Pending delayed hide, cleared and replaced on every transition.
    pending_hide: Option<PendingHide>,

    /// Diagnostic: total show transitions.
    shows: u64,

    /// Diagnostic: total hide transitions.
    hides: u64,
}

impl HoverController {
    /// Create a new controller with the given configuration.
    #[must_use]
    pub fn new(config: HoverConfig) -> Self {
        Self {
            config,
            visible: None,
            pending_hide: None,
            shows: 0,
            hides: 0,
        }
    }

    /// Pointer entered a trigger.
    ///
    /// Cancels any pending hide. Returns a [`HoverEffect::Show`] when the
    /// visible tooltip changes, or `None` when the same trigger is already
    /// visible (the hide cancellation is the only effect).
    pub fn pointer_enter(&mut self, target: u64) -> Option<HoverEffect> {
        self.pending_hide = None;

        if self.visible == Some(target) {
            return None;
        }

        let replaces = self.visible;
        self.visible = Some(target);
        self.shows += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(trigger = target, ?replaces, "tooltip shown");

        Some(HoverEffect::Show { target, replaces })
    }

    /// Pointer left the visible trigger.
    ///
    /// Schedules a hide at `now + hide_delay`, replacing any previous
    /// deadline. Returns the deadline so hosts with real timers can arm one;
    /// polling hosts just call [`tick`](HoverController::tick). No-op when
    /// nothing is visible.
    pub fn pointer_leave(&mut self, now: Instant) -> Option<Instant> {
        let target = self.visible?;
        let deadline = now + self.config.hide_delay;
        self.pending_hide = Some(PendingHide { target, deadline });

        #[cfg(feature = "tracing")]
        tracing::trace!(trigger = target, "hide scheduled");

        Some(deadline)
    }

    /// Fire the pending hide once its deadline has elapsed.
    pub fn tick(&mut self, now: Instant) -> Option<HoverEffect> {
        let pending = self.pending_hide?;
        if now < pending.deadline {
            return None;
        }

        self.pending_hide = None;
        if self.visible == Some(pending.target) {
            self.visible = None;
        }
        self.hides += 1;

        #[cfg(feature = "tracing")]
        tracing::trace!(trigger = pending.target, "tooltip hidden");

        Some(HoverEffect::Hide {
            target: pending.target,
        })
    }

    /// Trigger whose tooltip is currently visible.
    #[inline]
    #[must_use]
    pub fn visible_target(&self) -> Option<u64> {
        self.visible
    }

    /// Deadline of the pending hide, if one is armed.
    #[inline]
    #[must_use]
    pub fn pending_hide_deadline(&self) -> Option<Instant> {
        self.pending_hide.map(|p| p.deadline)
    }

    /// Hide immediately and drop any pending deadline.
    pub fn reset(&mut self) {
        if self.visible.take().is_some() {
            self.hides += 1;
        }
        self.pending_hide = None;
    }

    /// Get the number of show transitions (diagnostic).
    #[inline]
    #[must_use]
    pub fn show_count(&self) -> u64 {
        self.shows
    }

    /// Get the number of hide transitions (diagnostic).
    #[inline]
    #[must_use]
    pub fn hide_count(&self) -> u64 {
        self.hides
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &HoverConfig {
        &self.config
    }

    /// Update the configuration. An already-armed deadline is unaffected.
    pub fn set_config(&mut self, config: HoverConfig) {
        self.config = config;
    }
}

impl Default for HoverController {
    fn default() -> Self {
        Self::new(HoverConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> HoverController {
        HoverController::default()
    }

    // --- Basic lifecycle ---

    #[test]
    fn initial_state_is_hidden() {
        let ctl = controller();
        assert!(ctl.visible_target().is_none());
        assert!(ctl.pending_hide_deadline().is_none());
        assert_eq!(ctl.show_count(), 0);
        assert_eq!(ctl.hide_count(), 0);
    }

    #[test]
    fn enter_shows_immediately() {
        let mut ctl = controller();
        let effect = ctl.pointer_enter(7);
        assert_eq!(
            effect,
            Some(HoverEffect::Show {
                target: 7,
                replaces: None
            })
        );
        assert_eq!(ctl.visible_target(), Some(7));
        assert_eq!(ctl.show_count(), 1);
    }

    #[test]
    fn re_enter_same_target_is_quiet() {
        let mut ctl = controller();
        ctl.pointer_enter(7);
        assert!(ctl.pointer_enter(7).is_none());
        assert_eq!(ctl.show_count(), 1);
    }

    #[test]
    fn enter_new_target_replaces_previous() {
        let mut ctl = controller();
        ctl.pointer_enter(7);
        let effect = ctl.pointer_enter(9);
        assert_eq!(
            effect,
            Some(HoverEffect::Show {
                target: 9,
                replaces: Some(7)
            })
        );
        assert_eq!(ctl.visible_target(), Some(9));
    }

    // --- Delayed hide ---

    #[test]
    fn leave_schedules_hide_at_deadline() {
        let mut ctl = controller();
        let t = Instant::now();
        ctl.pointer_enter(7);

        let deadline = ctl.pointer_leave(t);
        assert_eq!(deadline, Some(t + Duration::from_millis(200)));

        // Still visible before the deadline.
        assert!(ctl.tick(t + Duration::from_millis(199)).is_none());
        assert_eq!(ctl.visible_target(), Some(7));

        // Fires at the deadline.
        let effect = ctl.tick(t + Duration::from_millis(200));
        assert_eq!(effect, Some(HoverEffect::Hide { target: 7 }));
        assert!(ctl.visible_target().is_none());
        assert_eq!(ctl.hide_count(), 1);
    }

    #[test]
    fn hide_fires_once() {
        let mut ctl = controller();
        let t = Instant::now();
        ctl.pointer_enter(7);
        ctl.pointer_leave(t);

        let late = t + Duration::from_millis(500);
        assert!(ctl.tick(late).is_some());
        assert!(ctl.tick(late).is_none());
        assert_eq!(ctl.hide_count(), 1);
    }

    #[test]
    fn leave_without_visible_tooltip_is_noop() {
        let mut ctl = controller();
        assert!(ctl.pointer_leave(Instant::now()).is_none());
        assert!(ctl.pending_hide_deadline().is_none());
    }

    // --- Cancellation (anti-flicker) ---

    #[test]
    fn re_enter_cancels_pending_hide() {
        let mut ctl = controller();
        let t = Instant::now();
        ctl.pointer_enter(7);
        ctl.pointer_leave(t);

        // Pointer comes back before the grace period ends.
        assert!(ctl.pointer_enter(7).is_none());
        assert!(ctl.pending_hide_deadline().is_none());

        // The old deadline must not fire.
        assert!(ctl.tick(t + Duration::from_secs(1)).is_none());
        assert_eq!(ctl.visible_target(), Some(7));
    }

    #[test]
    fn enter_new_target_cancels_pending_hide_of_old() {
        let mut ctl = controller();
        let t = Instant::now();
        ctl.pointer_enter(7);
        ctl.pointer_leave(t);

        // A different trigger is hovered before the old hide fires.
        let effect = ctl.pointer_enter(9);
        assert_eq!(
            effect,
            Some(HoverEffect::Show {
                target: 9,
                replaces: Some(7)
            })
        );

        // No stale hide for the old target.
        assert!(ctl.tick(t + Duration::from_secs(1)).is_none());
        assert_eq!(ctl.visible_target(), Some(9));
    }

    #[test]
    fn repeated_leave_replaces_deadline() {
        let mut ctl = controller();
        let t = Instant::now();
        ctl.pointer_enter(7);

        ctl.pointer_leave(t);
        let second = ctl.pointer_leave(t + Duration::from_millis(100));
        assert_eq!(second, Some(t + Duration::from_millis(300)));

        // The first deadline is gone; only the replacement counts.
        assert!(ctl.tick(t + Duration::from_millis(250)).is_none());
        assert!(ctl.tick(t + Duration::from_millis(300)).is_some());
    }

    // --- Reset and config ---

    #[test]
    fn reset_hides_and_clears_deadline() {
        let mut ctl = controller();
        ctl.pointer_enter(7);
        ctl.pointer_leave(Instant::now());
        ctl.reset();

        assert!(ctl.visible_target().is_none());
        assert!(ctl.pending_hide_deadline().is_none());
        assert_eq!(ctl.hide_count(), 1);
    }

    #[test]
    fn reset_when_hidden_counts_nothing() {
        let mut ctl = controller();
        ctl.reset();
        assert_eq!(ctl.hide_count(), 0);
    }

    #[test]
    fn custom_hide_delay_is_honored() {
        let mut ctl = HoverController::new(HoverConfig {
            hide_delay: Duration::from_millis(50),
        });
        let t = Instant::now();
        ctl.pointer_enter(1);
        assert_eq!(ctl.pointer_leave(t), Some(t + Duration::from_millis(50)));
    }

    #[test]
    fn config_getter_and_setter() {
        let mut ctl = controller();
        assert_eq!(ctl.config().hide_delay, Duration::from_millis(200));

        ctl.set_config(HoverConfig {
            hide_delay: Duration::from_millis(20),
        });
        assert_eq!(ctl.config().hide_delay, Duration::from_millis(20));
    }
}
