use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Point;

/// Phase of the timeline hover state machine.
///
/// `Closing` means the pointer has left the axis and a grace deadline is
/// armed; hover survives until the deadline elapses unless the pointer
/// re-enters the axis or the popup first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HoverPhase {
    #[default]
    Idle,
    HoveringAxis,
    HoveringPopup,
    Closing,
}

/// Pending close deadline, tagged with the generation that armed it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct CloseDeadline {
    at: f64,
    generation: u64,
}

/// Read-only hover snapshot exposed to host applications.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverSnapshot {
    pub phase: HoverPhase,
    pub hovered_year: Option<i32>,
    /// 0-based month index within the hovered year.
    pub hovered_month: Option<u32>,
    pub anchor: Point,
    pub popup_pinned: bool,
}

/// Per-instance hover state for the timeline selector.
///
/// Every transition is synchronous; the close delay is an explicit deadline
/// driven by host-supplied monotonic timestamps (seconds). At most one
/// deadline is pending at a time and any transition out of `Closing` bumps
/// the generation counter, so a stale deadline observed by a later `poll`
/// can never clear re-engaged hover.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverState {
    phase: HoverPhase,
    hovered_year: Option<i32>,
    hovered_month: Option<u32>,
    anchor: Point,
    close_delay_seconds: f64,
    pending_close: Option<CloseDeadline>,
    generation: u64,
}

impl HoverState {
    #[must_use]
    pub fn new(close_delay_seconds: f64) -> Self {
        Self {
            phase: HoverPhase::Idle,
            hovered_year: None,
            hovered_month: None,
            anchor: Point::default(),
            close_delay_seconds,
            pending_close: None,
            generation: 0,
        }
    }

    #[must_use]
    pub fn phase(self) -> HoverPhase {
        self.phase
    }

    #[must_use]
    pub fn hovered_year(self) -> Option<i32> {
        self.hovered_year
    }

    /// 0-based month index within the hovered year.
    #[must_use]
    pub fn hovered_month(self) -> Option<u32> {
        self.hovered_month
    }

    #[must_use]
    pub fn anchor(self) -> Point {
        self.anchor
    }

    #[must_use]
    pub fn is_popup_pinned(self) -> bool {
        self.phase == HoverPhase::HoveringPopup
    }

    #[must_use]
    pub fn close_delay_seconds(self) -> f64 {
        self.close_delay_seconds
    }

    /// Deadline of the pending close, if one is armed.
    #[must_use]
    pub fn pending_close_at(self) -> Option<f64> {
        self.pending_close.map(|deadline| deadline.at)
    }

    #[must_use]
    pub fn snapshot(self) -> HoverSnapshot {
        HoverSnapshot {
            phase: self.phase,
            hovered_year: self.hovered_year,
            hovered_month: self.hovered_month,
            anchor: self.anchor,
            popup_pinned: self.is_popup_pinned(),
        }
    }

    /// Pointer sample over the axis.
    ///
    /// Cancels any pending close. While the popup is pinned the popup owns
    /// precise month hover, so axis-driven position updates are suppressed.
    pub fn on_axis_move(&mut self, year: i32, month_index: u32, anchor: Point) {
        self.cancel_pending_close();
        if self.phase == HoverPhase::HoveringPopup {
            return;
        }
        if self.phase != HoverPhase::HoveringAxis {
            debug!(?year, phase = ?self.phase, "hover: entering axis");
        }
        self.phase = HoverPhase::HoveringAxis;
        self.hovered_year = Some(year);
        self.hovered_month = Some(month_index.min(11));
        self.anchor = anchor;
    }

    /// Pointer left the axis: arm the grace deadline instead of clearing.
    pub fn on_axis_leave(&mut self, now: f64) {
        if self.phase != HoverPhase::HoveringAxis {
            return;
        }
        self.phase = HoverPhase::Closing;
        self.generation += 1;
        self.pending_close = Some(CloseDeadline {
            at: now + self.close_delay_seconds,
            generation: self.generation,
        });
        debug!(deadline = now + self.close_delay_seconds, "hover: close armed");
    }

    /// Pointer entered the popup: pin it and cancel any pending close.
    pub fn on_popup_enter(&mut self) {
        if self.hovered_year.is_none() {
            return;
        }
        self.cancel_pending_close();
        self.phase = HoverPhase::HoveringPopup;
    }

    /// Popup refined the hovered month while pinned.
    pub fn set_popup_month(&mut self, month_index: u32) {
        if self.phase == HoverPhase::HoveringPopup {
            self.hovered_month = Some(month_index.min(11));
        }
    }

    /// Pointer left the popup: the user exited the interactive region, so
    /// hover clears immediately without a grace delay.
    pub fn on_popup_leave(&mut self) {
        if self.phase == HoverPhase::HoveringPopup {
            self.clear();
        }
    }

    /// Pointer press outside the whole widget force-clears hover.
    pub fn on_outside_press(&mut self) {
        if self.phase != HoverPhase::Idle {
            self.clear();
        }
    }

    /// Fires an elapsed close deadline; returns `true` when hover cleared.
    ///
    /// Idempotent: once a deadline fires or is invalidated, later polls with
    /// the same or larger timestamps are no-ops.
    pub fn poll(&mut self, now: f64) -> bool {
        let Some(deadline) = self.pending_close else {
            return false;
        };
        if deadline.generation != self.generation || self.phase != HoverPhase::Closing {
            // Stale deadline from before a cancelling transition.
            self.pending_close = None;
            return false;
        }
        if now < deadline.at {
            return false;
        }
        debug!("hover: close fired");
        self.clear();
        true
    }

    fn cancel_pending_close(&mut self) {
        if self.pending_close.is_some() {
            self.generation += 1;
            self.pending_close = None;
        }
    }

    fn clear(&mut self) {
        self.cancel_pending_close();
        self.phase = HoverPhase::Idle;
        self.hovered_year = None;
        self.hovered_month = None;
    }
}
