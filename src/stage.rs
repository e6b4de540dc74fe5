//! Scroll-driven stage controller.
//!
//! This module converts raw scroll signals into the derived view state that
//! drives the showcase screens: a reveal progress ratio, a one-way unlock
//! latch, a post-unlock scroll-through percentage, and the active section
//! index. Screens own one controller each; it is dropped on route change.

use std::io;
use std::sync::{Arc, Mutex};

/// Fraction of the viewport height the reveal gesture must cover before the
/// gate opens.
pub const REVEAL_FRACTION: f64 = 0.6;

/// Snapshot of the scroll axis delivered by the host viewport.
///
/// Offsets and heights share one coordinate space (content rows). Only the
/// latest snapshot matters; the controller tolerates coalesced delivery.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSignal {
    pub scroll_offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
}

impl ScrollSignal {
    pub fn new(scroll_offset: f64, viewport_height: f64, document_height: f64) -> Self {
        Self {
            scroll_offset,
            viewport_height,
            document_height,
        }
    }

    /// Clamp non-finite and out-of-range values to the nearest valid
    /// boundary so NaN never reaches derived state.
    fn sanitized(self) -> Self {
        let viewport = if self.viewport_height.is_finite() && self.viewport_height > 0.0 {
            self.viewport_height
        } else {
            1.0
        };
        let document = if self.document_height.is_finite() {
            self.document_height.max(viewport)
        } else {
            viewport
        };
        let offset = if self.scroll_offset.is_finite() {
            self.scroll_offset.max(0.0)
        } else {
            0.0
        };
        Self {
            scroll_offset: offset,
            viewport_height: viewport,
            document_height: document,
        }
    }
}

/// Process-wide switch that suppresses free scrolling while a gate is
/// closed. Single slot: at most one controller holds it at a time.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    suppressed: Arc<Mutex<bool>>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether some gated screen currently holds the slot.
    #[allow(dead_code)]
    pub fn is_suppressed(&self) -> bool {
        self.suppressed.lock().map(|flag| *flag).unwrap_or(false)
    }

    fn try_acquire(&self) -> Option<ScrollGuard> {
        let Ok(mut flag) = self.suppressed.lock() else {
            return None;
        };
        if *flag {
            return None;
        }
        *flag = true;
        Some(ScrollGuard {
            suppressed: Arc::clone(&self.suppressed),
        })
    }
}

/// Holds the suppression slot; dropping it restores free scrolling.
#[derive(Debug)]
struct ScrollGuard {
    suppressed: Arc<Mutex<bool>>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        if let Ok(mut flag) = self.suppressed.lock() {
            *flag = false;
        }
    }
}

/// One-shot request to move the host scroll position, queued when the gate
/// opens so the user lands exactly at the top of the revealed content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reposition {
    pub target_offset: f64,
}

/// Disclosure phase of a gated screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GatePhase {
    Gated,    // reveal gesture in progress, free scrolling suppressed
    Unlocked, // terminal, normal scrolling restored
}

/// Derives `{progress, unlocked, active_index, content_progress}` from the
/// latest scroll snapshot.
///
/// Recomputation is idempotent: re-applying an identical signal leaves the
/// derived state unchanged and never reschedules the unlock reposition.
#[derive(Debug)]
pub struct StageController {
    phase: GatePhase,
    progress: f64,
    content_progress: f64,
    active_index: usize,
    section_count: usize,
    section_bounds: Vec<(f64, f64)>,
    reveal_fraction: f64,
    unlock_offset: f64,
    pending_reposition: Option<Reposition>,
    guard: Option<ScrollGuard>,
}

impl StageController {
    /// Controller for a screen that starts behind the reveal gate.
    ///
    /// Acquires the scroll suppression slot; fails if another gated screen
    /// already holds it.
    pub fn gated(section_count: usize, lock: &ScrollLock) -> io::Result<Self> {
        let guard = lock.try_acquire().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::WouldBlock,
                "scroll suppression already held by another screen",
            )
        })?;
        Ok(Self {
            phase: GatePhase::Gated,
            progress: 0.0,
            content_progress: 0.0,
            active_index: 0,
            section_count,
            section_bounds: Vec::new(),
            reveal_fraction: REVEAL_FRACTION,
            unlock_offset: 0.0,
            pending_reposition: None,
            guard: Some(guard),
        })
    }

    /// Controller for a screen with no gate; starts unlocked and never
    /// touches the suppression slot.
    pub fn open(section_count: usize) -> Self {
        Self {
            phase: GatePhase::Unlocked,
            progress: 1.0,
            content_progress: 0.0,
            active_index: 0,
            section_count,
            section_bounds: Vec::new(),
            reveal_fraction: REVEAL_FRACTION,
            unlock_offset: 0.0,
            pending_reposition: None,
            guard: None,
        }
    }

    /// Recompute derived state from the latest scroll snapshot.
    pub fn apply_signal(&mut self, signal: ScrollSignal) {
        let signal = signal.sanitized();
        match self.phase {
            GatePhase::Gated => {
                let reveal_distance = self.reveal_distance(signal.viewport_height);
                self.progress = (signal.scroll_offset / reveal_distance).clamp(0.0, 1.0);
                if self.progress >= 1.0 {
                    self.unlock(reveal_distance);
                }
            }
            GatePhase::Unlocked => {
                let scrollable = signal.document_height - signal.viewport_height;
                self.content_progress = if scrollable > 0.0 {
                    ((signal.scroll_offset - self.unlock_offset) / scrollable).clamp(0.0, 1.0)
                        * 100.0
                } else {
                    0.0
                };
            }
        }
        if !self.section_bounds.is_empty() {
            self.active_index = active_index_from_scroll(
                signal.scroll_offset,
                signal.viewport_height,
                &self.section_bounds,
            );
        }
    }

    fn unlock(&mut self, reveal_distance: f64) {
        self.progress = 1.0;
        self.phase = GatePhase::Unlocked;
        self.unlock_offset = reveal_distance;
        // Releasing the guard restores free scrolling for good.
        self.guard = None;
        self.pending_reposition = Some(Reposition {
            target_offset: reveal_distance,
        });
    }

    /// Explicit user selection, independent of scroll-derived computation.
    /// The next scroll signal with section bounds takes over again.
    pub fn select(&mut self, index: usize) -> io::Result<()> {
        if index >= self.section_count {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "selection index {} out of range 0..{}",
                    index, self.section_count
                ),
            ));
        }
        self.active_index = index;
        Ok(())
    }

    /// Replace the `[top, bottom)` offsets of the screen's sections. The
    /// host recomputes these whenever layout width changes.
    pub fn set_section_bounds(&mut self, bounds: Vec<(f64, f64)>) {
        self.section_bounds = bounds;
    }

    /// While the gate is closed, the host may only scroll far enough to
    /// drive the reveal; returns that limit, or `None` once free scrolling
    /// is restored.
    pub fn gated_scroll_limit(&self, viewport_height: f64) -> Option<f64> {
        match self.phase {
            GatePhase::Gated => Some(self.reveal_distance(viewport_height)),
            GatePhase::Unlocked => None,
        }
    }

    fn reveal_distance(&self, viewport_height: f64) -> f64 {
        (viewport_height * self.reveal_fraction).max(1.0)
    }

    /// Consume the queued unlock reposition, if any. Called by the host
    /// after the render pass that hides the gating visuals; dropping the
    /// controller cancels an untaken request.
    pub fn take_reposition(&mut self) -> Option<Reposition> {
        self.pending_reposition.take()
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn unlocked(&self) -> bool {
        self.phase == GatePhase::Unlocked
    }

    /// Post-unlock scroll-through percentage in `[0, 100]`.
    pub fn content_progress(&self) -> f64 {
        self.content_progress
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Scroll offset where the revealed content begins; 0 for controllers
    /// built without a gate.
    pub fn unlock_offset(&self) -> f64 {
        self.unlock_offset
    }
}

/// Midpoint rule: the section whose `[top, bottom)` range contains the
/// vertical center of the viewport is active. Offsets before the first or
/// beyond the last section clamp to the nearest end, never out of range.
pub fn active_index_from_scroll(
    scroll_offset: f64,
    viewport_height: f64,
    bounds: &[(f64, f64)],
) -> usize {
    if bounds.is_empty() {
        return 0;
    }
    let midpoint = scroll_offset + viewport_height / 2.0;
    for (i, &(top, bottom)) in bounds.iter().enumerate() {
        if midpoint >= top && midpoint < bottom {
            return i;
        }
    }
    if midpoint < bounds[0].0 {
        0
    } else {
        bounds.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(offset: f64) -> ScrollSignal {
        // Viewport of 50 rows over a 400-row document; reveal distance 30.
        ScrollSignal::new(offset, 50.0, 400.0)
    }

    #[test]
    fn test_progress_tracks_reveal_distance() {
        let lock = ScrollLock::new();
        let mut stage = StageController::gated(0, &lock).unwrap();
        stage.apply_signal(signal(0.0));
        assert_eq!(stage.progress(), 0.0);
        stage.apply_signal(signal(15.0));
        assert!((stage.progress() - 0.5).abs() < 1e-9);
        assert!(!stage.unlocked());
    }

    #[test]
    fn test_monotonic_latch_fires_once_and_never_reverts() {
        let lock = ScrollLock::new();
        let mut stage = StageController::gated(0, &lock).unwrap();
        for offset in [0.0, 10.0, 20.0, 30.0, 35.0] {
            stage.apply_signal(signal(offset));
        }
        assert!(stage.unlocked());
        assert!(stage.take_reposition().is_some());
        // Scrolling back does not close the gate or requeue the reposition.
        stage.apply_signal(signal(0.0));
        assert!(stage.unlocked());
        assert!(stage.take_reposition().is_none());
    }

    #[test]
    fn test_unlock_releases_suppression() {
        let lock = ScrollLock::new();
        let mut stage = StageController::gated(0, &lock).unwrap();
        assert!(lock.is_suppressed());
        stage.apply_signal(signal(30.0));
        assert!(stage.unlocked());
        assert!(!lock.is_suppressed());
    }

    #[test]
    fn test_idempotent_signal_application() {
        let lock = ScrollLock::new();
        let mut stage = StageController::gated(3, &lock).unwrap();
        stage.set_section_bounds(vec![(0.0, 100.0), (100.0, 250.0), (250.0, 400.0)]);
        stage.apply_signal(signal(120.0));
        let first = (stage.progress(), stage.unlocked(), stage.active_index());
        stage.apply_signal(signal(120.0));
        let second = (stage.progress(), stage.unlocked(), stage.active_index());
        assert_eq!(first, second);
    }

    #[test]
    fn test_negative_and_nan_offsets_clamp_to_zero() {
        let lock = ScrollLock::new();
        let mut stage = StageController::gated(0, &lock).unwrap();
        stage.apply_signal(signal(-50.0));
        assert_eq!(stage.progress(), 0.0);
        stage.apply_signal(signal(f64::NAN));
        assert_eq!(stage.progress(), 0.0);
        assert!(!stage.unlocked());
    }

    #[test]
    fn test_huge_offset_clamps_high() {
        let lock = ScrollLock::new();
        let mut stage = StageController::gated(0, &lock).unwrap();
        stage.apply_signal(signal(1e12));
        assert_eq!(stage.progress(), 1.0);
        assert!(stage.unlocked());
        stage.apply_signal(signal(1e12));
        assert_eq!(stage.content_progress(), 100.0);
    }

    #[test]
    fn test_content_progress_defined_without_scrollable_content() {
        let mut stage = StageController::open(0);
        stage.apply_signal(ScrollSignal::new(10.0, 50.0, 50.0));
        assert_eq!(stage.content_progress(), 0.0);
    }

    #[test]
    fn test_content_progress_tracks_scrollable_extent() {
        let mut stage = StageController::open(0);
        stage.apply_signal(ScrollSignal::new(175.0, 50.0, 400.0));
        assert!((stage.content_progress() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_midpoint_selection() {
        let bounds = [(0.0, 100.0), (100.0, 250.0), (250.0, 400.0)];
        assert_eq!(active_index_from_scroll(120.0, 50.0, &bounds), 1);
        assert_eq!(active_index_from_scroll(0.0, 50.0, &bounds), 0);
        assert_eq!(active_index_from_scroll(1000.0, 50.0, &bounds), 2);
    }

    #[test]
    fn test_midpoint_selection_empty_bounds() {
        assert_eq!(active_index_from_scroll(120.0, 50.0, &[]), 0);
    }

    #[test]
    fn test_select_sets_index_and_rejects_out_of_range() {
        let mut stage = StageController::open(4);
        stage.select(2).unwrap();
        assert_eq!(stage.active_index(), 2);
        let err = stage.select(4).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(stage.active_index(), 2);
    }

    #[test]
    fn test_scroll_signal_recomputes_selection_after_select() {
        let mut stage = StageController::open(3);
        stage.set_section_bounds(vec![(0.0, 100.0), (100.0, 250.0), (250.0, 400.0)]);
        stage.select(2).unwrap();
        stage.apply_signal(ScrollSignal::new(0.0, 50.0, 400.0));
        assert_eq!(stage.active_index(), 0);
    }

    #[test]
    fn test_teardown_releases_suppression_and_cancels_reposition() {
        let lock = ScrollLock::new();
        let mut stage = StageController::gated(0, &lock).unwrap();
        stage.apply_signal(signal(30.0));
        assert!(stage.unlocked());
        // Reposition still queued; dropping the controller cancels it and
        // the suppression slot stays free.
        drop(stage);
        assert!(!lock.is_suppressed());

        let stage = StageController::gated(0, &lock).unwrap();
        assert!(lock.is_suppressed());
        drop(stage);
        assert!(!lock.is_suppressed());
    }

    #[test]
    fn test_suppression_slot_is_single_occupancy() {
        let lock = ScrollLock::new();
        let _held = StageController::gated(0, &lock).unwrap();
        let err = StageController::gated(0, &lock).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WouldBlock);
    }

    #[test]
    fn test_gated_scroll_limit_lifts_on_unlock() {
        let lock = ScrollLock::new();
        let mut stage = StageController::gated(0, &lock).unwrap();
        assert_eq!(stage.gated_scroll_limit(50.0), Some(30.0));
        stage.apply_signal(signal(30.0));
        assert_eq!(stage.gated_scroll_limit(50.0), None);
    }

    #[test]
    fn test_open_controller_starts_unlocked() {
        let lock = ScrollLock::new();
        let stage = StageController::open(5);
        assert!(stage.unlocked());
        assert_eq!(stage.progress(), 1.0);
        assert!(!lock.is_suppressed());
    }
}
