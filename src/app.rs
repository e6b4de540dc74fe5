//! Application state and core logic for the Shortmedia TUI.
//!
//! This module contains the `App` struct which holds all state for the
//! interactive terminal showcase: the active route, its stage controller,
//! the content catalog, and portfolio view state.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::cli::CliConfig;
use crate::models::{Catalog, ProjectFilter, Route, ViewMode};
use crate::stage::{ScrollLock, ScrollSignal, StageController};

/// Rows moved per scroll keypress
pub const SCROLL_STEP: f64 = 2.0;

/// Application state
pub struct App {
    pub route: Route,
    pub catalog: Catalog,
    pub catalog_source: Option<PathBuf>,
    pub catalog_needs_reload: Arc<Mutex<bool>>,
    pub scroll_lock: ScrollLock,
    pub stage: StageController,
    // Scroll axis of the active screen; layout metrics are recorded by the
    // renderer each frame
    pub scroll_offset: f64,
    pub viewport_height: f64,
    pub document_height: f64,
    // Portfolio view state
    pub view_mode: ViewMode,
    pub filter: ProjectFilter,
    pub selected_project: usize,
    pub lightbox_open: bool,
    // Gate configuration
    pub skip_reveal: bool,
    // Animation state
    pub animation_tick: u64,
    pub last_animation_update: Instant,
}

impl App {
    pub fn new(catalog: Catalog, catalog_source: Option<PathBuf>, config: &CliConfig) -> Self {
        let scroll_lock = ScrollLock::new();
        let stage = Self::build_stage(config.route, &catalog, &scroll_lock, config.skip_reveal);

        Self {
            route: config.route,
            catalog,
            catalog_source,
            catalog_needs_reload: Arc::new(Mutex::new(false)),
            scroll_lock,
            stage,
            scroll_offset: 0.0,
            viewport_height: 0.0,
            document_height: 0.0,
            view_mode: ViewMode::default(),
            filter: ProjectFilter::new(),
            selected_project: 0,
            lightbox_open: false,
            skip_reveal: config.skip_reveal,
            animation_tick: 0,
            last_animation_update: Instant::now(),
        }
    }

    /// Stage controller for a screen: the landing hero sits behind the
    /// reveal gate, the other screens start open.
    fn build_stage(
        route: Route,
        catalog: &Catalog,
        lock: &ScrollLock,
        skip_reveal: bool,
    ) -> StageController {
        match route {
            Route::Landing if !skip_reveal => {
                // The previous controller is always dropped before this runs,
                // so the slot is free; fall back to an open stage if not.
                StageController::gated(0, lock).unwrap_or_else(|_| StageController::open(0))
            }
            Route::Landing => StageController::open(0),
            Route::About => StageController::open(catalog.timeline.len()),
            Route::Portfolio => StageController::open(catalog.portfolio.projects.len()),
        }
    }

    /// Switch routes, tearing down the outgoing screen's controller so its
    /// suppression guard and any queued reposition are gone before the next
    /// screen starts.
    pub fn navigate(&mut self, route: Route) {
        if route == self.route {
            return;
        }
        self.stage = StageController::open(0);
        self.route = route;
        self.scroll_offset = 0.0;
        self.lightbox_open = false;
        self.stage = Self::build_stage(route, &self.catalog, &self.scroll_lock, self.skip_reveal);
    }

    /// Handle a key event. Returns true when the app should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        if self.lightbox_open {
            match key.code {
                KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                    self.lightbox_open = false;
                }
                _ => {}
            }
            return false;
        }

        match key.code {
            KeyCode::Char('q') => return true,
            KeyCode::Tab => self.navigate(self.route.next()),
            KeyCode::Char('1') => self.navigate(Route::Landing),
            KeyCode::Char('2') => self.navigate(Route::About),
            KeyCode::Char('3') => self.navigate(Route::Portfolio),
            KeyCode::Down | KeyCode::Char('j') => self.line_down(),
            KeyCode::Up | KeyCode::Char('k') => self.line_up(),
            KeyCode::Char(' ') | KeyCode::PageDown => self.page_down(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::Home | KeyCode::Char('g') => self.go_top(),
            KeyCode::End | KeyCode::Char('G') => self.go_bottom(),
            KeyCode::Char('n') => self.select_era(1),
            KeyCode::Char('p') => self.select_era(-1),
            KeyCode::Char('f') => self.cycle_filter(),
            KeyCode::Char('v') => self.toggle_view_mode(),
            KeyCode::Enter => self.open_lightbox(),
            _ => {}
        }
        false
    }

    fn line_down(&mut self) {
        if self.route == Route::Portfolio {
            self.select_project(1);
        } else {
            self.scroll_by(SCROLL_STEP);
        }
    }

    fn line_up(&mut self) {
        if self.route == Route::Portfolio {
            self.select_project(-1);
        } else {
            self.scroll_by(-SCROLL_STEP);
        }
    }

    // Paging on the portfolio moves the selection; the renderer keeps the
    // selected card in view, so the scroll axis stays card-row aligned.
    fn page_down(&mut self) {
        if self.route == Route::Portfolio {
            self.select_project(4);
        } else {
            self.scroll_by(self.viewport_height.max(1.0));
        }
    }

    fn page_up(&mut self) {
        if self.route == Route::Portfolio {
            self.select_project(-4);
        } else {
            self.scroll_by(-self.viewport_height.max(1.0));
        }
    }

    fn go_top(&mut self) {
        if self.route == Route::Portfolio {
            self.selected_project = 0;
        }
        self.scroll_to(0.0);
    }

    fn go_bottom(&mut self) {
        if self.route == Route::Portfolio {
            let visible = self.filter.apply(&self.catalog.portfolio.projects).len();
            self.selected_project = visible.saturating_sub(1);
        }
        self.scroll_to(f64::MAX);
    }

    /// Furthest the user may scroll right now. While the landing gate is
    /// closed this is the reveal distance; afterwards the document extent.
    fn max_scroll(&self) -> f64 {
        match self.stage.gated_scroll_limit(self.viewport_height) {
            Some(limit) => limit,
            None => (self.document_height - self.viewport_height).max(0.0),
        }
    }

    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.scroll_offset + delta);
    }

    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll_offset = offset.clamp(0.0, self.max_scroll());
        self.push_signal();
    }

    /// Feed the controller the latest scroll snapshot
    pub fn push_signal(&mut self) {
        self.stage.apply_signal(ScrollSignal::new(
            self.scroll_offset,
            self.viewport_height,
            self.document_height,
        ));
    }

    /// Called by the renderer once per frame with the measured layout.
    /// Shrinking layouts pull the offset back into range.
    pub fn record_layout(
        &mut self,
        viewport_height: f64,
        document_height: f64,
        bounds: Option<Vec<(f64, f64)>>,
    ) {
        self.viewport_height = viewport_height;
        self.document_height = document_height;
        if let Some(bounds) = bounds {
            self.stage.set_section_bounds(bounds);
        }
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
        self.push_signal();
    }

    /// Land the user at the top of the revealed content. Runs after the
    /// draw that hides the gating visuals; the latch is already set, so the
    /// new offset cannot re-enter the pre-unlock computation.
    pub fn apply_pending_reposition(&mut self) {
        if let Some(reposition) = self.stage.take_reposition() {
            self.scroll_offset = reposition.target_offset.clamp(0.0, self.max_scroll());
            self.push_signal();
        }
    }

    /// Explicit era selection on the about screen, clamped into range
    fn select_era(&mut self, delta: i64) {
        if self.route != Route::About {
            return;
        }
        let count = self.catalog.timeline.len();
        if count == 0 {
            return;
        }
        let current = self.stage.active_index() as i64;
        let target = (current + delta).clamp(0, count as i64 - 1) as usize;
        let _ = self.stage.select(target);
    }

    fn select_project(&mut self, delta: i64) {
        let visible = self.filter.apply(&self.catalog.portfolio.projects).len();
        if visible == 0 {
            return;
        }
        let current = self.selected_project as i64;
        self.selected_project = (current + delta).clamp(0, visible as i64 - 1) as usize;
    }

    fn cycle_filter(&mut self) {
        if self.route != Route::Portfolio {
            return;
        }
        let options = ProjectFilter::options(&self.catalog.portfolio.projects);
        self.filter.cycle(&options);
        self.selected_project = 0;
        self.scroll_to(0.0);
    }

    fn toggle_view_mode(&mut self) {
        if self.route != Route::Portfolio {
            return;
        }
        self.view_mode = self.view_mode.toggle();
    }

    fn open_lightbox(&mut self) {
        if self.route != Route::Portfolio {
            return;
        }
        if !self.filter.apply(&self.catalog.portfolio.projects).is_empty() {
            self.lightbox_open = true;
        }
    }

    /// Reload the catalog from disk if the watcher flagged a change
    pub fn reload_catalog_if_needed(&mut self) {
        let needs_reload = {
            let Ok(mut flag) = self.catalog_needs_reload.lock() else {
                return;
            };
            if *flag {
                *flag = false;
                true
            } else {
                false
            }
        };
        if !needs_reload {
            return;
        }
        let Some(path) = self.catalog_source.clone() else {
            return;
        };
        if let Ok(catalog) = Catalog::load(&path) {
            self.catalog = catalog;
            self.rebuild_stage_after_reload();
            let visible = self.filter.apply(&self.catalog.portfolio.projects).len();
            self.selected_project = self.selected_project.min(visible.saturating_sub(1));
        }
    }

    /// A fresh catalog means fresh section counts. An already opened gate
    /// stays open instead of re-running the reveal.
    fn rebuild_stage_after_reload(&mut self) {
        let keep_open = self.skip_reveal || self.stage.unlocked();
        self.stage = StageController::open(0);
        self.stage = Self::build_stage(self.route, &self.catalog, &self.scroll_lock, keep_open);
    }

    /// Advance the pulse tick roughly every 100ms
    pub fn tick_animation(&mut self) {
        if self.last_animation_update.elapsed() >= Duration::from_millis(100) {
            self.animation_tick = self.animation_tick.wrapping_add(1);
            self.last_animation_update = Instant::now();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn test_app(route: Route, skip_reveal: bool) -> App {
        let catalog = Catalog::embedded().unwrap();
        let config = CliConfig {
            route,
            catalog_path: None,
            skip_reveal,
        };
        App::new(catalog, None, &config)
    }

    #[test]
    fn test_landing_starts_gated() {
        let app = test_app(Route::Landing, false);
        assert!(!app.stage.unlocked());
        assert!(app.scroll_lock.is_suppressed());
    }

    #[test]
    fn test_skip_reveal_starts_unlocked() {
        let app = test_app(Route::Landing, true);
        assert!(app.stage.unlocked());
        assert!(!app.scroll_lock.is_suppressed());
    }

    #[test]
    fn test_navigation_releases_suppression() {
        let mut app = test_app(Route::Landing, false);
        assert!(app.scroll_lock.is_suppressed());

        app.navigate(Route::About);
        assert!(!app.scroll_lock.is_suppressed());
        assert!(app.stage.unlocked());

        // Returning to the landing screen starts a fresh gate.
        app.navigate(Route::Landing);
        assert!(app.scroll_lock.is_suppressed());
        assert!(!app.stage.unlocked());
    }

    #[test]
    fn test_gated_scroll_caps_at_reveal_distance() {
        let mut app = test_app(Route::Landing, false);
        app.record_layout(50.0, 400.0, None);

        app.scroll_by(10.0);
        assert_eq!(app.scroll_offset, 10.0);
        assert!(!app.stage.unlocked());

        // One big jump is capped at the reveal distance and opens the gate.
        app.scroll_by(1000.0);
        assert_eq!(app.scroll_offset, 30.0);
        assert!(app.stage.unlocked());

        app.apply_pending_reposition();
        assert_eq!(app.scroll_offset, 30.0);

        // Free scrolling is restored afterwards.
        app.scroll_by(1000.0);
        assert_eq!(app.scroll_offset, 350.0);
    }

    #[test]
    fn test_select_era_clamps_into_range() {
        let mut app = test_app(Route::About, false);
        app.select_era(1);
        assert_eq!(app.stage.active_index(), 1);
        app.select_era(-10);
        assert_eq!(app.stage.active_index(), 0);
        app.select_era(100);
        assert_eq!(app.stage.active_index(), 3);
    }

    #[test]
    fn test_cycle_filter_resets_selection() {
        let mut app = test_app(Route::Portfolio, false);
        app.selected_project = 2;
        app.cycle_filter();
        assert_eq!(app.filter.active(), "Imagefilm");
        assert_eq!(app.selected_project, 0);
    }

    #[test]
    fn test_filter_keys_ignored_off_portfolio() {
        let mut app = test_app(Route::About, false);
        app.cycle_filter();
        assert_eq!(app.filter.active(), crate::models::ALL_PROJECTS);
        app.toggle_view_mode();
        assert_eq!(app.view_mode, ViewMode::Grid);
    }

    #[test]
    fn test_quit_key() {
        let mut app = test_app(Route::Landing, true);
        let quit = app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty()));
        assert!(quit);
    }

    #[test]
    fn test_lightbox_swallows_keys_until_closed() {
        let mut app = test_app(Route::Portfolio, false);
        app.record_layout(40.0, 100.0, None);
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::empty()));
        assert!(app.lightbox_open);

        // 'q' closes the lightbox instead of quitting.
        let quit = app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty()));
        assert!(!quit);
        assert!(!app.lightbox_open);
    }

    #[test]
    fn test_project_selection_clamps_to_visible() {
        let mut app = test_app(Route::Portfolio, false);
        app.select_project(10);
        assert_eq!(app.selected_project, 2);
        app.select_project(-10);
        assert_eq!(app.selected_project, 0);
    }
}
