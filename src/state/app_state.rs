//! Application state and transitions.
//!
//! `AppState` is the root composition. It owns the single [`Scheduler`] and
//! every view-state component, turns terminal-sized inputs into pixel
//! signals, and routes fired timers to whichever component holds them.
//! Rendering reads from it; nothing here draws.

use super::layout::{PageLayout, SectionLayout, NAVBAR_ROWS};
use super::sections::{SectionState, SectionTimings};
use crate::config::ResolvedConfig;
use crate::integration::CellMetrics;
use crate::model::{ContactField, PortfolioContent, SectionId, ValidationError};
use crate::view_state::visibility::intersects;
use crate::view_state::{
    ContactTransport, DeviceClass, PointerPosition, Scheduler, ScrollProgress,
    ScrollProgressTracker, ScrollRegion, SimulatedTransport, Span, SubmissionSimulator, Timestamp,
    TypewriterEngine, ViewportMonitor,
};
use tracing::{debug, info, trace};

/// Scroll distance in pixels past which the navbar turns solid.
pub const NAVBAR_SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Fixed navbar state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavbarState {
    /// Page scrolled past [`NAVBAR_SCROLL_THRESHOLD_PX`].
    pub scrolled: bool,
    /// Collapsed mobile menu is open.
    pub menu_open: bool,
}

/// Contact form interaction state outside the submission lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Field receiving keystrokes. `None` when not editing.
    pub focus: Option<ContactField>,
    /// Last validation failure, cleared on the next successful submit.
    pub error: Option<ValidationError>,
}

impl FormState {
    /// Whether keystrokes go to the form.
    pub fn is_editing(&self) -> bool {
        self.focus.is_some()
    }
}

/// Application state.
///
/// All dimensions handed to the core are in pixels via [`CellMetrics`]; the
/// scroll offset is kept in whole rows because that is what the terminal can
/// show.
pub struct AppState {
    content: PortfolioContent,
    scheduler: Scheduler,
    metrics: CellMetrics,
    viewport: ViewportMonitor,
    page_rows: usize,
    layout: PageLayout,
    scroll_rows: usize,
    hero: ScrollProgressTracker,
    typewriter: TypewriterEngine,
    contact: SubmissionSimulator,
    sections: Vec<SectionState>,
    reduced_motion: bool,

    /// Navbar flags.
    pub navbar: NavbarState,
    /// Contact form focus and inline error.
    pub form: FormState,
    /// Set by the quit action; the event loop exits when true.
    pub should_quit: bool,
}

impl AppState {
    /// Compose the page for a `columns` x `rows` terminal with the simulated
    /// contact transport.
    pub fn new(content: PortfolioContent, config: &ResolvedConfig, columns: u16, rows: u16) -> Self {
        Self::with_transport(content, config, columns, rows, Box::new(SimulatedTransport))
    }

    /// Compose the page delivering contact messages through `transport`.
    pub fn with_transport(
        content: PortfolioContent,
        config: &ResolvedConfig,
        columns: u16,
        rows: u16,
        transport: Box<dyn ContactTransport>,
    ) -> Self {
        let scheduler = Scheduler::new();
        let metrics = CellMetrics::from_config(config);
        let viewport = ViewportMonitor::new(
            metrics.viewport(columns, rows),
            PointerPosition::default(),
            config.breakpoints(),
        );
        let page_rows = page_rows_for(rows);
        let layout = PageLayout::compute(&content, viewport.device_class(), page_rows);
        let hero = ScrollProgressTracker::new(hero_region(&layout, metrics), 0.0);

        let tagline = content.profile.tagline.clone();
        let typewriter = if config.reduced_motion {
            let mut engine = TypewriterEngine::new(tagline, config.typewriter_interval());
            while engine.tick() {}
            engine
        } else {
            TypewriterEngine::mount(tagline, config.typewriter_interval(), &scheduler)
        };

        let contact = SubmissionSimulator::with_transport(
            &scheduler,
            config.submit_latency(),
            config.success_display(),
            transport,
        );

        let sections = SectionId::ALL
            .into_iter()
            .map(|id| {
                let timings = if config.reduced_motion {
                    SectionTimings::reduced()
                } else {
                    SectionTimings::for_section(id)
                };
                SectionState::new(id, &content, timings)
            })
            .collect();

        let mut state = Self {
            content,
            scheduler,
            metrics,
            viewport,
            page_rows,
            layout,
            scroll_rows: 0,
            hero,
            typewriter,
            contact,
            sections,
            reduced_motion: config.reduced_motion,
            navbar: NavbarState::default(),
            form: FormState::default(),
            should_quit: false,
        };

        info!(
            device = ?state.device_class(),
            page_rows,
            total_rows = state.layout.total_rows(),
            reduced_motion = state.reduced_motion,
            "page composed"
        );
        state.observe_visibility();
        state
    }

    // ===== Accessors =====

    /// Static content.
    pub fn content(&self) -> &PortfolioContent {
        &self.content
    }

    /// Current clock value.
    pub fn now(&self) -> Timestamp {
        self.scheduler.now()
    }

    /// The shared scheduler.
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Cell size used for pixel conversions.
    pub fn metrics(&self) -> CellMetrics {
        self.metrics
    }

    /// Current device class.
    pub fn device_class(&self) -> DeviceClass {
        self.viewport.device_class()
    }

    /// Viewport monitor.
    pub fn viewport(&self) -> &ViewportMonitor {
        &self.viewport
    }

    /// Whether the cursor-following highlight should be drawn.
    pub fn shows_cursor_tracker(&self) -> bool {
        !self.device_class().is_mobile()
    }

    /// Last pointer position in pixels.
    pub fn pointer(&self) -> PointerPosition {
        self.viewport.pointer()
    }

    /// Rows available to the page below the navbar.
    pub fn page_rows(&self) -> usize {
        self.page_rows
    }

    /// Current page layout.
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    /// Scroll offset in rows.
    pub fn scroll_rows(&self) -> usize {
        self.scroll_rows
    }

    /// Scroll offset in pixels.
    pub fn scroll_px(&self) -> f64 {
        self.metrics.rows_to_px(self.scroll_rows)
    }

    /// Hero scroll progress.
    pub fn hero_progress(&self) -> ScrollProgress {
        self.hero.progress()
    }

    /// Hero subtitle typewriter.
    pub fn typewriter(&self) -> &TypewriterEngine {
        &self.typewriter
    }

    /// Contact submission lifecycle.
    pub fn contact(&self) -> &SubmissionSimulator {
        &self.contact
    }

    /// Mutable contact lifecycle, for the form handler.
    pub fn contact_mut(&mut self) -> &mut SubmissionSimulator {
        &mut self.contact
    }

    /// Reveal state of a section.
    pub fn section(&self, id: SectionId) -> &SectionState {
        &self.sections[id.index()]
    }

    /// Section whose rows cover the top of the viewport.
    pub fn active_section(&self) -> SectionId {
        self.layout.section_at(self.scroll_rows)
    }

    /// Whether entrance animations are disabled.
    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    // ===== Signals in =====

    /// Terminal resized.
    ///
    /// The layout is remeasured and the hero region recomputed, so scroll
    /// progress stays consistent with the new geometry.
    pub fn on_resize(&mut self, columns: u16, rows: u16) {
        let change = self.viewport.on_resize(self.metrics.viewport(columns, rows));
        self.page_rows = page_rows_for(rows);
        self.layout = PageLayout::compute(&self.content, change.current, self.page_rows);
        self.hero.remeasure(hero_region(&self.layout, self.metrics));

        if change.class_changed() && !change.current.is_mobile() {
            self.navbar.menu_open = false;
        }

        let max = self.layout.max_scroll(self.page_rows);
        self.set_scroll(self.scroll_rows.min(max));
    }

    /// Pointer moved to a terminal cell.
    pub fn on_pointer_move(&mut self, column: u16, row: u16) {
        self.viewport.on_pointer_move(self.metrics.pointer(column, row));
    }

    /// Scroll to `rows` from the page top, clamped to the page.
    pub fn scroll_to(&mut self, rows: usize) {
        let max = self.layout.max_scroll(self.page_rows);
        self.set_scroll(rows.min(max));
    }

    /// Scroll by `delta` rows.
    pub fn scroll_by(&mut self, delta: isize) {
        let target = self.scroll_rows.saturating_add_signed(delta);
        self.scroll_to(target);
    }

    /// Scroll so that `id` starts at the top of the page.
    pub fn jump_to(&mut self, id: SectionId) {
        let SectionLayout { top, .. } = self.layout.section(id);
        debug!(section = %id, top, "jump to section");
        self.navbar.menu_open = false;
        self.scroll_to(top);
    }

    fn set_scroll(&mut self, rows: usize) {
        self.scroll_rows = rows;
        let px = self.scroll_px();
        self.hero.on_scroll(px);
        self.navbar.scrolled = px > NAVBAR_SCROLL_THRESHOLD_PX;
        self.observe_visibility();
    }

    // ===== Time =====

    /// Advance the clock to `target`, firing every timer due on the way.
    ///
    /// Returns true if anything visible changed because of a timer.
    pub fn advance_to(&mut self, target: Timestamp) -> bool {
        let mut changed = false;

        while let Some(id) = self.scheduler.pop_due(target) {
            if self.typewriter.on_timer(id).is_some() {
                changed = true;
            } else if self.contact.on_timer(id) {
                changed = true;
            } else {
                trace!(timer = id.get(), "timer had no owner");
            }
        }

        self.scheduler.settle(target);
        changed
    }

    /// Earliest moment the page needs to be redrawn without input.
    ///
    /// Equal to [`AppState::now`] while anything is mid-animation.
    pub fn next_wakeup(&self) -> Option<Timestamp> {
        let now = self.now();
        let animations = self
            .sections
            .iter()
            .filter_map(|section| section.next_transition(now))
            .min();

        match (self.scheduler.next_deadline(), animations) {
            (Some(timer), Some(animation)) => Some(timer.min(animation)),
            (timer, animation) => timer.or(animation),
        }
    }

    /// The document-pixel span currently on screen.
    pub fn visible_span(&self) -> Span {
        Span::from_top(self.scroll_px(), self.metrics.rows_to_px(self.page_rows))
    }

    fn observe_visibility(&mut self) {
        let now = self.now();
        let visible = self.visible_span();
        for section in &mut self.sections {
            let layout = self.layout.section(section.id());
            let region = self.metrics.row_span(layout.top, layout.height);
            section.observe(intersects(region, visible), now);
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("device", &self.device_class())
            .field("scroll_rows", &self.scroll_rows)
            .field("page_rows", &self.page_rows)
            .field("navbar", &self.navbar)
            .field("form", &self.form)
            .field("submission", self.contact.state())
            .field("should_quit", &self.should_quit)
            .finish_non_exhaustive()
    }
}

fn page_rows_for(terminal_rows: u16) -> usize {
    usize::from(terminal_rows).saturating_sub(NAVBAR_ROWS).max(1)
}

fn hero_region(layout: &PageLayout, metrics: CellMetrics) -> ScrollRegion {
    let hero = layout.section(SectionId::Home);
    ScrollRegion::for_element(metrics.row_span(hero.top, hero.height))
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
