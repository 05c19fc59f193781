//! Page composition.
//!
//! Renders the navbar row, the visible window of the page below it and the
//! overlays (mobile menu, cursor highlight). Only sections that intersect
//! the window are rendered.

use super::helpers::fit;
use super::styles::PageStyles;
use super::{contact, hero, navbar, sections};
use crate::model::SectionId;
use crate::state::layout::{FOOTER_ROWS, NAVBAR_ROWS};
use crate::state::{AppState, Group, SectionLayout};
use crate::view_state::ItemPhase;
use chrono::NaiveDate;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Everything a section renderer reads.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    /// Application state.
    pub state: &'a AppState,
    /// Resolved styles.
    pub styles: &'a PageStyles,
    /// Page width in columns.
    pub width: usize,
    /// Calendar date for the footer.
    pub today: NaiveDate,
}

impl PageContext<'_> {
    /// Entrance phase of one item at the state's current time.
    pub fn phase(&self, id: SectionId, group: Group, index: usize) -> ItemPhase {
        self.state
            .section(id)
            .phase(group, index, self.state.now())
    }
}

/// Lines of one section, exactly `layout.height` long.
pub fn render_section(ctx: &PageContext<'_>, layout: SectionLayout) -> Vec<Line<'static>> {
    match layout.id {
        SectionId::Home => hero::render(ctx, layout),
        SectionId::Skills => sections::skills(ctx, layout),
        SectionId::Experience => sections::experience(ctx, layout),
        SectionId::Education => sections::education(ctx, layout),
        SectionId::Achievements => sections::achievements(ctx, layout),
        SectionId::Projects => sections::projects(ctx, layout),
        SectionId::Contact => contact::render(ctx, layout),
    }
}

/// Page rows `top..top + rows`.
pub fn visible_lines(ctx: &PageContext<'_>, top: usize, rows: usize) -> Vec<Line<'static>> {
    let bottom = top + rows;
    let layout = ctx.state.layout();
    let mut lines = Vec::with_capacity(rows);

    let take = |lines: &mut Vec<Line<'static>>, start: usize, rendered: Vec<Line<'static>>| {
        let from = top.saturating_sub(start);
        let to = (bottom - start).min(rendered.len());
        lines.extend(rendered.into_iter().take(to).skip(from));
    };

    for section in layout.sections() {
        if section.bottom() <= top || section.top >= bottom {
            continue;
        }
        take(&mut lines, section.top, render_section(ctx, *section));
    }

    let footer_top = layout.footer_top();
    if footer_top < bottom && footer_top + FOOTER_ROWS > top {
        take(&mut lines, footer_top, contact::footer(ctx));
    }

    fit(lines, rows)
}

/// Draw the whole screen.
pub fn render_page(frame: &mut Frame<'_>, state: &AppState, styles: &PageStyles, today: NaiveDate) {
    let area = frame.area();
    if area.height == 0 || area.width == 0 {
        return;
    }

    let ctx = PageContext {
        state,
        styles,
        width: usize::from(area.width),
        today,
    };

    let navbar_height = (NAVBAR_ROWS as u16).min(area.height);
    let navbar_area = Rect::new(area.x, area.y, area.width, navbar_height);
    let page_area = Rect::new(
        area.x,
        area.y + navbar_height,
        area.width,
        area.height - navbar_height,
    );

    let lines = visible_lines(&ctx, state.scroll_rows(), usize::from(page_area.height));
    frame.render_widget(Paragraph::new(lines), page_area);
    frame.render_widget(Paragraph::new(navbar::line(&ctx)).style(navbar::style(&ctx)), navbar_area);

    if state.device_class().is_mobile() && state.navbar.menu_open {
        navbar::render_menu(frame, page_area, &ctx);
    }
    render_cursor(frame, &ctx);
}

fn render_cursor(frame: &mut Frame<'_>, ctx: &PageContext<'_>) {
    if !ctx.state.shows_cursor_tracker() {
        return;
    }
    let (column, row) = ctx.state.metrics().cell(ctx.state.pointer());
    if let Some(cell) = frame.buffer_mut().cell_mut((column, row)) {
        cell.set_style(ctx.styles.cursor);
    }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
