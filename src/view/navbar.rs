//! Fixed navbar and the collapsed mobile menu.

use super::page::PageContext;
use crate::model::SectionId;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Right-hand toggle shown instead of links on narrow screens.
const MENU_TOGGLE: &str = "≡ menu (m) ";

/// Background style: transparent at the top, solid once scrolled.
pub fn style(ctx: &PageContext<'_>) -> Style {
    if ctx.state.navbar.scrolled {
        ctx.styles.nav_solid
    } else {
        Style::default()
    }
}

/// The navbar row: brand on the left, links or the menu toggle on the right.
pub fn line(ctx: &PageContext<'_>) -> Line<'static> {
    let brand = format!(" {}", ctx.state.content().profile.brand);
    let active = ctx.state.active_section();

    let right: Vec<Span<'static>> = if ctx.state.device_class().is_mobile() {
        vec![Span::styled(MENU_TOGGLE, ctx.styles.nav_link)]
    } else {
        SectionId::ALL
            .into_iter()
            .flat_map(|id| {
                let style = if id == active {
                    ctx.styles.nav_active
                } else {
                    ctx.styles.nav_link
                };
                [Span::styled(id.label(), style), Span::raw("  ")]
            })
            .collect()
    };

    let used = brand.chars().count() + right.iter().map(Span::width).sum::<usize>();
    let mut spans = vec![
        Span::styled(brand, ctx.styles.brand),
        Span::raw(" ".repeat(ctx.width.saturating_sub(used))),
    ];
    spans.extend(right);
    Line::from(spans)
}

/// Section list dropped below the navbar.
pub fn render_menu(frame: &mut Frame<'_>, area: Rect, ctx: &PageContext<'_>) {
    let active = ctx.state.active_section();
    let lines: Vec<Line<'static>> = SectionId::ALL
        .into_iter()
        .enumerate()
        .map(|(i, id)| {
            let style = if id == active {
                ctx.styles.nav_active
            } else {
                ctx.styles.nav_link
            };
            Line::from(vec![
                Span::styled(format!(" {} ", i + 1), ctx.styles.muted),
                Span::styled(id.label(), style),
            ])
        })
        .collect();

    let height = (lines.len() as u16 + 2).min(area.height);
    let menu_area = Rect::new(area.x, area.y, area.width, height);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Menu ")
        .border_style(ctx.styles.rule);

    frame.render_widget(Clear, menu_area);
    frame.render_widget(Paragraph::new(lines).block(block), menu_area);
}
