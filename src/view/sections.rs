//! Content section renderers.
//!
//! Each renderer returns exactly the number of lines the page layout gives
//! its section. Items the reveal state has not reached yet are drawn as
//! blank rows, so nothing shifts while the page animates in.

use super::helpers::{accent_bar, fit, grid, reveal, truncate, wrap_words, GRID_GAP};
use super::page::PageContext;
use crate::model::SectionId;
use crate::state::layout::{grid_columns, PROJECT_CARD_ROWS, SKILL_CARD_ROWS};
use crate::state::{Group, SectionLayout};
use ratatui::text::{Line, Span};

/// Longest heading rule.
const RULE_WIDTH: usize = 24;

/// Title, animated rule and a blank row.
pub fn heading(ctx: &PageContext<'_>, id: SectionId) -> Vec<Line<'static>> {
    let phase = ctx.phase(id, Group::Heading, 0);
    let title = id.label().to_uppercase();
    vec![
        reveal(
            phase,
            vec![Span::styled(title, ctx.styles.heading)],
            ctx.styles,
        ),
        Line::from(accent_bar(phase, RULE_WIDTH.min(ctx.width), ctx.styles.rule)),
        Line::default(),
    ]
}

fn cell_width(ctx: &PageContext<'_>) -> usize {
    let columns = grid_columns(ctx.state.device_class());
    ctx.width.saturating_sub(GRID_GAP * (columns - 1)) / columns
}

/// Skills grid: one card per skill with a category-colored bar.
pub fn skills(ctx: &PageContext<'_>, layout: SectionLayout) -> Vec<Line<'static>> {
    let id = SectionId::Skills;
    let bar_width = cell_width(ctx);

    let cards = ctx
        .state
        .content()
        .skills
        .iter()
        .enumerate()
        .map(|(i, skill)| {
            let accent = ctx.styles.category(&skill.category);
            let name = reveal(
                ctx.phase(id, Group::Items, i),
                vec![
                    Span::styled("● ", accent),
                    Span::styled(skill.name.clone(), ctx.styles.emphasis),
                    Span::styled(format!("  {}", skill.category), ctx.styles.muted),
                ],
                ctx.styles,
            );
            let bar = Line::from(accent_bar(ctx.phase(id, Group::Accents, i), bar_width, accent));
            vec![name, bar]
        })
        .collect();

    let mut lines = heading(ctx, id);
    lines.extend(grid(
        cards,
        grid_columns(ctx.state.device_class()),
        ctx.width,
        SKILL_CARD_ROWS,
    ));
    fit(lines, layout.height)
}

/// Experience timeline: role, company, period and detail bullets.
pub fn experience(ctx: &PageContext<'_>, layout: SectionLayout) -> Vec<Line<'static>> {
    let id = SectionId::Experience;
    let mut lines = heading(ctx, id);

    for (i, entry) in ctx.state.content().experience.iter().enumerate() {
        let card = ctx.phase(id, Group::Items, i);
        let details = ctx.phase(id, Group::Accents, i);

        lines.push(reveal(
            card,
            vec![
                Span::styled("◆ ", ctx.styles.rule),
                Span::styled(entry.role.clone(), ctx.styles.emphasis),
                Span::styled(" @ ", ctx.styles.muted),
                Span::styled(entry.company.clone(), ctx.styles.body),
            ],
            ctx.styles,
        ));

        let meta = if entry.location.is_empty() {
            entry.period.clone()
        } else {
            format!("{} • {}", entry.period, entry.location)
        };
        lines.push(reveal(
            card,
            vec![Span::styled(format!("  {meta}"), ctx.styles.muted)],
            ctx.styles,
        ));

        for detail in &entry.details {
            lines.push(reveal(
                details,
                vec![
                    Span::styled("  ▸ ", ctx.styles.rule),
                    Span::styled(detail.clone(), ctx.styles.body),
                ],
                ctx.styles,
            ));
        }
        lines.push(Line::default());
    }

    fit(lines, layout.height)
}

/// Education cards: degree, school, period and an accent bar.
pub fn education(ctx: &PageContext<'_>, layout: SectionLayout) -> Vec<Line<'static>> {
    let id = SectionId::Education;
    let bar_width = ctx.width.min(RULE_WIDTH * 2);
    let mut lines = heading(ctx, id);

    for (i, entry) in ctx.state.content().education.iter().enumerate() {
        let card = ctx.phase(id, Group::Items, i);
        lines.push(reveal(
            card,
            vec![Span::styled(entry.degree.clone(), ctx.styles.emphasis)],
            ctx.styles,
        ));
        lines.push(reveal(
            card,
            vec![Span::styled(entry.school.clone(), ctx.styles.body)],
            ctx.styles,
        ));
        lines.push(reveal(
            card,
            vec![Span::styled(entry.period.clone(), ctx.styles.muted)],
            ctx.styles,
        ));
        lines.push(Line::from(accent_bar(
            ctx.phase(id, Group::Accents, i),
            bar_width,
            ctx.styles.rule,
        )));
        lines.push(Line::default());
    }

    fit(lines, layout.height)
}

/// Awards, certifications and activities as three titled lists.
pub fn achievements(ctx: &PageContext<'_>, layout: SectionLayout) -> Vec<Line<'static>> {
    let id = SectionId::Achievements;
    let content = ctx.state.content();
    let title_phase = ctx.phase(id, Group::Heading, 0);

    let lists = [
        ("Awards", "★ ", Group::Items, &content.achievements),
        ("Certifications", "✔ ", Group::Accents, &content.certifications),
        ("Extra-curricular", "• ", Group::Extras, &content.extra_curricular),
    ];

    let mut lines = heading(ctx, id);
    for (title, bullet, group, entries) in lists {
        lines.push(reveal(
            title_phase,
            vec![Span::styled(title, ctx.styles.emphasis)],
            ctx.styles,
        ));
        for (i, entry) in entries.iter().enumerate() {
            lines.push(reveal(
                ctx.phase(id, group, i),
                vec![
                    Span::styled(format!("  {bullet}"), ctx.styles.rule),
                    Span::styled(entry.clone(), ctx.styles.body),
                ],
                ctx.styles,
            ));
        }
        lines.push(Line::default());
    }

    fit(lines, layout.height)
}

/// Projects gallery cards.
pub fn projects(ctx: &PageContext<'_>, layout: SectionLayout) -> Vec<Line<'static>> {
    let id = SectionId::Projects;
    let width = cell_width(ctx);

    let cards = ctx
        .state
        .content()
        .projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let card = ctx.phase(id, Group::Items, i);
            let accent = ctx.styles.category(&project.category);

            let mut description = wrap_words(&project.description, width);
            if description.len() > 2 {
                let rest = description.split_off(1).join(" ");
                description.push(truncate(&rest, width));
            }
            description.resize(2, String::new());

            let link = project.link.as_deref().unwrap_or("private repository");
            let mut lines = vec![
                reveal(
                    card,
                    vec![
                        Span::styled(project.name.clone(), ctx.styles.emphasis),
                        Span::styled(format!("  [{}]", project.category), accent),
                    ],
                    ctx.styles,
                ),
                reveal(
                    card,
                    vec![Span::styled(project.stack.clone(), ctx.styles.muted)],
                    ctx.styles,
                ),
            ];
            lines.extend(description.into_iter().map(|text| {
                reveal(card, vec![Span::styled(text, ctx.styles.body)], ctx.styles)
            }));
            lines.push(reveal(
                card,
                vec![Span::styled(link.to_string(), ctx.styles.muted)],
                ctx.styles,
            ));
            lines.push(Line::from(accent_bar(
                ctx.phase(id, Group::Accents, i),
                width,
                accent,
            )));
            lines
        })
        .collect();

    let mut lines = heading(ctx, id);
    lines.extend(grid(
        cards,
        grid_columns(ctx.state.device_class()),
        ctx.width,
        PROJECT_CARD_ROWS,
    ));
    fit(lines, layout.height)
}

#[cfg(test)]
#[path = "sections_tests.rs"]
mod tests;
