//! Contact form and footer.

use super::helpers::{fit, reveal, truncate};
use super::page::PageContext;
use crate::model::{ContactField, SectionId};
use crate::state::layout::FOOTER_ROWS;
use crate::state::{Group, SectionLayout};
use crate::view_state::SubmissionState;
use chrono::Datelike;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Banner shown while a delivered message is acknowledged.
pub const SUCCESS_MESSAGE: &str = "✓ Message sent! I'll get back to you soon.";

/// Show the end of `text` when it does not fit in `width` columns.
fn tail(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let reversed: String = text.chars().rev().collect();
    let kept: String = truncate(&reversed, width).chars().rev().collect();
    kept
}

fn field_lines(ctx: &PageContext<'_>, field: ContactField) -> [Line<'static>; 2] {
    let focused = ctx.state.form.focus == Some(field);
    let (marker, label_style) = if focused {
        ("▸ ", ctx.styles.focus)
    } else {
        ("  ", ctx.styles.muted)
    };
    let cursor = if focused { "_" } else { "" };
    let value = tail(
        ctx.state.contact().fields().get(field),
        ctx.width.saturating_sub(6),
    );

    [
        Line::from(Span::styled(format!("{marker}{}", field.label()), label_style)),
        Line::from(vec![
            Span::styled("  > ", ctx.styles.muted),
            Span::styled(format!("{value}{cursor}"), ctx.styles.input),
        ]),
    ]
}

fn status_line(ctx: &PageContext<'_>) -> Line<'static> {
    if let Some(error) = &ctx.state.form.error {
        return Line::from(Span::styled(error.to_string(), ctx.styles.error));
    }
    match ctx.state.contact().state() {
        SubmissionState::Succeeded => {
            Line::from(Span::styled(SUCCESS_MESSAGE, ctx.styles.success))
        }
        SubmissionState::Failed(error) => {
            Line::from(Span::styled(error.to_string(), ctx.styles.error))
        }
        SubmissionState::Idle | SubmissionState::Submitting => Line::default(),
    }
}

/// Contact section lines, exactly `layout.height` long.
pub fn render(ctx: &PageContext<'_>, layout: SectionLayout) -> Vec<Line<'static>> {
    let id = SectionId::Contact;
    let profile = &ctx.state.content().profile;
    let body = ctx.phase(id, Group::Items, 0);
    let mut lines = super::sections::heading(ctx, id);

    let mut form = vec![
        Line::from(Span::styled(
            "Have a project in mind or just want to say hi? Leave a message.",
            ctx.styles.body,
        )),
        Line::default(),
    ];
    for field in ContactField::ALL {
        form.extend(field_lines(ctx, field));
    }
    form.push(Line::default());

    let button = match ctx.state.contact().state() {
        SubmissionState::Submitting => "[ Sending... ]",
        _ => "[ Send Message ]",
    };
    form.push(Line::from(Span::styled(button, ctx.styles.button)));
    form.push(status_line(ctx));
    form.push(Line::default());

    let mut whereabouts = Vec::new();
    if let Some(address) = &profile.contact_address {
        whereabouts.push(format!("✉ {address}"));
    }
    if let Some(location) = &profile.location {
        whereabouts.push(format!("⌂ {location}"));
    }
    form.push(Line::from(Span::styled(
        whereabouts.join("   "),
        ctx.styles.muted,
    )));

    let hints = if ctx.state.form.is_editing() {
        "Tab next field • Shift+Tab previous • Enter send • Esc leave form"
    } else {
        "c write a message • 1-7 jump to section • q quit"
    };
    form.push(Line::from(Span::styled(hints, ctx.styles.muted)));

    lines.extend(
        form.into_iter()
            .map(|line| reveal(body, line.spans, ctx.styles)),
    );
    fit(lines, layout.height)
}

/// Footer lines: links, deploy date and copyright.
pub fn footer(ctx: &PageContext<'_>) -> Vec<Line<'static>> {
    let content = ctx.state.content();

    let mut links = Vec::new();
    for (i, link) in content.links.iter().enumerate() {
        if i > 0 {
            links.push(Span::styled("  •  ", ctx.styles.muted));
        }
        links.push(Span::styled(link.label.clone(), ctx.styles.emphasis));
        links.push(Span::styled(format!(" {}", link.url), ctx.styles.muted));
    }

    let mut status = format!("Last deploy: {}", ctx.today.format("%Y-%m-%d"));
    if let Some(location) = &content.profile.location {
        status.push_str(&format!("  •  {location}"));
    }

    fit(
        vec![
            Line::from(links),
            Line::from(Span::styled(status, ctx.styles.muted)),
            Line::from(Span::styled(
                format!(
                    "© {} {}. All rights reserved.",
                    ctx.today.year(),
                    content.profile.name
                ),
                ctx.styles.muted,
            )),
        ],
        FOOTER_ROWS,
    )
}
