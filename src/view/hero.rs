//! Hero section: particle backdrop, name, typewriter tagline and calls to
//! action, with two parallax layers driven by hero scroll progress.

use super::helpers::{centre_pad, reveal, wrap_words};
use super::page::PageContext;
use crate::model::SectionId;
use crate::state::{Group, SectionLayout};
use crate::view_state::typewriter::CURSOR_MARKER;
use crate::view_state::{DeviceClass, ParallaxRange};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Widest summary paragraph.
const SUMMARY_WIDTH: usize = 72;

const PARTICLE: char = '·';
const NODE: char = '◆';

/// Background particle and network node counts for a device class.
pub fn hero_density(device: DeviceClass) -> (usize, usize) {
    match device {
        DeviceClass::Mobile => (50, 8),
        DeviceClass::Tablet | DeviceClass::Desktop => (150, 20),
    }
}

/// Deterministic scatter position of point `index` in a `width` x `height` box.
fn scatter(index: usize, width: usize, height: usize) -> (usize, usize) {
    let fract = |x: f64| x - x.floor();
    let i = index as f64 + 1.0;
    let x = fract(i * 0.618_033_988_75) * width as f64;
    let y = fract(i * 0.754_877_666_25) * height as f64;
    (x as usize, y as usize)
}

/// Character grid that text can be drawn over.
struct Canvas {
    width: usize,
    rows: Vec<Vec<Option<(char, Style)>>>,
}

impl Canvas {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            rows: vec![vec![Some((' ', Style::default())); width]; height],
        }
    }

    fn put(&mut self, x: usize, y: usize, ch: char, style: Style) {
        if let Some(cell) = self.rows.get_mut(y).and_then(|row| row.get_mut(x)) {
            *cell = Some((ch, style));
        }
    }

    fn put_line(&mut self, x: usize, y: usize, line: &Line<'_>) {
        let mut column = x;
        for span in &line.spans {
            for ch in span.content.chars() {
                let w = ch.width().unwrap_or(0);
                if w == 0 {
                    continue;
                }
                if column + w > self.width {
                    return;
                }
                self.put(column, y, ch, span.style);
                // Wide glyphs cover the next cell too.
                if let Some(row) = self.rows.get_mut(y) {
                    for cell in row.iter_mut().skip(column + 1).take(w - 1) {
                        *cell = None;
                    }
                }
                column += w;
            }
        }
    }

    fn into_lines(self) -> Vec<Line<'static>> {
        self.rows
            .into_iter()
            .map(|row| {
                let mut spans: Vec<Span<'static>> = Vec::new();
                let mut text = String::new();
                let mut style = Style::default();
                for (ch, cell_style) in row.into_iter().flatten() {
                    if cell_style != style && !text.is_empty() {
                        spans.push(Span::styled(std::mem::take(&mut text), style));
                    }
                    style = cell_style;
                    text.push(ch);
                }
                if !text.is_empty() {
                    spans.push(Span::styled(text, style));
                }
                Line::from(spans)
            })
            .collect()
    }
}

/// Name, tagline, summary and buttons, each gated by its entrance phase.
fn text_block(ctx: &PageContext<'_>) -> Vec<Line<'static>> {
    let id = SectionId::Home;
    let styles = ctx.styles;
    let profile = &ctx.state.content().profile;

    let mut lines = vec![
        reveal(
            ctx.phase(id, Group::Heading, 0),
            vec![Span::styled(profile.name.clone(), styles.heading)],
            styles,
        ),
        Line::default(),
        reveal(
            ctx.phase(id, Group::Items, 0),
            vec![
                Span::styled(ctx.state.typewriter().revealed().to_string(), styles.emphasis),
                Span::styled(CURSOR_MARKER, styles.rule),
            ],
            styles,
        ),
        Line::default(),
    ];

    let summary_phase = ctx.phase(id, Group::Items, 1);
    let summary_width = SUMMARY_WIDTH.min(ctx.width.saturating_sub(4)).max(1);
    lines.extend(
        wrap_words(&profile.summary, summary_width)
            .into_iter()
            .map(|text| reveal(summary_phase, vec![Span::styled(text, styles.body)], styles)),
    );
    lines.push(Line::default());

    let mut buttons = Vec::new();
    if profile.resume_url.is_some() {
        buttons.push(Span::styled("[ View Resume ]", styles.button));
        buttons.push(Span::raw("  "));
    }
    buttons.push(Span::styled("[ Contact Me ]", styles.button));
    lines.push(reveal(ctx.phase(id, Group::Items, 2), buttons, styles));

    lines
}

/// Hero lines, exactly `layout.height` long.
pub fn render(ctx: &PageContext<'_>, layout: SectionLayout) -> Vec<Line<'static>> {
    let height = layout.height;
    let width = ctx.width;
    let device = ctx.state.device_class();
    let progress = ctx.state.hero_progress();
    let mut canvas = Canvas::new(width, height);

    // Background drifts down at half the scroll speed.
    if width > 0 && height > 0 {
        let shift =
            (ParallaxRange::BACKGROUND.interpolate(progress) * height as f64).round() as usize;
        let (particles, nodes) = hero_density(device);
        for i in 0..particles + nodes {
            let (x, y) = scatter(i, width, height);
            let (ch, style) = if i < particles {
                (PARTICLE, ctx.styles.particle)
            } else {
                (NODE, ctx.styles.node)
            };
            canvas.put(x, y + shift, ch, style);
        }
    }

    let block = text_block(ctx);
    let lift = ParallaxRange::foreground(device).interpolate(progress) * block.len() as f64;
    let top = height.saturating_sub(block.len()) / 2 + lift.round() as usize;
    for (row, line) in block.iter().enumerate() {
        if line.width() == 0 {
            continue;
        }
        canvas.put_line(centre_pad(line.width(), width), top + row, line);
    }

    canvas.into_lines()
}
