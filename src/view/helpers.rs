//! Line-building helpers shared by the section renderers.

use super::styles::PageStyles;
use crate::view_state::ItemPhase;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns an entering item starts offset by.
pub const SLIDE_COLUMNS: f64 = 4.0;

/// Gap between grid columns.
pub const GRID_GAP: usize = 2;

/// Cut `text` to at most `width` columns, marking the cut with an ellipsis.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

/// Greedy word wrap to `width` columns. Words longer than a line are cut.
pub fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
        if current.width() > width {
            lines.push(truncate(&current, width));
            current.clear();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Left offset of an entering item, shrinking to zero as it settles.
pub fn slide_offset(phase: ItemPhase) -> usize {
    ((1.0 - phase.eased()) * SLIDE_COLUMNS).round() as usize
}

/// Draw `spans` according to an entrance phase.
///
/// Pending items are blank. Entering items are dimmed and slide in from
/// the right.
pub fn reveal(phase: ItemPhase, spans: Vec<Span<'static>>, styles: &PageStyles) -> Line<'static> {
    match phase {
        ItemPhase::Pending => Line::default(),
        ItemPhase::Settled => Line::from(spans),
        ItemPhase::Animating { .. } => {
            let mut out = Vec::with_capacity(spans.len() + 1);
            out.push(Span::raw(" ".repeat(slide_offset(phase))));
            out.extend(
                spans
                    .into_iter()
                    .map(|span| Span::styled(span.content, styles.entering(span.style))),
            );
            Line::from(out)
        }
    }
}

/// Horizontal bar filling `width` columns as the phase progresses.
pub fn accent_bar(phase: ItemPhase, width: usize, style: Style) -> Span<'static> {
    let filled = (phase.eased() * width as f64).round() as usize;
    Span::styled("━".repeat(filled.min(width)), style)
}

/// Clip or pad a line to exactly `width` columns.
pub fn fit_width(line: Line<'static>, width: usize) -> Line<'static> {
    let mut used = 0;
    let mut spans = Vec::with_capacity(line.spans.len() + 1);

    for span in line.spans {
        let remaining = width - used;
        if remaining == 0 {
            break;
        }
        let span_width = span.content.width();
        if span_width <= remaining {
            used += span_width;
            spans.push(span);
        } else {
            let cut = truncate(&span.content, remaining);
            used += cut.width();
            spans.push(Span::styled(cut, span.style));
        }
    }

    if used < width {
        spans.push(Span::raw(" ".repeat(width - used)));
    }
    Line::from(spans)
}

/// Lay cards out left to right in `columns` columns.
///
/// Cards shorter than `card_rows` lines are padded. A short last grid row
/// simply ends early.
pub fn grid(
    cards: Vec<Vec<Line<'static>>>,
    columns: usize,
    width: usize,
    card_rows: usize,
) -> Vec<Line<'static>> {
    let columns = columns.max(1);
    let gaps = GRID_GAP * (columns - 1);
    let cell_width = width.saturating_sub(gaps) / columns;

    let mut lines = Vec::new();
    let mut cards = cards.into_iter().peekable();
    while cards.peek().is_some() {
        let row: Vec<Vec<Line<'static>>> = cards.by_ref().take(columns).collect();
        for r in 0..card_rows {
            let mut spans: Vec<Span<'static>> = Vec::new();
            for (c, card) in row.iter().enumerate() {
                if c > 0 {
                    spans.push(Span::raw(" ".repeat(GRID_GAP)));
                }
                let cell = card.get(r).cloned().unwrap_or_default();
                spans.extend(fit_width(cell, cell_width).spans);
            }
            lines.push(Line::from(spans));
        }
    }
    lines
}

/// Pad with blank lines or cut so exactly `height` lines remain.
pub fn fit(mut lines: Vec<Line<'static>>, height: usize) -> Vec<Line<'static>> {
    lines.resize(height, Line::default());
    lines
}

/// Left padding that centres `content_width` columns in `width`.
pub fn centre_pad(content_width: usize, width: usize) -> usize {
    width.saturating_sub(content_width) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::styles::ColorConfig;
    use ratatui::style::Modifier;

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn truncate_marks_the_cut() {
        assert_eq!(truncate("kubernetes", 20), "kubernetes");
        assert_eq!(truncate("kubernetes", 5), "kube…");
        assert_eq!(truncate("kubernetes", 0), "");
    }

    #[test]
    fn wrap_words_respects_width() {
        let lines = wrap_words("deploy the cluster to three regions", 12);
        assert_eq!(lines, vec!["deploy the", "cluster to", "three", "regions"]);
        assert!(wrap_words("", 10).is_empty());
    }

    #[test]
    fn pending_items_are_blank() {
        let styles = PageStyles::with_color_config(ColorConfig::new(false));
        let line = reveal(ItemPhase::Pending, vec![Span::raw("Docker")], &styles);
        assert_eq!(line.width(), 0);
    }

    #[test]
    fn entering_items_slide_and_dim() {
        let styles = PageStyles::with_color_config(ColorConfig::new(false));
        let line = reveal(
            ItemPhase::Animating { progress: 0.0 },
            vec![Span::raw("Docker")],
            &styles,
        );
        assert_eq!(text(&line), "    Docker");
        assert!(line.spans[1].style.add_modifier.contains(Modifier::DIM));

        let settled = reveal(ItemPhase::Settled, vec![Span::raw("Docker")], &styles);
        assert_eq!(text(&settled), "Docker");
    }

    #[test]
    fn accent_bar_grows_with_progress() {
        assert_eq!(accent_bar(ItemPhase::Pending, 10, Style::default()).content, "");
        assert_eq!(
            accent_bar(ItemPhase::Settled, 4, Style::default()).content,
            "━━━━"
        );
    }

    #[test]
    fn grid_pads_cells_and_short_rows() {
        let cards = vec![
            vec![Line::from("a"), Line::from("1")],
            vec![Line::from("b"), Line::from("2")],
            vec![Line::from("c"), Line::from("3")],
        ];
        let lines = grid(cards, 2, 10, 2);

        assert_eq!(lines.len(), 4);
        assert_eq!(text(&lines[0]), "a     b   ");
        assert_eq!(text(&lines[3]), "3   ");
    }

    #[test]
    fn fit_pads_and_cuts() {
        assert_eq!(fit(vec![Line::from("x")], 3).len(), 3);
        assert_eq!(fit(vec![Line::from("x"); 5], 2).len(), 2);
    }
}
