//! Row of per-curve visibility checkboxes.

use crate::curve::CurveSet;
use crate::ui::{curve_color, ThemeColors};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw one `[x] Visible N` checkbox per curve, in the curve's color.
pub(super) fn draw_visibility(f: &mut Frame<'_>, area: Rect, set: &CurveSet, colors: &ThemeColors) {
    let mut spans = Vec::with_capacity(set.curve_count() * 2);
    for (i, curve) in set.curves().iter().enumerate() {
        let (mark, style) = if curve.visible {
            (
                "[x]",
                Style::default()
                    .fg(curve_color(curve.color))
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            ("[ ]", Style::default().fg(colors.muted))
        };
        spans.push(Span::styled(format!("{} Visible {}", mark, i), style));
        spans.push(Span::raw("  "));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(colors.bg));

    f.render_widget(paragraph, area);
}
