//! Curve editor view - pure rendering layer.

use super::sample::sample_curve;
use super::EditorState;
use crate::curve::CurveDelegate;
use crate::ui::{curve_color, ThemeColors};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Draw every visible curve of the delegate inside its value space.
pub fn draw_editor<D: CurveDelegate + ?Sized>(
    f: &mut Frame<'_>,
    area: Rect,
    delegate: &D,
    state: &EditorState,
    colors: &ThemeColors,
) {
    let bg = colors.editor_bg(delegate.background_color());
    let block = Block::default()
        .title(title(delegate, state))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .title_style(Style::default().fg(colors.heading))
        .style(Style::default().bg(bg));

    if delegate.curve_count() == 0 {
        let para = Paragraph::new("No curves to display")
            .style(Style::default().fg(colors.text))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(para, area);
        return;
    }

    // Sampled lines and raw control points, kept alive for the datasets below.
    let mut lines = Vec::new();
    for curve in 0..delegate.curve_count() {
        if !delegate.is_visible(curve).unwrap_or(false) {
            continue;
        }
        let (Ok(points), Ok(kind), Ok(color)) = (
            delegate.points(curve),
            delegate.curve_kind(curve),
            delegate.curve_color(curve),
        ) else {
            continue;
        };
        let samples = sample_curve(points, kind, state.config.samples_per_segment);
        let controls: Vec<(f64, f64)> = points
            .iter()
            .map(|p| (f64::from(p.x), f64::from(p.y)))
            .collect();
        lines.push((curve, samples, controls, curve_color(color)));
    }

    let selected: Vec<(f64, f64)> = delegate
        .is_visible(state.curve)
        .unwrap_or(false)
        .then(|| state.selected(delegate))
        .flatten()
        .map(|p| vec![(f64::from(p.x), f64::from(p.y))])
        .unwrap_or_default();

    let mut datasets = Vec::with_capacity(lines.len() * 2 + 1);
    for (curve, samples, controls, color) in &lines {
        let mut style = Style::default().fg(*color);
        if *curve == state.curve {
            style = style.add_modifier(Modifier::BOLD);
        }
        datasets.push(
            Dataset::default()
                .name(format!("{}", curve))
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(style)
                .data(samples),
        );
        datasets.push(
            Dataset::default()
                .marker(Marker::Dot)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(*color))
                .data(controls),
        );
    }
    if !selected.is_empty() {
        datasets.push(
            Dataset::default()
                .marker(Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(colors.cursor_bg))
                .data(&selected),
        );
    }

    let space = delegate.value_space();
    let (x_min, x_max) = (f64::from(space.min.x), f64::from(space.max.x));
    let (y_min, y_max) = (f64::from(space.min.y), f64::from(space.max.y));

    let x_axis = Axis::default()
        .style(Style::default().fg(colors.muted))
        .bounds([x_min, x_max])
        .labels(vec![
            format_axis_label(x_min),
            format_axis_label((x_min + x_max) / 2.0),
            format_axis_label(x_max),
        ]);

    let y_axis = Axis::default()
        .style(Style::default().fg(colors.muted))
        .bounds([y_min, y_max])
        .labels(vec![
            format_axis_label(y_min),
            format_axis_label((y_min + y_max) / 2.0),
            format_axis_label(y_max),
        ]);

    let chart = Chart::new(datasets)
        .block(block)
        .style(Style::default().fg(colors.text).bg(bg))
        .x_axis(x_axis)
        .y_axis(y_axis);

    f.render_widget(chart, area);
}

fn title<D: CurveDelegate + ?Sized>(delegate: &D, state: &EditorState) -> String {
    let Ok(points) = delegate.points(state.curve) else {
        return " Curve Editor ".to_string();
    };
    let kind = delegate
        .curve_kind(state.curve)
        .map(|k| k.name())
        .unwrap_or("?");
    match points.get(state.point) {
        Some(p) => format!(
            " Curve {} ({}) - point {}/{} @ ({}, {}) ",
            state.curve,
            kind,
            state.point + 1,
            points.len(),
            format_axis_label(f64::from(p.x)),
            format_axis_label(f64::from(p.y)),
        ),
        None => format!(" Curve {} ({}) ", state.curve, kind),
    }
}

/// Format axis label with smart precision.
fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-2..1e5).contains(&abs_val) {
        format!("{:.1e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.0}", val)
    } else if abs_val >= 1.0 {
        format!("{:.1}", val)
    } else {
        format!("{:.2}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Theme;
    use crate::config::EditorConfig;
    use crate::curve::demo_set;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_format_axis_label() {
        assert_eq!(format_axis_label(0.0), "0");
        assert_eq!(format_axis_label(-100.0), "-100");
        assert_eq!(format_axis_label(12.34), "12.3");
        assert_eq!(format_axis_label(0.5), "0.50");
        assert_eq!(format_axis_label(f64::NAN), "?");
    }

    #[test]
    fn test_title_shows_selection() {
        let set = demo_set();
        let mut state = EditorState::new(EditorConfig::default());
        state.point = 4;
        assert_eq!(title(&set, &state), " Curve 0 (smooth) - point 5/5 @ (120, 1.0) ");
    }

    #[test]
    fn test_draw_renders_title() {
        let mut set = demo_set();
        set.set_visible(1, false).unwrap();
        let state = EditorState::new(EditorConfig::default());
        let colors = ThemeColors::from_theme(&Theme::GruvboxDark);
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                draw_editor(f, area, &set, &state, &colors);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let top: String = (0..buffer.area.width)
            .map(|x| buffer[(x, 0)].symbol().to_string())
            .collect();
        assert!(top.contains("Curve 0 (smooth)"));
    }
}
