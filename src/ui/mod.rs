//! User interface rendering.

mod keymap_bar;
mod status_bar;
mod theme;
mod visibility_bar;

use crate::app::App;
use crate::editor::ui::draw_editor;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

pub use theme::{curve_color, ThemeColors};

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Checkboxes, editor, status bar, key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    visibility_bar::draw_visibility(f, chunks[0], &app.curves, &colors);
    draw_editor(f, chunks[1], &app.curves, &app.editor, &colors);
    status_bar::draw_status(f, chunks[2], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[3], &colors);
}
