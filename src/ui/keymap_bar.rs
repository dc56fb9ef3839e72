//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Key bindings shown at the bottom of the screen.
pub(crate) const KEYMAP: &str =
    "q:quit | Tab:curve | h/l:point | ←↓↑→:move (Shift:x10) | a:add | x:del | 1-9:visible | +/-:zoom | 0:reset | y:copy | T:theme";

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let paragraph = Paragraph::new(KEYMAP).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
