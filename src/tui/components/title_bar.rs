// Title bar component

use crate::config::VERSION;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the one-line title bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let line = Line::from(vec![
        Span::styled(" commitpad ", theme.title_style()),
        Span::styled(format!("v{VERSION}"), Style::default().fg(theme.hint)),
        Span::styled("  conventional commit composer", Style::default().fg(theme.hint)),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
