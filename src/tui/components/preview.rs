// Preview pane component
//
// Read-only mirror of the composed message. The placeholder renders dimmed
// so an empty form is visually distinct from a one-character subject.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the preview pane
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(" Preview ")
        .title_style(theme.title_style());

    let style = if app.preview_is_placeholder() {
        Style::default().fg(theme.placeholder)
    } else {
        Style::default().fg(theme.preview_text)
    };

    let paragraph = Paragraph::new(app.preview.as_str())
        .style(style)
        .wrap(Wrap { trim: false })
        .block(block);

    f.render_widget(paragraph, area);
}
