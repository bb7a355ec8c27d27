// Status bar component
//
// Renders key hints at the bottom, the active theme name, and the most
// recent captured warning when there is one. Hints shrink with the
// terminal width.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar with key hints
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let hints = if bp.at_least(Breakpoint::Wide) {
        " Tab:next field │ ←/→:cycle type │ Space:toggle │ ^Y:copy │ ^R:reset │ ^T:theme │ Esc:quit"
            .to_string()
    } else if bp.at_least(Breakpoint::Normal) {
        " Tab:field │ ^Y:copy │ ^R:reset │ ^T:theme │ Esc:quit".to_string()
    } else {
        " ^Y:copy ^R:reset Esc:quit".to_string()
    };

    let mut spans = vec![Span::styled(hints, theme.status_style())];

    // Surface the newest captured warning in place of decoration
    if let Some(problem) = app.log_buffer.last_problem() {
        spans.push(Span::styled(
            format!("  ⚠ {}", problem.message),
            Style::default().fg(theme.warning),
        ));
    } else {
        spans.push(Span::styled(
            format!("  [{}]", app.theme_kind.name()),
            Style::default().fg(theme.hint),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::TOP));
    f.render_widget(status, area);
}
