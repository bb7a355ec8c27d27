// Form pane component
//
// Renders the commit fields as labeled rows inside one bordered block and
// places the hardware cursor inside the focused text field. Row heights are
// fixed; the breaking-detail row only exists while the flag is set.

use crate::message::CommitType;
use crate::tui::app::App;
use crate::tui::fields::FieldId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the label column, separator included
const LABEL_WIDTH: u16 = 17;

/// Render the form pane
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    // The form always owns input focus, so its border carries the
    // focused accent; the preview stays muted.
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused_style())
        .title(" Compose ")
        .title_style(theme.title_style());
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Fixed row heights: single-line fields get one row, body four,
    // footer two. The detail row collapses to zero while hidden.
    let detail_height = if app.detail_visible() { 1 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // type
            Constraint::Length(1), // scope
            Constraint::Length(1), // subject
            Constraint::Length(4), // body
            Constraint::Length(2), // footer
            Constraint::Length(1), // breaking flag
            Constraint::Length(detail_height),
            Constraint::Min(0),
        ])
        .split(inner);

    render_type_row(f, rows[0], app);
    render_text_row(f, rows[1], app, FieldId::Scope, "(optional)");
    render_text_row(f, rows[2], app, FieldId::Subject, "short summary");
    render_text_row(f, rows[3], app, FieldId::Body, "longer description");
    render_text_row(f, rows[4], app, FieldId::Footer, "references, sign-offs");
    render_breaking_row(f, rows[5], app);
    if app.detail_visible() {
        render_text_row(f, rows[6], app, FieldId::BreakingDetail, "what changed");
    }
}

/// Split a row into label and value columns
fn split_row(area: Rect) -> (Rect, Rect) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(1)])
        .split(area);
    (cols[0], cols[1])
}

fn render_label(f: &mut Frame, area: Rect, app: &App, id: FieldId) {
    let focused = app.focused == id;
    let marker = if focused { "▸ " } else { "  " };
    let label = Line::from(vec![
        Span::styled(marker, app.theme.label_style(focused)),
        Span::styled(id.label(), app.theme.label_style(focused)),
    ]);
    f.render_widget(Paragraph::new(label), area);
}

/// The type select: current choice plus cycle arrows when focused
fn render_type_row(f: &mut Frame, area: Rect, app: &App) {
    let (label_area, value_area) = split_row(area);
    render_label(f, label_area, app, FieldId::Type);

    let theme = &app.theme;
    let focused = app.focused == FieldId::Type;
    let value = match app.commit_type {
        Some(t) => Span::styled(t.as_str(), theme.base_style()),
        None => Span::styled("(none)", Style::default().fg(theme.placeholder)),
    };
    let mut spans = Vec::new();
    if focused {
        spans.push(Span::styled("◂ ", Style::default().fg(theme.hint)));
    }
    spans.push(value);
    if focused {
        spans.push(Span::styled(" ▸", Style::default().fg(theme.hint)));
        let position = match app.commit_type {
            Some(t) => CommitType::all().iter().position(|&c| c == t).map(|i| i + 1),
            None => Some(0),
        };
        if let Some(pos) = position {
            spans.push(Span::styled(
                format!("  {pos}/{}", CommitType::all().len()),
                Style::default().fg(theme.hint),
            ));
        }
    }
    f.render_widget(Paragraph::new(Line::from(spans)), value_area);
}

/// A text field row; multi-line values spill across the row's height
fn render_text_row(f: &mut Frame, area: Rect, app: &App, id: FieldId, hint: &str) {
    let (label_area, value_area) = split_row(area);
    render_label(f, label_area, app, id);

    let theme = &app.theme;
    let input = match id {
        FieldId::Scope => &app.scope,
        FieldId::Subject => &app.subject,
        FieldId::Body => &app.body,
        FieldId::Footer => &app.footer,
        FieldId::BreakingDetail => &app.breaking_detail,
        FieldId::Type | FieldId::Breaking => return,
    };

    let paragraph = if input.is_empty() {
        Paragraph::new(hint).style(Style::default().fg(theme.placeholder))
    } else {
        Paragraph::new(input.value()).style(theme.base_style())
    };
    f.render_widget(paragraph, value_area);

    // Hardware cursor inside the focused field, clamped to its area
    if app.focused == id {
        let (line, col) = input.cursor_line_col();
        let x = (value_area.x + col).min(value_area.right().saturating_sub(1));
        let y = (value_area.y + line).min(value_area.bottom().saturating_sub(1));
        f.set_cursor_position((x, y));
    }
}

/// The breaking-change checkbox
fn render_breaking_row(f: &mut Frame, area: Rect, app: &App) {
    let (label_area, value_area) = split_row(area);
    render_label(f, label_area, app, FieldId::Breaking);

    let theme = &app.theme;
    let line = if app.breaking {
        Line::from(vec![
            Span::styled("[x]", Style::default().fg(theme.breaking)),
            Span::styled("  adds ! and a BREAKING CHANGE footer", Style::default().fg(theme.hint)),
        ])
    } else {
        Line::from(vec![
            Span::styled("[ ]", theme.base_style()),
            Span::styled("  Space to toggle", Style::default().fg(theme.hint)),
        ])
    };
    f.render_widget(Paragraph::new(line), value_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicode_width::UnicodeWidthStr;

    #[test]
    fn label_column_fits_longest_label() {
        let longest = [
            FieldId::Type,
            FieldId::Scope,
            FieldId::Subject,
            FieldId::Body,
            FieldId::Footer,
            FieldId::Breaking,
            FieldId::BreakingDetail,
        ]
        .iter()
        .map(|id| id.label().width())
        .max()
        .unwrap();
        // Marker (2 cells) plus label must fit the label column
        assert!(longest + 2 <= LABEL_WIDTH as usize);
    }
}
