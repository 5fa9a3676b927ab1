//! New-task input bar

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// Render the input bar. Shows the live buffer with a cursor while in
/// input mode, a hint otherwise.
pub fn render(frame: &mut Frame, area: Rect, input: &str, input_mode: bool, colors: &ThemeColors) {
    let border_color = if input_mode {
        colors.highlight
    } else {
        colors.border
    };

    let block = Block::default()
        .title(" New Task ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = if input_mode {
        Line::from(vec![
            Span::styled(" ❯ ", Style::default().fg(colors.highlight)),
            Span::styled(input, Style::default().fg(colors.text)),
            Span::styled("█", Style::default().fg(colors.highlight)), // cursor
        ])
    } else {
        Line::from(Span::styled(
            " What would you like to do today? (press 'a')",
            Style::default().fg(colors.muted),
        ))
    };

    frame.render_widget(Paragraph::new(line), inner);
}
