//! App title header

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;

/// Render the centered title header
pub fn render(frame: &mut Frame, area: Rect, colors: &ThemeColors) {
    let [_, title_area, subtitle_area, _] = Layout::vertical([
        Constraint::Length(1), // top spacing
        Constraint::Length(1), // title
        Constraint::Length(1), // subtitle
        Constraint::Fill(1),
    ])
    .areas(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled("✓ ", Style::default().fg(colors.accent)),
        Span::styled(
            "Taskwell",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let subtitle = Paragraph::new(Span::styled(
        "Organize your day",
        Style::default().fg(colors.muted),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, subtitle_area);
}
