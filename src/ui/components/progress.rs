//! Completion progress card

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::store::Stats;
use crate::theme::ThemeColors;

/// Render the progress card. Callers only invoke this when there is at
/// least one task, so `progress()` never sees an empty list here.
pub fn render(frame: &mut Frame, area: Rect, stats: Stats, colors: &ThemeColors) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg_secondary));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [count_area, bar_area, percent_area] = Layout::vertical([
        Constraint::Length(1), // "3 of 5 completed"
        Constraint::Length(1), // bar
        Constraint::Length(1), // "60% completed"
    ])
    .areas(inner);

    // Count line
    let count = Paragraph::new(Span::styled(
        format!("{} of {} completed", stats.completed, stats.total),
        Style::default()
            .fg(colors.highlight)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(count, count_area);

    // Progress bar, inset two cells on each side
    let bar_width = bar_area.width.saturating_sub(4) as usize;
    let filled = (bar_width as f64 * stats.progress()).round() as usize;
    let bar = Paragraph::new(Line::from(vec![
        Span::styled("█".repeat(filled), Style::default().fg(colors.accent)),
        Span::styled(
            "░".repeat(bar_width.saturating_sub(filled)),
            Style::default().fg(colors.border),
        ),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(bar, bar_area);

    // Percent line
    let percent = Paragraph::new(Span::styled(
        format!("{}% completed", (stats.progress() * 100.0).round() as u32),
        Style::default().fg(colors.muted),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(percent, percent_area);
}
