//! Task list rows

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::store::Task;
use crate::theme::ThemeColors;

/// Render the task rows in display order.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    selected: Option<usize>,
    colors: &ThemeColors,
) {
    if tasks.is_empty() {
        return;
    }

    let mut lines = Vec::with_capacity(tasks.len());

    for (i, task) in tasks.iter().enumerate() {
        let is_selected = selected == Some(i);

        let cursor = if is_selected { "❯" } else { " " };

        // Completion indicator
        let check = if task.completed {
            Span::styled("● ", Style::default().fg(colors.accent))
        } else {
            Span::styled("○ ", Style::default().fg(colors.muted))
        };

        // Completed titles are struck through and dimmed
        let title_style = if task.completed {
            Style::default()
                .fg(colors.muted)
                .add_modifier(Modifier::CROSSED_OUT)
        } else if is_selected {
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text)
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", cursor),
                Style::default().fg(if is_selected {
                    colors.highlight
                } else {
                    colors.text
                }),
            ),
            check,
            Span::styled(task.title.clone(), title_style),
        ]));
    }

    // Keep the selected row visible on long lists
    let visible = area.height as usize;
    let offset = match selected {
        Some(s) if visible > 0 && s >= visible => s + 1 - visible,
        _ => 0,
    };

    let paragraph = Paragraph::new(lines).scroll((offset as u16, 0));
    frame.render_widget(paragraph, area);
}
