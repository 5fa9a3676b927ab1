//! Bottom shortcut bar

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// Render the footer with context-sensitive shortcuts
pub fn render(
    frame: &mut Frame,
    area: Rect,
    has_items: bool,
    input_mode: bool,
    colors: &ThemeColors,
) {
    let shortcuts = get_shortcuts(has_items, input_mode);

    let mut spans = Vec::new();
    spans.push(Span::raw("  "));

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn get_shortcuts(has_items: bool, input_mode: bool) -> Vec<(&'static str, &'static str)> {
    if input_mode {
        vec![("Enter", "add"), ("Esc", "cancel")]
    } else if has_items {
        vec![
            ("j/k", "move"),
            ("Space", "toggle"),
            ("a", "add"),
            ("x", "delete"),
            ("t", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ]
    } else {
        vec![("a", "add"), ("t", "theme"), ("q", "quit")]
    }
}
