//! Main screen rendering

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;

use super::components::{
    empty_state, footer, header, help_panel, input_bar, progress, task_list, toast,
};

/// Render the task screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.colors;

    // Fill the whole background
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let stats = app.store.stats();

    // Progress card only exists once there is at least one task
    let (header_area, progress_area, input_area, list_area, footer_area) = if stats.total > 0 {
        let [header_area, progress_area, input_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(4), // Header
            Constraint::Length(5), // Progress card
            Constraint::Length(3), // Input bar
            Constraint::Fill(1),   // Task list
            Constraint::Length(3), // Footer
        ])
        .areas(area);
        (header_area, Some(progress_area), input_area, list_area, footer_area)
    } else {
        let [header_area, input_area, list_area, footer_area] = Layout::vertical([
            Constraint::Length(4), // Header
            Constraint::Length(3), // Input bar
            Constraint::Fill(1),   // Content
            Constraint::Length(3), // Footer
        ])
        .areas(area);
        (header_area, None, input_area, list_area, footer_area)
    };

    // Header
    header::render(frame, header_area, colors);

    // Progress card
    if let Some(progress_area) = progress_area {
        progress::render(frame, progress_area, stats, colors);
    }

    // Input bar
    input_bar::render(frame, input_area, &app.input, app.input_mode, colors);

    // Task list or empty state
    if app.store.is_empty() {
        empty_state::render(frame, list_area, colors);
    } else {
        let selected = app.list_state.selected();
        task_list::render(frame, list_area, app.store.tasks(), selected, colors);
    }

    // Footer
    footer::render(frame, footer_area, !app.store.is_empty(), app.input_mode, colors);

    // Toast
    if let Some(ref t) = app.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, colors);
        }
    }

    // Help panel
    if app.show_help {
        help_panel::render(frame, colors);
    }
}
