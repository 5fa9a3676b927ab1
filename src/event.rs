use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;

/// Handle events; returns true while the app should keep running
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // Clear expired toasts
    app.update_toast();

    // Poll with a timeout so toasts expire without a keypress
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // Only react to key-down
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Overlays take priority

    // Help panel
    if app.show_help {
        handle_help_key(app, key);
        return;
    }

    // Input mode captures everything
    if app.input_mode {
        handle_input_key(app, key);
        return;
    }

    handle_list_key(app, key);
}

/// Key handling for the task list
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // Navigation - down
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
        }

        // Navigation - up
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
        }

        // Toggle completion
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_selected();
        }

        // Delete task
        KeyCode::Char('x') | KeyCode::Char('d') => {
            app.delete_selected();
        }

        // New task
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.enter_input_mode();
        }

        // Theme toggle
        KeyCode::Char('t') | KeyCode::Char('T') => {
            app.toggle_theme();
        }

        // Help
        KeyCode::Char('?') => {
            app.show_help = true;
        }

        _ => {}
    }
}

/// Key handling while typing a new task
fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Submit
        KeyCode::Enter => {
            app.submit_input();
        }

        // Cancel
        KeyCode::Esc => {
            app.cancel_input();
        }

        // Delete character
        KeyCode::Backspace => {
            app.input_backspace();
        }

        // Type character
        KeyCode::Char(c) => {
            app.input_char(c);
        }

        _ => {}
    }
}

/// Key handling for the help panel
fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Any close key dismisses it
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
            app.show_help = false;
        }
        _ => {}
    }
}
