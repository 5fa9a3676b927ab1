use std::time::{Duration, Instant};

use ratatui::widgets::ListState;

use crate::store::TaskStore;
use crate::theme::{get_theme_colors, Theme, ThemeColors};

/// How long a toast stays on screen
const TOAST_DURATION: Duration = Duration::from_secs(2);

/// Toast message
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Global application state
pub struct App {
    /// Whether the app should exit
    pub should_quit: bool,
    /// The task list, owned here and nowhere else
    pub store: TaskStore,
    /// List selection state
    pub list_state: ListState,
    /// New-task input buffer
    pub input: String,
    /// Whether keystrokes go to the input field
    pub input_mode: bool,
    /// Current theme
    pub theme: Theme,
    /// Current color scheme
    pub colors: ThemeColors,
    /// Toast message
    pub toast: Option<Toast>,
    /// Whether the help panel is visible
    pub show_help: bool,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        Self {
            should_quit: false,
            store: TaskStore::new(),
            list_state: ListState::default(),
            input: String::new(),
            input_mode: false,
            theme,
            colors: get_theme_colors(theme),
            toast: None,
            show_help: false,
        }
    }

    // ========== Selection ==========

    /// Select the next task, wrapping at the end
    pub fn select_next(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }

        let current = self.list_state.selected().unwrap_or(0);
        self.list_state.select(Some((current + 1) % len));
    }

    /// Select the previous task, wrapping at the start
    pub fn select_previous(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }

        let current = self.list_state.selected().unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.list_state.select(Some(prev));
    }

    /// Make sure something is selected whenever the list is non-empty
    pub fn ensure_selection(&mut self) {
        if !self.store.is_empty() && self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }
    }

    // ========== Input ==========

    /// Start typing a new task
    pub fn enter_input_mode(&mut self) {
        self.input_mode = true;
    }

    /// Leave input mode and discard the buffer
    pub fn cancel_input(&mut self) {
        self.input_mode = false;
        self.input.clear();
    }

    pub fn input_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// Submit the input buffer as a new task.
    ///
    /// Whitespace-only input is ignored and the buffer kept, so the user
    /// can keep editing. On success the buffer is cleared and input mode
    /// stays active for rapid entry.
    pub fn submit_input(&mut self) {
        let title = self.input.trim().to_string();
        if self.store.add(&self.input).is_none() {
            return;
        }

        self.input.clear();
        self.ensure_selection();
        self.show_toast(format!("Added: {}", title));
    }

    // ========== Task actions ==========

    /// Toggle completion of the selected task
    pub fn toggle_selected(&mut self) {
        let Some(id) = self.selected_task_id() else { return };
        self.store.toggle(&id);
    }

    /// Delete the selected task and keep the selection in bounds
    pub fn delete_selected(&mut self) {
        let Some(index) = self.list_state.selected() else { return };
        let Some(task) = self.store.tasks().get(index) else { return };

        let id = task.id.clone();
        let title = task.title.clone();
        self.store.delete(&id);

        let len = self.store.len();
        if len == 0 {
            self.list_state.select(None);
        } else if index >= len {
            self.list_state.select(Some(len - 1));
        }

        self.show_toast(format!("Deleted: {}", title));
    }

    fn selected_task_id(&self) -> Option<String> {
        let index = self.list_state.selected()?;
        self.store.tasks().get(index).map(|t| t.id.clone())
    }

    // ========== Theme ==========

    /// Switch between light and dark
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggle();
        self.colors = get_theme_colors(self.theme);
        self.show_toast(format!("Theme: {}", self.theme.label()));
    }

    // ========== Toast ==========

    /// Show a toast message
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, TOAST_DURATION));
    }

    /// Clear the toast once it expires
    pub fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// Exit the app
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with_tasks(titles: &[&str]) -> App {
        let mut app = App::default();
        for title in titles {
            app.store.add(title);
        }
        app.ensure_selection();
        app
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = app_with_tasks(&["A", "B", "C"]);
        assert_eq!(app.list_state.selected(), Some(0));

        app.select_previous();
        assert_eq!(app.list_state.selected(), Some(2));

        app.select_next();
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_selection_noop_on_empty_list() {
        let mut app = App::default();
        app.select_next();
        app.select_previous();
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn test_submit_clears_input_on_success() {
        let mut app = App::default();
        app.enter_input_mode();
        for c in "  Buy milk ".chars() {
            app.input_char(c);
        }
        app.submit_input();

        assert!(app.input.is_empty());
        assert_eq!(app.store.tasks()[0].title, "Buy milk");
        assert_eq!(app.list_state.selected(), Some(0));
    }

    #[test]
    fn test_submit_keeps_whitespace_input() {
        let mut app = App::default();
        app.enter_input_mode();
        app.input_char(' ');
        app.input_char(' ');
        app.submit_input();

        // No task created, buffer kept for editing
        assert!(app.store.is_empty());
        assert_eq!(app.input, "  ");
        assert!(app.input_mode);
    }

    #[test]
    fn test_toggle_selected() {
        let mut app = app_with_tasks(&["A", "B"]);
        app.select_next();
        app.toggle_selected();

        assert!(!app.store.tasks()[0].completed);
        assert!(app.store.tasks()[1].completed);
    }

    #[test]
    fn test_delete_selected_clamps_selection() {
        let mut app = app_with_tasks(&["A", "B", "C"]);
        app.select_next();
        app.select_next(); // last item
        app.delete_selected();

        assert_eq!(app.store.len(), 2);
        assert_eq!(app.list_state.selected(), Some(1));

        app.delete_selected();
        app.delete_selected();
        assert!(app.store.is_empty());
        assert_eq!(app.list_state.selected(), None);
    }

    #[test]
    fn test_delete_with_no_selection_is_noop() {
        let mut app = App::default();
        app.delete_selected();
        app.toggle_selected();
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_toggle_theme_rebuilds_colors() {
        let mut app = App::new(Theme::Light);
        let light_bg = app.colors.bg;

        app.toggle_theme();
        assert_eq!(app.theme, Theme::Dark);
        assert_ne!(app.colors.bg, light_bg);

        app.toggle_theme();
        assert_eq!(app.theme, Theme::Light);
        assert_eq!(app.colors.bg, light_bg);
    }
}
