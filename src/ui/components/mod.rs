pub mod empty_state;
pub mod footer;
pub mod header;
pub mod help_panel;
pub mod input_bar;
pub mod progress;
pub mod task_list;
pub mod toast;
