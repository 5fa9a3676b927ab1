mod app;
mod event;
mod store;
mod theme;
mod ui;

use std::io;
use std::panic;

use clap::Parser;
use ratatui::DefaultTerminal;

use app::App;
use theme::Theme;

/// A keyboard-driven task list for the terminal
#[derive(Parser)]
#[command(name = "taskwell", version, about)]
struct Cli {
    /// Color theme to start with (light or dark)
    #[arg(long)]
    theme: Option<String>,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    // Restore terminal state before the default panic output
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let theme = cli
        .theme
        .as_deref()
        .map(Theme::from_name)
        .unwrap_or_default();

    let mut terminal = ratatui::init();
    let mut app = App::new(theme);

    let result = run(&mut terminal, &mut app);

    ratatui::restore();
    result
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // Render
        terminal.draw(|frame| ui::home::render(frame, app))?;

        // Handle events
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
