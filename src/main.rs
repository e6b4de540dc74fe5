use std::io::{self, stdout};
use std::sync::Arc;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::prelude::*;

mod app;
mod cli;
mod models;
mod stage;
mod theme;
mod ui;
mod utils;
mod watcher;

use app::App;
use models::Catalog;

fn main() -> io::Result<()> {
    let config = cli::parse_args()?;
    let (catalog, catalog_source) = Catalog::find(config.catalog_path.as_deref())?;
    let mut app = App::new(catalog, catalog_source, &config);

    // Keep the watcher alive for the whole session; dropping it stops events
    let _watcher = app.catalog_source.clone().and_then(|path| {
        watcher::setup_catalog_watcher(path, Arc::clone(&app.catalog_needs_reload))
    });

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Run the app
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        app.reload_catalog_if_needed();
        app.tick_animation();

        terminal.draw(|frame| ui::render(frame, app))?;

        // The draw above hides the gate once it unlocks; land the user at
        // the top of the revealed content before handling further input.
        app.apply_pending_reposition();

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if app.handle_key(key) {
                        break;
                    }
                }
                // The next draw records the resized layout and re-derives
                // view state from it.
                Event::Resize(_, _) => {}
                _ => {}
            }
        }
    }

    Ok(())
}
