//! Character cast generator TUI application.
//!
//! A terminal interface for generating fictional character casts from world
//! lore through a generation backend, with live progress from the backend's
//! push channel and a Mermaid relationship diagram written to disk.

mod app;
mod events;
mod form;
mod ui;
mod worker;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use loreforge_core::genapi::GenApi;
use loreforge_core::{CastForm, HtmlRenderer};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::time::Duration;

use app::App;
use events::{handle_event, EventResult};
use form::FormEditor;
use ui::render::render;
use worker::spawn_worker;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let client = GenApi::from_env();

    // Prefill the form from the environment where available
    let mut form = CastForm::default();
    if let Ok(key) = std::env::var("GENAPI_KEY") {
        form.api_key = key;
    }

    let (request_tx, event_rx, listener_handle) = spawn_worker(client);
    let app = App::new(
        request_tx,
        event_rx,
        FormEditor::new(form),
        Box::new(HtmlRenderer),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, app).await;

    // The listener is torn down with the app whatever state the connection
    // is in
    listener_handle.abort();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> io::Result<()> {
    loop {
        // Render
        terminal.draw(|f| render(f, &app))?;

        // Drain background events in arrival order
        while let Ok(worker_event) = app.event_rx.try_recv() {
            app.apply_worker_event(worker_event);
        }

        // Poll for terminal events with a timeout so channel updates keep
        // flowing while idle
        if event::poll(Duration::from_millis(100))? {
            let ev = event::read()?;

            match handle_event(&mut app, ev) {
                EventResult::Quit => {
                    return Ok(());
                }
                EventResult::Submit => {
                    app.submit();
                }
                EventResult::NeedsRedraw | EventResult::Continue => {
                    // Just continue the loop
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn print_help() {
    println!("Loreforge - character cast generator");
    println!();
    println!("USAGE:");
    println!("  loreforge [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -h, --help    Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("  GENAPI_URL    Generation backend base URL (default: http://127.0.0.1:8000)");
    println!("  GENAPI_KEY    API key used to prefill the form");
    println!();
    println!("Fill in the form, press g to generate, and find the relationship");
    println!("diagram in cast_relationships.html next to where you ran the app.");
}
