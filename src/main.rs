// Binary includes library modules - some public API items are only for library consumers
#![allow(unused)]

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use reqwest::Client;

mod app;
mod data;
mod events;
mod loader;
mod render;
mod source;
mod ticker;
mod ui;

use app::App;
use loader::{Loader, CLOCK_PATHS};
use source::{join_url, ClockSource, FileSource, HttpSource};

#[derive(Parser, Debug)]
#[command(name = "clockwatch")]
#[command(about = "Live terminal dashboard for 'time since last incident' safety clocks")]
struct Args {
    /// Base URL serving the clock data files
    #[arg(short, long, default_value = "http://localhost:8000", conflicts_with = "file")]
    base_url: String,

    /// Read a clock record from a local JSON file instead of HTTP.
    /// Repeatable; files map to display slots left to right.
    #[arg(short, long)]
    file: Vec<PathBuf>,

    /// Counter update interval in milliseconds
    #[arg(short, long, default_value = "1000")]
    tick: u64,

    /// Fetch once, export clock state to a JSON file, and exit
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let tick_interval = Duration::from_millis(args.tick);
    let loader = Loader::new(build_sources(&args));

    // The fetch phase is the only async part; the TUI loop itself
    // stays synchronous.
    let rt = tokio::runtime::Runtime::new()?;

    // Handle export mode (non-interactive)
    if let Some(export_path) = args.export {
        return export_to_file(&rt, &loader, tick_interval, &export_path);
    }

    run_tui(&rt, &loader, tick_interval)
}

/// Build one source per display slot from the CLI arguments.
fn build_sources(args: &Args) -> Vec<Box<dyn ClockSource>> {
    if !args.file.is_empty() {
        return args
            .file
            .iter()
            .map(|path| Box::new(FileSource::new(path)) as Box<dyn ClockSource>)
            .collect();
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to build HTTP client");

    CLOCK_PATHS
        .iter()
        .map(|path| {
            let url = join_url(&args.base_url, path);
            Box::new(HttpSource::with_client(client.clone(), url)) as Box<dyn ClockSource>
        })
        .collect()
}

/// Fetch all clocks, render them once and write the state to a JSON file.
fn export_to_file(
    rt: &tokio::runtime::Runtime,
    loader: &Loader,
    tick_interval: Duration,
    export_path: &std::path::Path,
) -> Result<()> {
    let mut app = App::new(loader.source_count(), loader.descriptions());

    let ticker = rt.block_on(loader.initialize(&mut app.slots, tick_interval))?;
    if let Some(mut ticker) = ticker {
        ticker.cancel();
    }

    app.export_state(export_path)?;
    println!("Exported clock state to: {}", export_path.display());
    Ok(())
}

/// Run the TUI with the given loader
fn run_tui(rt: &tokio::runtime::Runtime, loader: &Loader, tick_interval: Duration) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Setup panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic);
    }));

    // Create app and run the initial load
    let mut app = App::new(loader.source_count(), loader.descriptions());
    initialize_app(&mut app, rt, loader, tick_interval);

    // Run the main loop
    let result = run_app(&mut terminal, &mut app, rt, loader, tick_interval);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

/// One all-or-nothing initialization pass: fetch, render, start ticking.
fn initialize_app(
    app: &mut App,
    rt: &tokio::runtime::Runtime,
    loader: &Loader,
    tick_interval: Duration,
) {
    match rt.block_on(loader.initialize(&mut app.slots, tick_interval)) {
        Ok(ticker) => app.ticker = ticker,
        Err(e) => app.load_error = Some(e.to_string()),
    }
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    rt: &tokio::runtime::Runtime,
    loader: &Loader,
    tick_interval: Duration,
) -> Result<()> {
    // Minimum terminal size for usable display
    const MIN_WIDTH: u16 = 60;
    const MIN_HEIGHT: u16 = 12;

    while app.running {
        // Draw UI
        terminal.draw(|frame| {
            let area = frame.area();

            // Check for minimum terminal size
            if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
                let msg = format!(
                    "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
                    area.width, area.height, MIN_WIDTH, MIN_HEIGHT
                );
                let paragraph = ratatui::widgets::Paragraph::new(msg)
                    .alignment(ratatui::layout::Alignment::Center)
                    .style(ratatui::style::Style::default().fg(ratatui::style::Color::Yellow));
                let centered = ratatui::layout::Rect::new(0, area.height / 2 - 2, area.width, 5);
                frame.render_widget(paragraph, centered);
                return;
            }

            let chunks = Layout::vertical([
                Constraint::Length(1), // Header bar
                Constraint::Min(8),    // Clock cards
                Constraint::Length(1), // Status bar
            ])
            .split(area);

            // Render header with overall status
            ui::common::render_header(frame, app, chunks[0]);

            // A failed load replaces the clock area with the error banner
            if app.load_error.is_some() {
                ui::common::render_error(frame, app, chunks[1]);
            } else {
                let slot_areas = Layout::horizontal(vec![
                    Constraint::Fill(1);
                    app.slots.len().max(1)
                ])
                .split(chunks[1]);
                for index in 0..app.slots.len() {
                    ui::card::render_slot(frame, app, index, slot_areas[index]);
                }
            }

            // Render status bar
            ui::common::render_status_bar(frame, app, chunks[2]);

            // Render help overlay if active
            if app.show_help {
                ui::common::render_help(frame, app, area);
            }
        })?;

        // Poll for events with a short timeout
        if let Some(event) = events::poll_event(Duration::from_millis(100))? {
            match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    events::handle_key_event(app, key);
                }
                Event::Resize(_, _) => {
                    // Terminal will redraw on next iteration
                }
                _ => {}
            }
        }

        // User-requested re-initialization
        if app.reload_requested {
            app.reload_requested = false;
            app.reset_for_reload();
            initialize_app(app, rt, loader, tick_interval);
        }

        // Advance the counters once per tick interval
        app.tick();
    }

    Ok(())
}
