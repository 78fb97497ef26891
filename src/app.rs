//! Application state.

use std::time::Duration;

use crate::render::{MountSlot, SlotContent};
use crate::ticker::Ticker;
use crate::ui::Theme;

/// Error banner text shown when initialization fails.
pub const LOAD_ERROR_TEXT: &str = "Failed to load clock data. Press 'r' to retry.";

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    /// Display slots, left to right.
    pub slots: Vec<MountSlot>,
    /// The live counter updater; present only after a successful
    /// initialization that produced at least one counter.
    pub ticker: Option<Ticker>,
    /// Set when initialization failed; cleared on the next reload.
    pub load_error: Option<String>,
    /// Set when the user asked for re-initialization; consumed by the
    /// event loop.
    pub reload_requested: bool,

    /// Source descriptions for the status bar, in slot order.
    pub source_descriptions: Vec<String>,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, std::time::Instant)>,
}

impl App {
    /// Create a new App with the given number of display slots.
    pub fn new(slot_count: usize, source_descriptions: Vec<String>) -> Self {
        Self {
            running: true,
            show_help: false,
            slots: (0..slot_count).map(|_| MountSlot::new()).collect(),
            ticker: None,
            load_error: None,
            reload_requested: false,
            source_descriptions,
            theme: Theme::auto_detect(),
            status_message: None,
        }
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, std::time::Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Ask the event loop to re-run initialization.
    pub fn request_reload(&mut self) {
        self.reload_requested = true;
    }

    /// Tear down before re-initialization: cancel the ticker, clear
    /// every slot and drop any previous error.
    pub fn reset_for_reload(&mut self) {
        if let Some(ticker) = self.ticker.as_mut() {
            ticker.cancel();
        }
        self.ticker = None;
        self.load_error = None;
        for slot in &mut self.slots {
            slot.clear();
        }
    }

    /// Drive the ticker if one is running.
    pub fn tick(&mut self) {
        if let Some(ticker) = self.ticker.as_mut() {
            ticker.tick_if_due();
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export current clock state to a JSON file.
    pub fn export_state(&self, path: &std::path::Path) -> anyhow::Result<()> {
        use std::io::Write;

        let clocks: Vec<serde_json::Value> = self
            .slots
            .iter()
            .map(|slot| match slot.content() {
                SlotContent::Card(card) => {
                    let card = card.borrow();
                    serde_json::json!({
                        "clock_name": card.title,
                        "counter": card.counter.text(),
                        "status": card.status.label(),
                        "incident_title": card.incident_title,
                        "incident_date": card.incident_date,
                        "source": card.source_name,
                    })
                }
                SlotContent::Placeholder => serde_json::json!({ "status": "no-data" }),
                SlotContent::Empty => serde_json::json!({ "status": "empty" }),
            })
            .collect();

        let export = serde_json::json!({ "clocks": clocks });

        let json = serde_json::to_string_pretty(&export)?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }
}
