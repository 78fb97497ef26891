//! Initialization glue: fetch all records, render them, start the ticker.
//!
//! The loader owns its [`ClockSource`] collaborators explicitly (one
//! per display slot, left-to-right) and hands the started [`Ticker`]
//! back to the caller, which owns teardown. Nothing here reaches for
//! ambient state.

use std::time::Duration;

use chrono::Utc;

use crate::data::IncidentRecord;
use crate::render::{render_clock, CounterHandle, MountSlot};
use crate::source::{ClockSource, SourceError};
use crate::ticker::Ticker;

/// Fixed relative paths of the two clock data files, in display order.
pub const CLOCK_PATHS: [&str; 2] = [
    "data/clock1_av_collisions.json",
    "data/clock2_cyber_incidents.json",
];

/// Fetches clock records and wires them into the display.
#[derive(Debug)]
pub struct Loader {
    sources: Vec<Box<dyn ClockSource>>,
}

impl Loader {
    /// Create a loader from the sources backing each display slot.
    pub fn new(sources: Vec<Box<dyn ClockSource>>) -> Self {
        Self { sources }
    }

    /// Number of configured sources.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// Human-readable descriptions of the sources, in slot order.
    pub fn descriptions(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.description().to_string()).collect()
    }

    /// Fetch every record, in slot order.
    ///
    /// All-or-nothing: the first failure aborts the whole fetch and
    /// nothing is rendered from a partial result.
    pub async fn fetch_all(&self) -> Result<Vec<IncidentRecord>, SourceError> {
        let mut records = Vec::with_capacity(self.sources.len());
        for source in &self.sources {
            records.push(source.fetch().await?);
        }
        Ok(records)
    }

    /// Fetch all records, render each into its corresponding slot, and
    /// start the ticker over the resulting counters.
    ///
    /// Records map to slots left to right. Malformed records degrade
    /// to placeholders without failing the rest; a fetch failure aborts
    /// before any slot is touched. Returns `None` when no record
    /// produced a live counter - there is nothing to tick.
    pub async fn initialize(
        &self,
        slots: &mut [MountSlot],
        tick_interval: Duration,
    ) -> Result<Option<Ticker>, SourceError> {
        let records = self.fetch_all().await?;

        let now = Utc::now();
        let mut handles: Vec<CounterHandle> = Vec::new();
        for (record, slot) in records.iter().zip(slots.iter_mut()) {
            if let Some(handle) = render_clock(Some(record), slot, now) {
                handles.push(handle);
            }
        }

        if handles.is_empty() {
            Ok(None)
        } else {
            Ok(Some(Ticker::start(handles, tick_interval)))
        }
    }
}
