// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # clockwatch
//!
//! A live terminal dashboard and library for "elapsed time since last
//! incident" safety clocks.
//!
//! This crate fetches a fixed set of clock records (JSON documents
//! describing the most recent incident per clock), renders each as a
//! card with a live counter, and updates every counter once per second
//! with a three-level freshness status (green/yellow/red) derived from
//! the elapsed day count.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐  │
//! │  │ loader  │───▶│  render  │───▶│ ticker  │───▶│   ui    │  │
//! │  │ (fetch) │    │ (cards)  │    │ (1s)    │    │ (paint) │  │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘  │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── HttpSource | FileSource                     │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`data`]**: Pure clock arithmetic - elapsed-time computation,
//!   counter formatting, status classification, and the record schema
//! - **[`source`]**: Data source abstraction ([`ClockSource`] trait) with
//!   HTTP and file implementations
//! - **[`render`]**: Builds retained clock cards from records and hands out
//!   [`CounterHandle`]s for in-place updates
//! - **[`ticker`]**: The cancellable once-per-second update cycle
//! - **[`loader`]**: Initialization glue - all-or-nothing fetch, render,
//!   ticker start
//! - **[`app`]**: Application state; **[`ui`]**: terminal rendering
//!
//! Data flows one way: loader → render (once per record) → ticker
//! (repeated until cancelled).
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Fetch the clock data files from a static file server
//! clockwatch --base-url http://localhost:8000
//!
//! # Render local JSON records instead
//! clockwatch --file clock1.json --file clock2.json
//! ```
//!
//! ### As a library
//!
//! ```no_run
//! use std::time::Duration;
//! use clockwatch::{ClockSource, FileSource, Loader, MountSlot};
//!
//! # tokio_test::block_on(async {
//! let loader = Loader::new(vec![
//!     Box::new(FileSource::new("clock1.json")) as Box<dyn ClockSource>,
//!     Box::new(FileSource::new("clock2.json")) as Box<dyn ClockSource>,
//! ]);
//!
//! let mut slots = vec![MountSlot::new(), MountSlot::new()];
//! let ticker = loader.initialize(&mut slots, Duration::from_millis(1000)).await?;
//! // Drive `ticker` from your event loop; drop or cancel it to stop.
//! # Ok::<_, clockwatch::SourceError>(())
//! # });
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod loader;
pub mod render;
pub mod source;
pub mod ticker;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use data::{
    compute_elapsed, format_elapsed, ElapsedDuration, IncidentRecord, LastIncident, SourceInfo,
    StatusLevel,
};
pub use loader::{Loader, CLOCK_PATHS};
pub use render::{render_clock, ClockCard, CounterHandle, MountSlot, SlotContent};
pub use source::{ClockSource, FileSource, HttpSource, SourceError};
pub use ticker::Ticker;
