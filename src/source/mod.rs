//! Data source abstraction for fetching clock records.
//!
//! This module provides a trait-based abstraction for fetching the
//! clock JSON documents from various backends - plain HTTP endpoints
//! in production, local files for development and tests.

mod error;
mod file;
mod http;

pub use error::SourceError;
pub use file::FileSource;
pub use http::{join_url, HttpSource};

use std::fmt::Debug;

use async_trait::async_trait;

use crate::data::IncidentRecord;

/// Trait for fetching a single clock record.
///
/// Each display slot is backed by one source; the loader fetches them
/// in slot order. Fetching happens once per initialization - sources
/// are not polled afterwards.
///
/// # Example
///
/// ```
/// use clockwatch::{ClockSource, FileSource};
///
/// # tokio_test::block_on(async {
/// let source = FileSource::new("data/clock1_av_collisions.json");
/// println!("loading from {}", source.description());
/// let _ = source.fetch().await;
/// # });
/// ```
#[async_trait]
pub trait ClockSource: Send + Sync + Debug {
    /// Fetch the clock record.
    ///
    /// Any failure is terminal for the whole initialization; there are
    /// no retries at this layer.
    async fn fetch(&self) -> Result<IncidentRecord, SourceError>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;
}
