//! Data models and pure clock arithmetic.
//!
//! ## Submodules
//!
//! - [`elapsed`]: Elapsed-time computation and fixed-width counter formatting
//! - [`record`]: The clock record schema served as static JSON assets
//! - [`status`]: Three-level freshness classification from the day count
//!
//! ## Data Flow
//!
//! ```text
//! IncidentRecord (raw JSON)
//!        │
//!        ▼
//! render::render_clock()
//!        │
//!        ├──▶ compute_elapsed() / format_elapsed()
//!        │
//!        └──▶ StatusLevel::from_days()
//! ```

pub mod elapsed;
pub mod record;
pub mod status;

pub use elapsed::{compute_elapsed, format_elapsed, ElapsedDuration};
pub use record::{parse_instant, IncidentRecord, LastIncident, SourceInfo};
pub use status::StatusLevel;
