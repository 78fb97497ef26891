//! Terminal UI rendering using ratatui.
//!
//! ## Submodules
//!
//! - [`card`]: Paints one mount slot (clock card, placeholder or loading state)
//! - [`common`]: Shared components (header, status bar, error banner, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! The main loop calls into these modules each frame:
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────┬───────────────────┤
//! │ Slot 0           │ Slot 1            │
//! │ (card::render_slot, one per slot;    │
//! │  common::render_error on failure)    │
//! ├──────────────────┴───────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlay rendered on top: common::render_help
//! ```

pub mod card;
pub mod common;
pub mod theme;

pub use theme::Theme;
