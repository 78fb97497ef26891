//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::StatusLevel;

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for green (30+ incident-free days) status.
    pub green: Color,
    /// Color for yellow (7-29 incident-free days) status.
    pub yellow: Color,
    /// Color for red (fresh incident) status.
    pub red: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for header text.
    pub header: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            green: Color::Green,
            yellow: Color::Yellow,
            red: Color::Red,
            border: Color::Gray,
            header: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            green: Color::Green,
            yellow: Color::Yellow,
            red: Color::Red,
            border: Color::DarkGray,
            header: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Get style for a status level
    pub fn status_style(&self, status: StatusLevel) -> Style {
        match status {
            StatusLevel::Green => Style::default().fg(self.green),
            StatusLevel::Yellow => Style::default().fg(self.yellow),
            StatusLevel::Red => Style::default().fg(self.red).add_modifier(Modifier::BOLD),
        }
    }
}
