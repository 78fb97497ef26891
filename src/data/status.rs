//! Status classification derived from the elapsed day count.

/// Freshness status for a clock.
///
/// A pure function of how many whole days have passed since the last
/// incident; recomputed on every tick, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StatusLevel {
    /// 30 or more incident-free days.
    Green,
    /// 7 to 29 incident-free days.
    Yellow,
    /// Fewer than 7 incident-free days.
    Red,
}

impl StatusLevel {
    /// Classify a day count. Boundary values (exactly 30, exactly 7)
    /// belong to the higher band.
    pub fn from_days(days: u64) -> Self {
        if days >= 30 {
            StatusLevel::Green
        } else if days >= 7 {
            StatusLevel::Yellow
        } else {
            StatusLevel::Red
        }
    }

    /// Returns the lowercase tag for display and export.
    pub fn label(&self) -> &'static str {
        match self {
            StatusLevel::Green => "green",
            StatusLevel::Yellow => "yellow",
            StatusLevel::Red => "red",
        }
    }
}
