//! The once-per-second counter update cycle.
//!
//! The [`Ticker`] is the cancellable timer handle returned to the
//! caller when the clocks start. It is driven cooperatively from the
//! event loop via [`Ticker::tick_if_due`], so each firing runs to
//! completion before the next poll - there are no overlapping ticks
//! and no background task to leak.
//!
//! Scheduling is best-effort: the next tick is measured from when the
//! previous one ran, so cumulative drift is possible. Acceptable for a
//! human-readable counter.

use std::time::{Duration, Instant};

use chrono::Utc;

use crate::render::CounterHandle;

/// Repeating updater for a set of live counters.
///
/// The handle list is written once at start and only read afterwards.
/// Dropping the ticker (or calling [`cancel`](Ticker::cancel)) stops
/// all future firings.
#[derive(Debug)]
pub struct Ticker {
    handles: Vec<CounterHandle>,
    interval: Duration,
    last_tick: Instant,
    cancelled: bool,
}

impl Ticker {
    /// Default firing interval.
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1_000);

    /// Register the given counter handles and start the tick schedule.
    pub fn start(handles: Vec<CounterHandle>, interval: Duration) -> Self {
        Self {
            handles,
            interval,
            last_tick: Instant::now(),
            cancelled: false,
        }
    }

    /// Number of registered counter handles.
    pub fn handle_count(&self) -> usize {
        self.handles.len()
    }

    /// Whether the ticker has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Stop all future firings. Idempotent; there is no restart.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Fire one tick if at least one interval has elapsed since the
    /// last firing. Returns whether a tick ran.
    pub fn tick_if_due(&mut self) -> bool {
        if self.cancelled || self.last_tick.elapsed() < self.interval {
            return false;
        }
        self.tick_now();
        true
    }

    /// Fire one tick immediately against the current wall clock.
    pub fn tick_now(&mut self) {
        self.tick_at(Utc::now());
    }

    /// Fire one tick against an explicit instant.
    ///
    /// Every registered counter re-reads its reference-date tag,
    /// recomputes elapsed time and rewrites its text and status tag.
    /// Counters whose card is gone are skipped; the rest still update.
    pub fn tick_at(&mut self, now: chrono::DateTime<Utc>) {
        if self.cancelled {
            return;
        }
        for handle in &self.handles {
            handle.refresh(now);
        }
        // Next tick is measured from here - no drift correction
        self.last_tick = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{IncidentRecord, LastIncident};
    use crate::render::{render_clock, MountSlot, SlotContent};
    use chrono::{DateTime, Utc};

    fn instant(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn record(date: &str) -> IncidentRecord {
        IncidentRecord {
            clock_name: "Test Clock".to_string(),
            last_incident: Some(LastIncident {
                date: date.to_string(),
                title: "incident".to_string(),
            }),
            ..Default::default()
        }
    }

    fn counter_text(slot: &MountSlot) -> String {
        match slot.content() {
            SlotContent::Card(card) => card.borrow().counter.text().to_string(),
            other => panic!("expected a card, got {:?}", other),
        }
    }

    #[test]
    fn test_tick_updates_all_counters() {
        let render_time = instant("2025-12-15T00:00:00Z");
        let mut slot_a = MountSlot::new();
        let mut slot_b = MountSlot::new();
        let handle_a =
            render_clock(Some(&record("2025-12-10T00:00:00Z")), &mut slot_a, render_time).unwrap();
        let handle_b =
            render_clock(Some(&record("2025-12-01T00:00:00Z")), &mut slot_b, render_time).unwrap();

        let before_a = counter_text(&slot_a);
        let before_b = counter_text(&slot_b);

        let mut ticker = Ticker::start(vec![handle_a, handle_b], Ticker::DEFAULT_INTERVAL);
        ticker.tick_at(instant("2025-12-15T00:00:02Z"));

        assert_ne!(counter_text(&slot_a), before_a);
        assert_ne!(counter_text(&slot_b), before_b);
        assert_eq!(counter_text(&slot_a), "5d 00h 00m 02s");
        assert_eq!(counter_text(&slot_b), "14d 00h 00m 02s");
    }

    #[test]
    fn test_tick_skips_unmounted_counter() {
        let render_time = instant("2025-12-15T00:00:00Z");
        let mut slot_a = MountSlot::new();
        let mut slot_b = MountSlot::new();
        let handle_a =
            render_clock(Some(&record("2025-12-10T00:00:00Z")), &mut slot_a, render_time).unwrap();
        let handle_b =
            render_clock(Some(&record("2025-12-01T00:00:00Z")), &mut slot_b, render_time).unwrap();

        // Unmount the first card; its handle must not abort the tick
        slot_a.clear();

        let mut ticker = Ticker::start(vec![handle_a, handle_b], Ticker::DEFAULT_INTERVAL);
        ticker.tick_at(instant("2025-12-15T00:00:05Z"));

        assert_eq!(counter_text(&slot_b), "14d 00h 00m 05s");
    }

    #[test]
    fn test_cancelled_ticker_stops_updating() {
        let render_time = instant("2025-12-15T00:00:00Z");
        let mut slot = MountSlot::new();
        let handle =
            render_clock(Some(&record("2025-12-10T00:00:00Z")), &mut slot, render_time).unwrap();
        let before = counter_text(&slot);

        let mut ticker = Ticker::start(vec![handle], Ticker::DEFAULT_INTERVAL);
        ticker.cancel();
        assert!(ticker.is_cancelled());
        assert!(!ticker.tick_if_due());
        ticker.tick_at(instant("2025-12-15T00:01:00Z"));

        assert_eq!(counter_text(&slot), before);
    }

    #[test]
    fn test_tick_if_due_respects_interval() {
        let mut ticker = Ticker::start(Vec::new(), Duration::from_secs(3600));
        // Freshly started: a full interval has not elapsed yet
        assert!(!ticker.tick_if_due());

        let mut eager = Ticker::start(Vec::new(), Duration::ZERO);
        assert!(eager.tick_if_due());
    }
}
