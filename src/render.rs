//! Clock rendering - builds retained clock cards from records.
//!
//! A [`MountSlot`] is one fixed display position. Rendering a record
//! into a slot replaces whatever the slot held before and, for a valid
//! record, hands back a [`CounterHandle`] that the ticker uses to
//! update the counter text and status tag in place. The slot keeps
//! ownership of the card; the handle only holds a weak reference, so a
//! cleared or re-rendered slot invalidates outstanding handles instead
//! of keeping stale cards alive.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use chrono::{DateTime, Utc};

use crate::data::{compute_elapsed, format_elapsed, parse_instant, IncidentRecord, StatusLevel};

/// Placeholder text shown when a record has no usable incident data.
pub const PLACEHOLDER_TEXT: &str = "No incident data available.";

/// The live counter node inside a clock card.
///
/// Carries the displayed text plus the original incident date string,
/// so each tick re-derives the reference instant from the tag rather
/// than from captured state.
#[derive(Debug, Clone)]
pub struct CounterNode {
    text: String,
    date_tag: String,
}

impl CounterNode {
    /// The currently displayed counter text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The reference-date tag bound at render time. Immutable for the
    /// node's lifetime.
    pub fn date_tag(&self) -> &str {
        &self.date_tag
    }
}

/// A rendered clock display block.
#[derive(Debug, Clone)]
pub struct ClockCard {
    /// Status tag on the enclosing block. A single enum field, so
    /// exactly one of the three tags is present at all times.
    pub status: StatusLevel,
    pub title: String,
    pub description: String,
    pub counter: CounterNode,
    pub incident_title: String,
    /// Human-readable incident date (e.g. "Dec 10, 2025").
    pub incident_date: String,
    pub source_name: String,
}

/// Contents of a mount slot.
#[derive(Debug, Clone, Default)]
pub enum SlotContent {
    /// Nothing rendered yet.
    #[default]
    Empty,
    /// Record had no usable incident data.
    Placeholder,
    /// A live clock card.
    Card(Rc<RefCell<ClockCard>>),
}

/// One fixed display position for a clock.
#[derive(Debug, Clone, Default)]
pub struct MountSlot {
    content: SlotContent,
}

impl MountSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &SlotContent {
        &self.content
    }

    /// Drop whatever the slot holds, invalidating any counter handle
    /// that pointed into it.
    pub fn clear(&mut self) {
        self.content = SlotContent::Empty;
    }
}

/// Handle to a live counter, created by [`render_clock`] and owned by
/// the ticker once registered.
///
/// Holds a weak reference to the enclosing card: updating the counter
/// text and walking up to the card's status tag both go through the
/// same upgrade, and a dropped card simply makes the handle inert.
#[derive(Debug, Clone)]
pub struct CounterHandle {
    card: Weak<RefCell<ClockCard>>,
}

impl CounterHandle {
    /// Whether the card this handle points at is still mounted.
    pub fn is_attached(&self) -> bool {
        self.card.strong_count() > 0
    }

    /// Recompute the counter from its stored reference-date tag and
    /// overwrite the displayed text and the enclosing card's status.
    ///
    /// Returns `false` (and changes nothing) when the card has been
    /// unmounted; the caller skips it and moves on.
    pub fn refresh(&self, now: DateTime<Utc>) -> bool {
        let Some(card) = self.card.upgrade() else {
            return false;
        };
        let mut card = card.borrow_mut();

        // The tag was validated at render time; a tag that no longer
        // parses means the card is unusable, treat it like a missing one.
        let Some(reference) = parse_instant(&card.counter.date_tag) else {
            return false;
        };

        let elapsed = compute_elapsed(reference, now);
        card.counter.text = format_elapsed(&elapsed);
        card.status = StatusLevel::from_days(elapsed.days);
        true
    }
}

/// Render one record into a mount slot.
///
/// Replaces the slot's prior contents. A missing record, a record
/// without `last_incident`, or an unparseable incident date degrades
/// to a static placeholder and returns `None` - there is nothing to
/// tick. Otherwise the slot receives a fresh card reflecting the
/// record at `now`, and the returned handle can drive later ticks.
///
/// Re-rendering the same record at the same instant produces the same
/// card.
pub fn render_clock(
    record: Option<&IncidentRecord>,
    slot: &mut MountSlot,
    now: DateTime<Utc>,
) -> Option<CounterHandle> {
    let Some(record) = record else {
        slot.content = SlotContent::Placeholder;
        return None;
    };
    let Some(incident) = record.last_incident.as_ref() else {
        slot.content = SlotContent::Placeholder;
        return None;
    };
    let Some(reference) = incident.instant() else {
        slot.content = SlotContent::Placeholder;
        return None;
    };

    let elapsed = compute_elapsed(reference, now);

    let card = Rc::new(RefCell::new(ClockCard {
        status: StatusLevel::from_days(elapsed.days),
        title: record.clock_name.clone(),
        description: record.description.clone(),
        counter: CounterNode {
            text: format_elapsed(&elapsed),
            date_tag: incident.date.clone(),
        },
        incident_title: incident.title.clone(),
        incident_date: reference.format("%b %d, %Y").to_string(),
        source_name: record.data_source.name.clone(),
    }));

    let handle = CounterHandle {
        card: Rc::downgrade(&card),
    };
    slot.content = SlotContent::Card(card);
    Some(handle)
}
