//! Clock card rendering.
//!
//! Paints one mount slot: a bordered block carrying the clock's status
//! colour, with the description, the live counter and the incident
//! details inside.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::render::{ClockCard, SlotContent, PLACEHOLDER_TEXT};

/// Render one mount slot into the given area.
pub fn render_slot(frame: &mut Frame, app: &App, slot_index: usize, area: Rect) {
    let Some(slot) = app.slots.get(slot_index) else {
        return;
    };

    match slot.content() {
        SlotContent::Empty => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border));
            let paragraph = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "Loading...",
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ])
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(paragraph, area);
        }
        SlotContent::Placeholder => {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border));
            let paragraph = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    PLACEHOLDER_TEXT,
                    Style::default().add_modifier(Modifier::DIM),
                )),
            ])
            .alignment(Alignment::Center)
            .block(block);
            frame.render_widget(paragraph, area);
        }
        SlotContent::Card(card) => {
            let card = card.borrow();
            render_card(frame, app, &card, area);
        }
    }
}

fn render_card(frame: &mut Frame, app: &App, card: &ClockCard, area: Rect) {
    let status_style = app.theme.status_style(card.status);

    let block = Block::default()
        .title(format!(" {} ", card.title))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(status_style);

    let lines = card_lines(card, status_style);

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);

    frame.render_widget(paragraph, area);
}

/// Build the text content of a card, top to bottom.
pub fn card_lines(card: &ClockCard, status_style: Style) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::from(Span::styled(
            card.description.clone(),
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::from(""),
        Line::from(Span::styled(
            card.counter.text().to_string(),
            status_style.add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("● {}", card.status.label()),
            status_style,
        )),
        Line::from(""),
        Line::from(card.incident_title.clone()),
        Line::from(Span::styled(
            format!("Last incident: {}", card.incident_date),
            Style::default().add_modifier(Modifier::DIM),
        )),
        Line::from(Span::styled(
            format!("Source: {}", card.source_name),
            Style::default().add_modifier(Modifier::DIM),
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{IncidentRecord, LastIncident, SourceInfo};
    use crate::render::{render_clock, MountSlot};
    use chrono::{DateTime, Utc};

    fn card_for_sample() -> ClockCard {
        let record = IncidentRecord {
            clock_name: "Physical AI Safety Clock".to_string(),
            description: "Time since the last collision.".to_string(),
            last_incident: Some(LastIncident {
                date: "2025-12-10T00:00:00Z".to_string(),
                title: "AV collision".to_string(),
            }),
            data_source: SourceInfo {
                name: "AV Incident Tracker".to_string(),
            },
        };
        let now: DateTime<Utc> = DateTime::parse_from_rfc3339("2025-12-15T03:30:15Z")
            .unwrap()
            .with_timezone(&Utc);
        let mut slot = MountSlot::new();
        render_clock(Some(&record), &mut slot, now);
        match slot.content() {
            SlotContent::Card(card) => card.borrow().clone(),
            _ => unreachable!(),
        }
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_card_lines_display_contract() {
        let card = card_for_sample();
        let lines = card_lines(&card, Style::default());
        let texts: Vec<String> = lines.iter().map(line_text).collect();

        // Counter text matches the fixed-width pattern
        assert!(texts.contains(&"5d 03h 30m 15s".to_string()));
        // Incident title is present and non-empty
        assert!(texts.contains(&"AV collision".to_string()));
        // Source line starts with "Source:"
        assert!(texts.iter().any(|t| t.starts_with("Source:")));
        // Exactly one status tag
        assert_eq!(texts.iter().filter(|t| t.starts_with('●')).count(), 1);
    }
}
