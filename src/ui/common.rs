//! Common UI components shared across the display.
//!
//! This module contains the header bar, status bar, error banner and
//! help overlay.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{App, LOAD_ERROR_TEXT};
use crate::data::StatusLevel;
use crate::render::SlotContent;

/// Render the header bar with an overall status overview.
///
/// Displays: status indicator, clock counts by status level.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    // Count rendered clocks by status level
    let mut green = 0;
    let mut yellow = 0;
    let mut red = 0;
    let mut rendered = 0;

    for slot in &app.slots {
        if let SlotContent::Card(card) = slot.content() {
            rendered += 1;
            match card.borrow().status {
                StatusLevel::Green => green += 1,
                StatusLevel::Yellow => yellow += 1,
                StatusLevel::Red => red += 1,
            }
        }
    }

    if rendered == 0 {
        let line = Line::from(vec![
            Span::styled(
                " CLOCKWATCH ",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw(if app.load_error.is_some() {
                "| Load failed"
            } else {
                "| Loading..."
            }),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    }

    // Overall indicator takes the worst status present
    let worst = if red > 0 {
        StatusLevel::Red
    } else if yellow > 0 {
        StatusLevel::Yellow
    } else {
        StatusLevel::Green
    };

    let line = Line::from(vec![
        Span::styled(" ● ", app.theme.status_style(worst)),
        Span::styled("CLOCKWATCH ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(format!("{}", green), Style::default().fg(app.theme.green)),
        Span::raw(" green "),
        if yellow > 0 {
            Span::styled(format!("{}", yellow), Style::default().fg(app.theme.yellow))
        } else {
            Span::styled("0", Style::default().add_modifier(Modifier::DIM))
        },
        Span::raw(" yellow "),
        if red > 0 {
            Span::styled(
                format!("{}", red),
                Style::default().fg(app.theme.red).add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled("0", Style::default().add_modifier(Modifier::DIM))
        },
        Span::raw(" red │ "),
        Span::styled(
            format!("{}", rendered),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" clocks"),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom.
///
/// Shows: data sources, available controls. Also displays temporary
/// status messages and errors.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    // Check for temporary status message first
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let status = if let Some(ref err) = app.load_error {
        format!(" Error: {} | q:quit r:retry", err)
    } else {
        format!(
            " {} | r:reload e:export ?:help q:quit",
            app.source_descriptions.join(", ")
        )
    };

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));

    frame.render_widget(paragraph, area);
}

/// Render the error banner shown when loading fails.
///
/// Replaces the clock area entirely - there is no partial rendering
/// after a failed initialization.
pub fn render_error(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.red));

    let paragraph = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            LOAD_ERROR_TEXT,
            Style::default().fg(app.theme.red).add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .block(block);

    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the current view.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        Line::from("  r         Reload clock data"),
        Line::from("  e         Export to JSON"),
        Line::from("  ?         Toggle this help"),
        Line::from("  q / Esc   Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 36u16.min(area.width.saturating_sub(4));
    let help_height = 10u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
