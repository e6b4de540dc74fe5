//! About screen: the journey timeline
//!
//! Styled after a video editing suite: an era list on the left, a preview
//! of the active era on the right, a scroll-through gauge in the header,
//! and a scrubber footer. Scrolling scrubs through the eras by the
//! viewport-midpoint rule; n/p select an era directly.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph},
};

use crate::app::App;
use crate::models::{Catalog, TimelineEntry};
use crate::theme::{
    get_pulse_color, BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, GREEN_SUCCESS, ORANGE_DIM,
    ORANGE_PRIMARY, ROUNDED_BORDERS, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::helpers::{icon_glyph, wrap_text};
use crate::utils::gauge_percent;

/// Rows of chrome around each era's wrapped description in the virtual
/// scroll space
const SECTION_PADDING: usize = 8;

/// Height of one era card in the sidebar, borders included
const ERA_CARD_HEIGHT: u16 = 4;

/// Virtual `[top, bottom)` offsets of each era section, derived from the
/// preview width the descriptions wrap at
pub fn section_bounds(catalog: &Catalog, width: usize) -> Vec<(f64, f64)> {
    let mut bounds = Vec::with_capacity(catalog.timeline.len());
    let mut top = 0.0;
    for entry in &catalog.timeline {
        let description_lines = wrap_text(&entry.description, width.max(1)).len();
        let extent = (description_lines + SECTION_PADDING) as f64;
        bounds.push((top, top + extent));
        top += extent;
    }
    bounds
}

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header with scroll gauge
            Constraint::Min(3),    // Era list + preview
            Constraint::Length(3), // Scrubber
        ])
        .split(area);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(38), // Era list
            Constraint::Percentage(62), // Preview
        ])
        .split(chunks[1]);

    let preview_width = panels[1].width.saturating_sub(4) as usize;
    let bounds = section_bounds(&app.catalog, preview_width);
    let document_height = bounds.last().map(|&(_, bottom)| bottom).unwrap_or(0.0);
    app.record_layout(chunks[1].height as f64, document_height, Some(bounds));

    render_header(frame, chunks[0], app);
    render_era_list(frame, panels[0], app);
    render_preview(frame, panels[1], app);
    render_scrubber(frame, chunks[2], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let title = Paragraph::new(Line::from(vec![Span::styled(
        "MY JOURNEY",
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )]))
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    let subtitle = Paragraph::new(Line::from(Span::styled(
        "From camera enthusiast to professional videographer",
        Style::default().fg(TEXT_MUTED),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, rows[1]);

    let percent = gauge_percent(app.stage.content_progress());
    let gauge_color = if percent >= 100 {
        GREEN_SUCCESS
    } else {
        ORANGE_PRIMARY
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(gauge_color).bg(BG_TERTIARY))
        .percent(percent)
        .label("");
    frame.render_widget(gauge, rows[2]);
}

fn render_era_list(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Timeline ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entries = &app.catalog.timeline;
    if entries.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No timeline entries",
            Style::default().fg(TEXT_MUTED),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let active = app.stage.active_index().min(entries.len() - 1);
    let visible = (inner.height / ERA_CARD_HEIGHT).max(1) as usize;
    // Keep the active card roughly centered in the sidebar window.
    let first = active
        .saturating_sub(visible / 2)
        .min(entries.len().saturating_sub(visible));

    for (slot, index) in (first..entries.len()).take(visible).enumerate() {
        let card_area = Rect::new(
            inner.x,
            inner.y + (slot as u16) * ERA_CARD_HEIGHT,
            inner.width,
            ERA_CARD_HEIGHT.min(inner.height - (slot as u16) * ERA_CARD_HEIGHT),
        );
        render_era_card(
            frame,
            card_area,
            &entries[index],
            index == active,
            app.animation_tick,
        );
    }
}

fn render_era_card(frame: &mut Frame, area: Rect, entry: &TimelineEntry, active: bool, tick: u64) {
    let (indicator, indicator_color, text_color, bg_color) = if active {
        let pulse = get_pulse_color(tick, ORANGE_PRIMARY, ORANGE_DIM);
        ("●", pulse, TEXT_PRIMARY, BG_TERTIARY)
    } else {
        ("○", TEXT_MUTED, TEXT_SECONDARY, BG_SECONDARY)
    };

    let border_color = if active { ORANGE_PRIMARY } else { BORDER_SUBTLE };
    let card_block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg_color));

    let inner_width = area.width.saturating_sub(4) as usize;
    let title_width = inner_width.saturating_sub(4);
    let title_chars = entry.title.chars().count();
    let truncated_title = if title_chars > title_width {
        let take_chars = title_width.saturating_sub(3);
        let truncated: String = entry.title.chars().take(take_chars).collect();
        format!("{}...", truncated)
    } else {
        entry.title.clone()
    };

    let content = vec![
        Line::from(vec![
            Span::styled(format!("{} ", indicator), Style::default().fg(indicator_color)),
            Span::styled(
                format!("{} ", icon_glyph(&entry.icon)),
                Style::default().fg(indicator_color),
            ),
            Span::styled(
                truncated_title,
                Style::default().fg(text_color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![Span::styled(
            format!("    {}", entry.year),
            Style::default().fg(TEXT_MUTED),
        )]),
    ];

    let paragraph = Paragraph::new(content).block(card_block);
    frame.render_widget(paragraph, area);
}

fn render_preview(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entries = &app.catalog.timeline;
    if entries.is_empty() {
        return;
    }
    let entry = &entries[app.stage.active_index().min(entries.len() - 1)];

    let width = inner.width.saturating_sub(2) as usize;
    let mut lines = vec![
        Line::from(Span::styled(
            icon_glyph(&entry.icon).to_string(),
            Style::default().fg(ORANGE_PRIMARY),
        )),
        Line::from(Span::styled(
            entry.title.clone(),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            entry.year.clone(),
            Style::default()
                .fg(ORANGE_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for text in wrap_text(&entry.description, width.max(1)) {
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(TEXT_SECONDARY),
        )));
    }
    if let Some(details) = &entry.details {
        lines.push(Line::from(""));
        for text in wrap_text(details, width.max(1)) {
            lines.push(Line::from(Span::styled(text, Style::default().fg(TEXT_MUTED))));
        }
    }

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, inner);
}

fn render_scrubber(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let entries = &app.catalog.timeline;
    if entries.is_empty() {
        return;
    }
    let active = app.stage.active_index().min(entries.len() - 1);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(10), // position counter
            Constraint::Min(10),    // scrubber gauge
            Constraint::Length(14), // active year
        ])
        .split(inner);

    let position = Paragraph::new(Line::from(Span::styled(
        format!(" {:02} / {:02}", active + 1, entries.len()),
        Style::default().fg(TEXT_MUTED),
    )));
    frame.render_widget(position, columns[0]);

    let ratio = (active + 1) as f64 / entries.len() as f64 * 100.0;
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(ORANGE_PRIMARY).bg(BG_TERTIARY))
        .percent(gauge_percent(ratio))
        .label("");
    frame.render_widget(gauge, columns[1]);

    let year = Paragraph::new(Line::from(Span::styled(
        entries[active].year.clone(),
        Style::default().fg(TEXT_MUTED),
    )))
    .alignment(Alignment::Right);
    frame.render_widget(year, columns[2]);
}
