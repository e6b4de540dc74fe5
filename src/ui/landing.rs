//! Landing screen: gated hero, services, and achievements
//!
//! While the aperture gate is closed the screen shows only the hero and a
//! reveal gauge driven by scroll input. Once the gate opens, the about,
//! services, testimonial, and call-to-action content scrolls above a fixed
//! achievements row.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Catalog;
use crate::theme::{
    get_pulse_color, BG_SECONDARY, BORDER_SUBTLE, ORANGE_PRIMARY, TEXT_MUTED, TEXT_PRIMARY,
    TEXT_SECONDARY,
};
use crate::ui::helpers::{icon_glyph, wrap_text};
use crate::ui::stats::render_achievement_cards;
use crate::utils::gauge_percent;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    if app.stage.unlocked() {
        render_revealed(frame, area, app);
    } else {
        render_gate(frame, area, app);
    }
}

/// Hero with the aperture gauge. Free scrolling stays suppressed; the only
/// reachable offsets drive the reveal progress.
fn render_gate(frame: &mut Frame, area: Rect, app: &mut App) {
    let viewport = area.height as f64;
    let reveal = app.stage.gated_scroll_limit(viewport).unwrap_or(0.0);
    app.record_layout(viewport, viewport + reveal, None);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30), // top spacing
            Constraint::Length(1),      // brand name
            Constraint::Length(2),      // tagline
            Constraint::Length(1),
            Constraint::Length(1), // aperture gauge
            Constraint::Length(1),
            Constraint::Length(1), // scroll hint
            Constraint::Min(0),
        ])
        .split(area);

    let brand = Paragraph::new(Line::from(Span::styled(
        app.catalog.brand.name.to_uppercase(),
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(brand, chunks[1]);

    let tagline = Paragraph::new(Line::from(Span::styled(
        app.catalog.brand.tagline.clone(),
        Style::default().fg(TEXT_SECONDARY),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(tagline, chunks[2]);

    let gauge_columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(chunks[4]);

    let percent = gauge_percent(app.stage.progress() * 100.0);
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(ORANGE_PRIMARY).bg(BG_SECONDARY))
        .percent(percent)
        .label(format!("APERTURE {}%", percent));
    frame.render_widget(gauge, gauge_columns[1]);

    let hint = Paragraph::new(Line::from(Span::styled(
        "▼ scroll to open ▼",
        Style::default().fg(get_pulse_color(
            app.animation_tick,
            TEXT_SECONDARY,
            TEXT_MUTED,
        )),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[6]);
}

fn render_revealed(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // brand strip
            Constraint::Min(3),    // scrolled content
            Constraint::Length(4), // achievements row
        ])
        .split(area);

    let content_area = chunks[1];
    let width = content_area.width.saturating_sub(4) as usize;
    let lines = content_lines(&app.catalog, width.max(1));
    let document = app.stage.unlock_offset() + lines.len() as f64;
    app.record_layout(content_area.height as f64, document, None);

    render_brand_strip(frame, chunks[0], app);

    let content_row = (app.scroll_offset - app.stage.unlock_offset()).max(0.0) as u16;
    let content = Paragraph::new(lines).scroll((content_row, 0));
    let padded = Rect::new(
        content_area.x + 2,
        content_area.y,
        content_area.width.saturating_sub(4),
        content_area.height,
    );
    frame.render_widget(content, padded);

    render_achievement_cards(chunks[2], &app.catalog.achievements, frame);
}

fn render_brand_strip(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(BORDER_SUBTLE))
        .style(Style::default().bg(BG_SECONDARY));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(Span::styled(
            app.catalog.brand.name.to_uppercase(),
            Style::default()
                .fg(ORANGE_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.catalog.brand.tagline.clone(),
            Style::default().fg(TEXT_MUTED),
        )),
    ];
    let strip = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(strip, inner);
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(ORANGE_PRIMARY)
            .add_modifier(Modifier::BOLD),
    ))
}

/// The revealed content as plain lines, pre-wrapped at the given width so
/// the document height is known to the scroll model
pub fn content_lines(catalog: &Catalog, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(heading("ABOUT ME"));
    lines.push(Line::from(""));
    for text in wrap_text(&catalog.about.description, width) {
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(TEXT_SECONDARY),
        )));
    }
    lines.push(Line::from(""));

    lines.push(heading("SERVICES"));
    lines.push(Line::from(""));
    for service in &catalog.services {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", icon_glyph(&service.icon)),
                Style::default().fg(ORANGE_PRIMARY),
            ),
            Span::styled(
                service.title.clone(),
                Style::default()
                    .fg(TEXT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        for text in wrap_text(&service.description, width) {
            lines.push(Line::from(Span::styled(
                format!("  {}", text),
                Style::default().fg(TEXT_MUTED),
            )));
        }
        lines.push(Line::from(""));
    }

    lines.push(heading("WHAT CLIENTS SAY"));
    lines.push(Line::from(""));
    for testimonial in &catalog.testimonials {
        for text in wrap_text(&format!("\u{201c}{}\u{201d}", testimonial.quote), width) {
            lines.push(Line::from(Span::styled(
                text,
                Style::default()
                    .fg(TEXT_SECONDARY)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        lines.push(Line::from(vec![
            Span::styled(
                crate::utils::star_rating(testimonial.rating),
                Style::default().fg(crate::theme::AMBER_STAR),
            ),
            Span::styled(
                format!(
                    "  {} · {} · {}",
                    testimonial.name, testimonial.position, testimonial.company
                ),
                Style::default().fg(TEXT_MUTED),
            ),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(heading("READY TO CREATE SOMETHING AMAZING?"));
    lines.push(Line::from(""));
    for text in wrap_text(
        "Let's bring your vision to life with cinematic storytelling and professional video production.",
        width,
    ) {
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(TEXT_SECONDARY),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "▶ GET IN TOUCH".to_string(),
        Style::default()
            .fg(ORANGE_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )));

    lines
}
