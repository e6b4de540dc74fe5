//! UI module for shortmedia-tui
//!
//! This module contains the rendering functions for the TUI: the
//! navigation and keybinding chrome plus the three showcase screens.

mod helpers;
mod landing;
mod portfolio;
mod stats;
mod timeline;

use ratatui::{
    prelude::*,
    widgets::{Block, Paragraph},
};

use crate::app::App;
use crate::models::Route;
use crate::theme::{
    BG_PRIMARY, BG_SECONDARY, ORANGE_DIM, ORANGE_PRIMARY, TEXT_MUTED, TEXT_PRIMARY,
};

/// Render one frame: navigation bar, active screen, keybinding bar
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(BG_PRIMARY)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Navigation bar
            Constraint::Min(3),    // Active screen
            Constraint::Length(1), // Keybinding bar
        ])
        .split(area);

    render_nav(frame, chunks[0], app);
    match app.route {
        Route::Landing => landing::render(frame, chunks[1], app),
        Route::About => timeline::render(frame, chunks[1], app),
        Route::Portfolio => portfolio::render(frame, chunks[1], app),
    }
    render_key_bar(frame, chunks[2], app);
}

fn render_nav(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled(
            format!(" {} ", app.catalog.brand.name.to_uppercase()),
            Style::default()
                .fg(ORANGE_PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    for route in Route::ALL {
        let style = if route == app.route {
            Style::default()
                .fg(TEXT_PRIMARY)
                .bg(ORANGE_DIM)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_MUTED)
        };
        spans.push(Span::styled(format!(" {} ", route.label()), style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::styled(
        app.route.path().to_string(),
        Style::default().fg(TEXT_MUTED),
    ));

    let nav = Paragraph::new(Line::from(spans)).style(Style::default().bg(BG_SECONDARY));
    frame.render_widget(nav, area);
}

fn key_hints(app: &App) -> &'static str {
    if app.lightbox_open {
        return " Esc: Close lightbox ";
    }
    match app.route {
        Route::Landing if !app.stage.unlocked() => {
            " q: Quit | Tab/1-3: Navigate | j/k/Space: Open aperture "
        }
        Route::Landing => " q: Quit | Tab/1-3: Navigate | j/k: Scroll | g/G: Top/Bottom ",
        Route::About => " q: Quit | Tab/1-3: Navigate | j/k: Scrub | n/p: Select era ",
        Route::Portfolio => " q: Quit | j/k: Select | Enter: Watch | f: Filter | v: Grid/List ",
    }
}

fn render_key_bar(frame: &mut Frame, area: Rect, app: &App) {
    let keybindings = Paragraph::new(key_hints(app))
        .style(Style::default().fg(BG_PRIMARY).bg(ORANGE_PRIMARY));
    frame.render_widget(keybindings, area);
}
