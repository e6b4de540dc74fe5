//! Portfolio screen: filterable project gallery with a lightbox
//!
//! Projects render as cards in a two-column grid or full-width list. The
//! scroll axis is measured in card rows; selection always stays in view.
//! Enter opens a lightbox with the full project details and the video URL
//! for an external player.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Gauge, Paragraph},
};

use crate::app::App;
use crate::models::{Project, ProjectFilter, ViewMode};
use crate::theme::{
    BG_SECONDARY, BG_TERTIARY, BORDER_SUBTLE, ORANGE_DIM, ORANGE_PRIMARY, ROUNDED_BORDERS,
    TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::helpers::wrap_text;
use crate::utils::gauge_percent;

/// Card heights in terminal rows, borders included
const GRID_ROW_HEIGHT: u16 = 7;
const LIST_ROW_HEIGHT: u16 = 10;

pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // header with filter bar
            Constraint::Min(3),    // project cards
            Constraint::Length(1), // scroll gauge
        ])
        .split(area);

    let projects: Vec<Project> = app
        .filter
        .apply(&app.catalog.portfolio.projects)
        .into_iter()
        .cloned()
        .collect();
    if !projects.is_empty() && app.selected_project >= projects.len() {
        app.selected_project = projects.len() - 1;
    }

    let (row_height, per_row) = match app.view_mode {
        ViewMode::Grid => (GRID_ROW_HEIGHT, 2usize),
        ViewMode::List => (LIST_ROW_HEIGHT, 1usize),
    };

    let content = chunks[1];
    let visible_rows = (content.height / row_height).max(1) as f64;
    let total_rows = projects.len().div_ceil(per_row) as f64;

    // Keep the selected card inside the window before recording layout.
    if !projects.is_empty() {
        let selected_row = (app.selected_project / per_row) as f64;
        if selected_row < app.scroll_offset {
            app.scroll_offset = selected_row;
        } else if selected_row >= app.scroll_offset + visible_rows {
            app.scroll_offset = selected_row - visible_rows + 1.0;
        }
    }
    app.record_layout(visible_rows, total_rows, None);

    render_header(frame, chunks[0], app, projects.len());
    render_cards(frame, content, app, &projects, row_height, per_row);

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(ORANGE_DIM).bg(BG_SECONDARY))
        .percent(gauge_percent(app.stage.content_progress()))
        .label("");
    frame.render_widget(gauge, chunks[2]);

    if app.lightbox_open {
        render_lightbox(frame, area, app, &projects);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App, visible_count: usize) {
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
            Constraint::Length(1),
        ])
        .split(inner);

    let title = Paragraph::new(Line::from(Span::styled(
        "MY PORTFOLIO",
        Style::default()
            .fg(TEXT_PRIMARY)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, rows[0]);

    let subtitle = Paragraph::new(Line::from(Span::styled(
        "Cinematic storytelling and professional video production work",
        Style::default().fg(TEXT_MUTED),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(subtitle, rows[1]);

    let options = ProjectFilter::options(&app.catalog.portfolio.projects);
    let mut spans = Vec::new();
    for option in &options {
        let style = if option == app.filter.active() {
            Style::default()
                .fg(TEXT_PRIMARY)
                .bg(ORANGE_DIM)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_SECONDARY)
        };
        spans.push(Span::styled(format!(" {} ", option), style));
        spans.push(Span::raw(" "));
    }
    let filter_bar = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(filter_bar, rows[2]);

    let total = app.catalog.portfolio.projects.len();
    let status = Paragraph::new(Line::from(Span::styled(
        format!(
            "{} of {} projects · {} view",
            visible_count,
            total,
            app.view_mode.label()
        ),
        Style::default().fg(TEXT_MUTED),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(status, rows[3]);
}

fn render_cards(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    projects: &[Project],
    row_height: u16,
    per_row: usize,
) {
    if projects.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            format!("No projects tagged \"{}\"", app.filter.active()),
            Style::default().fg(TEXT_MUTED),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let start_row = app.scroll_offset.max(0.0) as usize;
    let visible_rows = (area.height / row_height).max(1) as usize;
    let card_width = area.width / per_row as u16;

    for slot in 0..visible_rows {
        let row = start_row + slot;
        for col in 0..per_row {
            let index = row * per_row + col;
            if index >= projects.len() {
                return;
            }
            let card_area = Rect::new(
                area.x + col as u16 * card_width,
                area.y + slot as u16 * row_height,
                card_width,
                row_height,
            );
            render_project_card(
                frame,
                card_area,
                &projects[index],
                index == app.selected_project,
                app.view_mode,
            );
        }
    }
}

fn render_project_card(
    frame: &mut Frame,
    area: Rect,
    project: &Project,
    selected: bool,
    view_mode: ViewMode,
) {
    let border_color = if selected { ORANGE_PRIMARY } else { BORDER_SUBTLE };
    let bg_color = if selected { BG_TERTIARY } else { BG_SECONDARY };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(bg_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let stats = format!(
        "▶ {} · {} · {} views",
        project.duration.as_deref().unwrap_or("—"),
        project.year.as_deref().unwrap_or("—"),
        project.views.as_deref().unwrap_or("—"),
    );

    let mut lines = vec![
        Line::from(Span::styled(
            project.title.clone(),
            Style::default()
                .fg(TEXT_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            project.client.clone(),
            Style::default().fg(ORANGE_PRIMARY),
        )),
        Line::from(Span::styled(
            project.tags.join(" · "),
            Style::default().fg(TEXT_MUTED),
        )),
    ];

    if view_mode == ViewMode::List {
        lines.push(Line::from(""));
        let width = inner.width.saturating_sub(1) as usize;
        for text in wrap_text(&project.description, width.max(1)).into_iter().take(2) {
            lines.push(Line::from(Span::styled(
                text,
                Style::default().fg(TEXT_SECONDARY),
            )));
        }
    }

    lines.push(Line::from(Span::styled(
        stats,
        Style::default().fg(TEXT_MUTED),
    )));
    if selected {
        lines.push(Line::from(Span::styled(
            "Enter: watch",
            Style::default().fg(ORANGE_PRIMARY),
        )));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

/// Modal overlay with the full project details and the delegated video URL
fn render_lightbox(frame: &mut Frame, area: Rect, app: &App, projects: &[Project]) {
    let Some(project) = projects.get(app.selected_project) else {
        return;
    };

    let width = (area.width * 4 / 5).max(area.width.min(30));
    let height = (area.height * 4 / 5).max(area.height.min(12));
    let modal = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    frame.render_widget(Clear, modal);
    let block = Block::default()
        .title(format!(" {} ", project.title))
        .borders(Borders::ALL)
        .border_set(ROUNDED_BORDERS)
        .border_style(Style::default().fg(ORANGE_PRIMARY))
        .style(Style::default().bg(BG_SECONDARY));
    let inner = block.inner(modal);
    frame.render_widget(block, modal);

    let text_width = inner.width.saturating_sub(2) as usize;
    let mut lines = vec![
        Line::from(Span::styled(
            project.client.clone(),
            Style::default()
                .fg(ORANGE_PRIMARY)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for text in wrap_text(&project.description, text_width.max(1)) {
        lines.push(Line::from(Span::styled(
            text,
            Style::default().fg(TEXT_SECONDARY),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        project.tags.join(" · "),
        Style::default().fg(TEXT_MUTED),
    )));
    lines.push(Line::from(""));
    for (label, value) in [
        ("Duration", project.duration.as_deref().unwrap_or("—")),
        ("Year", project.year.as_deref().unwrap_or("—")),
        ("Views", project.views.as_deref().unwrap_or("—")),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", label), Style::default().fg(TEXT_MUTED)),
            Span::styled(value.to_string(), Style::default().fg(TEXT_PRIMARY)),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("▶ Watch: {}", project.video_url),
        Style::default().fg(ORANGE_PRIMARY),
    )));

    let paragraph = Paragraph::new(lines);
    let padded = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );
    frame.render_widget(paragraph, padded);
}
