//! Achievement stat card rendering

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::models::Achievement;
use crate::theme::{BG_SECONDARY, BORDER_SUBTLE, ORANGE_PRIMARY, ROUNDED_BORDERS, TEXT_MUTED};
use crate::ui::helpers::icon_glyph;

/// Render the achievements row as evenly split stat cards
pub fn render_achievement_cards(area: Rect, achievements: &[Achievement], frame: &mut Frame) {
    if achievements.is_empty() {
        return;
    }

    let constraints: Vec<Constraint> = achievements
        .iter()
        .map(|_| Constraint::Ratio(1, achievements.len() as u32))
        .collect();
    let card_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (achievement, card_area) in achievements.iter().zip(card_layout.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_set(ROUNDED_BORDERS)
            .border_style(Style::default().fg(BORDER_SUBTLE))
            .style(Style::default().bg(BG_SECONDARY));

        let content = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", icon_glyph(&achievement.icon)),
                    Style::default().fg(ORANGE_PRIMARY),
                ),
                Span::styled(
                    achievement.number.clone(),
                    Style::default()
                        .fg(ORANGE_PRIMARY)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![Span::styled(
                achievement.label.to_uppercase(),
                Style::default().fg(TEXT_MUTED),
            )]),
        ];

        let paragraph = Paragraph::new(content)
            .block(block)
            .alignment(Alignment::Center);

        frame.render_widget(paragraph, *card_area);
    }
}
