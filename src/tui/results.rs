//! Results screen rendering
//!
//! One card per assignment in roster order. A hidden card shows only the
//! player; a revealed card shows the role and what it does.

use crate::app::App;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::setup::role_color;

const CARD_WIDTH: u16 = 34;
const CARD_HEIGHT: u16 = 6;

/// Render the dealt cards and the role summary
pub fn render_results(frame: &mut Frame, area: Rect, app: &App, selected: usize) {
    let Some(round) = app.round() else {
        let empty = Paragraph::new("No roles dealt yet")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Reveal progress
            Constraint::Min(CARD_HEIGHT), // Card grid
            Constraint::Length(3), // Role summary
        ])
        .split(area);

    let revealed = round.revealed();
    let progress_color = if revealed.all_revealed() {
        Color::Green
    } else {
        Color::Cyan
    };
    let progress = Paragraph::new(format!(
        "Revealed {}/{}",
        revealed.revealed_count(),
        round.len()
    ))
    .style(Style::default().fg(progress_color))
    .alignment(Alignment::Center);
    frame.render_widget(progress, layout[0]);

    let grid = layout[1];
    let columns = (grid.width / CARD_WIDTH).max(1) as usize;
    let rows_visible = (grid.height / CARD_HEIGHT).max(1) as usize;

    // Scroll by whole rows so the selected card stays on screen
    let selected_row = selected / columns;
    let first_row = selected_row.saturating_sub(rows_visible - 1);

    for (index, assignment) in round.assignments().iter().enumerate() {
        let row = index / columns;
        if row < first_row || row >= first_row + rows_visible {
            continue;
        }
        let col = index % columns;
        let card = Rect {
            x: grid.x + col as u16 * CARD_WIDTH,
            y: grid.y + (row - first_row) as u16 * CARD_HEIGHT,
            width: CARD_WIDTH,
            height: CARD_HEIGHT,
        }
        .intersection(grid);

        let is_selected = index == selected;
        let border = if is_selected { Color::Yellow } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(format!(" {} ", assignment.player));

        let body = if revealed.is_revealed(index) {
            Paragraph::new(vec![
                Line::from(assignment.role.name())
                    .style(Style::default().fg(role_color(assignment.role)).bold()),
                Line::from(assignment.role.description())
                    .style(Style::default().fg(Color::Gray)),
            ])
        } else {
            Paragraph::new("[ hidden ]\nSpace to reveal").style(Style::default().fg(Color::DarkGray))
        };

        frame.render_widget(
            body.block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            card,
        );
    }

    let summary: Vec<String> = round
        .role_counts()
        .non_zero()
        .iter()
        .map(|(role, count)| format!("{} {}", count, role.counted_name(*count)))
        .collect();
    let summary = Paragraph::new(summary.join("  ·  "))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" In this game "),
        );
    frame.render_widget(summary, layout[2]);
}
