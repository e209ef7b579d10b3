//! Setup screen rendering
//!
//! Layout:
//! ┌─────────────────────────────────────────────────┐
//! │  ⚠ Need 2 more roles                            │
//! ├────────────────────────┬────────────────────────┤
//! │  PLAYERS (4)           │  ROLES                 │
//! │  > Alice               │  > Mafia      [ 1]     │
//! │    Bob                 │    Doctor     [ 1]     │
//! │    Carol               │    Cop        [ 1]     │
//! │    Dave                │    Narrator   [ 0]     │
//! │                        │    Innocent   [ 3]     │
//! ├────────────────────────┴────────────────────────┤
//! │  Add player: [Erin_]                            │
//! └─────────────────────────────────────────────────┘

use crate::app::{App, SetupCursor, SetupFocus};
use crate::game::{Role, SetupStatus};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

/// Render the setup screen into `area`
pub fn render_setup(frame: &mut Frame, area: Rect, app: &App, cursor: SetupCursor) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Status
            Constraint::Min(8),    // Panels
            Constraint::Length(3), // Name input
        ])
        .split(area);

    render_status(frame, layout[0], app.status());

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(layout[1]);

    let focus = cursor.focus;
    render_roster(frame, panels[0], app, focus == SetupFocus::Roster, cursor.player);
    render_roles(frame, panels[1], app, focus == SetupFocus::Roles, cursor.role);
    render_input(frame, layout[2], app, focus == SetupFocus::Input);
}

fn render_status(frame: &mut Frame, area: Rect, status: SetupStatus) {
    let (icon, color) = match status {
        SetupStatus::NeedPlayers => ("ℹ", Color::Cyan),
        SetupStatus::NeedMoreRoles(_) | SetupStatus::TooManyRoles(_) => ("⚠", Color::Yellow),
        SetupStatus::Ready => ("✔", Color::Green),
    };
    let widget = Paragraph::new(format!("{} {}", icon, status.message()))
        .style(Style::default().fg(color).bold())
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

fn panel_block(title: String, focused: bool) -> Block<'static> {
    let border = if focused { Color::Yellow } else { Color::DarkGray };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title)
}

fn render_roster(frame: &mut Frame, area: Rect, app: &App, focused: bool, selected: usize) {
    let players = app.roster().players();
    let title = format!(" Players ({}/{}) ", players.len(), app.roster().max_players());

    if players.is_empty() {
        let empty = Paragraph::new("No players yet.\nType a name below, or +N to add N.")
            .style(Style::default().fg(Color::DarkGray))
            .block(panel_block(title, focused));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the selection in view
    let visible = area.height.saturating_sub(2) as usize;
    let skip = if visible > 0 && selected >= visible {
        selected + 1 - visible
    } else {
        0
    };

    let items: Vec<ListItem> = players
        .iter()
        .enumerate()
        .skip(skip)
        .map(|(i, name)| {
            let is_selected = focused && i == selected;
            let style = if is_selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if is_selected { "> " } else { "  " };
            ListItem::new(format!("{}{:>2}. {}", prefix, i + 1, name)).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(panel_block(title, focused)), area);
}

fn render_roles(frame: &mut Frame, area: Rect, app: &App, focused: bool, selected: usize) {
    let max = app.limits().max_role_count;
    let items: Vec<ListItem> = Role::all()
        .iter()
        .enumerate()
        .map(|(i, role)| {
            let count = app.roles().get(*role);
            let is_selected = focused && i == selected;
            let style = if is_selected {
                Style::default().fg(Color::Yellow).bold()
            } else if count == 0 {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default().fg(role_color(*role))
            };
            let prefix = if is_selected { "> " } else { "  " };
            let line = format!(
                "{}{:<9} [{:>2}]  {}",
                prefix,
                role.name(),
                count,
                role.description()
            );
            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!(" Roles ({} total, max {} each) ", app.roles().total(), max);
    frame.render_widget(List::new(items).block(panel_block(title, focused)), area);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App, focused: bool) {
    let cursor = if focused { "_" } else { "" };
    let style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input = Paragraph::new(format!("> {}{}", app.input, cursor))
        .style(style)
        .block(panel_block(" Add player ".to_string(), focused));
    frame.render_widget(input, area);
}

/// Accent color for a role
pub fn role_color(role: Role) -> Color {
    match role {
        Role::Mafia => Color::Red,
        Role::Doctor => Color::Green,
        Role::Cop => Color::Blue,
        Role::Narrator => Color::Magenta,
        Role::Innocent => Color::White,
    }
}
