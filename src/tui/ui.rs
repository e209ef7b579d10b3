//! UI rendering using ratatui
//!
//! Screens:
//! - Setup: roster, role counts, status
//! - Presets: picker drawn over the setup screen
//! - Confirm: yes/no prompt drawn over the screen it was asked from
//! - Results: one card per player, hidden until revealed

use crate::app::{App, AppCoordinator, ConfirmAction, Notice, NoticeKind, Screen, SetupFocus};
use crate::game::PresetCatalog;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
};

use super::results::render_results;
use super::setup::render_setup;

/// Render the appropriate screen based on coordinator state
pub fn render(frame: &mut Frame, coordinator: &AppCoordinator) {
    let area = frame.area();
    let app = &coordinator.app;

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Screen body
            Constraint::Length(1), // Notice
            Constraint::Length(1), // Key hints
        ])
        .split(area);

    render_header(frame, layout[0], app);

    match coordinator.screen {
        Screen::Setup { cursor } => {
            render_setup(frame, layout[1], app, cursor);
        }
        Screen::Presets { selected, cursor } => {
            render_setup(frame, layout[1], app, cursor);
            render_presets(frame, layout[1], selected);
        }
        Screen::Confirm { action } => {
            match action {
                ConfirmAction::ClearPlayers { cursor } => {
                    render_setup(frame, layout[1], app, cursor)
                }
                ConfirmAction::NewGame { selected } => {
                    render_results(frame, layout[1], app, selected)
                }
            }
            render_confirm(frame, layout[1], action);
        }
        Screen::Results { selected } => {
            render_results(frame, layout[1], app, selected);
        }
    }

    render_notice(frame, layout[2], app.notice.as_ref());
    render_hints(frame, layout[3], &coordinator.screen, app.status().is_ready());
}

/// Render the header: title | totals
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14), // Title
            Constraint::Min(20),    // Totals
        ])
        .split(inner);

    let title = Paragraph::new("MAFIA ROLES")
        .style(Style::default().fg(Color::Red).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, header_layout[0]);

    let totals = Paragraph::new(format!(
        "Players: {}/{}  Roles: {}",
        app.roster().len(),
        app.limits().max_players,
        app.roles().total()
    ))
    .style(Style::default().fg(Color::Cyan))
    .alignment(Alignment::Right);
    frame.render_widget(totals, header_layout[1]);
}

/// Render the preset picker as a centered modal
fn render_presets(frame: &mut Frame, area: Rect, selected: usize) {
    let presets = PresetCatalog::all();
    let popup = centered_rect(area, 44, presets.len() as u16 + 4);
    frame.render_widget(Clear, popup);

    let items: Vec<ListItem> = presets
        .iter()
        .enumerate()
        .map(|(i, preset)| {
            let style = if i == selected {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if i == selected { "> " } else { "  " };
            ListItem::new(format!("{}{}", prefix, preset.label)).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Presets "),
    );
    frame.render_widget(list, popup);
}

/// Render a yes/no prompt as a centered modal
fn render_confirm(frame: &mut Frame, area: Rect, action: ConfirmAction) {
    let prompt = action.prompt();
    let popup = centered_rect(area, prompt.len() as u16 + 6, 5);
    frame.render_widget(Clear, popup);

    let body = Paragraph::new(vec![
        Line::from(prompt),
        Line::from("y Yes   n No").style(Style::default().fg(Color::DarkGray)),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Confirm "),
    );
    frame.render_widget(body, popup);
}

/// Render the last notice, colored by kind
fn render_notice(frame: &mut Frame, area: Rect, notice: Option<&Notice>) {
    let Some(notice) = notice else {
        return;
    };
    let color = match notice.kind {
        NoticeKind::Info => Color::White,
        NoticeKind::Success => Color::Green,
        NoticeKind::Error => Color::Red,
    };
    let widget = Paragraph::new(notice.message.as_str())
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(widget, area);
}

/// Render the key hints for the current screen. Assign keys are listed only
/// once the setup is ready to deal.
fn render_hints(frame: &mut Frame, area: Rect, screen: &Screen, ready: bool) {
    let hints = match screen {
        Screen::Setup { cursor } => {
            let (panel, assign, presets) = match cursor.focus {
                SetupFocus::Input => ("Enter Add (+N quick add)", "  Empty Enter Assign", "^P"),
                SetupFocus::Roster => ("↑↓ Select  Del Remove  c Clear", "  a Assign", "p"),
                SetupFocus::Roles => ("↑↓ Select  ←→ Count", "  a Assign", "p"),
            };
            let assign = if ready { assign } else { "" };
            format!("{}{}  Tab Panel  {} Presets  Esc Quit", panel, assign, presets)
        }
        Screen::Presets { .. } => "↑↓ Select  Enter Apply  Esc Close".to_string(),
        Screen::Confirm { .. } => "y/Enter Confirm  n/Esc Cancel".to_string(),
        Screen::Results { .. } => {
            "←→ Select  Space Reveal/Hide  r Reveal All  n New Game  Esc Setup".to_string()
        }
    };
    let footer = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// A `width` x `height` rect centered in `area`, clipped to it
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Limits;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use ratatui::backend::TestBackend;

    fn draw(coordinator: &AppCoordinator) -> String {
        let mut terminal = Terminal::new(TestBackend::new(110, 40)).unwrap();
        terminal.draw(|frame| render(frame, coordinator)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn coordinator() -> AppCoordinator {
        AppCoordinator::new(App::new(Limits::default()), ChaCha8Rng::seed_from_u64(1))
    }

    #[test]
    fn test_setup_screen_shows_status_and_roles() {
        let mut c = coordinator();
        c.app.apply_preset("classic").unwrap();
        let screen = draw(&c);
        assert!(screen.contains("MAFIA ROLES"));
        assert!(screen.contains("Players: 6/20"));
        assert!(screen.contains("Ready to assign roles"));
        assert!(screen.contains("Player 6"));
        assert!(screen.contains("Doctor"));
        assert!(screen.contains("Applied Classic (6 players) preset"));
    }

    #[test]
    fn test_preset_modal_lists_presets() {
        let mut c = coordinator();
        c.handle_key(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::CONTROL));
        let screen = draw(&c);
        assert!(screen.contains("Presets"));
        assert!(screen.contains("Balanced (8 players)"));
        assert!(screen.contains("Large Game (10 players)"));
    }

    #[test]
    fn test_hidden_cards_do_not_show_roles() {
        let mut c = coordinator();
        c.app.apply_preset("classic").unwrap();
        c.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL));
        assert!(matches!(c.screen, Screen::Results { .. }));

        let screen = draw(&c);
        assert!(screen.contains("[ hidden ]"));
        assert!(screen.contains("Revealed 0/6"));
        assert!(screen.contains("2 Mafias"));
        assert!(!screen.contains("Eliminate townspeople at night"));

        c.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::NONE));
        let screen = draw(&c);
        assert!(screen.contains("Revealed 6/6"));
        assert!(screen.contains("Eliminate townspeople at night"));
        assert!(!screen.contains("[ hidden ]"));
    }

    #[test]
    fn test_assign_hint_only_when_ready() {
        let mut c = coordinator();
        let screen = draw(&c);
        assert!(screen.contains("Add players to continue"));
        assert!(!screen.contains("Assign"));

        c.app.apply_preset("classic").unwrap();
        let screen = draw(&c);
        assert!(screen.contains("Empty Enter Assign"));

        c.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        let screen = draw(&c);
        assert!(screen.contains("a Assign"));
    }

    #[test]
    fn test_clear_prompt_is_drawn() {
        let mut c = coordinator();
        c.app.apply_preset("classic").unwrap();
        c.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        c.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));

        let screen = draw(&c);
        assert!(screen.contains("Are you sure you want to remove all players?"));
        assert!(screen.contains("y Yes   n No"));
        assert!(screen.contains("y/Enter Confirm"));
    }

    #[test]
    fn test_mismatch_status_line() {
        let mut c = coordinator();
        c.app.add_player("Alice").unwrap();
        let screen = draw(&c);
        assert!(screen.contains("Remove 5 roles"));
    }

    #[test]
    fn test_centered_rect_clips() {
        let area = Rect::new(0, 0, 20, 10);
        let rect = centered_rect(area, 40, 4);
        assert_eq!(rect, Rect::new(0, 3, 20, 4));
    }
}
