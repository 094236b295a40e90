//! Help view

use crossterm::event::KeyEvent;
use ratatui::{
	layout::{Constraint, Direction, Layout},
	style::{Color, Modifier, Style},
	text::{Line, Span},
	widgets::{Block, Borders, Paragraph, Wrap},
	Frame,
};

use crate::tui::state::{AppState, ViewType};

/// Render the help view
pub fn render(frame: &mut Frame, _state: &AppState) {
	let chunks = Layout::default()
		.direction(Direction::Vertical)
		.constraints([Constraint::Length(3), Constraint::Min(5)])
		.split(frame.area());

	let header = Paragraph::new("SyncTrig - Help")
		.style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
		.block(Block::default().borders(Borders::ALL).title(" Help "));
	frame.render_widget(header, chunks[0]);

	let lines = vec![
		Line::from(""),
		Line::from("  Enter / Space   Trigger the sync hook"),
		Line::from("  ?               Show this help"),
		Line::from("  Esc             Back to the button"),
		Line::from("  q / Ctrl-C      Quit"),
		Line::from(""),
		Line::from(Span::styled(
			"  While the hook runs, the button is disabled. A failed sync",
			Style::default().fg(Color::DarkGray),
		)),
		Line::from(Span::styled(
			"  re-enables the button after the configured cooldown.",
			Style::default().fg(Color::DarkGray),
		)),
	];

	let body = Paragraph::new(lines)
		.block(Block::default().borders(Borders::ALL))
		.wrap(Wrap { trim: false });
	frame.render_widget(body, chunks[1]);
}

/// Handle keyboard input in the help view
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
	use crossterm::event::KeyCode;

	match key.code {
		KeyCode::Esc | KeyCode::Enter => {
			state.change_view(ViewType::Trigger);
		}
		_ => {}
	}
}

// vim: ts=4
