//! Trigger view: the sync button, session stats and the log panel

use crossterm::event::KeyEvent;
use ratatui::{
	layout::{Alignment, Constraint, Direction, Layout, Rect},
	style::{Color, Modifier, Style},
	text::{Line, Span},
	widgets::{Block, Borders, List, ListItem, Paragraph},
	Frame,
};

use crate::state::StatusLabel;
use crate::tui::app::TuiCommand;
use crate::tui::state::{AppState, LogLevel};

const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

/// Render the trigger view
pub fn render(frame: &mut Frame, state: &AppState) {
	let chunks = Layout::default()
		.direction(Direction::Vertical)
		.constraints([
			Constraint::Length(3),
			Constraint::Length(5),
			Constraint::Length(3),
			Constraint::Min(5),
			Constraint::Length(3),
		])
		.split(frame.area());

	render_header(frame, chunks[0], state);
	render_button(frame, chunks[1], state);
	render_stats(frame, chunks[2], state);
	render_logs(frame, chunks[3], state);
	render_footer(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
	let title = format!("SyncTrig - {}{}", state.config.base_url, state.config.hook_path);
	let header = Paragraph::new(title)
		.style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
		.block(Block::default().borders(Borders::ALL).title(" Sync Hook "));

	frame.render_widget(header, area);
}

fn button_style(label: StatusLabel) -> Style {
	let color = match label {
		StatusLabel::Available => Color::Cyan,
		StatusLabel::Busy => Color::Yellow,
		StatusLabel::Failed => Color::Red,
		StatusLabel::Success => Color::Green,
	};
	Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn render_button(frame: &mut Frame, area: Rect, state: &AppState) {
	let mut text = state.config.labels.text(state.button.label).to_string();

	if state.button.label == StatusLabel::Busy {
		let frame_char = SPINNER[(state.animation_frame / 4) as usize % SPINNER.len()];
		text = format!("{} {}", text, frame_char);
	}

	let border_style = if state.button.enabled {
		Style::default().fg(Color::White)
	} else {
		Style::default().fg(Color::DarkGray)
	};

	let lines = vec![Line::from(""), Line::from(Span::styled(text, button_style(state.button.label)))];

	let button = Paragraph::new(lines)
		.alignment(Alignment::Center)
		.block(Block::default().borders(Borders::ALL).border_style(border_style).title(" Button "));

	frame.render_widget(button, area);
}

fn render_stats(frame: &mut Frame, area: Rect, state: &AppState) {
	let stats = format!(
		"Presses: {}  Synced: {}  Failed: {}  Reloads: {}",
		state.stats.presses, state.stats.syncs, state.stats.failures, state.reloads
	);
	let paragraph = Paragraph::new(stats)
		.style(Style::default().fg(Color::DarkGray))
		.block(Block::default().borders(Borders::ALL).title(" Session "));

	frame.render_widget(paragraph, area);
}

fn log_style(level: LogLevel) -> Style {
	match level {
		LogLevel::Debug => Style::default().fg(Color::DarkGray),
		LogLevel::Info => Style::default().fg(Color::White),
		LogLevel::Success => Style::default().fg(Color::Green),
		LogLevel::Warning => Style::default().fg(Color::Yellow),
		LogLevel::Error => Style::default().fg(Color::Red),
	}
}

fn render_logs(frame: &mut Frame, area: Rect, state: &AppState) {
	let visible = area.height.saturating_sub(2) as usize;
	let items: Vec<ListItem> = state
		.logs
		.iter()
		.rev()
		.take(visible)
		.rev()
		.map(|entry| ListItem::new(Span::styled(entry.message.clone(), log_style(entry.level))))
		.collect();

	let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Log "));

	frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
	let footer = Paragraph::new("[Enter] Trigger sync  [?] Help  [q] Quit")
		.style(Style::default().fg(Color::DarkGray))
		.block(Block::default().borders(Borders::ALL));

	frame.render_widget(footer, area);
}

/// Handle keyboard input in the trigger view
pub async fn handle_key(
	state: &mut AppState,
	key: KeyEvent,
	command_tx: &tokio::sync::mpsc::Sender<TuiCommand>,
) -> Result<(), Box<dyn std::error::Error>> {
	use crossterm::event::KeyCode;

	match key.code {
		KeyCode::Enter | KeyCode::Char(' ') => {
			if state.button.enabled {
				state.stats.presses += 1;
				// Disable the mirrored state right away so a second press in
				// the window before the controller's Busy arrives is a no-op
				state.button.enabled = false;
				command_tx.send(TuiCommand::Press).await?;
			}
		}
		_ => {}
	}

	Ok(())
}

// vim: ts=4
