//! TUI rendering with ratatui
//!
//! Panels for watching the codebreaker play.

use super::app::{App, MessageStyle, Phase};
use crate::output::formatters::{score_to_pegs, turns_label};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Candidates listed individually once the set is this small
const LISTED_CANDIDATES: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 MASTERMIND SOLVER - Watch Mode")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    render_secret(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_secret(f: &mut Frame, app: &App, area: Rect) {
    let (verdict, color) = match app.phase {
        Phase::Playing if app.auto_play => ("auto-playing".to_string(), Color::Cyan),
        Phase::Playing => (format!("turn {}", app.solver.turn()), Color::White),
        Phase::Solved { turns } => (format!("solved in {}", turns_label(turns)), Color::Green),
        Phase::Exhausted { .. } => ("no consistent code".to_string(), Color::Red),
    };

    let content = vec![
        Line::from(vec![
            Span::raw("Secret: "),
            Span::styled(
                app.secret.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(verdict, Style::default().fg(color))),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Game ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let pegs = app.scheme.pegs();
    let history_items: Vec<ListItem> = app
        .history
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let style = if entry.score.is_perfect(pegs) {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            ListItem::new(format!(
                "{:2}: {} {} {}  {} → {}",
                i + 1,
                entry.guess,
                score_to_pegs(entry.score, pegs),
                entry.score.digits(),
                entry.candidates_before,
                entry.candidates_after
            ))
            .style(style)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // Elimination gauge
            Constraint::Percentage(55), // Candidates
            Constraint::Min(4),         // Messages
        ])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let fraction = app.eliminated_fraction().clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Space Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(fraction)
        .label(format!(
            "{:.1}% | {} of {} remain",
            fraction * 100.0,
            app.candidates_count(),
            app.scheme.space_size()
        ));

    f.render_widget(gauge, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.candidates_count();

    let content = if let Phase::Solved { .. } = app.phase {
        vec![Line::from(Span::styled(
            app.secret.to_string(),
            Style::default().fg(Color::Green),
        ))]
    } else if remaining == 0 {
        vec![Line::from("None")]
    } else if remaining <= LISTED_CANDIDATES {
        app.solver
            .candidates()
            .iter()
            .enumerate()
            .map(|(i, candidate)| {
                let style = if i == 0 {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::Green)
                };
                Line::from(Span::styled(format!("  {candidate}"), style))
            })
            .collect()
    } else {
        let next = app
            .solver
            .next_guess()
            .map_or_else(String::new, ToString::to_string);
        vec![
            Line::from(format!("{remaining} candidates remaining")),
            Line::from(vec![
                Span::raw("Next guess: "),
                Span::styled(next, Style::default().fg(Color::Yellow)),
            ]),
        ]
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    let stats = &app.stats;
    let games = Paragraph::new(format!(
        "Games: {} | Won: {}",
        stats.total_games, stats.games_won
    ))
    .alignment(Alignment::Center);
    f.render_widget(games, chunks[0]);

    let turns = Paragraph::new(format!(
        "Avg: {:.2} | Worst: {}",
        stats.average_turns(),
        stats.worst_turns
    ))
    .alignment(Alignment::Center);
    f.render_widget(turns, chunks[1]);

    let help_text = if app.phase == Phase::Playing {
        "Space: Step | a: Auto | n: New | q: Quit"
    } else {
        "n: New Secret | q: Quit"
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
