//! TUI application state and logic

use crate::core::{Code, Scheme, Score};
use crate::solver::{Progress, Solver};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Delay between automatic steps
const AUTO_STEP: Duration = Duration::from_millis(600);

/// Application state
pub struct App {
    pub scheme: Scheme,
    pub solver: Solver,
    pub secret: Code,
    pub history: Vec<HistoryEntry>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub phase: Phase,
    pub auto_play: bool,
    pub should_quit: bool,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Solved { turns: usize },
    Exhausted { turns: usize },
}

#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub guess: Code,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

/// Totals across every game watched this session
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub total_turns: usize,
    pub worst_turns: usize,
}

impl Statistics {
    #[must_use]
    pub fn average_turns(&self) -> f64 {
        if self.games_won == 0 {
            0.0
        } else {
            self.total_turns as f64 / self.games_won as f64
        }
    }

    fn record_win(&mut self, turns: usize) {
        self.total_games += 1;
        self.games_won += 1;
        self.total_turns += turns;
        self.worst_turns = self.worst_turns.max(turns);
    }
}

impl App {
    /// Start watching a game against a random secret drawn from `rng`
    #[must_use]
    pub fn new(scheme: Scheme, mut rng: StdRng) -> Self {
        let secret = Code::random(scheme, &mut rng);
        Self::with_secret(scheme, secret, rng)
    }

    /// Start watching a game against a chosen secret
    #[must_use]
    pub fn with_secret(scheme: Scheme, secret: Code, rng: StdRng) -> Self {
        let mut app = Self {
            scheme,
            solver: Solver::new(scheme),
            secret,
            history: Vec::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            phase: Phase::Playing,
            auto_play: false,
            should_quit: false,
            rng,
        };
        app.add_message(
            &format!(
                "Secret of {} pegs drawn from {}. Space steps, 'a' plays on its own.",
                scheme.pegs(),
                scheme.alphabet()
            ),
            MessageStyle::Info,
        );
        app
    }

    /// Play the solver's next guess against the secret
    pub fn step(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }

        let Some(guess) = self.solver.next_guess().cloned() else {
            self.finish(Phase::Exhausted {
                turns: self.solver.turn() - 1,
            });
            return;
        };

        let candidates_before = self.solver.candidates().len();
        let score = Score::calculate(&self.secret, &guess);
        let progress = self.solver.record(score);
        let candidates_after = match progress {
            Progress::Solved { .. } => 1,
            _ => self.solver.candidates().len(),
        };

        self.history.push(HistoryEntry {
            guess,
            score,
            candidates_before,
            candidates_after,
        });

        match progress {
            Progress::Solved { turns } => self.finish(Phase::Solved { turns }),
            Progress::Exhausted { turns } => self.finish(Phase::Exhausted { turns }),
            Progress::Continue { remaining } => {
                self.add_message(
                    &format!("{remaining} candidates remaining"),
                    MessageStyle::Info,
                );
            }
        }
    }

    fn finish(&mut self, phase: Phase) {
        self.phase = phase;
        self.auto_play = false;

        match phase {
            Phase::Solved { turns } => {
                self.stats.record_win(turns);
                let celebration = match turns {
                    1 => "🎯 First guess! 🌟".to_string(),
                    2..=4 => format!("✨ Cracked {} in {turns} turns ✨", self.secret),
                    _ => format!("🎉 Cracked {} in {turns} turns", self.secret),
                };
                self.add_message(&celebration, MessageStyle::Success);
                self.add_message("Press 'n' for a new secret or 'q' to quit.", MessageStyle::Info);
            }
            Phase::Exhausted { turns } => {
                self.stats.total_games += 1;
                self.add_message(
                    &format!("No code fits the {turns} scores seen"),
                    MessageStyle::Error,
                );
            }
            Phase::Playing => {}
        }
    }

    /// Draw a fresh secret and restart the solver
    pub fn new_game(&mut self) {
        self.secret = Code::random(self.scheme, &mut self.rng);
        self.solver = Solver::new(self.scheme);
        self.history.clear();
        self.messages.clear();
        self.phase = Phase::Playing;
        self.add_message("New secret drawn.", MessageStyle::Info);
    }

    pub fn toggle_auto_play(&mut self) {
        if self.phase == Phase::Playing {
            self.auto_play = !self.auto_play;
        }
    }

    /// Advance one step if auto-play is on
    pub fn tick(&mut self) {
        if self.auto_play {
            self.step();
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        match self.phase {
            Phase::Solved { .. } => 1,
            _ => self.solver.candidates().len(),
        }
    }

    /// Share of the code space ruled out so far, in `[0, 1]`
    #[must_use]
    pub fn eliminated_fraction(&self) -> f64 {
        let total = self.scheme.space_size();
        if total == 0 {
            return 0.0;
        }
        1.0 - self.candidates_count() as f64 / total as f64
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') | KeyCode::Enter => self.step(),
            KeyCode::Char('a') => self.toggle_auto_play(),
            KeyCode::Char('n') => self.new_game(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(AUTO_STEP)? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code, key.modifiers);
                }
            }
        } else {
            app.tick();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
