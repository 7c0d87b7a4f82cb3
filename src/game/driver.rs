//! Line-oriented game loops
//!
//! Every loop blocks on one line of input per prompt. Malformed lines are
//! answered by repeating the prompt for the same turn; end of input ends the
//! game as [`GameState::Quit`].

use super::state::GameState;
use crate::core::{Code, Scheme, Score};
use crate::output::formatters::turns_label;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::Rng;
use std::fmt::Display;
use std::io::{BufRead, Write};

const MENU_PROMPT: &str = "[H]uman guesses, [C]omputer guesses, [B]oth computer, [Q]uit? ";

/// Settings shared by every game mode
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    pub scheme: Scheme,
    /// Report the remaining candidate count after each computer turn
    pub verbose: bool,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            scheme: Scheme::CLASSIC,
            verbose: false,
        }
    }
}

/// A prompt-and-read-line pair over any reader and writer
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` without a newline and read one line
    ///
    /// Returns the line without its terminator (`\n` or `\r\n`), or `None`
    /// at end of input. Other whitespace is kept, so padded input is
    /// rejected by the parsers.
    ///
    /// # Errors
    /// Returns an error if writing the prompt or reading the line fails.
    pub fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}").context("failed to write prompt")?;
        self.output.flush().context("failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read input")?;

        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Print one line
    ///
    /// # Errors
    /// Returns an error if the write fails.
    pub fn say(&mut self, line: impl Display) -> Result<()> {
        writeln!(self.output, "{line}").context("failed to write output")
    }

    /// The underlying writer, for output that needs no input
    pub const fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    /// Give back the writer, e.g. to inspect what was printed
    pub fn into_output(self) -> W {
        self.output
    }
}

/// Human tries to break `secret`
///
/// A line that is not a code of the right length and alphabet repeats the
/// prompt without using up a turn.
///
/// # Errors
/// Returns an error on I/O failure.
pub fn human_guesses<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    secret: Code,
    options: PlayOptions,
) -> Result<GameState> {
    let scheme = options.scheme;
    console.say(format!(
        "I have chosen a code of {} pegs from {}.",
        scheme.pegs(),
        scheme.alphabet()
    ))?;

    let mut state = GameState::human_guesses(secret);
    while let Some(turn) = state.turn() {
        let Some(line) = console.prompt(&format!("Human turn {turn}: "))? else {
            return Ok(GameState::Quit);
        };
        let Ok(guess) = Code::parse(&line, scheme) else {
            continue;
        };

        let (next, score) = state.guess(&guess);
        if let Some(score) = score {
            console.say(format!("score: {score}"))?;
        }
        state = next;
    }

    if let GameState::Won { turns } = state {
        console.say(
            format!(
                "Congratulations! You cracked the code in {}.",
                turns_label(turns)
            )
            .green()
            .bold(),
        )?;
    }
    Ok(state)
}

/// Computer tries to break a code the human keeps in their head
///
/// Each guess is scored by typing two digits: right, then wrong. Anything
/// else repeats the prompt for the same turn.
///
/// # Errors
/// Returns an error on I/O failure.
pub fn computer_guesses<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    options: PlayOptions,
) -> Result<GameState> {
    let scheme = options.scheme;
    console.say(format!(
        "Think of a code of {} pegs from {}. Score each guess as two digits: right, then wrong.",
        scheme.pegs(),
        scheme.alphabet()
    ))?;

    let mut state = GameState::computer_guesses(scheme);
    while let GameState::AwaitingGuess(solver) = &state {
        let Some(guess) = solver.next_guess() else {
            let turns = solver.turn() - 1;
            state = GameState::Cheated { turns };
            break;
        };

        let prompt = format!("Computer turn {}: {guess} => ", solver.turn());
        let Some(line) = console.prompt(&prompt)? else {
            return Ok(GameState::Quit);
        };
        let Ok(score) = Score::parse(&line, scheme.pegs()) else {
            continue;
        };

        state = state.score(score);
        report_remaining(console.writer(), &state, options)?;
    }

    match state {
        GameState::Won { turns } => {
            console.say(
                format!("I cracked your code in {}!", turns_label(turns))
                    .green()
                    .bold(),
            )?;
        }
        GameState::Cheated { turns } => {
            console.say(
                format!("No code fits your {turns} scores. You cheated!")
                    .red()
                    .bold(),
            )?;
        }
        _ => {}
    }
    Ok(state)
}

/// Computer breaks a secret it also holds, scoring its own guesses
///
/// # Errors
/// Returns an error on I/O failure.
pub fn self_play<W: Write>(output: &mut W, secret: &Code, options: PlayOptions) -> Result<GameState> {
    let mut state = GameState::computer_guesses(options.scheme);

    while let GameState::AwaitingGuess(solver) = &state {
        let Some(guess) = solver.next_guess() else {
            let turns = solver.turn() - 1;
            state = GameState::Cheated { turns };
            break;
        };

        let score = Score::calculate(secret, guess);
        writeln!(
            output,
            "Computer turn {}: {guess} => {}",
            solver.turn(),
            score.digits()
        )
        .context("failed to write output")?;

        state = state.score(score);
        report_remaining(output, &state, options)?;
    }

    if let GameState::Won { turns } = state {
        writeln!(
            output,
            "{}",
            format!(
                "Computer cracked the code {secret} in {}.",
                turns_label(turns)
            )
            .green()
            .bold()
        )
        .context("failed to write output")?;
    }
    Ok(state)
}

fn report_remaining<W: Write>(output: &mut W, state: &GameState, options: PlayOptions) -> Result<()> {
    if let (true, GameState::AwaitingGuess(solver)) = (options.verbose, state) {
        writeln!(
            output,
            "{}",
            format!("  {} candidates remain", solver.candidates().len()).bright_black()
        )
        .context("failed to write output")?;
    }
    Ok(())
}

/// Main menu: pick a mode, play it, come back, until `Q` or end of input
///
/// Secrets for `H` and `B` are drawn from `rng`.
///
/// # Errors
/// Returns an error on I/O failure.
pub fn run_menu<R: BufRead, W: Write, G: Rng + ?Sized>(
    console: &mut Console<R, W>,
    rng: &mut G,
    options: PlayOptions,
) -> Result<()> {
    loop {
        let Some(choice) = console.prompt(MENU_PROMPT)? else {
            return Ok(());
        };

        match choice.to_ascii_uppercase().as_str() {
            "H" => {
                let secret = Code::random(options.scheme, rng);
                human_guesses(console, secret, options)?;
            }
            "C" => {
                computer_guesses(console, options)?;
            }
            "B" => {
                let secret = Code::random(options.scheme, rng);
                self_play(console.writer(), &secret, options)?;
            }
            "Q" => return Ok(()),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn printed(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    fn code(text: &str) -> Code {
        Code::parse(text, Scheme::CLASSIC).unwrap()
    }

    #[test]
    fn human_wins_first_turn() {
        let mut io = console("abcd\n");
        let state = human_guesses(&mut io, code("abcd"), PlayOptions::default()).unwrap();

        assert!(matches!(state, GameState::Won { turns: 1 }));
        let out = printed(io);
        assert!(out.contains("Human turn 1: "));
        assert!(out.contains("score: 4-0"));
        assert!(out.contains("You cracked the code in 1 turn."));
    }

    #[test]
    fn human_bad_length_reprompts_same_turn() {
        let mut io = console("abc\nabcde\n\naaab\nabcd\n");
        let state = human_guesses(&mut io, code("abcd"), PlayOptions::default()).unwrap();

        assert!(matches!(state, GameState::Won { turns: 2 }));
        let out = printed(io);
        assert_eq!(out.matches("Human turn 1: ").count(), 4);
        assert_eq!(out.matches("Human turn 2: ").count(), 1);
        assert!(out.contains("score: 1-1"));
        assert!(!out.contains("Human turn 3"));
    }

    #[test]
    fn human_padded_guess_reprompts() {
        let mut io = console(" abcd\nabcd \r\nabcd\r\n");
        let state = human_guesses(&mut io, code("abcd"), PlayOptions::default()).unwrap();

        assert!(matches!(state, GameState::Won { turns: 1 }));
        let out = printed(io);
        assert_eq!(out.matches("Human turn 1: ").count(), 3);
        assert_eq!(out.matches("score: ").count(), 1);
    }

    #[test]
    fn computer_padded_score_reprompts() {
        let mut io = console(" 40\n40 \n40\r\n");
        let state = computer_guesses(&mut io, PlayOptions::default()).unwrap();

        assert!(matches!(state, GameState::Won { turns: 1 }));
        assert_eq!(printed(io).matches("Computer turn 1: abcd => ").count(), 3);
    }

    #[test]
    fn human_out_of_alphabet_reprompts() {
        let mut io = console("zzzz\nABCD\n");
        let state = human_guesses(&mut io, code("abcd"), PlayOptions::default()).unwrap();

        assert!(matches!(state, GameState::Won { turns: 1 }));
        assert_eq!(printed(io).matches("Human turn 1: ").count(), 2);
    }

    #[test]
    fn human_end_of_input_quits() {
        let mut io = console("aaaa\n");
        let state = human_guesses(&mut io, code("abcd"), PlayOptions::default()).unwrap();
        assert!(matches!(state, GameState::Quit));
    }

    #[test]
    fn computer_wins_when_told_perfect() {
        let mut io = console("40\n");
        let state = computer_guesses(&mut io, PlayOptions::default()).unwrap();

        assert!(matches!(state, GameState::Won { turns: 1 }));
        let out = printed(io);
        assert!(out.contains("Computer turn 1: abcd => "));
        assert!(out.contains("I cracked your code in 1 turn!"));
    }

    #[test]
    fn computer_reprompts_on_bad_score() {
        let mut io = console("\n5a\n50\n32\nxx\n40\n");
        let state = computer_guesses(&mut io, PlayOptions::default()).unwrap();

        assert!(matches!(state, GameState::Won { turns: 1 }));
        assert_eq!(printed(io).matches("Computer turn 1: abcd => ").count(), 6);
    }

    #[test]
    fn computer_follows_truthful_scores() {
        // Secret "ffee": score each guess honestly
        let secret = code("ffee");
        let mut solver = crate::solver::Solver::new(Scheme::CLASSIC);
        let mut script = String::new();
        loop {
            let guess = solver.next_guess().cloned().unwrap();
            let score = Score::calculate(&secret, &guess);
            script.push_str(&score.digits());
            script.push('\n');
            if !matches!(solver.record(score), crate::solver::Progress::Continue { .. }) {
                break;
            }
        }

        let mut io = console(&script);
        let state = computer_guesses(&mut io, PlayOptions::default()).unwrap();
        assert!(matches!(state, GameState::Won { .. }));
        assert!(printed(io).contains("ffee => "));
    }

    #[test]
    fn computer_accuses_cheater() {
        let mut io = console("31\n");
        let state = computer_guesses(&mut io, PlayOptions::default()).unwrap();

        assert!(matches!(state, GameState::Cheated { turns: 1 }));
        assert!(printed(io).contains("You cheated!"));
    }

    #[test]
    fn computer_verbose_reports_candidates() {
        let mut io = console("00\n");
        let options = PlayOptions {
            verbose: true,
            ..PlayOptions::default()
        };
        let state = computer_guesses(&mut io, options).unwrap();

        assert!(matches!(state, GameState::Quit));
        // abcd scored 0-0 leaves the 16 codes over {e, f}
        assert!(printed(io).contains("16 candidates remain"));
    }

    #[test]
    fn self_play_opening_secret_takes_one_turn() {
        let mut out = Vec::new();
        let state = self_play(&mut out, &code("abcd"), PlayOptions::default()).unwrap();

        assert!(matches!(state, GameState::Won { turns: 1 }));
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Computer turn 1: abcd => 40"));
        assert!(!out.contains("Computer turn 2"));
    }

    #[test]
    fn self_play_prints_concatenated_scores() {
        let mut out = Vec::new();
        let state = self_play(&mut out, &code("fade"), PlayOptions::default()).unwrap();

        let GameState::Won { turns } = state else {
            panic!("self-play did not win: {state:?}");
        };
        let out = String::from_utf8(out).unwrap();
        // abcd vs fade: nothing in place, a and d present elsewhere
        assert!(out.contains("Computer turn 1: abcd => 02"));
        assert!(out.contains(&format!("Computer turn {turns}: fade => 40")));
    }

    #[test]
    fn menu_quits_on_q_and_ignores_noise() {
        let mut io = console("x\n\nzz\nq\n");
        run_menu(&mut io, &mut StdRng::seed_from_u64(1), PlayOptions::default()).unwrap();
        assert_eq!(printed(io).matches(MENU_PROMPT).count(), 4);
    }

    #[test]
    fn menu_runs_games_and_returns() {
        let mut io = console("c\n40\nB\nQ\n");
        run_menu(&mut io, &mut StdRng::seed_from_u64(9), PlayOptions::default()).unwrap();

        let out = printed(io);
        assert_eq!(out.matches(MENU_PROMPT).count(), 3);
        assert!(out.contains("I cracked your code in 1 turn!"));
        assert!(out.contains("Computer cracked the code"));
    }

    #[test]
    fn menu_exits_at_end_of_input() {
        let mut io = console("h\nabcd\n");
        run_menu(&mut io, &mut StdRng::seed_from_u64(3), PlayOptions::default()).unwrap();
        assert!(printed(io).contains("Human turn"));
    }
}
