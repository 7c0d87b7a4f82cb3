//! Mastermind Solver - CLI
//!
//! Play Mastermind against the computer, let it break your code, or watch it
//! play itself.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use mastermind_solver::{
    commands::{analyze_guess, print_test_all_statistics, run_test_all, solve_secret},
    core::{Code, Scheme},
    game::{Console, PlayOptions, computer_guesses, human_guesses, run_menu, self_play},
    output::{print_analysis_result, print_solve_result},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;

#[derive(Parser)]
#[command(
    name = "mastermind_solver",
    about = "Mastermind code-breaker that always plays a code consistent with every score so far",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for secret codes, for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Show remaining candidate counts after each computer turn
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu,

    /// You break a random secret
    Human,

    /// The computer breaks the code you have in mind
    Computer,

    /// The computer breaks a secret it scores itself
    Selfplay {
        /// Secret to break instead of a random one
        #[arg(long)]
        secret: Option<String>,
    },

    /// Solve a specific secret and show every step
    Solve {
        /// The secret to solve, e.g. "fbed"
        secret: String,
    },

    /// Show how a guess splits the remaining candidates by score
    Analyze {
        /// Guess to analyze
        guess: String,

        /// Earlier observation to replay first, as GUESS=SCORE (repeatable)
        #[arg(short, long = "after")]
        after: Vec<String>,
    },

    /// Run the solver against every possible secret
    TestAll {
        /// Limit number of secrets to test
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Full-screen view of the computer playing itself
    Watch,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut rng = cli
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
    let options = PlayOptions {
        scheme: Scheme::CLASSIC,
        verbose: cli.verbose,
    };

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => run_menu(&mut console, &mut rng, options),
        Commands::Human => {
            let secret = Code::random(options.scheme, &mut rng);
            human_guesses(&mut console, secret, options).map(drop)
        }
        Commands::Computer => computer_guesses(&mut console, options).map(drop),
        Commands::Selfplay { secret } => {
            let secret = match secret {
                Some(text) => Code::parse(&text, options.scheme)
                    .with_context(|| format!("invalid secret '{text}'"))?,
                None => Code::random(options.scheme, &mut rng),
            };
            self_play(console.writer(), &secret, options).map(drop)
        }
        Commands::Solve { secret } => run_solve_command(&secret, options),
        Commands::Analyze { guess, after } => run_analyze_command(&guess, &after, options.scheme),
        Commands::TestAll { limit } => {
            run_test_all_command(options.scheme, limit);
            Ok(())
        }
        Commands::Watch => run_watch_command(options.scheme, rng),
    }
}

fn run_solve_command(secret: &str, options: PlayOptions) -> Result<()> {
    let result = solve_secret(secret, options.scheme)
        .with_context(|| format!("invalid secret '{secret}'"))?;
    print_solve_result(&result, options.verbose);
    Ok(())
}

fn run_analyze_command(guess: &str, after: &[String], scheme: Scheme) -> Result<()> {
    let result = analyze_guess(guess, after, scheme)?;
    print_analysis_result(&result);
    Ok(())
}

fn run_test_all_command(scheme: Scheme, limit: Option<usize>) {
    println!("\n{}", "═".repeat(70));
    println!(" {} ", "Comprehensive Mastermind Solver Test".bright_cyan().bold());
    println!("{}", "═".repeat(70));
    println!(
        "\nTesting against {} possible secrets ({} colors, {} pegs)",
        limit.map_or(scheme.space_size(), |n| n.min(scheme.space_size())),
        scheme.colors(),
        scheme.pegs()
    );
    println!();

    let stats = run_test_all(scheme, limit);
    print_test_all_statistics(&stats);
}

fn run_watch_command(scheme: Scheme, rng: StdRng) -> Result<()> {
    use mastermind_solver::interactive::{App, run_tui};

    let app = App::new(scheme, rng);
    run_tui(app)
}
