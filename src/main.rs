//! Dominion - Main Binary
//!
//! Runs a match of the deck-building game on the console. Players can be
//! humans on stdin or the random baseline.

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};
use dominion_core::{
    core::{Card, PlayerName},
    game::{
        DecisionProvider, GameLoop, GameState, InteractiveController, RandomController,
        VerbosityLevel,
    },
    pile::Pile,
    supply::KINGDOM_PILES,
};

/// Controller type for a seat at the table
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ControllerType {
    /// Human play via stdin
    Tui,
    /// Makes random choices
    Random,
}

/// Verbosity level for game output (accepts both names and numbers)
#[derive(Debug, Clone, Copy)]
struct VerbosityArg(VerbosityLevel);

impl std::str::FromStr for VerbosityArg {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "silent" | "0" => Ok(VerbosityArg(VerbosityLevel::Silent)),
            "minimal" | "1" => Ok(VerbosityArg(VerbosityLevel::Minimal)),
            "normal" | "2" => Ok(VerbosityArg(VerbosityLevel::Normal)),
            "verbose" | "3" => Ok(VerbosityArg(VerbosityLevel::Verbose)),
            _ => Err(format!(
                "invalid verbosity level '{s}' (expected: silent/0, minimal/1, normal/2, verbose/3)"
            )),
        }
    }
}

/// The kingdom used when none is given on the command line.
const DEFAULT_KINGDOM: [Card; KINGDOM_PILES] = [
    Card::Chapel,
    Card::Moat,
    Card::Village,
    Card::Woodcutter,
    Card::Smithy,
    Card::Militia,
    Card::Market,
    Card::Laboratory,
    Card::Festival,
    Card::Witch,
];

/// Copies per kingdom pile.
const KINGDOM_PILE_SIZE: usize = 10;

#[derive(Parser)]
#[command(name = "dominion")]
#[command(about = "Dominion - deck-building card game engine", long_about = None)]
struct Cli {
    /// Player names, in seating (turn) order
    #[arg(long = "player", short = 'p', required = true, num_args = 2..)]
    players: Vec<String>,

    /// Controller for every seat (repeat to set per seat; defaults to tui)
    #[arg(long = "controller", short = 'c', value_enum)]
    controllers: Vec<ControllerType>,

    /// Comma-separated kingdom card names (exactly 10)
    #[arg(long)]
    kingdom: Option<String>,

    /// Set random seed for deterministic matches
    #[arg(long)]
    seed: Option<u64>,

    /// Verbosity level for game output (0=silent, 1=minimal, 2=normal, 3=verbose)
    #[arg(long, default_value = "normal", short = 'v')]
    verbosity: VerbosityArg,

    /// Maximum turns before the match is aborted
    #[arg(long, default_value_t = 1000)]
    max_turns: u32,
}

fn parse_kingdom(spec: Option<&str>) -> anyhow::Result<Vec<Pile>> {
    let cards: Vec<Card> = match spec {
        None => DEFAULT_KINGDOM.to_vec(),
        Some(list) => list
            .split(',')
            .map(str::trim)
            .map(|name| {
                Card::from_name(name).with_context(|| format!("unknown kingdom card '{name}'"))
            })
            .collect::<anyhow::Result<_>>()?,
    };
    Ok(cards
        .into_iter()
        .map(|c| Pile::of(c, KINGDOM_PILE_SIZE))
        .collect())
}

fn make_provider(kind: ControllerType, seed: Option<u64>, seat: u64) -> Box<dyn DecisionProvider> {
    match kind {
        ControllerType::Tui => Box::new(InteractiveController::new()),
        ControllerType::Random => match seed {
            // Offset per seat so seats don't mirror each other
            Some(s) => Box::new(RandomController::with_seed(s.wrapping_add(seat))),
            None => Box::new(RandomController::new()),
        },
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if !cli.controllers.is_empty() && cli.controllers.len() != cli.players.len() {
        bail!(
            "{} players but {} controllers (give one per player, or none for all-human)",
            cli.players.len(),
            cli.controllers.len()
        );
    }

    let kingdom = parse_kingdom(cli.kingdom.as_deref())?;
    let names: Vec<PlayerName> = cli.players.iter().map(|s| PlayerName::new(s.clone())).collect();

    let mut game = GameState::new(names, kingdom)?;
    if let Some(seed) = cli.seed {
        game.seed_rng(seed);
    }
    game.logger.set_verbosity(cli.verbosity.0);

    let mut providers: Vec<Box<dyn DecisionProvider>> = (0..cli.players.len())
        .map(|seat| {
            let kind = cli
                .controllers
                .get(seat)
                .copied()
                .unwrap_or(ControllerType::Tui);
            make_provider(kind, cli.seed, seat as u64)
        })
        .collect();

    let report = GameLoop::new(&mut game)
        .with_max_turns(cli.max_turns)
        .run_game(&mut providers)?;

    println!("Game over after {} turns ({:?}).", report.turns_played, report.end_reason);
    for (idx, score) in report.scores.iter().enumerate() {
        let marker = if idx == report.winner { " (winner)" } else { "" };
        let cards: Vec<&str> = score.cards.iter().map(|c| c.name()).collect();
        println!(
            "{}: {} Points.{}\n{}\n",
            score.name,
            score.victory_points,
            marker,
            cards.join(", ")
        );
    }
    Ok(())
}
