use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use spot_deck::{
    build_with_config, validate_deck, BuildConfig, BuildOutcome, Deck, DeckRng, ProjectivePlane,
};

#[derive(Parser)]
#[command(name = "spot-deck")]
#[command(about = "Build and check decks where every pair of cards shares exactly one symbol")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a deck with the greedy builder
    Build {
        /// Symbols on each card
        #[arg(short = 'k', long, env = "SYMBOLS_PER_CARD")]
        symbols_per_card: Option<usize>,

        /// Iteration cap (safety stop)
        #[arg(long)]
        max_iterations: Option<u32>,

        /// JSON build config; flags override its fields
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the deck as JSON instead of the text dump
        #[arg(long)]
        json: bool,
    },

    /// Build the complete deck of a projective plane
    Plane {
        /// Prime plane order; cards get order + 1 symbols
        #[arg(short, long, default_value_t = 7)]
        order: u32,

        /// Shuffle symbols on each card with this seed
        #[arg(long)]
        seed: Option<u64>,

        /// Print the deck as JSON instead of the text dump
        #[arg(long)]
        json: bool,
    },

    /// Validate a deck stored as JSON
    Check {
        /// Deck file: an array of symbol arrays
        input: PathBuf,

        /// Expected symbols per card
        #[arg(short = 'k', long)]
        symbols_per_card: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Build {
            symbols_per_card,
            max_iterations,
            config,
            json,
        } => run_build(load_config(config, symbols_per_card, max_iterations)?, json),
        Command::Plane { order, seed, json } => run_plane(order, seed, json),
        Command::Check {
            input,
            symbols_per_card,
        } => run_check(&input, symbols_per_card),
    }
}

fn load_config(
    path: Option<PathBuf>,
    symbols_per_card: Option<usize>,
    max_iterations: Option<u32>,
) -> Result<BuildConfig> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            BuildConfig::from_json(&text)
                .with_context(|| format!("Invalid config {}", path.display()))?
        }
        None => BuildConfig::default(),
    };

    if let Some(k) = symbols_per_card {
        config = config.with_symbols_per_card(k);
    }
    if let Some(cap) = max_iterations {
        config = config.with_max_iterations(cap);
    }
    config.validate()?;
    Ok(config)
}

fn print_deck(deck: &Deck, json: bool) -> Result<()> {
    if json {
        println!("{}", deck.to_json()?);
    } else {
        println!("{deck}");
    }
    Ok(())
}

fn run_build(config: BuildConfig, json: bool) -> Result<()> {
    let build = build_with_config(config.clone())?;
    print_deck(&build.deck, json)?;

    let report = validate_deck(&build.deck, Some(config.symbols_per_card));
    eprintln!(
        "{} cards, {} symbols, {} iterations: {}",
        build.deck.len(),
        report.frequencies.len(),
        build.stats.iterations,
        build.outcome
    );
    if !report.is_valid() {
        anyhow::bail!("built deck failed validation: {:?}", report.pair_violations);
    }
    if let BuildOutcome::IterationCapReached { .. } = build.outcome {
        anyhow::bail!("build did not terminate within {} iterations", config.max_iterations);
    }
    Ok(())
}

fn run_plane(order: u32, seed: Option<u64>, json: bool) -> Result<()> {
    let plane = ProjectivePlane::new(order)?;
    let deck = match seed {
        Some(seed) => plane.shuffled_deck(&mut DeckRng::new(seed).for_context("layout")),
        None => plane.to_deck(),
    };
    print_deck(&deck, json)
}

fn run_check(input: &Path, symbols_per_card: Option<usize>) -> Result<()> {
    let text = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read deck {}", input.display()))?;
    let deck = Deck::from_json(&text).context("Failed to parse deck")?;

    let report = validate_deck(&deck, symbols_per_card);
    println!("{}", report.frequencies);
    for pair in &report.pair_violations {
        println!(
            "Cards {} and {} share {} symbols",
            pair.first + 1,
            pair.second + 1,
            pair.shared
        );
    }
    for size in &report.size_violations {
        println!("Card {} has {} symbols", size.card + 1, size.size);
    }

    if !report.is_valid() {
        anyhow::bail!("deck of {} cards is invalid", deck.len());
    }
    println!("Deck of {} cards is valid", deck.len());
    Ok(())
}
