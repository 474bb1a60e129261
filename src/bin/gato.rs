//! Gato CLI - build and inspect symmetry-reduced Tic-Tac-Toe game trees
//!
//! This binary drives the library end to end:
//! - Expanding the game tree with symmetric-sibling pruning
//! - Rendering and canonicalizing board labels
//! - Counting reachable and canonical positions
//! - Playing random games
//! - Exporting expanded trees for analysis

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;

use gato::{BoardState, Game, GameOutcome, GameTree, collect_canonical_labels, export};

#[derive(Parser)]
#[command(name = "gato")]
#[command(version, about = "Tic-Tac-Toe game-state trees with symmetry reduction", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand the game tree from the empty board and print statistics
    Tree {
        /// Maximum depth to expand (full tree when omitted)
        #[arg(long)]
        depth: Option<usize>,
    },

    /// Render a board from its label and report its status
    Show {
        /// Board label, e.g. "XO......._X" (the turn suffix is optional)
        label: String,
    },

    /// Print the canonical form of a board under the eight symmetries
    Canonical { label: String },

    /// Count reachable states and canonical positions
    Count,

    /// Play a random game and print every position
    Play {
        /// RNG seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Export an expanded tree as JSON or CSV
    Export {
        #[arg(long, value_enum, default_value_t = ExportFormat::Json)]
        format: ExportFormat,

        /// Maximum depth to expand before exporting (full tree when omitted)
        #[arg(long)]
        depth: Option<usize>,

        /// Output file path
        #[arg(long)]
        output: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ExportFormat {
    Json,
    Csv,
}

fn main() -> Result<()> {
    match Cli::parse().command {
        Commands::Tree { depth } => run_tree(depth),
        Commands::Show { label } => run_show(&label),
        Commands::Canonical { label } => run_canonical(&label),
        Commands::Count => run_count(),
        Commands::Play { seed } => run_play(seed),
        Commands::Export {
            format,
            depth,
            output,
        } => run_export(format, depth, &output),
    }
}

/// Create a spinner for long-running enumerations
fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("Invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn expand(tree: &mut GameTree, depth: Option<usize>) -> usize {
    match depth {
        Some(d) => tree.expand_to_depth(d),
        None => tree.expand_all(),
    }
}

fn run_tree(depth: Option<usize>) -> Result<()> {
    let pb = spinner("Expanding game tree");
    let mut tree = GameTree::new();
    let total = expand(&mut tree, depth);
    pb.finish_with_message(format!("Expanded {total} states"));

    println!("Nodes per depth:");
    for (d, count) in tree.nodes_per_depth().iter().enumerate() {
        println!("  {d}: {count}");
    }
    println!("Total: {total}");
    Ok(())
}

fn run_show(label: &str) -> Result<()> {
    let board = BoardState::from_string(label)?;
    println!("{board}");
    println!();
    println!("Label:      {}", board.encode());
    println!("Moves:      {}", board.move_count());
    if let Some(winner) = board.winner() {
        println!("Winner:     {winner}");
    } else if board.is_draw() {
        println!("Outcome:    draw");
    } else {
        println!("To move:    {}", board.to_move);
    }
    Ok(())
}

fn run_canonical(label: &str) -> Result<()> {
    let board = BoardState::from_string(label)?;
    let canonical = board.canonical();
    println!("Original:\n{board}");
    println!();
    println!("Canonical:\n{canonical}");
    println!();
    println!("Canonical label: {}", canonical.encode());
    Ok(())
}

fn run_count() -> Result<()> {
    let pb = spinner("Enumerating reachable states");
    let reachable = BoardState::count_reachable_states();
    pb.finish_with_message(format!("{reachable} reachable states"));

    let pb = spinner("Collecting canonical positions");
    let canonical = collect_canonical_labels().len();
    pb.finish_with_message(format!("{canonical} canonical positions"));

    println!("Reachable states:     {reachable}");
    println!("Canonical positions:  {canonical}");
    Ok(())
}

fn run_play(seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let game = Game::play_random(&mut rng)?;
    for (i, state) in game.state_sequence()?.iter().enumerate() {
        println!("Move {i}:");
        println!("{state}");
        println!();
    }

    match game.outcome {
        Some(GameOutcome::Win(player)) => println!("Winner: {player}"),
        Some(GameOutcome::Draw) => println!("Draw"),
        None => bail!("random playout ended without an outcome"),
    }
    Ok(())
}

fn run_export(format: ExportFormat, depth: Option<usize>, output: &Path) -> Result<()> {
    let pb = spinner("Expanding game tree");
    let mut tree = GameTree::new();
    let total = expand(&mut tree, depth);
    pb.finish_with_message(format!("Expanded {total} states"));

    match format {
        ExportFormat::Json => export::write_json(&tree, output)?,
        ExportFormat::Csv => export::write_csv(&tree, output)?,
    }

    println!("Wrote {total} records to {}", output.display());
    Ok(())
}
