//! kgp-cli — offline verifier for the Kaspa genesis-to-tip pruning-point chain.
//!
//! Recomputes, from a local consensus database, that the current chain
//! descends from an empty UTXO set and the pinned genesis block. Emits a
//! pass/fail result and a phase-by-phase trace; never mutates the store.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use kgp_store::{JsonSnapshotKvSource, KvSource, RocksKvSource};
use kgp_verify::{driver, PreCheckpointOutcome, UtxoClassification, VerificationReport};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum NodeType {
    Rust,
    Go,
}

/// Offline cryptographic verifier for the Kaspa genesis-to-tip pruning-point chain.
#[derive(Parser)]
#[command(name = "kgp-cli")]
#[command(version, about = "Verify a Kaspa consensus database descends from genesis.")]
struct Cli {
    /// Binary layout convention of the consensus database.
    #[arg(long, value_enum)]
    node_type: NodeType,

    /// Path to the node's data directory.
    #[arg(long)]
    datadir: PathBuf,

    /// Path to a pre-extracted JSON sidecar covering the pre-checkpoint chain.
    #[arg(long)]
    pre_checkpoint_datadir: Option<PathBuf>,

    /// Emit a per-step trace during chain walks.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    match run(&cli) {
        Ok(report) => {
            print_report(&report);
            std::process::exit(0);
        }
        Err(err) => {
            eprintln!("{} {err:#}", "verification failed:".red().bold());
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> Result<VerificationReport> {
    if cli.node_type == NodeType::Go {
        bail!("--node-type go is not implemented: the Go/LevelDB store layout uses a different codec");
    }

    let consensus_dir = resolve_rust_datadir(&cli.datadir)?;
    println!("{} {}", "opening store:".cyan().bold(), consensus_dir.display());

    let mut current_store = RocksKvSource::open(&consensus_dir)
        .with_context(|| format!("failed to open consensus store at {}", consensus_dir.display()))?;

    let pre_checkpoint_store = cli
        .pre_checkpoint_datadir
        .as_ref()
        .map(|path| {
            JsonSnapshotKvSource::open(path)
                .with_context(|| format!("failed to load pre-checkpoint sidecar at {}", path.display()))
        })
        .transpose()?;

    println!("{}", "running verification phases...".cyan().bold());
    let result = driver::verify(
        &current_store,
        pre_checkpoint_store.as_ref().map(|s| s as &dyn KvSource),
    );

    current_store.close();
    Ok(result?)
}

/// Append `consensus/consensus-003` unless the directory already ends in it.
fn resolve_rust_datadir(datadir: &Path) -> Result<PathBuf> {
    let already_suffixed = datadir
        .file_name()
        .map(|name| name == "consensus-003")
        .unwrap_or(false);

    let resolved = if already_suffixed {
        datadir.to_path_buf()
    } else {
        datadir.join("consensus").join("consensus-003")
    };

    if !resolved.exists() {
        bail!("consensus directory not found: {}", resolved.display());
    }

    Ok(resolved)
}

fn print_report(report: &VerificationReport) {
    println!("{}", "=== verification passed ===".green().bold());
    println!("genesis hash:  {}", report.genesis_hash);
    println!("chain tip:     {}", report.chain_tip);
    println!("walk steps:    {}", report.walk_steps);
    println!(
        "genesis bits:  {:#x} (difficulty {})",
        report.genesis_bits,
        kgp_core::difficulty::bits_to_difficulty(report.genesis_bits)
    );

    let classification = match report.utxo_classification {
        UtxoClassification::OriginalGenesis => "original genesis (empty UTXO set)".yellow(),
        UtxoClassification::HardwiredGenesisWithCheckpoint => {
            "hardwired genesis with checkpoint UTXO set".yellow()
        }
    };
    println!("UTXO origin:   {classification}");

    match report.pre_checkpoint {
        PreCheckpointOutcome::Skipped => println!("pre-checkpoint: {}", "skipped".dimmed()),
        PreCheckpointOutcome::Verified { walk_steps } => {
            println!("pre-checkpoint: {} ({walk_steps} steps to original genesis)", "verified".green())
        }
    }
}
