use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "scrolly", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a scripted scroll timeline and write per-frame samples.
    Simulate(SimulateArgs),
    /// Write the built-in studio content deck.
    Seed(SeedArgs),
    /// Validate a content deck and print a summary.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input simulation script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output samples JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Pretty-print the samples JSON.
    #[arg(long)]
    pretty: bool,
}

#[derive(Parser, Debug)]
struct SeedArgs {
    /// Output deck JSON path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input content deck JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Simulate(args) => cmd_simulate(args),
        Command::Seed(args) => cmd_seed(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn create_out_file(path: &Path) -> anyhow::Result<BufWriter<File>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    Ok(BufWriter::new(f))
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let script = scrolly::SimScript::from_path(&args.in_path)?;
    let samples = scrolly::run_script(&script)?;

    let mut w = create_out_file(&args.out)?;
    if args.pretty {
        serde_json::to_writer_pretty(&mut w, &samples).context("write samples JSON")?;
    } else {
        serde_json::to_writer(&mut w, &samples).context("write samples JSON")?;
    }
    w.flush()
        .with_context(|| format!("flush '{}'", args.out.display()))?;

    eprintln!("wrote {} samples to {}", samples.len(), args.out.display());
    Ok(())
}

fn cmd_seed(args: SeedArgs) -> anyhow::Result<()> {
    let deck = scrolly::studio_deck();

    let mut w = create_out_file(&args.out)?;
    deck.to_writer_pretty(&mut w)?;
    w.flush()
        .with_context(|| format!("flush '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let deck = scrolly::ContentDeck::from_path(&args.in_path)?;
    deck.validate()?;

    eprintln!(
        "{}: ok ({} hero phrases, {} showcase phases, {} nav items)",
        args.in_path.display(),
        deck.hero_phase_count(),
        deck.showcase_phase_count(),
        deck.nav.len()
    );
    Ok(())
}
