use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};

use padcomb::pipeline::config::{self, BankConfig};
use padcomb::pipeline::{CombOptions, run_comb};
use padcomb::shared::DEFAULT_OUT_DIR;

/// Combine per-pad samples across pattern folders
#[derive(Parser)]
#[command(name = "padcomb")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write one combined WAV per pad into <out>/<bank name>/
    Comb(CombArgs),
}

#[derive(Args)]
struct CombArgs {
    /// Bank directory; every subfolder is a pattern
    base: PathBuf,

    /// Output root [default: out, or out_dir from .padcomb.json]
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Only use these pattern folders (repeatable)
    #[arg(short, long = "pattern")]
    patterns: Vec<String>,

    /// Pads combined at once
    #[arg(short, long, default_value_t = 1)]
    jobs: usize,

    /// Remember --pattern/--out in <base>/.padcomb.json
    #[arg(long)]
    save: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Comb(args) => comb(args),
    }
}

fn comb(args: CombArgs) -> anyhow::Result<()> {
    let BankConfig { patterns: saved_patterns, out_dir: saved_out } =
        config::load_config(&args.base).context("load bank config")?;

    // flags beat the config file, which beats the defaults
    let patterns = if args.patterns.is_empty() { saved_patterns } else { args.patterns };
    let out_root = args
        .out
        .or_else(|| saved_out.map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR));

    let opts = CombOptions {
        base: args.base,
        out_root,
        patterns,
        jobs: args.jobs.max(1),
    };
    let report = run_comb(&opts).with_context(|| format!("combine {}", opts.base.display()))?;

    if args.save {
        let config = BankConfig {
            patterns: opts.patterns.clone(),
            out_dir: Some(opts.out_root.to_string_lossy().into_owned()),
        };
        config::save_config(&opts.base, &config).context("save bank config")?;
    }

    if !report.failed.is_empty() {
        anyhow::bail!(
            "{} of {} pads failed",
            report.failed.len(),
            report.failed.len() + report.written.len()
        );
    }
    log::info!("done, {} files written", report.written.len());
    Ok(())
}
