//! finetune CLI - tweak the fundamental constants and see if life survives

#![deny(warnings)]

// Global invariants enforced:
// - Deterministic output ordering
// - Identical input yields byte-for-byte identical output

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use finetune_core::config::{self, ConstantOverrides, ResolvedConfig};
use finetune_core::report::{
    render_reference_json, render_reference_text, render_sweep_csv, render_sweep_json,
    render_sweep_text,
};
use finetune_core::{evaluate, render_json, render_text, sweep, EvaluateOptions, TextOptions};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "finetune")]
#[command(about = "Tweak the fundamental constants of physics and see if the universe remains life-permitting")]
#[command(version = env!("FINETUNE_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a universe and classify each constant and derived score
    Evaluate {
        #[command(flatten)]
        constants: ConstantArgs,

        /// Ignore saved values and start from our universe (all constants 1.0)
        #[arg(long)]
        reset: bool,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Append the life-score sweep over G and Λ
        #[arg(long)]
        sweep: bool,

        /// Show the narrative explanation (overrides config file)
        #[arg(long)]
        explain: bool,

        /// Path to config file (default: auto-discover)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Sweep the life score across G and Λ with S and α held fixed
    Sweep {
        /// Strong force to hold fixed (default: config or 1.0)
        #[arg(long)]
        strong: Option<f64>,

        /// Electromagnetic coupling to hold fixed (default: config or 1.0)
        #[arg(long, visible_alias = "electromagnetic")]
        alpha: Option<f64>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: SweepFormat,

        /// Path to config file (default: auto-discover)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Show real-world constants and how finely each is tuned
    Reference {
        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
    /// Validate or inspect a configuration file
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Per-constant overrides; anything omitted comes from config or defaults
#[derive(Args)]
struct ConstantArgs {
    /// Gravitational constant G, relative to ours [0.1, 10.0]
    #[arg(long)]
    gravity: Option<f64>,

    /// Electromagnetic coupling α, relative to ours [0.01, 2.0]
    #[arg(long, visible_alias = "electromagnetic")]
    alpha: Option<f64>,

    /// Strong nuclear force, relative to ours [0.1, 10.0]
    #[arg(long)]
    strong: Option<f64>,

    /// Cosmological constant Λ, relative to ours [0.0, 2.0]
    #[arg(long, visible_alias = "cosmological")]
    lambda: Option<f64>,
}

impl ConstantArgs {
    fn overrides(&self) -> ConstantOverrides {
        ConstantOverrides {
            gravity: self.gravity,
            alpha: self.alpha,
            strong: self.strong,
            lambda: self.lambda,
        }
    }
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate a config file without running an evaluation
    Validate {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show the resolved configuration (merged defaults + config file)
    Show {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum SweepFormat {
    Text,
    Json,
    Csv,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            constants,
            reset,
            format,
            sweep: include_sweep,
            explain,
            config: config_path,
        } => {
            let resolved = load_config(config_path.as_deref())?;
            let constants = resolved.merge_constants(&constants.overrides(), reset)?;

            let evaluation = evaluate(&constants, EvaluateOptions { include_sweep })?;

            match format {
                OutputFormat::Text => {
                    let options = TextOptions {
                        precision: resolved.precision,
                        explain: explain || resolved.explain,
                    };
                    print!("{}", render_text(&evaluation, &options));
                }
                OutputFormat::Json => {
                    println!("{}", render_json(&evaluation));
                }
            }
        }
        Commands::Sweep {
            strong,
            alpha,
            format,
            config: config_path,
        } => {
            let resolved = load_config(config_path.as_deref())?;
            let strong = strong.unwrap_or_else(|| resolved.constants.strong());
            let alpha = alpha.unwrap_or_else(|| resolved.constants.electromagnetic());

            let grid = sweep(strong, alpha).context("invalid sweep parameters")?;

            match format {
                SweepFormat::Text => print!("{}", render_sweep_text(&grid, resolved.precision)),
                SweepFormat::Json => println!("{}", render_sweep_json(&grid)),
                SweepFormat::Csv => print!("{}", render_sweep_csv(&grid)),
            }
        }
        Commands::Reference { format } => match format {
            OutputFormat::Text => print!("{}", render_reference_text()),
            OutputFormat::Json => println!("{}", render_reference_json()),
        },
        Commands::Config { action } => match action {
            ConfigAction::Validate { path } => {
                let working_dir = std::env::current_dir()?;
                let resolved = config::load_and_resolve(&working_dir, path.as_deref());

                match resolved {
                    Ok(config) => {
                        if let Some(ref p) = config.config_path {
                            println!("Config valid: {}", p.display());
                        } else {
                            println!("No config file found. Using defaults.");
                        }
                    }
                    Err(e) => {
                        eprintln!("Config validation failed: {:#}", e);
                        std::process::exit(1);
                    }
                }
            }
            ConfigAction::Show { path } => {
                let working_dir = std::env::current_dir()?;
                let resolved = config::load_and_resolve(&working_dir, path.as_deref())
                    .context("failed to load configuration")?;
                print_resolved_config(&resolved);
            }
        },
    }

    Ok(())
}

/// Load config from an explicit path or the current directory
fn load_config(config_path: Option<&Path>) -> anyhow::Result<ResolvedConfig> {
    let working_dir = std::env::current_dir()?;
    config::load_and_resolve(&working_dir, config_path).context("failed to load configuration")
}

fn print_resolved_config(resolved: &ResolvedConfig) {
    println!("Configuration:");
    if let Some(ref p) = resolved.config_path {
        println!("  Source: {}", p.display());
    } else {
        println!("  Source: defaults (no config file found)");
    }
    println!();
    println!("Universe:");
    for (kind, value) in resolved.constants.entries() {
        let range = kind.range();
        println!(
            "  {} ({}): {}  [{}, {}] step {}",
            kind,
            kind.symbol(),
            value,
            range.min,
            range.max,
            range.step
        );
    }
    println!();
    println!("Output:");
    println!("  explain: {}", resolved.explain);
    println!("  precision: {}", resolved.precision);
}
