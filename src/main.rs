//! ivss-tools: CVSS v4.0 / industrial vulnerability score comparison tool

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use ivss_tools::{
    cli,
    model::profile::{
        PhysicalDamagePotential, ProcessAvailabilityImpact, RecoveryComplexity, SafetyImpact,
    },
    model::IndustrialImpactProfile,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ivss-tools")]
#[command(version)]
#[command(about = "Compare CVSS v4.0 base scores against industrial vulnerability scores", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  All records scored
    1  Some records were rejected (lenient mode)
    2  Error occurred

EXAMPLES:
    # Compare the built-in industrial sample set
    ivss-tools compare

    # Compare records from a file, JSON output
    ivss-tools compare records.json -o json > report.json

    # Score one vector with an industrial profile
    ivss-tools score 'CVSS:4.0/AV:N/AC:L/AT:N/PR:N/UI:N/VC:H/VI:H/VA:H/SC:N/SI:N/SA:N' \\
        --safety catastrophic --process-availability major \\
        --physical-damage major --recovery irrecoverable")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to a YAML configuration file (extension weights, error policy)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `compare` subcommand
#[derive(Parser)]
struct CompareArgs {
    /// JSON records file (the built-in sample set when omitted)
    records: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Fail on the first bad record instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Single-line JSON output (implies -o json)
    #[arg(long)]
    compact: bool,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// CVSS v4.0 vector string
    vector: String,

    /// Safety impact factor
    #[arg(long)]
    safety: Option<SafetyImpact>,

    /// Process availability impact factor
    #[arg(long)]
    process_availability: Option<ProcessAvailabilityImpact>,

    /// Physical damage potential factor
    #[arg(long)]
    physical_damage: Option<PhysicalDamagePotential>,

    /// Recovery complexity factor
    #[arg(long)]
    recovery: Option<RecoveryComplexity>,

    /// Output format
    #[arg(short, long, default_value = "summary")]
    output: ReportFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a batch of records under both models and compare
    Compare(CompareArgs),

    /// Score a single CVSS v4.0 vector, optionally with an industrial profile
    Score(ScoreArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Compare(args) => {
            let output = if args.compact {
                ReportFormat::Json
            } else {
                args.output
            };
            let exit_code = cli::run_compare(cli::CompareOptions {
                records: args.records,
                config: cli.config,
                strict: args.strict,
                output,
                output_file: args.output_file,
                compact: args.compact,
            })?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Score(args) => {
            let profile = build_profile(
                args.safety,
                args.process_availability,
                args.physical_damage,
                args.recovery,
            )?;
            cli::run_score(cli::ScoreOptions {
                vector: args.vector,
                profile,
                config: cli.config,
                output: args.output,
            })?;
            Ok(())
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "ivss-tools", &mut io::stdout());
            Ok(())
        }
    }
}

/// All four factors or none: a partial profile is a usage error.
fn build_profile(
    safety: Option<SafetyImpact>,
    process_availability: Option<ProcessAvailabilityImpact>,
    physical_damage: Option<PhysicalDamagePotential>,
    recovery: Option<RecoveryComplexity>,
) -> Result<Option<IndustrialImpactProfile>> {
    match (safety, process_availability, physical_damage, recovery) {
        (None, None, None, None) => Ok(None),
        (Some(s), Some(p), Some(d), Some(r)) => {
            Ok(Some(IndustrialImpactProfile::new(s, p, d, r)))
        }
        _ => anyhow::bail!(
            "an industrial profile needs all four factors: \
             --safety, --process-availability, --physical-damage, --recovery"
        ),
    }
}
