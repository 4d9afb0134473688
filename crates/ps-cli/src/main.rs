//! PionStat CLI

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

use ps_core::{AnalysisConfig, UncertaintyFormula};
use ps_events::kinematics::{pdg_name, Kinematics};
use ps_events::EventReader;
use ps_viz::{BatchSeriesArtifact, TimingArtifact};

mod discover;
mod report;
mod run;

#[derive(Parser)]
#[command(name = "pionstat")]
#[command(about = "PionStat - pion count asymmetry statistics")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

/// CLI spelling of [`UncertaintyFormula`].
#[derive(Debug, Clone, Copy, ValueEnum)]
enum UncertaintyArg {
    /// sqrt(total) / event_count
    SqrtTotalOverCount,
    /// sqrt(average)
    SqrtAverage,
}

impl From<UncertaintyArg> for UncertaintyFormula {
    fn from(arg: UncertaintyArg) -> Self {
        match arg {
            UncertaintyArg::SqrtTotalOverCount => UncertaintyFormula::SqrtTotalOverCount,
            UncertaintyArg::SqrtAverage => UncertaintyFormula::SqrtAverage,
        }
    }
}

/// Statistics flags shared by `analyze` and `run`. Flags override the
/// config file, which overrides the built-in defaults.
#[derive(Args)]
struct StatsOpts {
    /// JSON config file (missing fields take defaults)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Events per batch snapshot
    #[arg(long)]
    batch_size: Option<usize>,

    /// Per-batch uniform subsample size (enables estimation mode)
    #[arg(long)]
    sample_size: Option<usize>,

    /// RNG seed for the subsampler
    #[arg(long)]
    seed: Option<u64>,

    /// Uncertainty convention
    #[arg(long, value_enum)]
    uncertainty: Option<UncertaintyArg>,

    /// Loose "large / not large" significance threshold
    #[arg(long)]
    threshold: Option<f64>,

    /// Strict "statistically significant" threshold, in sigma
    #[arg(long)]
    sigma_threshold: Option<f64>,
}

impl StatsOpts {
    fn to_config(&self) -> Result<AnalysisConfig> {
        let mut cfg = match &self.config {
            Some(path) => AnalysisConfig::from_json_file(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => AnalysisConfig::default(),
        };
        if let Some(v) = self.batch_size {
            cfg.batch_size = v;
        }
        if let Some(v) = self.sample_size {
            cfg.sample_size = Some(v);
        }
        if let Some(v) = self.seed {
            cfg.seed = v;
        }
        if let Some(v) = self.uncertainty {
            cfg.uncertainty = v.into();
        }
        if let Some(v) = self.threshold {
            cfg.significance_threshold = v;
        }
        if let Some(v) = self.sigma_threshold {
            cfg.sigma_threshold = v;
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Count pions in one event file and report the statistics
    Analyze {
        /// Input event file
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        stats: StatsOpts,

        /// Output file for the summary (pretty JSON). Defaults to stdout report only.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for the batch-series plot artifact (pretty JSON)
        #[arg(long)]
        series_out: Option<PathBuf>,
    },

    /// Analyze every matching file in a directory, fanned out in parallel
    Run {
        /// Directory holding the event files
        #[arg(long)]
        data_dir: PathBuf,

        /// File name pattern (at most one `*`)
        #[arg(long, default_value = "output-Set*.txt")]
        pattern: String,

        /// Worker threads (0 = auto)
        #[arg(long, default_value = "0")]
        jobs: usize,

        #[command(flatten)]
        stats: StatsOpts,

        /// Output file for all summaries (pretty JSON array)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output file for the execution-time plot artifact (pretty JSON)
        #[arg(long)]
        timing_out: Option<PathBuf>,
    },

    /// Print per-particle kinematics for the first events of a file
    Kinematics {
        /// Input event file
        #[arg(short, long)]
        input: PathBuf,

        /// Number of events to print
        #[arg(long, default_value = "1")]
        limit: usize,
    },

    /// Print version
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Analyze { input, stats, output, series_out } => {
            cmd_analyze(&input, &stats, output.as_ref(), series_out.as_ref())
        }
        Commands::Run { data_dir, pattern, jobs, stats, output, timing_out } => {
            cmd_run(&data_dir, &pattern, jobs, &stats, output.as_ref(), timing_out.as_ref())
        }
        Commands::Kinematics { input, limit } => cmd_kinematics(&input, limit),
        Commands::Version => {
            println!("pionstat {}", ps_core::VERSION);
            Ok(())
        }
    }
}

fn cmd_analyze(
    input: &PathBuf,
    stats: &StatsOpts,
    output: Option<&PathBuf>,
    series_out: Option<&PathBuf>,
) -> Result<()> {
    let config = stats.to_config()?;
    let outcome = run::process_file(input, &config)
        .with_context(|| format!("processing {}", input.display()))?;

    print!("{}", report::render_summary(&file_label(input), &outcome.summary));

    if let Some(path) = output {
        write_json(Some(path), serde_json::to_value(&outcome.summary)?)?;
    }
    if let Some(path) = series_out {
        let artifact = BatchSeriesArtifact::from_aggregate(&outcome.aggregate);
        write_json(Some(path), serde_json::to_value(&artifact)?)?;
    }
    Ok(())
}

fn cmd_run(
    data_dir: &PathBuf,
    pattern: &str,
    jobs: usize,
    stats: &StatsOpts,
    output: Option<&PathBuf>,
    timing_out: Option<&PathBuf>,
) -> Result<()> {
    let config = stats.to_config()?;
    let files = discover::find_event_files(data_dir, pattern)?;
    if files.is_empty() {
        println!("No data files found.");
        return Ok(());
    }
    tracing::info!(files = files.len(), jobs, "starting multi-file run");

    let started = Instant::now();
    let results = run::run_many(&files, &config, jobs);

    let mut summaries = Vec::new();
    let mut timings = Vec::new();
    for (path, result) in &results {
        let label = file_label(path);
        match result {
            Ok(outcome) => {
                print!("{}", report::render_summary(&label, &outcome.summary));
                println!();
                summaries.push(serde_json::json!({
                    "file": &label,
                    "summary": &outcome.summary,
                }));
                timings.push((label, outcome.seconds));
            }
            Err(err) => {
                tracing::error!(path = %path.display(), %err, "skipping file");
            }
        }
    }

    let total_seconds = started.elapsed().as_secs_f64();
    println!("Total execution time: {total_seconds:.2} seconds.");

    if let Some(path) = output {
        write_json(Some(path), serde_json::Value::Array(summaries))?;
    }
    if let Some(path) = timing_out {
        let artifact = TimingArtifact::from_timings(&timings, total_seconds);
        write_json(Some(path), serde_json::to_value(&artifact)?)?;
    }
    Ok(())
}

fn cmd_kinematics(input: &PathBuf, limit: usize) -> Result<()> {
    let reader = EventReader::open(input)
        .with_context(|| format!("opening {}", input.display()))?;

    for event in reader.take(limit) {
        println!(
            "event id is {} and there are {} particles",
            event.event_id,
            event.particles.len()
        );
        for (i, particle) in event.particles.iter().enumerate() {
            let k = Kinematics::of(particle);
            println!(
                "  Particle {}: {:<10} p={:.6} pt={:.6} eta={:.6} phi={:.6}",
                i + 1,
                pdg_name(particle.pdg_code),
                k.p,
                k.pt,
                k.eta,
                k.phi
            );
        }
    }
    Ok(())
}

fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn write_json(output: Option<&PathBuf>, value: serde_json::Value) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&value)?)?;
    } else {
        println!("{}", serde_json::to_string_pretty(&value)?);
    }
    Ok(())
}
