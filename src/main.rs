use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use fitcalc::{
    config::{Config, ConfigStore, FileConfigStore},
    package::{self, SampleSet},
    OutputFormat, Runner, WorkoutPackage,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// workout calculator for running, walking and swimming sessions
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Computes distance, average speed and calories burned for running (RUN), sports walking (WLK) and swimming (SWM) workouts, printing one summary line per workout."
)]
pub struct Cli {
    /// workout to compute, as CODE:v1,v2,... (repeatable)
    #[clap(short = 'w', long = "workout")]
    workouts: Vec<WorkoutPackage>,

    /// read workouts from a JSON or CSV file
    #[clap(short = 'i', long)]
    input: Option<PathBuf>,

    /// bundled sample set to run when no workouts are given
    #[clap(short = 's', long)]
    sample_set: Option<String>,

    /// list the bundled sample sets and exit
    #[clap(long)]
    list_samples: bool,

    /// output format
    #[clap(short = 'f', long, value_enum)]
    format: Option<OutputFormat>,

    /// config file to use instead of the default location
    #[clap(long)]
    config: Option<PathBuf>,

    /// store the effective format and sample set as defaults
    #[clap(long)]
    save_config: bool,

    /// more log output on stderr (-v info, -vv debug)
    #[clap(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    /// Overlay command line flags on the stored config
    fn effective_config(&self, stored: Config) -> Config {
        Config {
            format: self.format.unwrap_or(stored.format),
            sample_set: self.sample_set.clone().unwrap_or(stored.sample_set),
            log_filter: stored.log_filter,
        }
    }

    fn log_filter(&self, cfg: &Config) -> EnvFilter {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
        let default = match self.verbose {
            0 => cfg.log_filter.as_deref().unwrap_or("warn"),
            1 => "info",
            _ => "debug",
        };
        EnvFilter::try_new(default).unwrap_or_else(|_| EnvFilter::new("warn"))
    }

    fn packages(&self, cfg: &Config) -> Result<Vec<WorkoutPackage>> {
        let mut packages = Vec::new();
        if let Some(path) = &self.input {
            let loaded = package::load_file(path)
                .with_context(|| format!("failed to read workouts from {}", path.display()))?;
            packages.extend(loaded);
        }
        packages.extend(self.workouts.iter().cloned());

        if packages.is_empty() {
            let set = SampleSet::load(&cfg.sample_set)
                .with_context(|| format!("failed to load sample set {:?}", cfg.sample_set))?;
            debug!(set = %set.name, "using bundled sample set");
            packages = set.packages;
        }
        Ok(packages)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = match &cli.config {
        Some(path) => FileConfigStore::with_path(path),
        None => FileConfigStore::new(),
    };
    let cfg = cli.effective_config(store.load());

    let _ = tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter(&cfg))
        .with_writer(io::stderr)
        .try_init();
    debug!(path = %store.path().display(), ?cfg, "configuration resolved");

    if cli.list_samples {
        for name in SampleSet::names() {
            println!("{name}");
        }
        return Ok(());
    }

    if cli.save_config {
        store
            .save(&cfg)
            .with_context(|| format!("failed to save config to {}", store.path().display()))?;
        info!(path = %store.path().display(), "saved config");
    }

    let packages = cli.packages(&cfg)?;
    let mut runner = Runner::new(io::stdout().lock(), cfg.format);
    let report = runner.run(&packages)?;

    if report.has_failures() {
        bail!("{} of {} workouts failed", report.failed, report.total());
    }
    Ok(())
}
