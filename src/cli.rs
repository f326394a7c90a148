use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use smooth_progress::ColumnConfig;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render JSON-lines ticks through the smoothed columns
    Replay(Replay),
    /// Drive a simulated workload in a terminal progress display
    Demo(Demo),
}

#[derive(Args, Clone, Debug, Default)]
pub struct ColumnArgs {
    /// JSON file with column options; unknown keys are passed to the renderer
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Smoothing factor in [0, 1]; higher follows new samples more closely
    #[arg(long)]
    pub smoothing: Option<f64>,

    /// Unit label for the rate column
    #[arg(long)]
    pub unit: Option<String>,
}

impl ColumnArgs {
    /// File values first, then command-line overrides, then validation.
    pub fn resolve(&self) -> Result<ColumnConfig> {
        let mut cfg = match &self.config {
            Some(path) => ColumnConfig::from_path(path)?,
            None => ColumnConfig::default(),
        };
        if let Some(s) = self.smoothing {
            cfg = cfg.with_smoothing(s);
        }
        if let Some(u) = &self.unit {
            cfg = cfg.with_unit(u.clone());
        }
        cfg.validate()?;
        Ok(cfg)
    }
}

#[derive(Parser, Clone, Debug)]
pub struct Replay {
    /// Tick file (one JSON object per line); reads stdin when omitted
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[command(flatten)]
    pub columns: ColumnArgs,
}

#[derive(Parser, Clone, Debug)]
pub struct Demo {
    /// Task label shown before the bar
    #[arg(long, default_value = "Working")]
    pub description: String,

    /// Units of work to complete
    #[arg(long, default_value_t = 200)]
    pub total: u64,

    /// Average units completed per second
    #[arg(long, default_value_t = 20.0)]
    pub rate: f64,

    /// Relative variation of the per-unit delay, in [0, 1)
    #[arg(long, default_value_t = 0.5)]
    pub jitter: f64,

    #[command(flatten)]
    pub columns: ColumnArgs,
}
