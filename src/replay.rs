use std::fs::File;
use std::io::{BufRead, BufReader, Write};

use anyhow::{Context, Result};
use smooth_progress::{Column, ColumnConfig, RateColumn, Tick, TimeRemainingColumn};
use tracing::{info, warn};

use crate::cli::Replay;

pub fn run_replay(replay: Replay) -> Result<()> {
    let cfg = replay.columns.resolve()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let rendered = match &replay.input {
        Some(path) => {
            let file = File::open(path).with_context(|| format!("Opening tick file {}", path.display()))?;
            replay_ticks(BufReader::new(file), &mut out, &cfg)?
        }
        None => replay_ticks(std::io::stdin().lock(), &mut out, &cfg)?,
    };
    info!(rendered, "Replay finished");
    Ok(())
}

/// Renders one `"{time} {rate}"` line per tick; returns the number rendered.
pub(crate) fn replay_ticks<R: BufRead, W: Write>(reader: R, out: &mut W, cfg: &ColumnConfig) -> Result<usize> {
    let mut time = TimeRemainingColumn::from_config(cfg)?;
    let mut rate = RateColumn::from_config(cfg)?;
    let mut rendered = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.context("Reading tick input")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let tick: Tick = match serde_json::from_str(trimmed) {
            Ok(t) => t,
            Err(e) => {
                warn!(line = idx + 1, error = %e, "Skipping malformed tick");
                continue;
            }
        };
        writeln!(out, "{} {}", time.render(&tick).text, rate.render(&tick).text)?;
        rendered += 1;
    }
    Ok(rendered)
}
