use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossbeam_channel::Receiver;
use crossterm::{
    cursor::Show,
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame, Terminal,
};
use smooth_progress::{ColumnConfig, Fragment, RateColumn, StyleTag, TimeRemainingColumn};
use tracing::debug;

use crate::cli::Demo;
use crate::refresh::RefreshCache;
use crate::task::SimulatedTask;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub fn run_tui(
    demo: &Demo,
    cfg: &ColumnConfig,
    bar_width: u16,
    advances: Receiver<u64>,
    stop: Arc<AtomicBool>,
) -> Result<()> {
    let mut columns = vec![
        RefreshCache::new(Box::new(TimeRemainingColumn::from_config(cfg)?)),
        RefreshCache::new(Box::new(RateColumn::from_config(cfg)?)),
    ];
    let mut task = SimulatedTask::new(demo.description.clone(), demo.total, Instant::now());

    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut last_line = String::new();
    while !stop.load(Ordering::Relaxed) {
        while let Ok(n) = advances.try_recv() {
            task.advance(n, Instant::now());
        }

        let now = Instant::now();
        let done = task.finished();
        let tick = task.snapshot(now);
        let fragments: Vec<Fragment> = columns
            .iter_mut()
            .map(|c| if done { c.force(&tick, now) } else { c.render(&tick, now) })
            .collect();
        let status = status_text(&task);
        last_line = plain_line(&task.description, &status, &fragments);

        terminal.draw(|f| draw_progress(f, &task, &status, &fragments, bar_width))?;

        if done {
            debug!(completed = task.completed, "Task complete");
            break;
        }

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.code == KeyCode::Char('q')
                    || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
                {
                    stop.store(true, Ordering::Relaxed);
                }
            }
        }
    }

    drop(terminal);
    drop(guard);
    println!("{last_line}");
    Ok(())
}

/// Raw mode plus alternate screen, restored on drop even when the loop errors.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(std::io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen, Show);
    }
}

fn draw_progress(f: &mut Frame, task: &SimulatedTask, status: &str, fragments: &[Fragment], bar_width: u16) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Progress
            Constraint::Min(0),
            Constraint::Length(1), // Footer
        ].as_ref())
        .split(f.size());

    let block = Block::default().title("Progress").borders(Borders::ALL);
    let inner = block.inner(outer[0]);
    f.render_widget(block, outer[0]);

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(label_width(&task.description)),
            Constraint::Length(bar_width),
            Constraint::Min(0),
        ].as_ref())
        .split(inner);

    f.render_widget(Paragraph::new(task.description.as_str()), row[0]);

    let ratio = (task.percentage() / 100.0).clamp(0.0, 1.0);
    let bar = Gauge::default()
        .gauge_style(Style::default().fg(Color::Magenta))
        .ratio(ratio)
        .label("");
    f.render_widget(bar, row[1]);

    let mut spans = vec![Span::styled(format!(" {status}"), Style::default().fg(Color::Green))];
    for frag in fragments {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(frag.text.clone(), style_for(frag.style)));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), row[2]);

    f.render_widget(Paragraph::new("q: quit"), outer[2]);
}

/// Description width plus one separating space, saturating at `u16::MAX`.
pub(crate) fn label_width(description: &str) -> u16 {
    u16::try_from(description.chars().count())
        .unwrap_or(u16::MAX)
        .saturating_add(1)
}

fn style_for(tag: StyleTag) -> Style {
    match tag {
        StyleTag::Remaining => Style::default().fg(Color::Cyan),
    }
}

pub(crate) fn status_text(task: &SimulatedTask) -> String {
    format!("{:>3.0}% ({}/{})", task.percentage(), task.completed, task.total)
}

pub(crate) fn plain_line(description: &str, status: &str, fragments: &[Fragment]) -> String {
    let mut line = format!("{description} {status}");
    for frag in fragments {
        line.push(' ');
        line.push_str(&frag.text);
    }
    line
}
