//! Replay recorded landmarks through an analysis session
//!
//! Reads one tick per line (JSON) and prints one report per line.

use anyhow::{Context, Result};
use clap::Parser;
use ergonomics::{AnalysisConfig, Session};
use monitor::{init_logging, Monitor, TickRecord};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::{info, warn};

/// Ergonomic signal replay
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Landmark ticks as JSON lines ("-" for stdin)
    #[arg(long, default_value = "-", value_name = "FILE")]
    input: String,

    /// Analysis config file (TOML, JSON or YAML); ERGO_* variables override it
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Minimum spacing between recomputations in milliseconds
    #[arg(long, default_value = "50", value_name = "MS")]
    min_interval_ms: u64,

    /// Log as JSON
    #[arg(long)]
    json_logs: bool,

    /// Log per-frame measurements
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.json_logs)?;

    info!("=== Ergonomics replay v{} ===", env!("CARGO_PKG_VERSION"));

    let config = AnalysisConfig::load(args.config.as_deref())?;
    let session = Session::new(config)?;
    let monitor = Monitor::new(session, Duration::from_millis(args.min_interval_ms));

    if args.input == "-" {
        run(monitor, BufReader::new(tokio::io::stdin())).await
    } else {
        let file = tokio::fs::File::open(&args.input)
            .await
            .with_context(|| format!("opening {}", args.input))?;
        run(monitor, BufReader::new(file)).await
    }
}

async fn run<R: AsyncBufRead + Unpin>(mut monitor: Monitor, reader: R) -> Result<()> {
    let mut subscriber = monitor.subscribe();
    let watcher = tokio::spawn(async move {
        let mut previous = subscriber.latest();
        while let Some(report) = subscriber.changed().await {
            for ((name, old), (_, new)) in previous.statuses().iter().zip(report.statuses()) {
                if *old != new {
                    info!("{} {} -> {}", name, old, new);
                }
            }
            match (previous.has_warnings(), report.has_warnings()) {
                (false, true) => warn!("Ergonomic warning raised"),
                (true, false) => info!("All warnings cleared"),
                _ => {}
            }
            previous = report;
        }
    });

    let start = Instant::now();
    let mut lines = reader.lines();
    let mut line_no = 0;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;
        let Some(record) = TickRecord::parse(line_no, &line)? else {
            continue;
        };

        let now = match record.timestamp_ms {
            Some(ms) => start + Duration::from_millis(ms),
            None => Instant::now(),
        };

        let report = monitor.process(now, record.pose.as_ref(), record.face.as_ref());
        println!("{}", serde_json::to_string(&*report)?);
    }

    let session = monitor.session();
    if session.tick_count() == 0 {
        warn!("No ticks processed");
    }
    info!(
        "Replayed {} lines: {} ticks, {} cached, {} blinks",
        line_no,
        session.tick_count(),
        monitor.cache().hits(),
        session.blink_count()
    );

    drop(monitor);
    watcher.await?;
    Ok(())
}
