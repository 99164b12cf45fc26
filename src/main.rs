//! # chatcount CLI
//!
//! Command-line interface for the chatcount library.

use std::fs;
use std::process;

use clap::Parser as ClapParser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use chatcount::cli::Args;
use chatcount::core::{CountStats, MessageCounter, Report};
use chatcount::format::{to_format_string, write_to_format};
use chatcount::{ChatCountError, validate};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatCountError> {
    let args = <Args as ClapParser>::parse();

    // Flags are checked before touching the file
    let range = args.date_range()?;
    let counter = MessageCounter::new(&args.counter_config())?;

    let content = fs::read_to_string(&args.input)?;
    validate(&content).into_result()?;

    let (counts, stats) = counter.count_with_stats(&content, &range);

    if args.stats {
        print_stats(&stats);
    }

    let report = Report::from_counts(&counts);
    let format = args.output_format();
    debug!(input = %args.input, %format, rows = report.len(), "rendering report");

    match args.output {
        Some(ref path) => {
            write_to_format(&report, path, format)?;
            eprintln!("✅ Report saved to {}", path);
        }
        None => print!("{}", to_format_string(&report, format)?),
    }

    Ok(())
}

fn print_stats(stats: &CountStats) {
    eprintln!("📊 Chunks:   {}", stats.chunks);
    eprintln!("   Counted:  {}", stats.counted);
    eprintln!("   Skipped:  {}", stats.skipped());
    eprintln!("     malformed:       {}", stats.malformed);
    eprintln!("     before range:    {}", stats.before_min_date);
    eprintln!("     after range:     {}", stats.after_max_date);
    eprintln!("     ignored sender:  {}", stats.ignored_sender);
    eprintln!("     filtered out:    {}", stats.filtered_out);
}
