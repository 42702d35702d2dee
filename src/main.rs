//! pagesim CLI - compare FIFO and Optimal page replacement on a trace.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, warn};

use pagesim::report::{write_load_table, write_summary, StepNarrator};
use pagesim::sim;
use pagesim::{frames_for_memory, parse_memory_size, read_trace_file};

/// Simulate FIFO and Optimal page replacement over a reference trace.
///
/// The trace file lists one page identifier per line. Physical memory is
/// given as a size string ("8MB", "512KB", or a byte count) and divided
/// into 4KB page frames.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Reference trace file, one page identifier per line
    trace_file: PathBuf,

    /// Physical memory size, e.g. "8MB", "512KB", or a byte count
    memory_size: String,

    /// Narrate every simulation step (hits, faults, evictions)
    #[arg(long)]
    narrate: bool,

    /// Print the per-page load-count table after the summary
    #[arg(long)]
    load_table: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let memory_bytes = parse_memory_size(&args.memory_size)?;
    let num_frames = frames_for_memory(memory_bytes)?;
    debug!("{} bytes of memory, {} frames", memory_bytes, num_frames);

    let trace = read_trace_file(&args.trace_file)
        .with_context(|| format!("failed to read trace file {}", args.trace_file.display()))?;
    debug!(
        "loaded {} references ({} distinct pages)",
        trace.len(),
        trace.distinct_pages()
    );

    let comparison = if args.narrate {
        if trace.len() > 1000 {
            warn!(
                "narrating {} references will produce very long output",
                trace.len()
            );
        }
        let mut fifo_narrator = StepNarrator::new(&trace, "FIFO", io::stdout().lock());
        let mut optimal_narrator = StepNarrator::new(&trace, "Optimal", io::stdout().lock());
        sim::compare_with_observers(&trace, num_frames, &mut fifo_narrator, &mut optimal_narrator)?
    } else {
        sim::compare(&trace, num_frames)?
    };

    let mut out = io::stdout().lock();
    writeln!(out)?;
    write_summary(&mut out, &trace, num_frames, &comparison)?;

    if args.load_table {
        writeln!(out)?;
        write_load_table(&mut out, &trace, &comparison)?;
    }

    Ok(())
}
