mod cli;

use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use fuzzywarp::{input, shift_totals, Base};
use itertools::Itertools;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads.get().into())
            .build_global()
            .context("Unable to initialize the thread pool")?;
    }

    let mut query = match &cli.input {
        Some(path) => input::read_file(path)
            .with_context(|| format!("Unable to read query from {}", path.display()))?,
        None => input::read_query(io::stdin().lock())
            .context("Unable to read query from standard input")?,
    };
    if let Some(radius) = cli.radius {
        debug!(radius, "overriding query radius");
        query.radius = radius;
    }

    let execution = cli.execution();
    let totals = shift_totals(
        &query.text,
        &query.pattern,
        query.radius,
        &Base::ALL,
        execution,
    )
    .context("Unable to count tolerant matches")?;

    let matches = totals.count_full_matches();
    info!(
        text_len = query.text.len(),
        pattern_len = query.pattern.len(),
        radius = query.radius,
        matches,
        "query completed"
    );

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{matches}").context("Unable to write to standard output")?;
    if cli.report_offsets {
        writeln!(stdout, "{}", totals.full_match_offsets().join(" "))
            .context("Unable to write to standard output")?;
    }

    Ok(())
}
