// SPDX-License-Identifier: MIT
//
// pa-theme — build, export and inspect level-editor color themes.
//
// This binary is thin glue over the library crates:
//
//   pa-color → Color value (float / 8-bit / hex views)
//   pa-theme → Theme document, ID sources, JSON mapping, file I/O
//
// Flow:
//
//   argv → clap Args → ID source (seeded or thread RNG) → subcommand → stdout
//
// Diagnostics go to stderr through tracing; `PA_THEME_LOG` takes any
// EnvFilter directive and wins over `-v`.

mod cli;
mod commands;

use std::io;
use std::process;

use clap::Parser;
use pa_theme::RandomIds;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "PA_THEME_LOG";

fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut stdout = io::stdout().lock();
    let result = match args.seed {
        Some(seed) => {
            tracing::debug!(seed, "using seeded theme ids");
            let mut ids = RandomIds::from_rng(StdRng::seed_from_u64(seed));
            commands::run(&args.command, &mut ids, &mut stdout)
        }
        None => commands::run(&args.command, &mut RandomIds::new(), &mut stdout),
    };

    if let Err(e) = result {
        eprintln!("pa-theme: {e:#}");
        process::exit(1);
    }
}
