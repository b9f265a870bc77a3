//! tickplan CLI - adaptive time-axis tick planning.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

use display::Format;

#[derive(Parser)]
#[command(name = "tickplan")]
#[command(about = "Plan time-axis ticks for a range in a time zone", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Plan ticks for a time range
    Plan {
        /// Range start: epoch milliseconds, RFC 3339 timestamp or YYYY-MM-DD
        start: String,

        /// Range end: epoch milliseconds, RFC 3339 timestamp or YYYY-MM-DD
        end: String,

        /// IANA time zone the ticks are aligned in
        #[arg(short, long, env = "TICKPLAN_TZ", default_value = "UTC")]
        zone: String,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: Format,

        /// Output file path. Defaults to stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Axis width in pixels; adds the x position of each tick
        #[arg(short, long)]
        width: Option<f64>,
    },

    /// Show the span buckets in evaluation order
    Buckets,

    /// List known time zones
    Zones {
        /// Case-insensitive substring filter
        #[arg(short, long)]
        search: Option<String>,
    },
}

/// Installs the global subscriber. Returns false if one was already set.
fn init_tracing(verbose: u8, quiet: bool) -> bool {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose > 1)
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(()) => true,
        Err(err) => {
            eprintln!("tickplan: keeping existing log subscriber: {err}");
            false
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Plan {
            start,
            end,
            zone,
            format,
            output,
            width,
        } => commands::plan::plan(&start, &end, &zone, format, output.as_deref(), width),
        Commands::Buckets => commands::buckets::list_buckets(),
        Commands::Zones { search } => commands::zones::list_zones(search.as_deref()),
    }
}
