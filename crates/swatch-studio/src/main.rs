//! Swatch Studio: pick two colors, see their blend.

mod app;
mod command;
mod config;
mod event;
mod layout;
mod painter;
mod studio;

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;

use swatch_core::logging::{init_logging, LoggingConfig};
use swatch_core::ColorRgba;

use crate::app::Application;
use crate::config::StudioConfig;

#[derive(Parser)]
#[command(name = "swatch-studio", about = "Blend two colors in the terminal", version)]
struct Cli {
    /// Initial color for slot 0
    #[arg(long, default_value = "yellow")]
    first: ColorRgba,

    /// Initial color for slot 1
    #[arg(long, default_value = "blue")]
    second: ColorRgba,

    /// Terminal width used to choose between stacked and side-by-side layout
    #[arg(long, env = "COLUMNS", default_value_t = 80)]
    columns: u16,

    /// Disable ANSI color output (implied when stdout is not a terminal)
    #[arg(long)]
    plain: bool,

    /// Log filter in env_logger syntax, e.g. "debug" or "swatch_core=trace"
    #[arg(long = "log")]
    log_filter: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log_filter,
        ..LoggingConfig::default()
    });

    let stdout = io::stdout();
    let config = StudioConfig {
        first: cli.first,
        second: cli.second,
        columns: cli.columns,
        plain: cli.plain || !stdout.is_terminal(),
    };
    log::info!("starting with {} and {}", config.first.to_hex(), config.second.to_hex());

    let mut app = Application::new(&config);
    app.run(io::stdin().lock(), &mut stdout.lock(), &mut io::stderr().lock())
}
