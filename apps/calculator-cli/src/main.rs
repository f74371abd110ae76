#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod config;
mod input;
mod menu;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use calckit_bootstrap::{AppConfig, CliArgs};
use calculator::{CalculatorConfig, MODULE_NAME, Service};
use clap::Parser;

use crate::config::CliShellConfig;
use crate::input::{EditorSource, ReaderSource};
use crate::menu::Menu;

/// Calculator - interactive text menu
#[derive(Parser)]
#[command(name = "calculator-cli")]
#[command(about = "Calculator - interactive text menu")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log verbosity level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Do not wait for Enter after each result
    #[arg(long)]
    no_pause: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.clone(),
        port: None,
        verbose: cli.verbose,
    };

    let mut config = AppConfig::load_or_default(args.config.as_deref())?;
    config.apply_cli_overrides(&args);

    // Logs go to stderr; warnings only unless asked for more.
    calckit_bootstrap::init_logging(&config.logging, "warn")?;

    let service = Service::new(config.module_config::<CalculatorConfig>(MODULE_NAME)?);
    let shell = config.module_config::<CliShellConfig>(crate::config::SECTION)?;
    let pause = shell.pause_after_result && !cli.no_pause;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    tracing::info!(interactive, pause, "calculator shell starting");

    let out = io::stdout().lock();
    if interactive {
        let source = EditorSource::new()?;
        Menu::new(&service, source, out, pause).run()
    } else {
        let source = ReaderSource::new(stdin.lock());
        Menu::new(&service, source, out, pause).run()
    }
}
