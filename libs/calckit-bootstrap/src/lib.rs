//! Process plumbing shared by the calculator binaries: layered
//! configuration, logging initialisation and shutdown signals.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod logging;
pub mod signals;

pub use config::{AppConfig, CliArgs, LogFormat, LoggingConfig, ServerConfig};
pub use logging::init_logging;
pub use signals::{ShutdownSignal, shutdown_signal, wait_for_shutdown};
