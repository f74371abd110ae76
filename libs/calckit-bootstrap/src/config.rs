//! Application configuration shared by the calculator binaries.
//!
//! Layered: defaults -> YAML file (if provided) -> env (`APP__*`) -> CLI overrides.
//! Module sections live under `modules.<name>` and are decoded lazily by the
//! module that owns them, so this crate does not depend on any module crate.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Prefix of environment variables merged over the YAML file.
/// Nested keys are separated by `__`, e.g. `APP__SERVER__BIND_ADDR`.
pub const ENV_PREFIX: &str = "APP__";

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Per-module sections keyed by module name.
    #[serde(default)]
    pub modules: BTreeMap<String, serde_json::Value>,
}

/// HTTP listener settings (used by the web shell only).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8087".to_owned()
}

impl ServerConfig {
    /// Keep the host part of `bind_addr` and replace the port.
    #[must_use]
    pub fn bind_addr_with_port(&self, port: u16) -> String {
        let addr = self.bind_addr.as_str();
        let host = addr.rsplit_once(':').map_or(addr, |(host, _)| host);
        format!("{host}:{port}")
    }
}

/// Logging settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive such as `info` or `calculator=debug,warn`.
    /// When absent each binary applies its own default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Command-line values that take precedence over every other layer.
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub port: Option<u16>,
    /// `-v` count: 1 info, 2 debug, 3+ trace.
    pub verbose: u8,
}

impl AppConfig {
    /// Load defaults, then the YAML file (if any), then `APP__*` env vars.
    ///
    /// # Errors
    /// Returns an error if the given file does not exist or any layer fails to parse.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        Self::load_layered(path, ENV_PREFIX)
    }

    /// Same as [`AppConfig::load_or_default`] with a custom env prefix.
    ///
    /// # Errors
    /// Returns an error if the given file does not exist or any layer fails to parse.
    pub fn load_layered(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(path) = path {
            if !path.is_file() {
                bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment = figment.merge(Env::prefixed(env_prefix).split("__"));

        let context = match path {
            Some(p) => format!("failed to parse YAML config {}", p.display()),
            None => "failed to load configuration from environment".to_owned(),
        };
        figment.extract().context(context)
    }

    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(port) = args.port {
            self.server.bind_addr = self.server.bind_addr_with_port(port);
        }
        if let Some(level) = verbosity_level(args.verbose) {
            self.logging.level = Some(level.to_owned());
        }
    }

    /// Decode the `modules.<module>` section, or `T::default()` when absent.
    ///
    /// # Errors
    /// Returns an error if the section exists but does not match `T`.
    pub fn module_config<T>(&self, module: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.modules.get(module) {
            None | Some(serde_json::Value::Null) => Ok(T::default()),
            Some(value) => serde_json::from_value(value.clone())
                .with_context(|| format!("invalid configuration for module '{module}'")),
        }
    }

    /// Render the effective configuration as YAML.
    ///
    /// # Errors
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(self)
            .context("failed to serialize configuration to YAML")
    }
}

fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
