use serde::{Deserialize, Serialize};

/// Section of the app config read by the text shell.
pub const SECTION: &str = "calculator_cli";

/// Text shell settings (`modules.calculator_cli`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliShellConfig {
    /// Wait for Enter after each result before redrawing the menu.
    #[serde(default = "default_pause_after_result")]
    pub pause_after_result: bool,
}

impl Default for CliShellConfig {
    fn default() -> Self {
        Self {
            pause_after_result: default_pause_after_result(),
        }
    }
}

fn default_pause_after_result() -> bool {
    true
}
