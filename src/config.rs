//! Backend configuration
//!
//! Every option that changes how jj is invoked or how output is rendered
//! lives in [`VcConfig`], which callers pass to the backend explicitly.
//! It can be loaded from a TOML file:
//!
//! ```toml
//! program = "jj"
//! log_template = "compact"   # default | compact | oneline | detailed | <template>
//! colorize = true
//! diff_switches = ["--context", "5"]
//! log_limit = 200
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::jj::constants::JJ_COMMAND;
use crate::jj::{JjError, LogTemplate};

/// Configuration for the jj backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VcConfig {
    /// jj executable, looked up on PATH unless absolute
    pub program: PathBuf,

    /// Template used by `print_log`
    pub log_template: LogTemplate,

    /// Ask jj for colored log/diff output
    pub colorize: bool,

    /// Extra flags forwarded verbatim to `jj diff`
    pub diff_switches: Vec<String>,

    /// Extra flags forwarded verbatim to `jj file annotate`
    pub annotate_switches: Vec<String>,

    /// Default entry limit for `print_log` when the caller gives none
    pub log_limit: Option<usize>,
}

impl Default for VcConfig {
    fn default() -> Self {
        Self {
            program: PathBuf::from(JJ_COMMAND),
            log_template: LogTemplate::Default,
            colorize: false,
            diff_switches: Vec::new(),
            annotate_switches: Vec::new(),
            log_limit: None,
        }
    }
}

impl VcConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, JjError> {
        toml::from_str(text).map_err(|e| JjError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, JjError> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(?path, "loaded configuration");
        Ok(config)
    }

    /// Load from `path` if it exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, JjError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
