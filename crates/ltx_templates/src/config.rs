//! Optional tool configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LtxError, LtxResult};

/// Template root used when nothing else is configured, below the home directory.
pub const DEFAULT_TEMPLATE_DIR: &str = "bin/latex_tools/templates";

/// Settings read from `ltx.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    /// Directory holding named `.tex` templates. A leading `~/` is expanded.
    pub template_dir: Option<PathBuf>,
    /// Author used when none is given on the command line.
    pub author: Option<String>,
    /// Compiler used when `--compile` is given without a command.
    pub compiler: Option<String>,
}

impl ToolConfig {
    /// Project-local configuration file name.
    pub const FILE_NAME: &'static str = "ltx.yaml";

    /// Load the first configuration found in `cwd` or the user config
    /// directory; defaults when there is none.
    pub fn discover(cwd: &Path) -> LtxResult<Self> {
        let local = cwd.join(Self::FILE_NAME);
        if local.is_file() {
            return Self::load(&local);
        }

        if let Some(global) = dirs::config_dir().map(|d| d.join("ltx").join("config.yaml")) {
            if global.is_file() {
                return Self::load(&global);
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(Self::default())
    }

    /// Load a configuration file.
    pub fn load(path: &Path) -> LtxResult<Self> {
        debug!("Loading configuration from {:?}", path);
        let content = fs::read_to_string(path).map_err(|e| LtxError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        serde_yaml::from_str::<Option<Self>>(&content)
            .map(Option::unwrap_or_default)
            .map_err(|e| LtxError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }

    /// Template root: explicit override, else the configured directory,
    /// else `~/bin/latex_tools/templates`.
    pub fn template_root(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.template_dir.clone())
            .map(|dir| expand_home(&dir))
            .unwrap_or_else(|| expand_home(&Path::new("~").join(DEFAULT_TEMPLATE_DIR)))
    }
}

fn expand_home(path: &Path) -> PathBuf {
    match (path.strip_prefix("~"), dirs::home_dir()) {
        (Ok(rest), Some(home)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
