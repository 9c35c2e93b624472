// Configuration file loading
//
// Format is one `key=value` per line; blank lines and lines starting with
// `#` are skipped. Recognised keys:
//   target=<path>        default target for the switcher
//   strict=true|false    validator strict mode

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{MockDataError, Result};
use crate::switcher::DEFAULT_TARGET;

/// Name of the per-directory config file.
pub const LOCAL_CONFIG_FILE: &str = ".mockdatarc";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Default switch target, already resolved against the config file's directory.
    pub target: Option<PathBuf>,
    pub strict: bool,
}

impl Config {
    /// Per-user config file: `~/.mockdata/rc`
    pub fn home_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".mockdata").join("rc"))
    }

    /// Load the first config file found: `<dir>/.mockdatarc`, then `~/.mockdata/rc`.
    /// No config file means defaults.
    pub fn resolve(dir: &Path) -> Result<Self> {
        let candidates = std::iter::once(dir.join(LOCAL_CONFIG_FILE)).chain(Self::home_path());
        for path in candidates {
            if path.is_file() {
                debug!("Using config file {}", path.display());
                return Self::load(&path);
            }
        }
        Ok(Self::default())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| MockDataError::from_io(path, e))?;
        Self::parse(path, &content)
    }

    /// Parse config text. Relative `target` paths resolve against the
    /// directory containing `path`.
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let mut config = Self::default();
        for (lineno, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(MockDataError::Config {
                    path: path.to_path_buf(),
                    message: format!("line {}: expected key=value, got '{}'", lineno + 1, line),
                });
            };
            let value = value.trim();
            match key.trim() {
                "target" => {
                    let target = PathBuf::from(value);
                    config.target = Some(match path.parent() {
                        Some(dir) if target.is_relative() => dir.join(target),
                        _ => target,
                    });
                }
                "strict" => {
                    config.strict = parse_bool(value).ok_or_else(|| MockDataError::Config {
                        path: path.to_path_buf(),
                        message: format!("line {}: invalid boolean for strict: '{}'", lineno + 1, value),
                    })?;
                }
                other => warn!("Ignoring unknown config key '{}' in {}", other, path.display()),
            }
        }
        Ok(config)
    }

    /// Configured target, or `updated_mock_tasks.json`.
    pub fn target_or_default(&self) -> PathBuf {
        self.target
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TARGET))
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
