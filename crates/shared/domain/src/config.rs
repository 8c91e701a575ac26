use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level configuration of the `mshop` shell.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfigInner {
    pub log: LogConfig,
    pub export: ExportConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ShellConfig {
    #[serde(flatten, default)]
    inner: Arc<ShellConfigInner>,
}

impl Deref for ShellConfig {
    type Target = ShellConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ShellConfig {
    fn deref_mut(&mut self) -> &mut ShellConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Logging output settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default level directive (`error`, `warn`, `info`, `debug`, `trace`).
    pub level: String,
    /// Extra filter directives, e.g. `mshop_order=trace`.
    pub filter: Option<String>,
    pub console: bool,
    /// Directory for rolling log files. File logging is off when unset.
    pub path: Option<PathBuf>,
    pub json: bool,
    pub max_files: usize,
}

/// How exported item maps are written.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Include private fields (ids, site, timestamps) in exports and accept them on import.
    pub private: bool,
    pub pretty: bool,
}

// --- Default ---

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            filter: None,
            console: true,
            path: None,
            json: false,
            max_files: 10,
        }
    }
}
