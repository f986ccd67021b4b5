use crate::disambiguation::DisambiguationOptions;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// User switches for code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodegenOptions {
    /// Allow generation at all.
    pub enable: bool,
    /// Always emit the full access/modifier filter of a method.
    pub force_access_filter: bool,
    /// Always emit a return type filter for methods.
    pub force_return_type_filter: bool,
    /// Load non-system classes by name instead of referencing them statically.
    pub class_optimization: bool,
    /// Annotate generated code with diagnostic comments.
    pub debug: bool,
}

impl Default for CodegenOptions {
    fn default() -> Self {
        Self {
            enable: true,
            force_access_filter: false,
            force_return_type_filter: false,
            class_optimization: true,
            debug: false,
        }
    }
}

impl CodegenOptions {
    pub fn disambiguation(&self) -> DisambiguationOptions {
        DisambiguationOptions {
            optimize_class_loading: self.class_optimization,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_json(&content)?;
        debug!("Loaded options from {}: {:?}", path.display(), options);
        Ok(options)
    }

    /// Read `path` if given, else the default file when it exists, else defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        let default_path = default_options_path();
        if default_path.exists() {
            Self::load(&default_path)
        } else {
            info!("No options file at {}, using defaults", default_path.display());
            Ok(Self::default())
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// `~/.hookgen`, or `./.hookgen` when no home directory is known.
pub fn base_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".hookgen")
}

pub fn default_options_path() -> PathBuf {
    base_dir().join("options.json")
}
