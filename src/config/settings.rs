use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};
use crate::generator::PasswordPolicy;

/// Name of the per-user application directory under the config dir.
pub const APP_DIR_NAME: &str = "PasswordGenerator";

/// User-level configuration, loaded from `<data_dir>/settings.toml`.
///
/// Every field has a sensible default so PassVault works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Default length of generated passwords.
    #[serde(default = "default_generator_length")]
    pub generator_length: usize,

    /// Whether generated passwords include symbols by default.
    #[serde(default = "default_true")]
    pub generator_symbols: bool,

    /// Show `******` instead of passwords when listing entries.
    #[serde(default = "default_true")]
    pub mask_passwords: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_generator_length() -> usize {
    20
}

fn default_true() -> bool {
    true
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            generator_length: default_generator_length(),
            generator_symbols: default_true(),
            mask_passwords: default_true(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the data directory.
    const FILE_NAME: &'static str = "settings.toml";

    /// Load settings from `<data_dir>/settings.toml`.
    ///
    /// If the file does not exist, sensible defaults are returned.
    /// If the file exists but cannot be parsed, an error is returned.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config_path = data_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassVaultError::Config(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        tracing::debug!(path = %config_path.display(), "loaded settings");
        Ok(settings)
    }

    /// The generator policy implied by these settings.
    pub fn password_policy(&self) -> PasswordPolicy {
        PasswordPolicy {
            length: self.generator_length,
            symbols: self.generator_symbols,
            ..PasswordPolicy::default()
        }
    }
}

/// Fixed file locations of one vault installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultPaths {
    root: PathBuf,
}

impl VaultPaths {
    /// Use `root` as the data directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<per-user config dir>/PasswordGenerator`.
    pub fn default_location() -> Result<Self> {
        let base = dirs::config_dir().ok_or_else(|| {
            PassVaultError::Config("cannot determine the per-user config directory".into())
        })?;
        Ok(Self::new(base.join(APP_DIR_NAME)))
    }

    /// Resolve an explicit override, falling back to the default location.
    pub fn resolve(override_dir: Option<&Path>) -> Result<Self> {
        match override_dir {
            Some(dir) => Ok(Self::new(dir)),
            None => Self::default_location(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where the master credential record lives.
    pub fn master_record(&self) -> PathBuf {
        self.root.join("master.config")
    }

    /// Where the encrypted vault lives.
    pub fn vault_file(&self) -> PathBuf {
        self.root.join("passwords.enc")
    }
}

// ── Tests ────────────────────────────────────────────────────────────
