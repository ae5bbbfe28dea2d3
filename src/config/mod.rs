//! Configuration: data directory layout and optional `settings.toml`.

pub mod settings;

pub use settings::{Settings, VaultPaths, APP_DIR_NAME};
