//! Application directory paths.
//!
//! Single source of truth for filesystem paths used by the client. Uses the
//! [`dirs`] crate for platform-appropriate resolution.
//!
//! # Environment Overrides
//!
//! - `HYPERSERP_CONFIG_DIR` — overrides [`config_dir`]

use std::path::PathBuf;

/// Application config directory.
///
/// Used for `config.toml`. Resolves to `dirs::config_dir()/hyperserp/` by
/// default. Override with the `HYPERSERP_CONFIG_DIR` environment variable.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("HYPERSERP_CONFIG_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::config_dir()
        .map(|d| d.join("hyperserp"))
        .unwrap_or_else(|| PathBuf::from("/tmp/hyperserp-config"))
}

/// Path of the config file inside [`config_dir`].
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join("config.toml")
}
