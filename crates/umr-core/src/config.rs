use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::mirrors::MirrorSet;

/// Global configuration loaded from `~/.config/umr/config.toml`.
///
/// ```toml
/// mirrors_file = "/etc/umr/mirrors.json"   # optional
///
/// [mirrors.primary]
/// url_prefix = "https://updates.example.com"
/// metadata_path = "metadata"
/// targets_path = "targets"
/// confined_target_paths = ["targets/stable"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UmrConfig {
    /// Optional JSON mirrors document (name -> entry), appended after inline mirrors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirrors_file: Option<PathBuf>,
    /// Inline mirrors, in document order.
    #[serde(default)]
    pub mirrors: MirrorSet,
}

impl UmrConfig {
    /// Inline mirrors followed by those from `mirrors_file`, if set.
    ///
    /// A relative `mirrors_file` is taken relative to `base_dir` (normally the
    /// config file's directory).
    pub fn effective_mirrors(&self, base_dir: Option<&Path>) -> Result<MirrorSet> {
        let mut set = self.mirrors.clone();
        if let Some(file) = &self.mirrors_file {
            let path = match base_dir {
                Some(dir) if file.is_relative() => dir.join(file),
                _ => file.clone(),
            };
            let extra = load_mirrors_json(&path)?;
            set.extend_from(extra)
                .with_context(|| format!("merge mirrors from {}", path.display()))?;
        }
        Ok(set)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("umr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UmrConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UmrConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Load configuration from an explicit TOML file.
pub fn load_from_path(path: &Path) -> Result<UmrConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: UmrConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    tracing::info!(
        "loaded config from {} ({} inline mirrors)",
        path.display(),
        cfg.mirrors.len()
    );
    Ok(cfg)
}

/// Parse a JSON mirrors document: an object mapping mirror names to entries.
pub fn mirrors_from_json(data: &str) -> Result<MirrorSet> {
    let set: MirrorSet = serde_json::from_str(data).context("parse mirrors JSON")?;
    Ok(set)
}

pub fn load_mirrors_json(path: &Path) -> Result<MirrorSet> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read mirrors file: {}", path.display()))?;
    let set = mirrors_from_json(&data).with_context(|| format!("in {}", path.display()))?;
    tracing::info!("loaded {} mirrors from {}", set.len(), path.display());
    Ok(set)
}
