use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{HarborError, HarborResult};
use crate::key::ContentKey;
use crate::types::duration_str;

/// Configuration for a Harbor node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarborConfig {
    /// Node name
    pub name: String,
    /// Project root directory
    pub project_root: PathBuf,
    /// Content keys announced when the node starts
    #[serde(default)]
    pub roots: Vec<ContentKey>,
    /// Network settings
    #[serde(default)]
    pub network: NetworkConfig,
    /// Provider subsystem settings
    #[serde(default)]
    pub provider: ProviderConfig,
}

impl HarborConfig {
    /// Create a new configuration with default network and provider settings
    pub fn new(name: impl Into<String>, project_root: PathBuf) -> Self {
        Self {
            name: name.into(),
            project_root,
            roots: Vec::new(),
            network: NetworkConfig::default(),
            provider: ProviderConfig::default(),
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> HarborResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Save configuration to a TOML file
    pub fn save(&self) -> HarborResult<()> {
        let config_path = self.project_root.join("harbor.toml");
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(config_path, contents)?;
        Ok(())
    }

    /// Convert config to TOML string
    pub fn to_toml(&self) -> HarborResult<String> {
        toml::to_string(self)
            .map_err(|e| HarborError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Create config from TOML string
    pub fn from_toml(content: &str) -> HarborResult<Self> {
        toml::from_str(content)
            .map_err(|e| HarborError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Validate the configuration
    pub fn validate(&self) -> HarborResult<()> {
        if self.name.is_empty() {
            return Err(HarborError::config("node name must not be empty"));
        }

        if self.provider.mode == ProviderMode::Batched {
            if self.provider.batch_size == 0 {
                return Err(HarborError::config(
                    "provider.batch_size must be greater than zero",
                ));
            }
            if self.provider.batch_interval.is_zero() {
                return Err(HarborError::config(
                    "provider.batch_interval must be greater than zero",
                ));
            }
            if self.provider.reprovide_interval.is_zero() {
                return Err(HarborError::config(
                    "provider.reprovide_interval must be greater than zero",
                ));
            }
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root_dir(&self) -> &Path {
        &self.project_root
    }
}

/// Network settings for a node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Whether the node participates in the network. Offline nodes hold
    /// content but never announce it.
    pub online: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self { online: true }
    }
}

/// Which provider variant the node runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderMode {
    /// Announce keys one at a time as they arrive
    Simple,
    /// Batch announcements and track statistics
    Batched,
}

impl Default for ProviderMode {
    fn default() -> Self {
        ProviderMode::Simple
    }
}

/// Provider subsystem settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider variant to run
    #[serde(default)]
    pub mode: ProviderMode,
    /// Maximum announcements per batch (batched mode)
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    /// How long a partial batch waits before flushing (batched mode)
    #[serde(default = "default_batch_interval", with = "duration_str")]
    pub batch_interval: Duration,
    /// How often every tracked key is re-announced (batched mode)
    #[serde(default = "default_reprovide_interval", with = "duration_str")]
    pub reprovide_interval: Duration,
}

fn default_batch_size() -> usize {
    128
}

fn default_batch_interval() -> Duration {
    Duration::from_secs(10)
}

fn default_reprovide_interval() -> Duration {
    Duration::from_secs(12 * 60 * 60)
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            mode: ProviderMode::default(),
            batch_size: default_batch_size(),
            batch_interval: default_batch_interval(),
            reprovide_interval: default_reprovide_interval(),
        }
    }
}
