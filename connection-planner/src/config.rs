//! Application configuration.
//!
//! Loaded from a YAML file. Only the PTV credentials are required; the stop
//! layout defaults to changing at Richmond for Flinders Street. `PTV_DEV_ID`
//! and `PTV_KEY` in the environment take precedence over the file.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::Deserialize;

use crate::domain::{DirectionId, RouteId, RouteType, StopId};
use crate::planner::PlannerConfig;
use crate::ptv::PtvConfig;

/// Environment variable overriding `ptv.dev_id`.
pub const DEV_ID_ENV: &str = "PTV_DEV_ID";

/// Environment variable overriding `ptv.key`.
pub const KEY_ENV: &str = "PTV_KEY";

/// Error loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("unknown time zone: {0}")]
    InvalidTimezone(String),

    #[error("missing PTV credentials: set ptv.{field} or {env}")]
    MissingCredential {
        field: &'static str,
        env: &'static str,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ptv: PtvSection,

    #[serde(default)]
    pub planner: PlannerSection,
}

/// API credentials.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PtvSection {
    /// Developer id (numeric, but signed as text)
    #[serde(default, deserialize_with = "id_as_string")]
    pub dev_id: Option<String>,
    pub key: Option<String>,
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

/// Stops and estimates for the planner.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PlannerSection {
    pub route_type: RouteType,
    pub direction_id: DirectionId,
    pub route_id: Option<RouteId>,
    pub interchange_stop: StopId,
    pub destination_stop: StopId,
    pub transfer_point_stop: StopId,
    pub onward_max_results: u32,
    pub direct_offset_mins: i64,
    pub indirect_offset_mins: i64,
    pub timezone: String,
}

impl Default for PlannerSection {
    fn default() -> Self {
        let defaults = PlannerConfig::default();
        Self {
            route_type: defaults.route_type,
            direction_id: defaults.direction_id,
            route_id: defaults.route_id,
            interchange_stop: defaults.interchange_stop,
            destination_stop: defaults.destination_stop,
            transfer_point_stop: defaults.transfer_point_stop,
            onward_max_results: defaults.onward_max_results,
            direct_offset_mins: defaults.direct_offset_mins,
            indirect_offset_mins: defaults.indirect_offset_mins,
            timezone: defaults.timezone.name().to_string(),
        }
    }
}

/// Accept the developer id as either a YAML number or string.
fn id_as_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Number(u64),
        Text(String),
    }

    Ok(Option::<Id>::deserialize(deserializer)?.map(|id| match id {
        Id::Number(n) => n.to_string(),
        Id::Text(s) => s,
    }))
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Replace credentials with values from the environment, where set.
    pub fn apply_env(&mut self) {
        self.apply_overrides(std::env::var(DEV_ID_ENV).ok(), std::env::var(KEY_ENV).ok());
    }

    fn apply_overrides(&mut self, dev_id: Option<String>, key: Option<String>) {
        if let Some(dev_id) = dev_id.filter(|v| !v.is_empty()) {
            self.ptv.dev_id = Some(dev_id);
        }
        if let Some(key) = key.filter(|v| !v.is_empty()) {
            self.ptv.key = Some(key);
        }
    }

    /// Client configuration. Fails if credentials are missing.
    pub fn ptv_config(&self) -> Result<PtvConfig, ConfigError> {
        let dev_id = self
            .ptv
            .dev_id
            .clone()
            .ok_or(ConfigError::MissingCredential {
                field: "dev_id",
                env: DEV_ID_ENV,
            })?;
        let key = self.ptv.key.clone().ok_or(ConfigError::MissingCredential {
            field: "key",
            env: KEY_ENV,
        })?;

        let mut config = PtvConfig::new(dev_id, key);
        if let Some(base_url) = &self.ptv.base_url {
            config = config.with_base_url(base_url.clone());
        }
        if let Some(secs) = self.ptv.timeout_secs {
            config = config.with_timeout(secs);
        }
        Ok(config)
    }

    /// Planner configuration. Fails on an unknown time zone.
    pub fn planner_config(&self) -> Result<PlannerConfig, ConfigError> {
        let p = &self.planner;
        let timezone = p
            .timezone
            .parse::<Tz>()
            .map_err(|_| ConfigError::InvalidTimezone(p.timezone.clone()))?;

        Ok(PlannerConfig {
            route_type: p.route_type,
            direction_id: p.direction_id,
            route_id: p.route_id,
            interchange_stop: p.interchange_stop,
            destination_stop: p.destination_stop,
            transfer_point_stop: p.transfer_point_stop,
            onward_max_results: p.onward_max_results,
            direct_offset_mins: p.direct_offset_mins,
            indirect_offset_mins: p.indirect_offset_mins,
            timezone,
        })
    }
}
