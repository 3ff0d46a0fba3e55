// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT
use std::{env, fmt::Display, path::PathBuf, str::FromStr, time::Duration};

use tracing::{info, warn};

use crate::error::{ConfigError, FactorError};
use crate::science::factors::EmissionFactors;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5001";
const DEFAULT_TIMEOUT_SECS: &str = "10";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Backend origin, without trailing slash
    pub api_base: String,
    pub timeout: Duration,
    /// Optional JSON factor table replacing the built-in one
    pub factors_path: Option<PathBuf>,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; `load` passes the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base: String = try_load(&lookup, "CARBON_API_BASE", DEFAULT_API_BASE)?;
        let api_base = api_base.trim().trim_end_matches('/').to_string();
        if !(api_base.starts_with("http://") || api_base.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                key: "CARBON_API_BASE",
                value: api_base,
                reason: "expected an http(s) URL".to_string(),
            });
        }

        let timeout_secs: u64 = try_load(&lookup, "CARBON_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "CARBON_API_TIMEOUT_SECS",
                value: timeout_secs.to_string(),
                reason: "must be at least 1".to_string(),
            });
        }

        let factors_path = lookup("CARBON_FACTORS_PATH")
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            api_base,
            timeout: Duration::from_secs(timeout_secs),
            factors_path,
        })
    }

    /// Factor table: the configured file, or the built-in defaults
    pub fn factors(&self) -> Result<EmissionFactors, FactorError> {
        match &self.factors_path {
            Some(path) => EmissionFactors::load(path),
            None => Ok(EmissionFactors::default()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(10),
            factors_path: None,
        }
    }
}

fn try_load<T, F>(lookup: &F, key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.trim().parse().map_err(|e: T::Err| {
        warn!("Invalid {key} value: {e}");
        ConfigError::InvalidValue {
            key,
            value: raw.clone(),
            reason: e.to_string(),
        }
    })
}
