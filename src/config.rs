//! Inputs for the demos, read from an optional TOML file.

use crate::builder::HouseStyle;
use crate::error::{PatternError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub color: bool,
    pub factory: FactorySection,
    pub transport: TransportSection,
    pub builder: BuilderSection,
    pub adapter: AdapterSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorySection {
    pub selectors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportSection {
    pub kinds: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuilderSection {
    pub style: HouseStyle,
    /// Second style to rebind the director to after the first build.
    pub rebind: Option<HouseStyle>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterSection {
    pub message: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            color: true,
            factory: FactorySection::default(),
            transport: TransportSection::default(),
            builder: BuilderSection::default(),
            adapter: AdapterSection::default(),
        }
    }
}

impl Default for FactorySection {
    fn default() -> Self {
        Self {
            selectors: vec![
                "coldWithTruck".to_string(),
                "hotWithAirPlane".to_string(),
                "frozenWithRocket".to_string(),
            ],
        }
    }
}

impl Default for TransportSection {
    fn default() -> Self {
        Self {
            kinds: vec!["truck".to_string(), "airPlane".to_string(), "ship".to_string()],
        }
    }
}

impl Default for AdapterSection {
    fn default() -> Self {
        Self {
            message: "this is adapter pattern".to_string(),
        }
    }
}

impl DemoConfig {
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");
        let content =
            fs::read_to_string(path).map_err(|err| PatternError::config_read(path, err))?;
        Self::parse_toml(&content)
    }

    /// Loads `path` when given, otherwise falls back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Colors stay off when `NO_COLOR` is set, whatever the file says.
    pub fn use_colors(&self) -> bool {
        self.color && std::env::var_os("NO_COLOR").is_none()
    }
}
