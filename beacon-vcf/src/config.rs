//! Adapter configuration: the VCF file list plus a beacon definition.

use std::fs;
use std::path::{Path, PathBuf};

use beacon_core::Beacon;
use serde::{Deserialize, Serialize};

use crate::errors::VcfBeaconError;

/// Configuration for building a [`crate::VcfBeacon`].
///
/// `filenames` lists the bgzipped, tabix-indexed VCF files, one per
/// dataset and in dataset order. The beacon definition comes from either
/// `beaconJsonFile` (a path to a JSON file) or `beaconJson` (the JSON
/// inline); when both are set the inline definition wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterConfig {
    #[serde(default)]
    pub filenames: Vec<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beacon_json_file: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beacon_json: Option<String>,
}

impl AdapterConfig {
    /// Reads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, VcfBeaconError> {
        let text = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Resolves the beacon definition from the configured source.
    pub fn resolve_beacon(&self) -> Result<Beacon, VcfBeaconError> {
        if let Some(json) = &self.beacon_json {
            return Ok(serde_json::from_str(json)?);
        }

        if let Some(path) = &self.beacon_json_file {
            if !path.exists() {
                return Err(VcfBeaconError::BeaconJsonNotFound(path.clone()));
            }
            let text = fs::read_to_string(path)?;
            return Ok(serde_json::from_str(&text)?);
        }

        Err(VcfBeaconError::MissingConfigValue("beaconJson"))
    }
}
