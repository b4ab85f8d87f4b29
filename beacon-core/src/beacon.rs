use serde::{Deserialize, Serialize};

use crate::request::BeaconAlleleRequest;
use crate::response::KeyValuePair;

/// The beacon definition: identity, the datasets it serves, and optional
/// sample queries known to return hits.
///
/// This is what a `beacon.json` file deserializes into. Only `id` is
/// required here; hosts publishing a beacon typically fill in the
/// organization and descriptive fields as well.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Beacon {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<BeaconOrganization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome_url: Option<String>,
    /// One entry per served dataset, in the same order as the backing
    /// variant files. Required by the engine even though the wire format
    /// allows its absence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasets: Option<Vec<BeaconDataset>>,
    /// Example requests expected to produce `exists == true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_allele_requests: Option<Vec<BeaconAlleleRequest>>,
}

/// Metadata for one dataset served by the beacon.
///
/// `assembly_id` is compared verbatim against the request's assembly before
/// the dataset is searched, so it must use the same spelling callers send.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconDataset {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub assembly_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Vec<KeyValuePair>>,
}

impl BeaconDataset {
    pub fn new(id: impl Into<String>, assembly_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            assembly_id: assembly_id.into(),
            ..Self::default()
        }
    }
}

/// The organization hosting the beacon.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconOrganization {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub welcome_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}
