use serde::{Deserialize, Serialize};

use crate::error::BeaconError;
use crate::request::BeaconAlleleRequest;

/// One key/value note attached to a dataset response, e.g.
/// `{"warn": "Multiple variants were found with the same query"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyValuePair {
    pub key: String,
    pub value: String,
}

impl KeyValuePair {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// The answer for a single dataset.
///
/// `dataset_id` is always the requested id. Exactly one of `exists` and
/// `error` is set: an in-band error (unknown dataset, assembly mismatch)
/// leaves `exists` unset. The counts and `frequency` are populated only
/// when the allele was found, and `frequency`/`sample_count` additionally
/// require the dataset to carry per-sample genotype data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconDatasetAlleleResponse {
    pub dataset_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<BeaconError>,
    /// Matching samples over genotyped samples, in [0, 1].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,
    /// Records in the query window that matched the allele.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub call_count: Option<u64>,
    /// Samples whose genotype carries the requested alternate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub info: Option<Vec<KeyValuePair>>,
}

impl BeaconDatasetAlleleResponse {
    pub fn new(dataset_id: impl Into<String>) -> Self {
        Self {
            dataset_id: dataset_id.into(),
            ..Self::default()
        }
    }
}

/// The aggregated top-level answer.
///
/// `allele_request` echoes the normalized request (it is unset when the
/// request failed validation), `exists` is the OR over the searched
/// datasets, and `dataset_allele_responses` carries the per-dataset
/// breakdown selected by the request's inclusion policy (absent under
/// `NONE`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconAlleleResponse {
    pub beacon_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<BeaconError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allele_request: Option<BeaconAlleleRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_allele_responses: Option<Vec<BeaconDatasetAlleleResponse>>,
}

impl BeaconAlleleResponse {
    pub fn new(beacon_id: impl Into<String>) -> Self {
        Self {
            beacon_id: beacon_id.into(),
            ..Self::default()
        }
    }
}
