use serde::{Deserialize, Serialize};

/// Controls which per-dataset responses are copied into the top-level
/// response.
///
/// `None` (the protocol default) returns only the aggregate answer; `Hit`
/// and `Miss` filter the dataset list down to positive or negative answers,
/// so datasets that failed with an in-band error appear under neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IncludeDatasetResponses {
    All,
    #[default]
    None,
    Hit,
    Miss,
}

/// A query for one allele: "is `referenceBases` → `alternateBases` at
/// `start` on `referenceName` present?"
///
/// Every field is optional at the type level because the wire format allows
/// any of them to be absent; the engine validates presence of the mandatory
/// five (reference name, start, reference bases, alternate bases, assembly
/// id) plus a non-empty dataset id list before searching. `start` is kept
/// signed so that a negative wire value reaches validation instead of
/// failing deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeaconAlleleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_name: Option<String>,
    /// 0-based position of the first affected base.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_bases: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_bases: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assembly_id: Option<String>,
    /// Datasets to search, in response order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_dataset_responses: Option<IncludeDatasetResponses>,
}

impl BeaconAlleleRequest {
    pub fn new(
        reference_name: String,
        start: i64,
        reference_bases: String,
        alternate_bases: String,
        assembly_id: String,
    ) -> Self {
        Self {
            reference_name: Some(reference_name),
            start: Some(start),
            reference_bases: Some(reference_bases),
            alternate_bases: Some(alternate_bases),
            assembly_id: Some(assembly_id),
            dataset_ids: None,
            include_dataset_responses: None,
        }
    }

    pub fn with_dataset_ids(mut self, dataset_ids: Vec<String>) -> Self {
        self.dataset_ids = Some(dataset_ids);
        self
    }

    pub fn with_include_dataset_responses(mut self, policy: IncludeDatasetResponses) -> Self {
        self.include_dataset_responses = Some(policy);
        self
    }
}
