//! The beacon engine: dataset catalog, request validation, and response
//! aggregation.

use std::collections::HashMap;
use std::path::PathBuf;

use beacon_core::{
    Beacon, BeaconAlleleRequest, BeaconAlleleResponse, BeaconDatasetAlleleResponse, BeaconError,
    IncludeDatasetResponses,
};
use tracing::info;

use crate::config::AdapterConfig;
use crate::dataset::VcfDataset;
use crate::errors::VcfBeaconError;

/// A validated view of an allele request.
///
/// Holding one of these proves the five mandatory fields were present and
/// non-empty and that `start` was non-negative; the dataset layer consumes
/// it without re-checking.
#[derive(Debug, Clone, Copy)]
pub struct AlleleQuery<'a> {
    pub reference_name: &'a str,
    /// Non-negative start position from the request.
    pub start: u64,
    pub reference_bases: &'a str,
    pub alternate_bases: &'a str,
    pub assembly_id: &'a str,
}

/// Checks the request's mandatory fields in a fixed order, stopping at the
/// first failure. An absent field and an empty string fail alike; a
/// negative `start` fails the same check as a missing one.
pub fn validate(request: &BeaconAlleleRequest) -> Result<AlleleQuery<'_>, BeaconError> {
    let reference_name = non_empty(&request.reference_name)
        .ok_or_else(|| BeaconError::new(400, "Reference name cannot be null"))?;

    let start = match request.start {
        Some(start) if start >= 0 => start as u64,
        _ => return Err(BeaconError::new(400, "Start cannot be null or less than 0")),
    };

    let reference_bases = non_empty(&request.reference_bases)
        .ok_or_else(|| BeaconError::new(400, "Reference bases cannot be null"))?;

    let alternate_bases = non_empty(&request.alternate_bases)
        .ok_or_else(|| BeaconError::new(400, "Alternate bases cannot be null"))?;

    let assembly_id = non_empty(&request.assembly_id)
        .ok_or_else(|| BeaconError::new(400, "Assembly Id cannot be null"))?;

    match &request.dataset_ids {
        Some(ids) if !ids.is_empty() => {}
        _ => {
            return Err(BeaconError::new(
                400,
                "DatasetIds cannot be null and must include at least 1 id",
            ));
        }
    }

    Ok(AlleleQuery {
        reference_name,
        start,
        reference_bases,
        alternate_bases,
        assembly_id,
    })
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

/// A set of VCF files served as one beacon.
///
/// The beacon definition's datasets pair positionally with the file list:
/// the first dataset is backed by the first file, and so on. The catalog
/// is built once and never mutated, so a shared `VcfBeacon` serves
/// concurrent `search` calls safely.
#[derive(Debug)]
pub struct VcfBeacon {
    beacon: Beacon,
    datasets: HashMap<String, VcfDataset>,
}

impl VcfBeacon {
    /// Builds the catalog, opening every backing file.
    ///
    /// Fails when the beacon defines no dataset list, when the dataset and
    /// file counts differ, or when any file (or its index) cannot be
    /// opened. There is no partial catalog: one bad file fails the whole
    /// construction.
    pub fn new(beacon: Beacon, filenames: &[PathBuf]) -> Result<Self, VcfBeaconError> {
        let dataset_list = beacon
            .datasets
            .clone()
            .ok_or(VcfBeaconError::MissingDatasets)?;

        if dataset_list.len() != filenames.len() {
            return Err(VcfBeaconError::DatasetCountMismatch {
                datasets: dataset_list.len(),
                files: filenames.len(),
            });
        }

        let mut datasets = HashMap::with_capacity(dataset_list.len());

        for (dataset, filename) in dataset_list.into_iter().zip(filenames) {
            let id = dataset.id.clone();
            datasets.insert(id, VcfDataset::new(dataset, filename)?);
        }

        info!(
            beacon_id = %beacon.id,
            datasets = datasets.len(),
            "beacon catalog ready"
        );

        Ok(Self { beacon, datasets })
    }

    /// Builds the beacon from an adapter configuration.
    pub fn from_config(config: &AdapterConfig) -> Result<Self, VcfBeaconError> {
        if config.filenames.is_empty() {
            return Err(VcfBeaconError::MissingConfigValue("filenames"));
        }

        let beacon = config.resolve_beacon()?;
        Self::new(beacon, &config.filenames)
    }

    /// The beacon definition this engine serves.
    pub fn beacon(&self) -> &Beacon {
        &self.beacon
    }

    /// Answers one allele request.
    ///
    /// Protocol-level failures (validation, unknown dataset, assembly
    /// mismatch, empty dataset list) come back as in-band errors inside the
    /// returned response; `Err` is reserved for infrastructure failures
    /// while reading a backing file.
    ///
    /// A validation failure produces a top-level 400 with no request echo
    /// and no dataset searched. Otherwise each requested dataset is
    /// searched in order, and the per-dataset answers are aggregated: a
    /// single requested dataset propagates its error to the top level,
    /// while multiple datasets keep errors local and OR their `exists`
    /// values.
    pub fn search(
        &self,
        request: &BeaconAlleleRequest,
    ) -> Result<BeaconAlleleResponse, VcfBeaconError> {
        let query = match validate(request) {
            Ok(query) => query,
            Err(error) => {
                return Ok(BeaconAlleleResponse {
                    beacon_id: self.beacon.id.clone(),
                    error: Some(error),
                    ..Default::default()
                });
            }
        };

        let mut request = request.clone();
        if request.include_dataset_responses.is_none() {
            request.include_dataset_responses = Some(IncludeDatasetResponses::None);
        }

        // Validation already rejects an absent or empty id list; this guard
        // mirrors the protocol's distinct 500 for an empty list reaching
        // the search stage.
        let dataset_ids: Vec<String> = request.dataset_ids.clone().unwrap_or_default();
        if dataset_ids.is_empty() {
            return Ok(BeaconAlleleResponse {
                beacon_id: self.beacon.id.clone(),
                allele_request: Some(request),
                error: Some(BeaconError::new(
                    500,
                    "No datasets defined. At least one dataset must be defined",
                )),
                ..Default::default()
            });
        }

        let mut responses = Vec::with_capacity(dataset_ids.len());
        for dataset_id in &dataset_ids {
            responses.push(self.search_dataset(dataset_id, &query)?);
        }

        Ok(finalize_response(self.beacon.id.clone(), request, responses))
    }

    fn search_dataset(
        &self,
        dataset_id: &str,
        query: &AlleleQuery<'_>,
    ) -> Result<BeaconDatasetAlleleResponse, VcfBeaconError> {
        match self.datasets.get(dataset_id) {
            Some(dataset) => dataset.search(query),
            None => Ok(BeaconDatasetAlleleResponse {
                dataset_id: dataset_id.to_string(),
                error: Some(BeaconError::new(
                    404,
                    format!("Could not find dataset with id: {dataset_id}"),
                )),
                ..Default::default()
            }),
        }
    }
}

/// Aggregates per-dataset answers into the top-level response.
///
/// A single errored dataset promotes its error and leaves `exists` unset;
/// any other shape ORs the per-dataset `exists` values and keeps errors
/// local. The inclusion policy then selects which per-dataset responses
/// are attached: errored responses are neither hits nor misses.
fn finalize_response(
    beacon_id: String,
    request: BeaconAlleleRequest,
    responses: Vec<BeaconDatasetAlleleResponse>,
) -> BeaconAlleleResponse {
    let include = request.include_dataset_responses.unwrap_or_default();

    let (exists, error) = if responses.len() == 1 && responses[0].error.is_some() {
        (None, responses[0].error.clone())
    } else {
        (
            Some(responses.iter().any(|r| r.exists == Some(true))),
            None,
        )
    };

    let dataset_allele_responses = match include {
        IncludeDatasetResponses::None => None,
        IncludeDatasetResponses::All => Some(responses),
        IncludeDatasetResponses::Hit => Some(
            responses
                .into_iter()
                .filter(|r| r.exists == Some(true))
                .collect(),
        ),
        IncludeDatasetResponses::Miss => Some(
            responses
                .into_iter()
                .filter(|r| r.exists == Some(false))
                .collect(),
        ),
    };

    BeaconAlleleResponse {
        beacon_id,
        exists,
        error,
        allele_request: Some(request),
        dataset_allele_responses,
    }
}
