use std::path::PathBuf;

use thiserror::Error;

/// Fatal construction and infrastructure errors.
///
/// Everything here aborts catalog construction or a running query. In-band
/// protocol conditions (invalid request, unknown dataset id, assembly
/// mismatch) never surface as this type; those travel inside responses as
/// `beacon_core::BeaconError` values.
#[derive(Error, Debug)]
pub enum VcfBeaconError {
    #[error("VCF file requires an index file, but it does not exist: {0}")]
    IndexNotFound(PathBuf),

    #[error("VCF file not found: {0}")]
    VcfNotFound(PathBuf),

    #[error("A list of the included datasets is required in the beacon definition")]
    MissingDatasets,

    #[error(
        "Length of dataset ids ({datasets}) and filenames ({files}) does not match. \
         Each file constitutes a single dataset"
    )]
    DatasetCountMismatch { datasets: usize, files: usize },

    #[error("Missing required configuration parameter: {0}")]
    MissingConfigValue(&'static str),

    #[error("Beacon definition file does not exist: {0}")]
    BeaconJsonNotFound(PathBuf),

    #[error("Invalid beacon definition: {0}")]
    InvalidBeaconJson(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
