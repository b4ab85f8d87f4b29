//! # Beacon Engine for Tabix-Indexed VCF Files
//!
//! This crate answers GA4GH Beacon allele queries ("does variant V exist in
//! dataset D?") against bgzip-compressed, tabix-indexed VCF files. It
//! provides:
//!
//! - Region-bounded record access over one indexed file (`VcfRegionReader`)
//! - Allele and genotype matching rules (`matcher`)
//! - Per-dataset search with counts and frequency (`VcfDataset`)
//! - Request validation and multi-dataset aggregation (`VcfBeacon`)
//! - Construction from an adapter configuration (`AdapterConfig`)
//!
//! Each VCF file is one dataset. A file without genotype columns reports a
//! hit whenever a matching site record exists; a file with genotype columns
//! additionally requires at least one sample to carry the queried
//! alternate. Per-dataset answers are aggregated under the request's
//! inclusion policy, with errors promoted to the top level only when a
//! single dataset was requested.
//!
//! ```no_run
//! use beacon_core::BeaconAlleleRequest;
//! use beacon_vcf::{AdapterConfig, VcfBeacon};
//!
//! # fn main() -> Result<(), beacon_vcf::VcfBeaconError> {
//! let config = AdapterConfig::from_file("adapter.json")?;
//! let beacon = VcfBeacon::from_config(&config)?;
//!
//! let request = BeaconAlleleRequest::new(
//!     "1".to_string(),
//!     100,
//!     "T".to_string(),
//!     "C".to_string(),
//!     "grch37".to_string(),
//! )
//! .with_dataset_ids(vec!["dataset-1".to_string()]);
//!
//! let response = beacon.search(&request)?;
//! println!("exists: {:?}", response.exists);
//! # Ok(())
//! # }
//! ```

pub mod beacon;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod matcher;
pub mod reader;

pub use beacon::{AlleleQuery, VcfBeacon, validate};
pub use config::AdapterConfig;
pub use dataset::VcfDataset;
pub use errors::VcfBeaconError;
pub use reader::{VariantRecord, VcfRegionReader};
