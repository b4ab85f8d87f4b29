//! # GA4GH Beacon v0.3 Wire Model
//!
//! This crate carries the Beacon protocol data types shared across the
//! workspace. It provides:
//!
//! - Allele request/response objects (`BeaconAlleleRequest`,
//!   `BeaconAlleleResponse`, `BeaconDatasetAlleleResponse`)
//! - Beacon/dataset/organization metadata (`Beacon`, `BeaconDataset`)
//! - In-band protocol errors (`BeaconError`)
//!
//! Serialization preserves the protocol's camelCase field names
//! (`referenceName`, `assemblyId`, `includeDatasetResponses`, ...), so a
//! transport layer can pass these structs straight through `serde_json`
//! without remapping. Optional fields are omitted from output when unset.

pub mod beacon;
pub mod error;
pub mod request;
pub mod response;

pub use beacon::{Beacon, BeaconDataset, BeaconOrganization};
pub use error::BeaconError;
pub use request::{BeaconAlleleRequest, IncludeDatasetResponses};
pub use response::{BeaconAlleleResponse, BeaconDatasetAlleleResponse, KeyValuePair};
