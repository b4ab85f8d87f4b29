//! One dataset: beacon metadata plus its backing VCF file.

use std::path::Path;

use beacon_core::{BeaconDataset, BeaconDatasetAlleleResponse, BeaconError, KeyValuePair};
use tracing::debug;

use crate::beacon::AlleleQuery;
use crate::errors::VcfBeaconError;
use crate::matcher;
use crate::reader::VcfRegionReader;

/// A single searchable dataset.
///
/// Each VCF file constitutes one dataset. Files without genotype columns
/// answer from the site records alone; files with genotype columns require
/// at least one sample to carry the queried alternate before the dataset
/// reports a hit.
#[derive(Debug)]
pub struct VcfDataset {
    dataset: BeaconDataset,
    reader: VcfRegionReader,
}

impl VcfDataset {
    pub fn new(dataset: BeaconDataset, path: impl AsRef<Path>) -> Result<Self, VcfBeaconError> {
        let reader = VcfRegionReader::open(path)?;
        Ok(Self { dataset, reader })
    }

    pub fn id(&self) -> &str {
        &self.dataset.id
    }

    pub fn metadata(&self) -> &BeaconDataset {
        &self.dataset
    }

    /// Searches this dataset for the validated allele query.
    ///
    /// The request's assembly must equal the dataset's (verbatim), or the
    /// response carries a 400 error with `exists` unset. Otherwise records
    /// overlapping `[start, start + len(alternateBases)]` are scanned;
    /// counters are attached only when a hit was found, and the sample
    /// count and frequency only when the file carries genotype data.
    /// Seeing more than one record in the window adds a `warn` info entry,
    /// hit or not.
    pub fn search(
        &self,
        query: &AlleleQuery<'_>,
    ) -> Result<BeaconDatasetAlleleResponse, VcfBeaconError> {
        debug!(dataset_id = self.id(), "searching dataset");

        if query.assembly_id != self.dataset.assembly_id {
            return Ok(BeaconDatasetAlleleResponse {
                dataset_id: self.dataset.id.clone(),
                error: Some(BeaconError::new(400, "Invalid Assembly")),
                ..Default::default()
            });
        }

        let end = query.start.saturating_add(query.alternate_bases.len() as u64);
        let records = self
            .reader
            .query(query.reference_name, query.start as usize, end as usize)?;

        let mut exists = false;
        let mut variant_count = 0u64;
        let mut call_count = 0u64;
        let mut sample_count = 0u64;

        for record in &records {
            if !matcher::record_matches(record, query.reference_bases, query.alternate_bases) {
                continue;
            }

            match &record.genotypes {
                // Without genotyping data, the alternate showing in the ALT
                // column is enough.
                None => {
                    exists = true;
                    variant_count += 1;
                    call_count += 1;
                }
                Some(genotypes) => {
                    let matches = genotypes
                        .iter()
                        .filter(|genotype| {
                            matcher::genotype_has_allele(genotype, query.alternate_bases)
                        })
                        .count() as u64;

                    if matches > 0 {
                        exists = true;
                        variant_count += 1;
                        call_count += 1;
                        sample_count += matches;
                    }
                }
            }
        }

        let genotyped = self.reader.has_genotypes();

        Ok(BeaconDatasetAlleleResponse {
            dataset_id: self.dataset.id.clone(),
            exists: Some(exists),
            variant_count: exists.then_some(variant_count),
            call_count: exists.then_some(call_count),
            sample_count: (exists && genotyped).then_some(sample_count),
            frequency: (exists && genotyped)
                .then(|| sample_count as f64 / self.reader.genotyped_sample_count() as f64),
            info: (records.len() > 1).then(|| {
                vec![KeyValuePair::new(
                    "warn",
                    "Multiple variants were found with the same query",
                )]
            }),
            ..Default::default()
        })
    }
}
