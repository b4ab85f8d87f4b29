//! Region-bounded access to one bgzip-compressed, tabix-indexed VCF file.
//!
//! The reader parses the header and the `.tbi` index once at open time and
//! opens a fresh decompression stream for every query, so a shared reader
//! can serve concurrent region queries without interior locking.

use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use noodles::core::{Position, Region};
use noodles::tabix;
use noodles::vcf::{
    self,
    variant::RecordBuf,
    variant::record::samples::keys::key,
    variant::record::samples::series::value::genotype::Phasing,
    variant::record_buf::samples::sample::{
        Value,
        value::genotype::{Allele, Genotype},
    },
};
use tracing::debug;

use crate::errors::VcfBeaconError;

/// One VCF data line, reduced to the fields allele matching needs.
///
/// `genotypes` holds each sample's call rendered as literal bases joined by
/// its phase separator (`"T|C"`, `"A/A"`, `"./."`). It is `None` for
/// files without sample columns, where site presence is all the file can
/// attest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantRecord {
    /// 1-based position of the record.
    pub position: usize,
    pub reference_allele: String,
    pub alternate_alleles: Vec<String>,
    pub genotypes: Option<Vec<String>>,
}

/// A handle on one indexed VCF file.
#[derive(Debug)]
pub struct VcfRegionReader {
    path: PathBuf,
    index: tabix::Index,
    header: vcf::Header,
}

impl VcfRegionReader {
    /// Opens `path`, requiring its tabix companion at `<path>.tbi`.
    ///
    /// The index is checked before the data file, so a dataset with only a
    /// bare VCF reports the missing index rather than a read failure.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, VcfBeaconError> {
        let path = path.as_ref().to_path_buf();
        let index_path = index_path_of(&path);

        if !index_path.exists() {
            return Err(VcfBeaconError::IndexNotFound(index_path));
        }

        if !path.exists() {
            return Err(VcfBeaconError::VcfNotFound(path));
        }

        let index = tabix::read(&index_path)?;
        let mut reader = vcf::io::indexed_reader::Builder::default()
            .set_index(index.clone())
            .build_from_path(&path)?;
        let header = reader.read_header()?;

        debug!(
            path = %path.display(),
            samples = header.sample_names().len(),
            "opened indexed VCF"
        );

        Ok(Self {
            path,
            index,
            header,
        })
    }

    /// Whether the file declares per-sample genotype columns.
    pub fn has_genotypes(&self) -> bool {
        !self.header.sample_names().is_empty()
    }

    /// Number of samples declared in the header, fixed at open time.
    pub fn genotyped_sample_count(&self) -> usize {
        self.header.sample_names().len()
    }

    /// Returns the records overlapping the 1-based inclusive window
    /// `[start, end]` on `reference_name`, in stored order.
    ///
    /// A start of 0 is clamped to 1. A contig the index does not know
    /// yields an empty result rather than an error.
    pub fn query(
        &self,
        reference_name: &str,
        start: usize,
        end: usize,
    ) -> Result<Vec<VariantRecord>, VcfBeaconError> {
        let mut reader = vcf::io::indexed_reader::Builder::default()
            .set_index(self.index.clone())
            .build_from_path(&self.path)?;
        let header = reader.read_header()?;

        let start = start.max(1);
        let start_position = Position::new(start).unwrap_or(Position::MIN);
        let end_position = Position::new(end.max(start)).unwrap_or(Position::MIN);
        let region = Region::new(reference_name, start_position..=end_position);

        let query = match reader.query(&header, &region) {
            Ok(query) => query,
            // The contig is absent from the index, so nothing overlaps.
            Err(_) => return Ok(Vec::new()),
        };

        let mut records = Vec::new();

        for result in query {
            let record = result?;
            records.push(materialize(&header, &record)?);
        }

        Ok(records)
    }
}

/// `<path>.tbi`, keeping the full data filename as the prefix.
fn index_path_of(path: &Path) -> PathBuf {
    let mut raw = path.as_os_str().to_os_string();
    raw.push(".tbi");
    PathBuf::from(raw)
}

fn materialize(header: &vcf::Header, record: &vcf::Record) -> io::Result<VariantRecord> {
    let record = RecordBuf::try_from_variant_record(header, record)?;

    let position = record.variant_start().map(usize::from).unwrap_or_default();
    let reference_allele = record.reference_bases().to_string();
    let alternate_alleles: Vec<String> = record.alternate_bases().as_ref().to_vec();

    let genotypes = if header.sample_names().is_empty() {
        None
    } else {
        Some(genotype_strings(
            header,
            &record,
            &reference_allele,
            &alternate_alleles,
        )?)
    };

    Ok(VariantRecord {
        position,
        reference_allele,
        alternate_alleles,
        genotypes,
    })
}

fn genotype_strings(
    header: &vcf::Header,
    record: &RecordBuf,
    reference_allele: &str,
    alternate_alleles: &[String],
) -> io::Result<Vec<String>> {
    let samples = record.samples();
    let series = samples.select(key::GENOTYPE);

    let mut genotypes = Vec::with_capacity(header.sample_names().len());

    for i in 0..header.sample_names().len() {
        let value = series.as_ref().and_then(|series| series.get(i)).flatten();

        let genotype = match value {
            Some(Value::Genotype(genotype)) => {
                render_genotype(genotype.as_ref(), reference_allele, alternate_alleles)
            }
            Some(Value::String(s)) => {
                let genotype = Genotype::from_str(s).map_err(|e| {
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("invalid genotype '{s}': {e}"),
                    )
                })?;
                render_genotype(genotype.as_ref(), reference_allele, alternate_alleles)
            }
            _ => ".".to_string(),
        };

        genotypes.push(genotype);
    }

    Ok(genotypes)
}

/// Renders GT allele indices as literal bases: index 0 is the reference
/// allele, index n is the n-th alternate, and a missing index is `.`.
fn render_genotype(
    alleles: &[Allele],
    reference_allele: &str,
    alternate_alleles: &[String],
) -> String {
    let mut out = String::new();

    for (i, allele) in alleles.iter().enumerate() {
        if i > 0 {
            out.push(match allele.phasing() {
                Phasing::Phased => '|',
                Phasing::Unphased => '/',
            });
        }

        match allele.position() {
            Some(0) => out.push_str(reference_allele),
            Some(n) => match alternate_alleles.get(n - 1) {
                Some(alt) => out.push_str(alt),
                None => out.push('.'),
            },
            None => out.push('.'),
        }
    }

    out
}
