//! Shared fixtures: tiny bgzip-compressed, tabix-indexed VCF files written
//! into a temp directory, plus the beacon definition that serves them.

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use beacon_core::{Beacon, BeaconAlleleRequest, BeaconDataset};
use beacon_vcf::VcfBeacon;
use noodles::bgzf;
use noodles::core::Position;
use noodles::csi::binning_index::index::header;
use noodles::csi::binning_index::index::reference_sequence::bin::Chunk;
use noodles::tabix;

/// One sample with genotypes. `1:100 T>C` is carried het, `1:200` is
/// multi-allelic with only the `G` alternate called, and `1:300 C>G` is
/// recorded but homozygous reference.
pub const GENOTYPE_VCF: &str = "##fileformat=VCFv4.3\n\
##contig=<ID=1>\n\
##contig=<ID=2>\n\
##FORMAT=<ID=GT,Number=1,Type=String,Description=\"Genotype\">\n\
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\tFORMAT\tSAMPLE01\n\
1\t100\trs1\tT\tC\t.\t.\t.\tGT\t0|1\n\
1\t200\trs2\tA\tG,T\t.\t.\t.\tGT\t1/1\n\
1\t300\trs3\tC\tG\t.\t.\t.\tGT\t0/0\n\
2\t150\trs4\tG\tA\t.\t.\t.\tGT\t1|1\n";

/// Site records only, no genotype columns. The records at `1:250` and
/// `1:251` overlap a one-base query window, which is how the multi-record
/// warning is exercised.
pub const SITES_VCF: &str = "##fileformat=VCFv4.3\n\
##contig=<ID=1>\n\
#CHROM\tPOS\tID\tREF\tALT\tQUAL\tFILTER\tINFO\n\
1\t100\trs10\tT\tC\t.\t.\t.\n\
1\t250\trs11\tG\tA\t.\t.\t.\n\
1\t251\trs12\tGA\tG\t.\t.\t.\n";

/// Writes `text` as a bgzip VCF at `<dir>/<stem>.vcf.gz` and builds the
/// tabix index beside it.
pub fn write_indexed_vcf(dir: &Path, stem: &str, text: &str) -> Result<PathBuf> {
    let data_path = dir.join(format!("{stem}.vcf.gz"));
    let index_path = dir.join(format!("{stem}.vcf.gz.tbi"));

    let file = File::create(&data_path)
        .with_context(|| format!("creating {}", data_path.display()))?;
    let mut writer = bgzf::Writer::new(file);

    let mut indexer = tabix::index::Indexer::default();
    indexer.set_header(header::Builder::vcf().build());

    for line in text.lines() {
        if line.starts_with('#') {
            writer.write_all(line.as_bytes())?;
            writer.write_all(b"\n")?;
            continue;
        }

        let start_vpos = writer.virtual_position();
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
        let end_vpos = writer.virtual_position();

        let (name, start, end) = record_bounds(line)?;
        indexer.add_record(name, start, end, Chunk::new(start_vpos, end_vpos))?;
    }

    writer.finish()?;
    tabix::write(&index_path, &indexer.build())?;

    Ok(data_path)
}

/// CHROM plus the 1-based inclusive span `[POS, POS + len(REF) - 1]` of
/// one data line.
fn record_bounds(line: &str) -> Result<(&str, Position, Position)> {
    let mut fields = line.split('\t');
    let name = fields.next().context("missing CHROM")?;
    let pos: usize = fields.next().context("missing POS")?.parse()?;
    let reference = fields.nth(1).context("missing REF")?;

    let start = Position::try_from(pos)?;
    let end = Position::try_from(pos + reference.len() - 1)?;

    Ok((name, start, end))
}

/// The beacon definition served by [`build_beacon`]: the `genotypes`
/// dataset backed by [`GENOTYPE_VCF`] and the `sites` dataset backed by
/// [`SITES_VCF`], both on `grch37`.
pub fn beacon_definition() -> Beacon {
    Beacon {
        id: "test-vcf-beacon".to_string(),
        name: Some("Test VCF Beacon".to_string()),
        api_version: Some("0.3.0".to_string()),
        datasets: Some(vec![
            BeaconDataset::new("genotypes", "grch37"),
            BeaconDataset::new("sites", "grch37"),
        ]),
        sample_allele_requests: Some(vec![
            sample_request("genotypes"),
            sample_request("sites"),
        ]),
        ..Default::default()
    }
}

fn sample_request(dataset_id: &str) -> BeaconAlleleRequest {
    BeaconAlleleRequest::new(
        "1".to_string(),
        100,
        "T".to_string(),
        "C".to_string(),
        "grch37".to_string(),
    )
    .with_dataset_ids(vec![dataset_id.to_string()])
}

/// Builds the standard two-dataset beacon inside `dir`.
pub fn build_beacon(dir: &Path) -> Result<VcfBeacon> {
    let genotypes = write_indexed_vcf(dir, "genotypes", GENOTYPE_VCF)?;
    let sites = write_indexed_vcf(dir, "sites", SITES_VCF)?;
    Ok(VcfBeacon::new(beacon_definition(), &[genotypes, sites])?)
}
