//! Allele comparison rules.
//!
//! Matching is exact, case-sensitive string equality with no trimming or
//! normalization: `"C"` does not match `"c"`, and a left-aligned indel
//! spelling does not match an unaligned one. Genotypes are compared in
//! their rendered literal-base form (`"T|C"`, `"A/A"`), so a genotype
//! carries an allele exactly when one of its phase-separated tokens equals
//! the queried alternate bases.

use crate::reader::VariantRecord;

/// Exact, case-sensitive base-string equality.
pub fn bases_match(a: &str, b: &str) -> bool {
    a == b
}

/// True when the record's reference allele equals `reference_bases` and any
/// of its alternate alleles equals `alternate_bases`.
pub fn record_matches(
    record: &VariantRecord,
    reference_bases: &str,
    alternate_bases: &str,
) -> bool {
    bases_match(&record.reference_allele, reference_bases)
        && record
            .alternate_alleles
            .iter()
            .any(|alt| bases_match(alt, alternate_bases))
}

/// True when any allele token of the rendered genotype equals `allele`.
///
/// Tokens are split on both phase separators, so phased and unphased calls
/// are treated alike. A no-call token (`"."`) never equals a base string.
pub fn genotype_has_allele(genotype: &str, allele: &str) -> bool {
    genotype.split(['|', '/']).any(|token| token == allele)
}
