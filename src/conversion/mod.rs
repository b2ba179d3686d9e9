//! Output of translated BEDPE records.

pub mod intervals;
pub mod vcf;
