use std::convert::TryFrom;
use std::str::FromStr;

use anyhow::{Context, Result};
use bio_types::genome;
use itertools::Itertools;

use crate::bedpe::annotation::extract_sv_info;
use crate::errors;
use crate::variants::{Info, InfoValue, SvType};

/// Minimum number of whitespace separated columns of a BEDPE record.
pub const MIN_COLUMNS: usize = 12;

const ANNOTATION_COLUMN: usize = 11;

/// A structural variant given as a pair of breakpoints in one BEDPE line.
///
/// Coordinates are kept exactly as written in the file, including negative placeholders
/// like `-1` for an unknown mate.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct BreakpointRecord {
    #[getset(get = "pub")]
    chrom1: String,
    #[getset(get_copy = "pub")]
    start1: i64,
    #[getset(get_copy = "pub")]
    end1: i64,
    #[getset(get = "pub")]
    chrom2: String,
    #[getset(get_copy = "pub")]
    start2: i64,
    #[getset(get_copy = "pub")]
    end2: i64,
    #[getset(get = "pub")]
    name: String,
    #[getset(get_copy = "pub")]
    sv_type: SvType,
    /// `end2 - start1`, only defined if both breakpoints are on the same contig.
    #[getset(get_copy = "pub")]
    sv_len: Option<i64>,
    /// Pass-through attributes `BP_CHR1` ... `BP_NAME`.
    #[getset(get = "pub")]
    metadata: Info,
}

fn parse_coordinate(fields: &[&str], column: usize) -> Result<i64> {
    fields[column].parse::<i64>().map_err(|_| {
        errors::malformed_record(&format!(
            "column {} must be an integer, found '{}'",
            column + 1,
            fields[column]
        ))
        .into()
    })
}

impl FromStr for BreakpointRecord {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self> {
        let fields = line.split_whitespace().collect_vec();
        if fields.len() < MIN_COLUMNS {
            return Err(errors::malformed_record(&format!(
                "expected at least {} columns, found {}",
                MIN_COLUMNS,
                fields.len()
            ))
            .into());
        }

        let chrom1 = fields[0].to_owned();
        let start1 = parse_coordinate(&fields, 1)?;
        let end1 = parse_coordinate(&fields, 2)?;
        let chrom2 = fields[3].to_owned();
        let start2 = parse_coordinate(&fields, 4)?;
        let end2 = parse_coordinate(&fields, 5)?;
        let name = fields[6].to_owned();

        let sv_type = SvType::from_annotation(extract_sv_info(fields[ANNOTATION_COLUMN], &["TYPE"])[0]);

        let sv_len = if chrom1 == chrom2 {
            Some(end2 - start1)
        } else {
            None
        };

        let mut metadata = Info::new();
        metadata.insert("BP_CHR1".to_owned(), InfoValue::from(chrom1.as_str()));
        metadata.insert("BP_POS1".to_owned(), InfoValue::from(start1));
        metadata.insert("BP_END1".to_owned(), InfoValue::from(end1));
        metadata.insert("BP_CHR2".to_owned(), InfoValue::from(chrom2.as_str()));
        metadata.insert("BP_POS2".to_owned(), InfoValue::from(start2));
        metadata.insert("BP_END2".to_owned(), InfoValue::from(end2));
        metadata.insert("BP_NAME".to_owned(), InfoValue::from(name.as_str()));

        Ok(BreakpointRecord {
            chrom1,
            start1,
            end1,
            chrom2,
            start2,
            end2,
            name,
            sv_type,
            sv_len,
            metadata,
        })
    }
}

impl BreakpointRecord {
    /// Parse a single (non-comment) BEDPE line.
    pub fn parse(line: &str) -> Result<Self> {
        line.parse()
            .with_context(|| format!("failed to parse BEDPE line '{}'", line))
    }

    /// First breakpoint region as given in the file (0-based, half-open).
    ///
    /// `None` if a coordinate is negative.
    pub fn breakpoint1(&self) -> Option<genome::Interval> {
        region(&self.chrom1, self.start1, self.end1)
    }

    /// Second breakpoint region as given in the file (0-based, half-open).
    ///
    /// `None` if a coordinate is negative.
    pub fn breakpoint2(&self) -> Option<genome::Interval> {
        region(&self.chrom2, self.start2, self.end2)
    }
}

fn region(chrom: &str, start: i64, end: i64) -> Option<genome::Interval> {
    let start = u64::try_from(start).ok()?;
    let end = u64::try_from(end).ok()?;
    Some(genome::Interval::new(chrom.to_owned(), start..end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::variants::SupportedSvTypes;
    use bio_types::genome::AbstractInterval;

    const DEL_LINE: &str =
        "chr1\t100\t150\tchr1\t480\t500\tdel1\t30\t+\t-\tPASS\tTYPE=DEL;SCORE=30";

    #[test]
    fn test_parse_deletion() {
        let record = BreakpointRecord::parse(DEL_LINE).unwrap();
        assert_eq!(record.chrom1(), "chr1");
        assert_eq!(record.start1(), 100);
        assert_eq!(record.end1(), 150);
        assert_eq!(record.chrom2(), "chr1");
        assert_eq!(record.start2(), 480);
        assert_eq!(record.end2(), 500);
        assert_eq!(record.name(), "del1");
        assert_eq!(record.sv_type(), SvType::Deletion);
        assert_eq!(record.sv_len(), Some(400));
    }

    #[test]
    fn test_parse_metadata_order() {
        let record = BreakpointRecord::parse(DEL_LINE).unwrap();
        let keys = record.metadata().keys().map(|k| k.as_str()).collect_vec();
        assert_eq!(
            keys,
            vec!["BP_CHR1", "BP_POS1", "BP_END1", "BP_CHR2", "BP_POS2", "BP_END2", "BP_NAME"]
        );
        assert_eq!(
            record.metadata().get("BP_POS1"),
            Some(&InfoValue::Integer(100))
        );
        assert_eq!(
            record.metadata().get("BP_NAME"),
            Some(&InfoValue::String("del1".to_owned()))
        );
    }

    #[test]
    fn test_parse_arbitrary_whitespace() {
        let record =
            BreakpointRecord::parse("chr2  10 20   chr2 30 40 x . . . . TYPE=INV").unwrap();
        assert_eq!(record.sv_type(), SvType::Inversion);
        assert_eq!(record.end2(), 40);
    }

    #[test]
    fn test_parse_missing_type_is_unknown() {
        let record = BreakpointRecord::parse("chr1 1 2 chr1 3 4 x . . . . SCORE=1").unwrap();
        assert_eq!(record.sv_type(), SvType::Unknown);
        let record = BreakpointRecord::parse("chr1 1 2 chr1 3 4 x . . . . TYPE=").unwrap();
        assert_eq!(record.sv_type(), SvType::Unknown);
        let record = BreakpointRecord::parse("chr1 1 2 chr1 3 4 x . . . . TYPE=None").unwrap();
        assert_eq!(record.sv_type(), SvType::Unknown);
    }

    #[test]
    fn test_parse_too_few_columns() {
        for line in &["chr1", "chr1 1 2 chr1 3 4 x . . . ."] {
            let err = BreakpointRecord::parse(line).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<Error>(),
                Some(Error::MalformedRecord { .. })
            ));
        }
    }

    #[test]
    fn test_parse_negative_coordinates() {
        let record =
            BreakpointRecord::parse("chr1\t-1\t-1\tchr1\t480\t500\tx\t.\t+\t-\tPASS\tTYPE=DEL")
                .unwrap();
        assert_eq!(record.start1(), -1);
        assert_eq!(record.end1(), -1);
        assert_eq!(record.sv_len(), Some(501));
        assert_eq!(
            record.metadata().get("BP_POS1"),
            Some(&InfoValue::Integer(-1))
        );
        assert!(record.breakpoint1().is_none());
        assert!(record.breakpoint2().is_some());
    }

    #[test]
    fn test_parse_non_integer_coordinate() {
        for line in &[
            "chr1 a 2 chr1 3 4 x . . . . TYPE=DEL",
            "chr1 1 2 chr1 3 4.5 x . . . . TYPE=DEL",
            "chr1 1 2 chr1 3 99999999999999999999 x . . . . TYPE=DEL",
        ] {
            let err = BreakpointRecord::parse(line).unwrap_err();
            assert!(matches!(
                err.downcast_ref::<Error>(),
                Some(Error::MalformedRecord { .. })
            ));
        }
    }

    #[test]
    fn test_interchromosomal_has_no_length() {
        let record = BreakpointRecord::parse("chr1 1 2 chr5 3 4 x . . . . TYPE=BND").unwrap();
        assert_eq!(record.sv_type(), SvType::Breakend);
        assert_eq!(record.sv_len(), None);
    }

    #[test]
    fn test_breakpoints() {
        let record = BreakpointRecord::parse(DEL_LINE).unwrap();
        assert_eq!(record.breakpoint1().unwrap().contig(), "chr1");
        assert_eq!(record.breakpoint1().unwrap().range(), 100..150);
        assert_eq!(record.breakpoint2().unwrap().range(), 480..500);
    }

    #[test]
    fn test_metadata_wins_on_info_collision() {
        let mut record = BreakpointRecord::parse(DEL_LINE).unwrap();
        record
            .metadata
            .insert("SVTYPE".to_owned(), InfoValue::from("custom"));
        let vcf_record = record
            .to_vcf_record("tumor", &SupportedSvTypes::default())
            .unwrap()
            .unwrap();
        assert_eq!(
            vcf_record.info().get("SVTYPE"),
            Some(&InfoValue::String("custom".to_owned()))
        );
        assert_eq!(vcf_record.sv_type(), SvType::Deletion);
        assert_eq!(vcf_record.alt_allele(), "<DEL>");
    }
}
