// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use counter::Counter;

use crate::bedpe::BreakpointRecord;
use crate::errors::Error;
use crate::reference::Reference;
use crate::variants::{SupportedSvTypes, SvType};

/// Streaming reader over the records of a BEDPE file.
///
/// Blank lines and `#` comments are skipped, records of unsupported type are dropped
/// silently. Any record that cannot be parsed ends up as an error item; there is no
/// recovery. The underlying file or STDIN handle is owned by the reader and closed on drop.
pub struct BedpeReader {
    lines: io::Lines<Box<dyn BufRead>>,
    reference: Option<Reference>,
    supported: SupportedSvTypes,
    line_number: usize,
    skips: Counter<SvType>,
    exhausted: bool,
}

impl BedpeReader {
    /// Open the given BEDPE file, or STDIN if `path` is `None`.
    ///
    /// Reported types are the built-in defaults (deletions), restricted to `svs_to_report`
    /// if given.
    pub fn new(
        path: Option<&Path>,
        reference: Option<Reference>,
        svs_to_report: Option<&[SvType]>,
    ) -> Result<Self> {
        Self::with_builtin(path, reference, SupportedSvTypes::default(), svs_to_report)
    }

    /// Like `new`, but with explicitly given built-in types instead of the defaults.
    pub fn with_builtin(
        path: Option<&Path>,
        reference: Option<Reference>,
        builtin: SupportedSvTypes,
        svs_to_report: Option<&[SvType]>,
    ) -> Result<Self> {
        let source: Box<dyn BufRead> = if let Some(path) = path {
            info!("Reading BEDPE records from {}.", path.display());
            let file = File::open(path).with_context(|| Error::SourceUnavailable {
                path: path.to_path_buf(),
            })?;
            Box::new(BufReader::new(file))
        } else {
            info!("Reading BEDPE records from STDIN.");
            Box::new(BufReader::new(io::stdin()))
        };

        Ok(Self::from_reader(source, reference, builtin, svs_to_report))
    }

    /// Read records from an arbitrary buffered source.
    pub fn from_reader<R: BufRead + 'static>(
        reader: R,
        reference: Option<Reference>,
        builtin: SupportedSvTypes,
        svs_to_report: Option<&[SvType]>,
    ) -> Self {
        let reader: Box<dyn BufRead> = Box::new(reader);
        BedpeReader {
            lines: reader.lines(),
            reference,
            supported: builtin.restrict(svs_to_report),
            line_number: 0,
            skips: Counter::new(),
            exhausted: false,
        }
    }

    /// The effective set of reported SV types.
    pub fn supported(&self) -> &SupportedSvTypes {
        &self.supported
    }

    /// The reference given at construction. It is not used for reading.
    pub fn reference(&self) -> Option<&Reference> {
        self.reference.as_ref()
    }

    fn display_skips(&self) {
        for (svtype, count) in self.skips.iter() {
            debug!("Skipped {} records of unsupported type {}.", count, svtype);
        }
    }
}

impl Iterator for BedpeReader {
    type Item = Result<BreakpointRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        loop {
            let line = match self.lines.next() {
                Some(line) => line,
                None => {
                    self.exhausted = true;
                    self.display_skips();
                    return None;
                }
            };
            self.line_number += 1;
            let line_number = self.line_number;

            let line = match line
                .with_context(|| format!("failed to read BEDPE line {}", line_number))
            {
                Ok(line) => line,
                Err(e) => return Some(Err(e)),
            };
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let record = match line
                .parse::<BreakpointRecord>()
                .with_context(|| format!("invalid BEDPE record in line {}", line_number))
            {
                Ok(record) => record,
                Err(e) => return Some(Err(e)),
            };

            if self.supported.contains(record.sv_type()) {
                return Some(Ok(record));
            }
            *self.skips.entry(record.sv_type()).or_insert(0) += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;
    use std::io::Cursor;

    const BEDPE: &str = "\
#chrom1\tstart1\tend1\tchrom2\tstart2\tend2\tname\tscore\tstrand1\tstrand2\tfilter\tinfo
chr1\t100\t150\tchr1\t480\t500\tdel1\t.\t+\t-\tPASS\tTYPE=DEL

chr1\t700\t710\tchr1\t900\t905\tinv1\t.\t+\t+\tPASS\tTYPE=INV
   # indented comment
chr2\t10\t20\tchr2\t300\t320\tdel2\t.\t+\t-\tPASS\tSCORE=3;TYPE=DEL
chr2\t40\t45\tchr2\t90\t95\tunk1\t.\t+\t-\tPASS\tSCORE=3
";

    fn reader(content: &'static str, svs_to_report: Option<&[SvType]>) -> BedpeReader {
        BedpeReader::from_reader(
            Cursor::new(content),
            None,
            SupportedSvTypes::default(),
            svs_to_report,
        )
    }

    #[test]
    fn test_default_yields_deletions_in_order() {
        let names = reader(BEDPE, None)
            .map(|record| record.unwrap().name().to_owned())
            .collect_vec();
        assert_eq!(names, vec!["del1", "del2"]);
    }

    #[test]
    fn test_empty_allow_list() {
        assert_eq!(reader(BEDPE, Some(&[])).count(), 0);
    }

    #[test]
    fn test_allow_list_cannot_extend_defaults() {
        let names = reader(BEDPE, Some(&[SvType::Inversion]))
            .map(|record| record.unwrap().name().to_owned())
            .collect_vec();
        assert!(names.is_empty());
    }

    #[test]
    fn test_opt_in_builtin() {
        let reader = BedpeReader::from_reader(
            Cursor::new(BEDPE),
            None,
            SupportedSvTypes::default().with(SvType::Inversion),
            None,
        );
        let names = reader
            .map(|record| record.unwrap().name().to_owned())
            .collect_vec();
        assert_eq!(names, vec!["del1", "inv1", "del2"]);
    }

    #[test]
    fn test_unknown_category() {
        let reader = BedpeReader::from_reader(
            Cursor::new(BEDPE),
            None,
            SupportedSvTypes::default().with(SvType::Unknown),
            Some(&[SvType::Unknown]),
        );
        let names = reader
            .map(|record| record.unwrap().name().to_owned())
            .collect_vec();
        assert_eq!(names, vec!["unk1"]);
    }

    #[test]
    fn test_malformed_line_is_reported() {
        let mut reader = reader(
            "chr1\t100\t150\tchr1\t480\t500\tdel1\t.\t+\t-\tPASS\tTYPE=DEL\nchr1\t100\tx\n",
            None,
        );
        assert!(reader.next().unwrap().is_ok());
        let err = reader.next().unwrap().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MalformedRecord { .. })
        ));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_malformed_unsupported_line_is_still_an_error() {
        let mut reader = reader("chr1\tx\t150\tchr1\t480\t500\tdup\t.\t+\t-\tPASS\tTYPE=DUP\n", None);
        assert!(reader.next().unwrap().is_err());
    }

    #[test]
    fn test_unreadable_line_keeps_line_numbers() {
        let mut content = b"chr1\t100\t150\tchr1\t480\t500\tdel1\t.\t+\t-\tPASS\tTYPE=DEL\n".to_vec();
        content.extend_from_slice(b"chr1\t\xff\xfe\n");
        content.extend_from_slice(b"chr1\t100\tx\n");
        let mut reader = BedpeReader::from_reader(
            Cursor::new(content),
            None,
            SupportedSvTypes::default(),
            None,
        );
        assert!(reader.next().unwrap().is_ok());
        let err = reader.next().unwrap().unwrap_err();
        assert!(err.to_string().contains("line 2"));
        let err = reader.next().unwrap().unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_negative_placeholder_does_not_abort() {
        let names = reader(
            "chr1\t-1\t-1\tchr5\t480\t500\tbnd1\t.\t+\t-\tPASS\tTYPE=BND\n\
             chr1\t100\t150\tchr1\t480\t500\tdel1\t.\t+\t-\tPASS\tTYPE=DEL\n",
            None,
        )
        .map(|record| record.unwrap().name().to_owned())
        .collect_vec();
        assert_eq!(names, vec!["del1"]);
    }

    #[test]
    fn test_exhausted() {
        let mut reader = reader("# only a comment\n\n", None);
        assert!(reader.next().is_none());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_missing_file() {
        let err = BedpeReader::new(Some(Path::new("/nonexistent/calls.bedpe")), None, None)
            .err()
            .unwrap();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::SourceUnavailable { .. })
        ));
    }
}
