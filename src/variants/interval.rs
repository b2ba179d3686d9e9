// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::collections::BTreeSet;
use std::convert::TryFrom;
use std::ops::Range;

use bio_types::genome::{AbstractInterval, Position};

use crate::bedpe::BreakpointRecord;
use crate::variants::{Info, SupportedSvTypes, SvType};

/// Source tag attached to every interval derived from a BEDPE record.
pub const BEDPE_SOURCE: &str = "BEDPE";

/// A structural variant collapsed onto a single contig.
///
/// `start` and `end` are 1-based and inclusive. The interval borrows the record it was
/// derived from.
#[derive(Debug, Clone, PartialEq, Getters, CopyGetters, Serialize)]
pub struct SvInterval<'a> {
    contig: String,
    #[getset(get_copy = "pub")]
    start: i64,
    #[getset(get_copy = "pub")]
    end: i64,
    #[getset(get = "pub")]
    name: String,
    #[getset(get_copy = "pub")]
    sv_type: SvType,
    #[getset(get_copy = "pub")]
    length: i64,
    /// Confidence interval around `start`.
    #[getset(get_copy = "pub")]
    cipos: [i64; 2],
    #[getset(get = "pub")]
    sources: BTreeSet<String>,
    #[getset(get = "pub")]
    info: Info,
    #[serde(skip)]
    native: &'a BreakpointRecord,
}

impl<'a> SvInterval<'a> {
    /// The BEDPE record this interval was derived from.
    pub fn native(&self) -> &'a BreakpointRecord {
        self.native
    }
}

impl<'a> AbstractInterval for SvInterval<'a> {
    fn contig(&self) -> &str {
        &self.contig
    }

    /// Negative coordinates are clamped to the contig start.
    fn range(&self) -> Range<Position> {
        let start = u64::try_from(self.start - 1).unwrap_or(0);
        let end = u64::try_from(self.end).unwrap_or(0);
        start..end
    }
}

impl BreakpointRecord {
    /// Collapse the breakpoint pair into a single interval.
    ///
    /// Returns `None` if the type is not in `supported` or cannot be represented as a span.
    /// Deletions and inversions span from `start1 + 1` to `end2` on the first contig, with
    /// the extent of the first breakpoint region as uncertainty of the start position.
    pub fn to_sv_interval(&self, supported: &SupportedSvTypes) -> Option<SvInterval<'_>> {
        if !supported.contains(self.sv_type()) {
            return None;
        }

        if self.sv_type().is_span() {
            Some(SvInterval {
                contig: self.chrom1().to_owned(),
                start: self.start1() + 1,
                end: self.end2(),
                name: self.name().to_owned(),
                sv_type: self.sv_type(),
                length: self.end2() - self.start1(),
                cipos: [0, self.end1() - self.start1()],
                sources: [BEDPE_SOURCE.to_owned()].iter().cloned().collect(),
                info: self.metadata().clone(),
                native: self,
            })
        } else {
            error!("Bad SV type: {:?}", self);
            None
        }
    }
}
