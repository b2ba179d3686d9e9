// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Reading structural variant calls given as BEDPE breakpoint pairs.
//!
//! Records are obtained from a [`BedpeReader`](bedpe::BedpeReader) and translated on demand
//! into genomic intervals ([`SvInterval`](variants::SvInterval)) or VCF records
//! ([`VcfRecord`](variants::VcfRecord)).

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate getset;
#[macro_use]
extern crate strum_macros;
#[macro_use]
extern crate derive_new;

pub mod bedpe;
pub mod cli;
pub mod conversion;
pub mod errors;
pub mod reference;
pub mod variants;

pub use crate::bedpe::{BedpeReader, BreakpointRecord};
pub use crate::errors::Error;
pub use crate::variants::{SupportedSvTypes, SvInterval, SvType, VcfRecord};
