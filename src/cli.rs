// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use structopt::StructOpt;

use crate::bedpe::BedpeReader;
use crate::conversion;
use crate::reference::Reference;
use crate::variants::{SupportedSvTypes, SvType};

#[derive(Debug, StructOpt, Clone)]
#[structopt(
    name = "bedpe-sv",
    about = "Read structural variant breakpoint pairs from BEDPE and translate them into intervals or VCF records.",
    setting = structopt::clap::AppSettings::ColoredHelp
)]
pub struct BedpeSv {
    #[structopt(long, global = true, help = "Provide verbose output.")]
    pub verbose: bool,
    #[structopt(subcommand)]
    pub command: Command,
}

#[derive(Debug, StructOpt, Clone)]
pub struct InputOptions {
    #[structopt(
        parse(from_os_str),
        help = "BEDPE file to process (if omitted, read from STDIN)."
    )]
    pub bedpe: Option<PathBuf>,
    #[structopt(
        long,
        parse(from_os_str),
        help = "FASTA file with reference genome. Has to be indexed with samtools faidx. \
                If given, VCF output declares all contigs of the reference."
    )]
    pub reference: Option<PathBuf>,
    #[structopt(
        long = "svtypes",
        help = "SV types to report (DEL, INV, DUP, INS, BND, UNK). Restricts the built-in \
                supported types (DEL, plus INV with --include-inversions)."
    )]
    pub svtypes: Option<Vec<SvType>>,
    #[structopt(
        long = "include-inversions",
        help = "Add inversions to the built-in supported SV types."
    )]
    pub include_inversions: bool,
}

impl InputOptions {
    pub fn builtin_svtypes(&self) -> SupportedSvTypes {
        if self.include_inversions {
            SupportedSvTypes::default().with(SvType::Inversion)
        } else {
            SupportedSvTypes::default()
        }
    }

    pub fn reader(&self) -> Result<BedpeReader> {
        let reference = self
            .reference
            .as_ref()
            .map(Reference::from_path)
            .transpose()?;
        BedpeReader::with_builtin(
            self.bedpe.as_deref(),
            reference,
            self.builtin_svtypes(),
            self.svtypes.as_deref(),
        )
    }
}

#[derive(Debug, StructOpt, Clone)]
pub enum Command {
    #[structopt(
        name = "to-vcf",
        about = "Translate BEDPE records into single-sample VCF records with symbolic alleles.",
        setting = structopt::clap::AppSettings::ColoredHelp
    )]
    ToVcf {
        #[structopt(flatten)]
        input: InputOptions,
        #[structopt(long, help = "Name of the sample to genotype.")]
        sample: String,
        #[structopt(
            long,
            parse(from_os_str),
            help = "VCF file that shall contain the results (if omitted, write to STDOUT)."
        )]
        output: Option<PathBuf>,
    },
    #[structopt(
        name = "intervals",
        about = "Translate BEDPE records into genomic intervals, written as JSON lines to STDOUT.",
        setting = structopt::clap::AppSettings::ColoredHelp
    )]
    Intervals {
        #[structopt(flatten)]
        input: InputOptions,
    },
}

pub fn run(opt: BedpeSv) -> Result<()> {
    match opt.command {
        Command::ToVcf {
            input,
            sample,
            output,
        } => {
            conversion::vcf::bedpe_to_vcf(input.reader()?, &sample, output)?;
        }
        Command::Intervals { input } => {
            let stdout = io::stdout();
            conversion::intervals::bedpe_to_intervals(input.reader()?, stdout.lock())?;
        }
    }
    Ok(())
}
