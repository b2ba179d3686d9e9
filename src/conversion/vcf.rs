// Copyright 2016-2019 Johannes Köster, David Lähnemann.
// Licensed under the GNU GPLv3 license (https://opensource.org/licenses/GPL-3.0)
// This file may not be copied, modified, or distributed
// except according to those terms.

use std::convert::TryFrom;
use std::path::Path;

use anyhow::Result;
use itertools::Itertools;
use rust_htslib::bcf;

use crate::bedpe::BedpeReader;
use crate::errors::Error;
use crate::reference::Reference;
use crate::variants::{InfoValue, VcfRecord};

/// A contig to declare in the VCF header.
#[derive(new, Debug, Clone, PartialEq, Eq, Getters)]
#[getset(get = "pub")]
pub struct Contig {
    name: String,
    len: Option<u64>,
}

impl Contig {
    /// All contigs of the reference index, with lengths.
    pub fn from_reference(reference: &Reference) -> Vec<Contig> {
        reference
            .sequences()
            .into_iter()
            .map(|sequence| Contig::new(sequence.name, Some(sequence.len)))
            .collect()
    }

    /// Contigs in order of first occurrence in the given records, without lengths.
    pub fn from_records(records: &[VcfRecord]) -> Vec<Contig> {
        records
            .iter()
            .map(|record| record.chrom())
            .unique()
            .map(|chrom| Contig::new(chrom.to_owned(), None))
            .collect()
    }
}

const INFO_HEADER_LINES: &[&str] = &[
    "##INFO=<ID=SVLEN,Number=1,Type=Integer,Description=\"Difference in length between REF and ALT alleles\">",
    "##INFO=<ID=SVTYPE,Number=1,Type=String,Description=\"Type of structural variant\">",
    "##INFO=<ID=END,Number=1,Type=Integer,Description=\"End position of the variant described in this record\">",
    "##INFO=<ID=BP_CHR1,Number=1,Type=String,Description=\"Contig of the first breakpoint\">",
    "##INFO=<ID=BP_POS1,Number=1,Type=Integer,Description=\"Start of the first breakpoint region\">",
    "##INFO=<ID=BP_END1,Number=1,Type=Integer,Description=\"End of the first breakpoint region\">",
    "##INFO=<ID=BP_CHR2,Number=1,Type=String,Description=\"Contig of the second breakpoint\">",
    "##INFO=<ID=BP_POS2,Number=1,Type=Integer,Description=\"Start of the second breakpoint region\">",
    "##INFO=<ID=BP_END2,Number=1,Type=Integer,Description=\"End of the second breakpoint region\">",
    "##INFO=<ID=BP_NAME,Number=1,Type=String,Description=\"Name of the BEDPE record\">",
];

/// Build the header for single-sample SV output.
pub fn header(sample: &str, contigs: &[Contig]) -> bcf::Header {
    let mut header = bcf::Header::new();

    header.push_record(b"##ALT=<ID=DEL,Description=\"Deletion\">");
    header.push_record(b"##ALT=<ID=INV,Description=\"Inversion\">");
    for line in INFO_HEADER_LINES {
        header.push_record(line.as_bytes());
    }
    header.push_record(b"##FORMAT=<ID=GT,Number=1,Type=String,Description=\"Genotype\">");

    for contig in contigs {
        if let Some(len) = contig.len() {
            header.push_record(format!("##contig=<ID={},length={}>", contig.name(), len).as_bytes());
        } else {
            header.push_record(format!("##contig=<ID={}>", contig.name()).as_bytes());
        }
    }

    header.push_sample(sample.as_bytes());
    header
}

/// Writes `VcfRecord`s as uncompressed VCF.
pub struct VcfWriter {
    writer: bcf::Writer,
}

impl VcfWriter {
    /// Write to the given path, or STDOUT if `path` is `None`.
    pub fn new<P: AsRef<Path>>(path: Option<P>, sample: &str, contigs: &[Contig]) -> Result<Self> {
        let header = header(sample, contigs);
        let writer = if let Some(path) = path {
            bcf::Writer::from_path(path, &header, true, bcf::Format::Vcf)?
        } else {
            bcf::Writer::from_stdout(&header, true, bcf::Format::Vcf)?
        };
        Ok(VcfWriter { writer })
    }

    pub fn write(&mut self, vcf_record: &VcfRecord) -> Result<()> {
        let mut record = self.writer.empty_record();
        let rid = self.writer.header().name2rid(vcf_record.chrom().as_bytes())?;
        record.set_rid(Some(rid));
        // htslib positions are 0-based
        record.set_pos(vcf_record.pos() - 1);
        let alt_allele = vcf_record.alt_allele();
        record.set_alleles(&[vcf_record.ref_allele().as_bytes(), alt_allele.as_bytes()])?;

        for (key, value) in vcf_record.info() {
            match value {
                InfoValue::Integer(value) => {
                    let value = i32::try_from(*value).map_err(|_| Error::InfoValueOutOfRange {
                        key: key.to_owned(),
                        value: *value,
                        chrom: vcf_record.chrom().to_owned(),
                        pos: vcf_record.pos(),
                    })?;
                    record.push_info_integer(key.as_bytes(), &[value])?
                }
                InfoValue::String(value) => {
                    record.push_info_string(key.as_bytes(), &[value.as_bytes()])?
                }
            }
        }
        record.push_genotypes(vcf_record.genotype())?;

        self.writer.write(&record)?;
        Ok(())
    }
}

/// Translate all records of the reader into VCF.
///
/// Contigs are taken from the reader's reference if present, otherwise from the records.
/// Records without a VCF representation are omitted. Returns the number of written records.
pub fn bedpe_to_vcf<P: AsRef<Path>>(
    reader: BedpeReader,
    sample: &str,
    output: Option<P>,
) -> Result<usize> {
    let supported = reader.supported().clone();
    let contigs = reader.reference().map(Contig::from_reference);

    let mut records = Vec::new();
    for record in reader {
        if let Some(vcf_record) = record?.to_vcf_record(sample, &supported)? {
            records.push(vcf_record);
        }
    }

    let contigs = contigs.unwrap_or_else(|| Contig::from_records(&records));
    let mut writer = VcfWriter::new(output, sample, &contigs)?;
    for record in &records {
        writer.write(record)?;
    }
    info!("Wrote {} VCF records.", records.len());

    Ok(records.len())
}
