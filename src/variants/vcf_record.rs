use anyhow::Result;
use rust_htslib::bcf::record::GenotypeAllele;

use crate::bedpe::BreakpointRecord;
use crate::errors::Error;
use crate::variants::{Info, InfoValue, SupportedSvTypes, SvType};

/// A structural variant as a single-sample VCF record with symbolic ALT allele.
#[derive(new, Debug, Clone, PartialEq, Getters, CopyGetters)]
pub struct VcfRecord {
    #[getset(get = "pub")]
    chrom: String,
    /// 1-based VCF position.
    #[getset(get_copy = "pub")]
    pos: i64,
    #[new(value = "\"N\".to_owned()")]
    #[getset(get = "pub")]
    ref_allele: String,
    #[getset(get_copy = "pub")]
    sv_type: SvType,
    /// Signed SVLEN, negative for deletions.
    #[getset(get_copy = "pub")]
    sv_len: i64,
    #[getset(get_copy = "pub")]
    end: i64,
    #[getset(get = "pub")]
    info: Info,
    #[getset(get = "pub")]
    sample: String,
    #[new(value = "vec![GenotypeAllele::Unphased(1), GenotypeAllele::Unphased(1)]")]
    #[getset(get = "pub")]
    genotype: Vec<GenotypeAllele>,
}

impl VcfRecord {
    /// Symbolic ALT allele, e.g. `<DEL>`.
    pub fn alt_allele(&self) -> String {
        format!("<{}>", self.sv_type)
    }
}

impl BreakpointRecord {
    /// Translate into a homozygous VCF record for the given sample.
    ///
    /// Returns `Ok(None)` if the type is not in `supported` or cannot be expressed with an
    /// END coordinate (anything but deletions and inversions).
    ///
    /// # Errors
    ///
    /// `Error::MissingDerivedLength` if the record has no SV length, i.e. the breakpoints
    /// lie on different contigs.
    pub fn to_vcf_record(
        &self,
        sample: &str,
        supported: &SupportedSvTypes,
    ) -> Result<Option<VcfRecord>> {
        if !supported.contains(self.sv_type()) {
            return Ok(None);
        }
        let sv_len = self.sv_len().ok_or_else(|| Error::MissingDerivedLength {
            name: self.name().to_owned(),
        })?;

        if !self.sv_type().is_span() {
            debug!(
                "Omitting {} from VCF output: {} cannot be represented with an END tag.",
                self.name(),
                self.sv_type()
            );
            return Ok(None);
        }

        let signed_len = if self.sv_type() == SvType::Deletion {
            -sv_len
        } else {
            sv_len
        };
        let end = self.start1() + sv_len;

        let mut info = Info::new();
        info.insert("SVLEN".to_owned(), InfoValue::Integer(signed_len));
        info.insert(
            "SVTYPE".to_owned(),
            InfoValue::String(self.sv_type().to_string()),
        );
        info.insert("END".to_owned(), InfoValue::from(end));
        // pass-through metadata takes precedence
        for (key, value) in self.metadata() {
            info.insert(key.clone(), value.clone());
        }

        Ok(Some(VcfRecord::new(
            self.chrom1().to_owned(),
            self.start1(),
            self.sv_type(),
            signed_len,
            end,
            info,
            sample.to_owned(),
        )))
    }
}
