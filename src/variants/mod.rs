pub mod info;
pub mod interval;
pub mod svtype;
pub mod vcf_record;

pub use self::info::{Info, InfoValue};
pub use self::interval::{SvInterval, BEDPE_SOURCE};
pub use self::svtype::{SupportedSvTypes, SvType};
pub use self::vcf_record::VcfRecord;
