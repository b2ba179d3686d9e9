//! BEDPE input: annotation parsing, record parsing and the streaming reader.

pub mod annotation;
pub mod reader;
pub mod record;

pub use self::annotation::extract_sv_info;
pub use self::reader::BedpeReader;
pub use self::record::BreakpointRecord;
