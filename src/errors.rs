use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("unable to open {}", .path.display())]
    SourceUnavailable { path: PathBuf },
    #[error("malformed BEDPE record: {msg}")]
    MalformedRecord { msg: String },
    #[error("breakpoint pair {name} has no derived SV length (are both breakpoints on the same contig?)")]
    MissingDerivedLength { name: String },
    #[error("value {value} of INFO field {key} at {chrom}:{pos} does not fit into a VCF integer")]
    InfoValueOutOfRange {
        key: String,
        value: i64,
        chrom: String,
        pos: i64,
    },
}

pub(crate) fn malformed_record(msg: &str) -> Error {
    Error::MalformedRecord {
        msg: msg.to_owned(),
    }
}
