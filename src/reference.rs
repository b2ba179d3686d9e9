use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bio::io::fasta;

use crate::errors::Error;

/// Handle to an indexed reference genome.
///
/// Breakpoint parsing never consults the sequence; the handle is used for the contig
/// definitions of VCF output.
pub struct Reference {
    reader: fasta::IndexedReader<fs::File>,
    path: PathBuf,
}

impl Reference {
    /// Open a FASTA file with accompanying `.fai` index.
    pub fn from_path<P: AsRef<Path> + std::fmt::Debug>(path: P) -> Result<Self> {
        let reader = fasta::IndexedReader::from_file(&path).with_context(|| {
            Error::SourceUnavailable {
                path: path.as_ref().to_path_buf(),
            }
        })?;
        Ok(Reference {
            reader,
            path: path.as_ref().to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Contigs of the reference with their lengths, in index order.
    pub fn sequences(&self) -> Vec<fasta::Sequence> {
        self.reader.index.sequences()
    }
}

impl std::fmt::Debug for Reference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reference")
            .field("path", &self.path)
            .finish()
    }
}
