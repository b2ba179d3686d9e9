use std::io::Write;

use anyhow::Result;

use crate::bedpe::BedpeReader;

/// Write the intervals of all records of the reader as JSON lines.
///
/// Records without an interval representation are omitted. Returns the number of written
/// intervals.
pub fn bedpe_to_intervals<W: Write>(reader: BedpeReader, mut out: W) -> Result<usize> {
    let supported = reader.supported().clone();
    let mut count = 0;
    for record in reader {
        let record = record?;
        if let Some(interval) = record.to_sv_interval(&supported) {
            serde_json::to_writer(&mut out, &interval)?;
            writeln!(out)?;
            count += 1;
        }
    }
    out.flush()?;
    info!("Wrote {} intervals.", count);

    Ok(count)
}
