use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::providers::BalanceRecord;

/// Writes `record` as a header row plus one data row, replacing any existing file.
pub fn write_record(path: &Path, record: &BalanceRecord) -> Result<()> {
    let file = File::create(path)?;
    write_record_to(file, record)?;

    tracing::debug!("Wrote {} record to {}", record.currency, path.display());
    Ok(())
}

/// Same as [`write_record`] but targets any writer.
pub fn write_record_to<W: Write>(writer: W, record: &BalanceRecord) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(writer);

    wtr.serialize(record).map_err(std::io::Error::from)?;
    wtr.flush()?;

    Ok(())
}
