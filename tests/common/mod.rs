use std::io::{Error, Write};
use tempfile::NamedTempFile;

pub const HEADER: [&str; 6] = ["customer", "item", "name", "price", "size", "add_ons"];

/// Writes an orders CSV (header included) to a temporary file.
pub fn write_orders(rows: &[&[&str]]) -> Result<NamedTempFile, Error> {
    let mut file = NamedTempFile::new()?;
    {
        let mut wtr = csv::WriterBuilder::new()
            .flexible(true)
            .from_writer(file.as_file_mut());
        wtr.write_record(HEADER)?;
        for row in rows {
            wtr.write_record(*row)?;
        }
        wtr.flush()?;
    }
    file.flush()?;
    Ok(file)
}
