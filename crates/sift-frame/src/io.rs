//! Delimited-text loading and saving.

use std::{
    fs::File,
    io::{self, Read, Write},
    path::Path,
};

use tracing::debug;

use crate::{
    Result,
    error::FrameError,
    frame::{Column, Frame},
    value::Value,
};

/// Reads a CSV file with a header row. Every cell is loaded as text.
pub fn read_csv(path: &Path) -> Result<Frame> {
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|e| FrameError::ReadCsv {
        origin: origin.clone(),
        source: csv::Error::from(e),
    })?;
    read_csv_from(file, &origin)
}

/// Reads CSV with a header row from `reader`; `origin` names the source in errors.
pub fn read_csv_from<R: Read>(reader: R, origin: &str) -> Result<Frame> {
    let read_err = |source| FrameError::ReadCsv {
        origin: origin.to_string(),
        source,
    };

    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers = rdr.headers().map_err(read_err)?.clone();
    let mut values: Vec<Vec<Value>> = vec![Vec::new(); headers.len()];

    for record in rdr.records() {
        let record = record.map_err(read_err)?;
        for (cells, field) in values.iter_mut().zip(record.iter()) {
            cells.push(Value::from(field));
        }
    }

    let columns = headers
        .iter()
        .zip(values)
        .map(|(name, cells)| Column::new(name, cells))
        .collect();
    let frame = Frame::new(columns)?;
    debug!(origin, rows = frame.num_rows(), columns = frame.num_columns(), "read csv");
    Ok(frame)
}

/// Writes `frame` to a CSV file with a header row.
pub fn write_csv(frame: &Frame, path: &Path) -> Result<()> {
    let origin = path.display().to_string();
    let file = File::create(path).map_err(|e| FrameError::WriteCsv {
        origin: origin.clone(),
        source: csv::Error::from(e),
    })?;
    write_csv_to(frame, file, &origin)
}

/// Writes `frame` as CSV to `writer`; `origin` names the destination in errors.
///
/// Empty cells are written as empty fields.
pub fn write_csv_to<W: Write>(frame: &Frame, writer: W, origin: &str) -> Result<()> {
    let write_err = |source| FrameError::WriteCsv {
        origin: origin.to_string(),
        source,
    };

    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(frame.column_names()).map_err(write_err)?;
    for row in 0..frame.num_rows() {
        let cells = frame
            .columns()
            .iter()
            .map(|c| c.get(row).map(Value::to_string).unwrap_or_default());
        wtr.write_record(cells).map_err(write_err)?;
    }
    wtr.flush()
        .map_err(|e: io::Error| write_err(csv::Error::from(e)))?;
    debug!(origin, rows = frame.num_rows(), "wrote csv");
    Ok(())
}
