//! CSV ingest
//!
//! Thin glue between on-disk tabular data and the core record model:
//! headers are parsed against the canonical attribute vocabulary and each
//! row is zipped into a pair list. Training files carry the full schema;
//! testing files carry at least the minimal core and go through attribute
//! inference.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use fareseer_core::{AirportInfo, AirportTable, Attribute, FlightRecord};

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] fareseer_core::Error),

    #[error("Airport file row needs 3 columns (airport,citycode,country), got {0}")]
    MalformedAirportRow(usize),
}

pub type Result<T> = std::result::Result<T, IngestError>;

/// Read a CSV into attribute pair lists, one per row
///
/// The header names must all belong to the canonical vocabulary.
pub fn read_pairs<R: Read>(reader: R) -> Result<Vec<Vec<(Attribute, String)>>> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let attributes: Vec<Attribute> = csv_reader
        .headers()?
        .iter()
        .map(|name| Attribute::parse(name.trim()).map_err(IngestError::from))
        .collect::<Result<_>>()?;

    let mut rows = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        rows.push(
            attributes
                .iter()
                .copied()
                .zip(row.iter().map(|v| v.trim().to_string()))
                .collect(),
        );
    }
    Ok(rows)
}

/// Load complete training flights (all 24 attributes in the file)
pub fn read_training_flights(path: &Path) -> Result<Vec<FlightRecord>> {
    let rows = read_pairs(File::open(path)?)?;
    let flights: Vec<_> = rows.into_iter().map(FlightRecord::from_pairs).collect();
    info!(count = flights.len(), file = %path.display(), "loaded training flights");
    Ok(flights)
}

/// Load query flights from core data, inferring the derived attributes
pub fn read_query_flights(path: &Path, airports: &AirportTable) -> Result<Vec<FlightRecord>> {
    let rows = read_pairs(File::open(path)?)?;
    let flights: Vec<_> = rows
        .iter()
        .map(|pairs| FlightRecord::from_core_data(pairs, airports))
        .collect::<fareseer_core::Result<_>>()?;
    info!(count = flights.len(), file = %path.display(), "loaded query flights");
    Ok(flights)
}

/// Load the airport reference table from a headerless CSV of
/// `airport,citycode,country` rows
pub fn read_airport_table(path: &Path) -> Result<AirportTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(File::open(path)?);

    let mut table = AirportTable::new();
    for row in csv_reader.records() {
        let row = row?;
        if row.len() != 3 {
            return Err(IngestError::MalformedAirportRow(row.len()));
        }
        table.insert(
            row[0].trim(),
            AirportInfo {
                city_code: row[1].trim().to_string(),
                country: row[2].trim().to_string(),
            },
        );
    }
    info!(count = table.len(), file = %path.display(), "loaded airport table");
    Ok(table)
}
