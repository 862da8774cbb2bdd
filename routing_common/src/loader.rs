//! Loading of the bank routing table
//!
//! The source is a comma-separated file whose header names the columns
//! `RoutingNumber,BankName,Address,City,State`. It is read once, from start
//! to end, and the finished table is handed back in one piece.

use crate::core::types::BankRecord;
use crate::core::BankTable;
use crate::errors::LoadError;
use serde::Deserialize;
use std::io;
use std::path::Path;

/// The header token of the routing number column.
pub const ROUTING_NUMBER_HEADER: &str = "RoutingNumber";

/// One data row, as lenient as the source may need.
///
/// Every column may be missing from a short row; only the routing number decides
/// whether the row is kept.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "RoutingNumber", default)]
    routing_number: Option<String>,
    #[serde(rename = "BankName", default)]
    bank_name: Option<String>,
    #[serde(rename = "Address", default)]
    address: Option<String>,
    #[serde(rename = "City", default)]
    city: Option<String>,
    #[serde(rename = "State", default)]
    state: Option<String>,
}

impl RawRow {
    /// Turns the row into a record, or `None` if it has no usable routing number.
    ///
    /// A routing number equal to the header token is a repeated header line.
    fn into_record(self) -> Option<BankRecord> {
        let routing_number = self
            .routing_number
            .filter(|rn| !rn.is_empty() && rn != ROUTING_NUMBER_HEADER)?;

        Some(BankRecord {
            routing_number,
            bank_name: self.bank_name.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
        })
    }
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.has_headers(true).flexible(true);
    builder
}

fn read_rows<R: io::Read>(mut reader: csv::Reader<R>) -> Result<BankTable, LoadError> {
    let mut records = Vec::new();

    for row in reader.deserialize::<RawRow>() {
        if let Some(record) = row?.into_record() {
            records.push(record);
        }
    }

    Ok(BankTable::from_records(records))
}

/// **Reads the bank table from the file at `path`**
///
/// # Errors
/// - The file is missing or unreadable, or a row can't be parsed, `LoadError::Csv`.
pub fn load_table<P: AsRef<Path>>(path: P) -> Result<BankTable, LoadError> {
    let reader = reader_builder().from_path(path)?;
    read_rows(reader)
}

/// **Reads the bank table from any byte source**
///
/// # Errors
/// - The data can't be read or a row can't be parsed, `LoadError::Csv`.
pub fn load_table_from_reader<R: io::Read>(source: R) -> Result<BankTable, LoadError> {
    read_rows(reader_builder().from_reader(source))
}

/// **Reads the bank table, falling back to an empty one on any failure**
///
/// A failed load is logged and leaves the service answering
/// "not found" for every lookup, rather than never becoming ready.
pub fn load_or_empty<P: AsRef<Path>>(path: P) -> BankTable {
    let path = path.as_ref();
    log::info!("Loading bank table from: {}", path.display());

    match load_table(path) {
        Ok(table) => {
            log::info!(
                "Bank table loaded successfully: {} banks ({} rows).",
                table.len(),
                table.rows()
            );
            table
        }
        Err(err) => {
            log::error!("Bank table loading error: {}", err);
            BankTable::new()
        }
    }
}
