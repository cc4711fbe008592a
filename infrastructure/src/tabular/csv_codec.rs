//! CSV codec for batch tables

use predictor_application::{TableCodec, TableCodecError};
use predictor_domain::Table;

/// Comma-separated tables with a header row
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvTableCodec;

impl CsvTableCodec {
    pub fn new() -> Self {
        Self
    }
}

impl TableCodec for CsvTableCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Table, TableCodecError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(bytes);

        let headers = reader
            .headers()
            .map_err(|e| TableCodecError::Malformed(e.to_string()))?
            .clone();
        if headers.is_empty() {
            return Err(TableCodecError::Empty);
        }

        let rows = reader
            .records()
            .map(|record| {
                record
                    .map(|r| r.iter().map(str::to_string).collect::<Vec<_>>())
                    .map_err(|e| TableCodecError::Malformed(e.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Table::from_text_rows(headers.iter(), rows)?)
    }

    fn encode(&self, table: &Table) -> Result<Vec<u8>, TableCodecError> {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());

        writer
            .write_record(table.columns())
            .map_err(|e| TableCodecError::Write(e.to_string()))?;
        for row in table.rows() {
            writer
                .write_record(row.iter().map(|cell| cell.to_string()))
                .map_err(|e| TableCodecError::Write(e.to_string()))?;
        }

        writer
            .into_inner()
            .map_err(|e| TableCodecError::Write(e.to_string()))
    }

    fn content_type(&self) -> &'static str {
        "text/csv"
    }
}
