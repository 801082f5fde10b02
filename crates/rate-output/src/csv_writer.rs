//! CSV writer for canonical tables.
//!
//! The header is always `destination,prefix,rate,setup,currency,description`.
//! Fields are quoted only when they contain a comma, a quote or a line break,
//! and embedded quotes are doubled.

use std::io::{self, Write};

use csv::{QuoteStyle, Terminator, WriterBuilder};
use rate_model::CanonicalTable;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutputError {
    #[error("csv write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Writes the table as CSV into `writer` and returns it once flushed.
pub fn write_csv<W: Write>(writer: W, table: &CanonicalTable) -> Result<W, OutputError> {
    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);
    csv_writer.write_record(CanonicalTable::header())?;
    for row in table.rows() {
        csv_writer.write_record(row.values())?;
    }
    csv_writer
        .into_inner()
        .map_err(|err| OutputError::Io(err.into_error()))
}

/// Serializes the table to UTF-8 CSV bytes.
pub fn serialize(table: &CanonicalTable) -> Result<Vec<u8>, OutputError> {
    write_csv(Vec::new(), table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rate_model::OutputRow;

    fn row(values: [&str; 6]) -> OutputRow {
        OutputRow::new(values.map(str::to_string))
    }

    #[test]
    fn empty_table_is_header_only() {
        let bytes = serialize(&CanonicalTable::default()).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "destination,prefix,rate,setup,currency,description\n"
        );
    }

    #[test]
    fn writes_rows_in_order() {
        let table = CanonicalTable::new(vec![
            row(["US", "1", "0.047250", "0.000000", "USD", "Mainland"]),
            row(["MX", "52", "N/A", "", "", ""]),
        ]);
        let csv = String::from_utf8(serialize(&table).unwrap()).unwrap();
        insta::assert_snapshot!(csv.trim_end(), @r"
        destination,prefix,rate,setup,currency,description
        US,1,0.047250,0.000000,USD,Mainland
        MX,52,N/A,,,
        ");
    }

    #[test]
    fn quotes_special_characters() {
        let table = CanonicalTable::new(vec![row([
            "Mexico, Mobile",
            "52",
            "1.000000",
            "",
            "MXN",
            "say \"hola\"\nsecond line",
        ])]);
        let csv = String::from_utf8(serialize(&table).unwrap()).unwrap();
        assert_eq!(
            csv,
            "destination,prefix,rate,setup,currency,description\n\
             \"Mexico, Mobile\",52,1.000000,,MXN,\"say \"\"hola\"\"\nsecond line\"\n"
        );
    }
}
