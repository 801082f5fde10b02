//! Delimited text reading.

mod reader;

pub use reader::{read_csv_columns, read_csv_table};
