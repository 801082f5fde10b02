//! Canonical rate schedule output.

pub mod csv_writer;

pub use csv_writer::{OutputError, serialize, write_csv};
