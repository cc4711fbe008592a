//! Delimited-text tables
//!
//! - [`CsvTableCodec`]: the [`predictor_application::TableCodec`] used for
//!   batch uploads and downloads
//! - [`scan_categorical_domains`]: collects the distinct values of the
//!   categorical columns of a reference table

mod csv_codec;
mod reference;

pub use csv_codec::CsvTableCodec;
pub use reference::{ReferenceTableError, scan_categorical_domains};
