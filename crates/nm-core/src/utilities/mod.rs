//! Miscellaneous utilities.

pub mod data_formatters;
pub mod data_parsers;
