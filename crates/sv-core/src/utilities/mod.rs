//! Utilities sub-module: number formatting and parsing for shape text.

pub mod data_formatters;
pub mod data_parsers;
