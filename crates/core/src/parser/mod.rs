//! Type signature parsing

pub mod data_type_parser;

pub use data_type_parser::DataTypeParser;
