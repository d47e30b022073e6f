//! Storage layer for finsight
//!
//! finsight keeps no database of its own. It reads payloads saved from the
//! API and writes exported documents.

pub mod file_io;

pub use file_io::{read_records, write_document_atomic};
