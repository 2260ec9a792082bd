//! Storage layer for Finsight
//!
//! The engine only ever sees a [`Records`] snapshot. Where it comes from is
//! behind the [`RecordStore`] trait; [`JsonStore`] reads JSON files from the
//! data directory with atomic writes.

pub mod file_io;
pub mod init;
pub mod json_store;
pub mod records;

pub use file_io::{read_json, write_json_atomic};
pub use init::{default_categories, initialize_storage};
pub use json_store::JsonStore;
pub use records::{RecordStore, Records};
