//! Storage layer for cashbook
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod file_io;
pub mod store;

pub use file_io::{read_json, write_json_atomic};
pub use store::Store;
