//! Post storage implementations - JSON file and in-memory.

mod json_file;
mod memory;

pub use json_file::JsonFilePostStorage;
pub use memory::InMemoryPostStorage;
