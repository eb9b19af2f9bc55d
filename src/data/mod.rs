//! Data module - RON loading helpers and load errors shared by all registries.

mod error;
mod loader;

pub use error::DataLoadError;
pub use loader::{load_ron_dir, load_ron_file, parse_ron};
