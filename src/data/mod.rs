//! Data module - CSV loading and writing

mod loader;
mod writer;

pub use loader::{DataLoader, LoaderError};
pub use writer::write_csv_atomic;
