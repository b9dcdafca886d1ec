//! Data reading and representation.
//!
//! This module handles reading article CSV files and representing them
//! as an immutable, title-keyed dataset.

mod dataset;
mod reader;
mod record;

pub use dataset::Dataset;
pub use reader::DataReader;
pub use record::{parse_publish_date, Record};
