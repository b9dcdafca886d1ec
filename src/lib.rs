//! Vizdims - a terminal scatter-plot viewer for article embeddings.
//!
//! Vizdims loads articles (2D coordinates, title, URL and publish date) from a
//! CSV file and plots them. A search box filters the plot and keeps a table
//! of matching headlines in sync.
//!
//! # Features
//!
//! - Substring or whole-word title matching
//! - Point positions fixed by the full dataset extent
//! - Title-keyed point identity across filter changes
//! - Headline table sorted newest first, with search hits highlighted
//! - Tooltips, link opening and clipboard integration
//!
//! # Example
//!
//! ```ignore
//! use vizdims::config::ViewerConfig;
//! use vizdims::controller::PlotFilterController;
//! use vizdims::data::DataReader;
//! use std::path::Path;
//!
//! let dataset = DataReader::read_file(Path::new("vis_dims.csv"))?;
//! let mut controller = PlotFilterController::new(dataset, ViewerConfig::with_table());
//!
//! let update = controller.set_filter_text("wind");
//! println!("{} headlines match", update.view.len());
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod filter;
pub mod opener;
pub mod plot;
pub mod search;
pub mod table;
pub mod ui;

pub use error::{Result, VizError};
