//! Indexed image/label datasets for semantic segmentation training.

mod common;
pub mod config;
pub mod dataset;
pub mod decoder;
pub mod error;
pub mod schema;
pub mod transform;

pub use config::*;
pub use dataset::*;
pub use decoder::*;
pub use error::{DatasetError, Result};
pub use schema::*;
pub use transform::*;
