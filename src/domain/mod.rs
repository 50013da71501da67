//! Domain layer for the passive skill catalog
//!
//! This module contains the records, wire messages and the transport port.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{CatalogError, CatalogResult};
