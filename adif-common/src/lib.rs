//! # ADIF Common Library
//!
//! Shared code for the ADIF award service:
//! - ADIF record model and parser
//! - Configuration loading
//! - Common error type

pub mod adif;
pub mod config;
pub mod error;

pub use adif::{parse_adif, AdifFile, Record};
pub use error::{Error, Result};
