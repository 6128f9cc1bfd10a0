//! EVE Image Core Library
//!
//! This crate provides the vocabulary of the EVE Online image server: the
//! tenants it serves, the categories and variations of images it hosts, and
//! the size rules applied to every request. URL rendering lives in
//! `eve-image-client`.

pub mod category;
pub mod constants;
pub mod error;
pub mod size;
pub mod tenant;

// Re-export commonly used types
pub use category::{Category, Variation};
pub use constants::{BASE_URL, DEFAULT_SIZE, VALID_SIZES};
pub use error::ParseError;
pub use size::{is_valid_size, resolve_size};
pub use tenant::Tenant;
