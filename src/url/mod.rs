//! URL parsing and access.
//!
//! This module contains:
//! - One-shot decomposition of a URL string into components
//! - The validated accessor over the current request URL

pub mod accessor;
pub mod parse;

pub use accessor::UrlAccessor;
pub use parse::parse_components;
