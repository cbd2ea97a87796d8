//! requrl - the current request URL, split into components
//!
//! This crate rebuilds the absolute URL of the request being served from the
//! server variables handed over by the serving layer (or takes a URL supplied
//! by the caller), parses it once, and gives read-only access to a fixed set
//! of its components.
//!
//! # Quick Start
//!
//! ```
//! use requrl::{RequestContext, UrlAccessor};
//!
//! // Rebuild the URL from request metadata
//! let ctx = RequestContext::new("example.com", 8443, "/").with_https("on");
//! let url = UrlAccessor::from_context(ctx)?;
//! assert_eq!(url.as_str(), "https://example.com:8443/");
//! assert!(url.is_secure()?);
//!
//! // Or work with a URL you already have
//! let url = UrlAccessor::manual("http://foo.test:9999/x?y=2")?;
//! assert_eq!(url.get(Some("host"))?.as_deref(), Some("foo.test"));
//! assert!(url.is_secure().is_err());
//! # Ok::<(), requrl::UrlError>(())
//! ```
//!
//! # Accepted Components
//!
//! | Name     | Example (`http://foo.test:9999/x?y=2`) |
//! |----------|----------------------------------------|
//! | `scheme` | `http`                                 |
//! | `host`   | `foo.test`                             |
//! | `port`   | `9999`                                 |
//! | `path`   | `/x`                                   |
//! | `query`  | `y=2`                                  |
//!
//! Any other name is rejected with [`UrlError::UnsupportedComponent`].
//!
//! # Error Handling
//!
//! All fallible functions return `Result<T, UrlError>`. Common error cases:
//!
//! - Requesting a component outside the accepted set
//! - Asking whether a manually supplied URL is secure
//! - Missing or malformed server variables
//! - URLs that do not parse

// Re-export the accessor and parser
pub use crate::url::{parse_components, UrlAccessor};

// Re-export request metadata
pub use context::{EnvVars, RequestContext, ServerVars};

// Re-export public types
pub use config::AccessorConfig;
pub use error::UrlError;
pub use types::{Component, SourceMode, UrlComponents};

// Module declarations
pub mod config;
pub mod context;
pub mod error;
pub mod types;
pub mod url;
