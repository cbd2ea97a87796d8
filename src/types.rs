//! Core data structures shared by the parser and the accessor.

use std::fmt;
use std::str::FromStr;

use crate::error::UrlError;

/// Where the URL held by an accessor came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMode {
    /// The caller passed the URL explicitly.
    Manual,
    /// The URL was rebuilt from the current request's server variables.
    FromRequestContext,
}

/// A URL component that can be read through [`UrlAccessor::get`](crate::UrlAccessor::get).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Path,
    Scheme,
    Port,
    Host,
    Query,
}

impl Component {
    /// Every component the accessor will hand out.
    pub const ALL: [Component; 5] = [
        Component::Path,
        Component::Scheme,
        Component::Port,
        Component::Host,
        Component::Query,
    ];

    /// The lowercase name used to request this component.
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Path => "path",
            Component::Scheme => "scheme",
            Component::Port => "port",
            Component::Host => "host",
            Component::Query => "query",
        }
    }
}

impl FromStr for Component {
    type Err = UrlError;

    /// Exact, case-sensitive match against the accepted names.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Component::ALL
            .into_iter()
            .find(|c| c.as_str() == name)
            .ok_or_else(|| UrlError::UnsupportedComponent(name.to_string()))
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Components extracted from a URL in a single parse.
///
/// Only the fields that are actually present in the URL are `Some`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlComponents {
    /// URL scheme (https, http, ftp)
    pub scheme: Option<String>,
    /// Hostname as serialized by the parser (lowercased, IDNA applied)
    pub host: Option<String>,
    /// Port number, when written in the URL
    pub port: Option<u16>,
    /// Username from the userinfo section
    pub user: Option<String>,
    /// Password from the userinfo section
    pub pass: Option<String>,
    /// Path component (/api/v1/users)
    pub path: Option<String>,
    /// Query string without the '?'
    pub query: Option<String>,
    /// Fragment without the '#'
    pub fragment: Option<String>,
}
