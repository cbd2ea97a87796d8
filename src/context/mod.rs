//! Request metadata supplied by the serving layer.
//!
//! The accessor never reads globals on its own. Whatever is serving the
//! request hands over its server variables through [`ServerVars`], which
//! are snapshotted once into a [`RequestContext`].

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::config::AccessorConfig;
use crate::error::UrlError;

pub const SERVER_NAME: &str = "SERVER_NAME";
pub const SERVER_PORT: &str = "SERVER_PORT";
pub const REQUEST_URI: &str = "REQUEST_URI";
pub const HTTPS: &str = "HTTPS";

/// Read-only view of the server variables for the current request.
pub trait ServerVars {
    /// Look up a variable by its CGI name, e.g. `SERVER_NAME`.
    fn var(&self, name: &str) -> Option<String>;
}

impl ServerVars for HashMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl ServerVars for BTreeMap<String, String> {
    fn var(&self, name: &str) -> Option<String> {
        self.get(name).cloned()
    }
}

impl<T: ServerVars + ?Sized> ServerVars for &T {
    fn var(&self, name: &str) -> Option<String> {
        (**self).var(name)
    }
}

/// Server variables taken from the process environment, as a CGI host sets them.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvVars;

impl ServerVars for EnvVars {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// Snapshot of the metadata needed to rebuild the request URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Host name the server answered on.
    pub server_name: String,
    /// Port the server answered on.
    pub server_port: u16,
    /// Request target as received: path plus query.
    #[serde(default)]
    pub request_uri: String,
    /// Encrypted-transport flag, if the server set one.
    #[serde(default)]
    pub https: Option<String>,
}

impl RequestContext {
    pub fn new(
        server_name: impl Into<String>,
        server_port: u16,
        request_uri: impl Into<String>,
    ) -> Self {
        Self {
            server_name: server_name.into(),
            server_port,
            request_uri: request_uri.into(),
            https: None,
        }
    }

    /// Set the encrypted-transport flag (`"on"`, `"1"`, `"off"`, ...).
    pub fn with_https(mut self, flag: impl Into<String>) -> Self {
        self.https = Some(flag.into());
        self
    }

    /// Build a context from server variables.
    ///
    /// `SERVER_NAME` and `SERVER_PORT` are required. A missing `REQUEST_URI`
    /// is treated as empty.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use requrl::RequestContext;
    ///
    /// let vars: HashMap<String, String> = [
    ///     ("SERVER_NAME", "example.com"),
    ///     ("SERVER_PORT", "8080"),
    ///     ("REQUEST_URI", "/a?b=1"),
    /// ]
    /// .into_iter()
    /// .map(|(k, v)| (k.to_string(), v.to_string()))
    /// .collect();
    ///
    /// let ctx = RequestContext::from_vars(&vars).unwrap();
    /// assert_eq!(ctx.server_port, 8080);
    /// assert!(!ctx.is_secure());
    /// ```
    pub fn from_vars(vars: &impl ServerVars) -> Result<Self, UrlError> {
        let server_name = vars
            .var(SERVER_NAME)
            .ok_or(UrlError::MissingServerVar(SERVER_NAME))?;

        let raw_port = vars
            .var(SERVER_PORT)
            .ok_or(UrlError::MissingServerVar(SERVER_PORT))?;
        let server_port = raw_port
            .trim()
            .parse::<u16>()
            .map_err(|_| UrlError::InvalidServerPort(raw_port.clone()))?;

        Ok(Self {
            server_name,
            server_port,
            request_uri: vars.var(REQUEST_URI).unwrap_or_default(),
            https: vars.var(HTTPS),
        })
    }

    /// Build a context from the process environment.
    pub fn from_env() -> Result<Self, UrlError> {
        Self::from_vars(&EnvVars)
    }

    /// Whether the request arrived over an encrypted transport.
    ///
    /// True when the `HTTPS` flag is set to anything but an empty value,
    /// `"0"` or exactly `"off"`, or when the server port is 443.
    pub fn is_secure(&self) -> bool {
        let flagged = match self.https.as_deref() {
            None | Some("") | Some("0") => false,
            Some(flag) => flag != "off",
        };

        flagged || self.server_port == 443
    }

    pub fn is_default_port(&self, config: &AccessorConfig) -> bool {
        config.is_suppressed(self.server_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_vars_complete() {
        let ctx = RequestContext::from_vars(&vars(&[
            ("SERVER_NAME", "example.com"),
            ("SERVER_PORT", "443"),
            ("REQUEST_URI", "/a/b?x=1"),
            ("HTTPS", "on"),
        ]))
        .unwrap();

        assert_eq!(
            ctx,
            RequestContext::new("example.com", 443, "/a/b?x=1").with_https("on")
        );
    }

    #[test]
    fn test_from_vars_missing_required() {
        let err = RequestContext::from_vars(&vars(&[("SERVER_PORT", "80")])).unwrap_err();
        assert_eq!(err, UrlError::MissingServerVar(SERVER_NAME));

        let err = RequestContext::from_vars(&vars(&[("SERVER_NAME", "a.test")])).unwrap_err();
        assert_eq!(err, UrlError::MissingServerVar(SERVER_PORT));
    }

    #[test]
    fn test_from_vars_bad_port() {
        for port in ["", "http", "70000", "-1"] {
            let err = RequestContext::from_vars(&vars(&[
                ("SERVER_NAME", "a.test"),
                ("SERVER_PORT", port),
            ]))
            .unwrap_err();
            assert_eq!(err, UrlError::InvalidServerPort(port.to_string()));
        }
    }

    #[test]
    fn test_from_vars_defaults_request_uri() {
        let ctx = RequestContext::from_vars(&vars(&[
            ("SERVER_NAME", "a.test"),
            ("SERVER_PORT", "80"),
        ]))
        .unwrap();
        assert_eq!(ctx.request_uri, "");
        assert_eq!(ctx.https, None);
    }

    #[test]
    fn test_is_secure_flag_values() {
        let cases = vec![
            (None, false),
            (Some(""), false),
            (Some("0"), false),
            (Some("off"), false),
            (Some("OFF"), true),
            (Some("on"), true),
            (Some("1"), true),
        ];

        for (flag, expected) in cases {
            let mut ctx = RequestContext::new("a.test", 80, "/");
            ctx.https = flag.map(str::to_string);
            assert_eq!(ctx.is_secure(), expected, "HTTPS flag {:?}", flag);
        }
    }

    #[test]
    fn test_is_secure_by_port() {
        assert!(RequestContext::new("a.test", 443, "/").is_secure());
        assert!(RequestContext::new("a.test", 443, "/").with_https("off").is_secure());
        assert!(!RequestContext::new("a.test", 8443, "/").is_secure());
    }
}
