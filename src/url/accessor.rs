//! Read-only, validated access to the current request URL.

use std::fmt;

use tracing::debug;

use crate::config::AccessorConfig;
use crate::context::{EnvVars, RequestContext, ServerVars};
use crate::error::UrlError;
use crate::types::{Component, SourceMode, UrlComponents};
use crate::url::parse::parse_components;

#[derive(Debug, Clone, PartialEq)]
enum Origin {
    Manual,
    Request(RequestContext),
}

/// A URL split into its components once, at construction.
///
/// The URL is either supplied by the caller or rebuilt from the metadata of
/// the request being served.
///
/// # Examples
///
/// ```
/// use requrl::{RequestContext, UrlAccessor};
///
/// let ctx = RequestContext::new("example.com", 443, "/a/b?x=1").with_https("on");
/// let url = UrlAccessor::from_context(ctx).unwrap();
///
/// assert_eq!(url.as_str(), "https://example.com/a/b?x=1");
/// assert_eq!(url.get(Some("query")).unwrap().as_deref(), Some("x=1"));
/// assert!(url.is_secure().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct UrlAccessor {
    origin: Origin,
    url: String,
    components: UrlComponents,
}

impl UrlAccessor {
    /// Use `url` when it is given and not blank, otherwise rebuild the URL
    /// from `vars`.
    ///
    /// `vars` is only consulted in the second case.
    pub fn new(url: Option<&str>, vars: &impl ServerVars) -> Result<Self, UrlError> {
        match url.filter(|u| !is_blank(u)) {
            Some(url) => Self::manual(url),
            None => Self::from_context(RequestContext::from_vars(vars)?),
        }
    }

    /// Accessor for the URL of the request in the process environment.
    pub fn current() -> Result<Self, UrlError> {
        Self::new(None, &EnvVars)
    }

    /// Accessor for an explicitly supplied URL.
    pub fn manual(url: impl Into<String>) -> Result<Self, UrlError> {
        Self::build(Origin::Manual, url.into())
    }

    /// Accessor for the URL rebuilt from `ctx` with the default settings.
    pub fn from_context(ctx: RequestContext) -> Result<Self, UrlError> {
        Self::from_context_with(ctx, &AccessorConfig::default())
    }

    /// Accessor for the URL rebuilt from `ctx`.
    pub fn from_context_with(
        ctx: RequestContext,
        config: &AccessorConfig,
    ) -> Result<Self, UrlError> {
        let url = rebuild_url(&ctx, config);
        Self::build(Origin::Request(ctx), url)
    }

    fn build(origin: Origin, url: String) -> Result<Self, UrlError> {
        let components = parse_components(&url)?;
        let accessor = Self {
            origin,
            url,
            components,
        };

        debug!(
            url = %accessor.url,
            source = ?accessor.source_mode(),
            "URL accessor created"
        );

        Ok(accessor)
    }

    /// The full URL, or one of its components.
    ///
    /// With no component (or a blank name, `""` or `"0"`) the full URL is returned. Names
    /// outside path, scheme, port, host and query are rejected; an accepted
    /// component missing from the URL yields `Ok(None)`.
    ///
    /// ```
    /// use requrl::{UrlAccessor, UrlError};
    ///
    /// let url = UrlAccessor::manual("http://foo.test:9999/x?y=2").unwrap();
    /// assert_eq!(url.get(None).unwrap().as_deref(), Some("http://foo.test:9999/x?y=2"));
    /// assert_eq!(url.get(Some("port")).unwrap().as_deref(), Some("9999"));
    /// assert_eq!(
    ///     url.get(Some("fragment")),
    ///     Err(UrlError::UnsupportedComponent("fragment".to_string()))
    /// );
    /// ```
    pub fn get(&self, component: Option<&str>) -> Result<Option<String>, UrlError> {
        let name = match component {
            Some(name) if !is_blank(name) => name,
            _ => return Ok(Some(self.url.clone())),
        };

        let component = name.parse::<Component>().map_err(|err| {
            debug!(component = name, "unsupported URL component requested");
            err
        })?;

        Ok(self.component(component))
    }

    /// Typed form of [`get`](Self::get); cannot be handed an unsupported name.
    pub fn component(&self, component: Component) -> Option<String> {
        let c = &self.components;
        match component {
            Component::Path => c.path.clone(),
            Component::Scheme => c.scheme.clone(),
            Component::Port => c.port.map(|p| p.to_string()),
            Component::Host => c.host.clone(),
            Component::Query => c.query.clone(),
        }
    }

    pub fn port(&self) -> Option<u16> {
        self.components.port
    }

    /// Whether the current request arrived over an encrypted transport.
    ///
    /// Only available when the URL came from request context. The answer is
    /// taken from the server variables, not from the URL scheme.
    pub fn is_secure(&self) -> Result<bool, UrlError> {
        match &self.origin {
            Origin::Request(ctx) => Ok(ctx.is_secure()),
            Origin::Manual => {
                debug!(url = %self.url, "security check refused for manual URL");
                Err(UrlError::ManualUrlNotCheckable)
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.url
    }

    pub fn source_mode(&self) -> SourceMode {
        match self.origin {
            Origin::Manual => SourceMode::Manual,
            Origin::Request(_) => SourceMode::FromRequestContext,
        }
    }

    /// Every component the parser extracted, including those `get` refuses.
    pub fn components(&self) -> &UrlComponents {
        &self.components
    }

    /// The request metadata the URL was rebuilt from, if any.
    pub fn context(&self) -> Option<&RequestContext> {
        match &self.origin {
            Origin::Request(ctx) => Some(ctx),
            Origin::Manual => None,
        }
    }
}

impl fmt::Display for UrlAccessor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// `""` and `"0"` stand for an omitted argument.
fn is_blank(s: &str) -> bool {
    s.is_empty() || s == "0"
}

/// Scheme, server name, non-default port, then the request target.
fn rebuild_url(ctx: &RequestContext, config: &AccessorConfig) -> String {
    let mut url = String::new();
    url.push_str(if ctx.is_secure() { "https://" } else { "http://" });
    url.push_str(&ctx.server_name);

    if !ctx.is_default_port(config) {
        url.push(':');
        url.push_str(&ctx.server_port.to_string());
    }

    url.push_str(&ctx.request_uri);
    url
}
