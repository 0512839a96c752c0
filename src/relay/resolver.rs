//! Upstream URL resolution.
//!
//! # Responsibilities
//! - Map inbound path segments and query string to one absolute upstream URL
//! - Avoid doubling the API base when the inbound path already carries it
//! - Gate the absolute-target escape hatch behind configuration
//!
//! # Design Decisions
//! - Segments are joined verbatim: no percent decoding, no re-encoding, no
//!   slash deduplication, so the upstream sees exactly what the client sent
//! - Resolution is pure string assembly; a malformed result surfaces later
//!   as a connection failure, not as a resolver error

use std::fmt;

/// An absolute URL the forwarder will call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamTarget {
    url: String,
}

impl UpstreamTarget {
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for UpstreamTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// Resolves inbound request paths against the configured upstream origin.
#[derive(Debug, Clone)]
pub struct UpstreamResolver {
    origin: String,
    api_base: String,
    allow_absolute: bool,
}

impl UpstreamResolver {
    /// Create a resolver for `origin` with requests mounted under `api_base`.
    ///
    /// Trailing slashes are normalized away so that joining is unambiguous;
    /// an `api_base` of `"/"` means requests land directly on the origin.
    pub fn new(origin: &str, api_base: &str, allow_absolute: bool) -> Self {
        Self {
            origin: origin.trim_end_matches('/').to_string(),
            api_base: api_base.trim_end_matches('/').to_string(),
            allow_absolute,
        }
    }

    /// Assemble the upstream URL for one request.
    ///
    /// `segments` is the raw path below the relay's mount point, split on
    /// `/`; `query` is the raw query string without the leading `?`.
    pub fn resolve(&self, segments: &[String], query: Option<&str>) -> UpstreamTarget {
        let joined = segments.join("/");

        if is_absolute(&joined) {
            if self.allow_absolute {
                return UpstreamTarget {
                    url: with_query(joined, query),
                };
            }
            tracing::warn!(
                target = %joined,
                "Absolute target rejected, treating as a relative path"
            );
        }

        let mut url = String::with_capacity(
            self.origin.len() + self.api_base.len() + joined.len() + 2,
        );
        url.push_str(&self.origin);
        if self.carries_api_base(&joined) {
            url.push('/');
            url.push_str(&joined);
        } else {
            url.push_str(&self.api_base);
            if !joined.is_empty() {
                url.push('/');
                url.push_str(&joined);
            }
        }

        UpstreamTarget {
            url: with_query(url, query),
        }
    }

    /// True when the joined path already starts with the API base, so
    /// prefixing it again would double the mount point.
    fn carries_api_base(&self, joined: &str) -> bool {
        let base = match self.api_base.strip_prefix('/') {
            Some(base) if !base.is_empty() => base,
            _ => return false,
        };
        match joined.strip_prefix(base) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

fn with_query(mut url: String, query: Option<&str>) -> String {
    if let Some(query) = query {
        url.push('?');
        url.push_str(query);
    }
    url
}
