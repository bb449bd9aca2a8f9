//! Service URL type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use url::{Host, Url};

use crate::error::{Error, InvalidInputError};

/// A validated base URL of a remote service.
///
/// Used both for the client backend (e.g. `http://192.168.1.3:8080/client`)
/// and for the country reference service.
///
/// HTTPS is always accepted. Plain HTTP is accepted for loopback and
/// private-network hosts (IPv4 private, IPv6 unique-local and link-local),
/// or for any host through [`ServiceUrl::allowing_plain_http`].
///
/// # Example
///
/// ```
/// use clientele_core::ServiceUrl;
///
/// let api = ServiceUrl::new("http://localhost:8080/client/").unwrap();
/// assert_eq!(api.as_str(), "http://localhost:8080/client");
/// assert_eq!(api.endpoint(&["12", "habilitar"]),
///            "http://localhost:8080/client/12/habilitar");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServiceUrl(Url);

impl ServiceUrl {
    /// Create a new service URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        Self::parse(s.as_ref(), false)
    }

    /// Like [`new`](Self::new), but accepts plain HTTP for any host.
    ///
    /// For backends reachable only over HTTP behind a public name.
    pub fn allowing_plain_http(s: impl AsRef<str>) -> Result<Self, Error> {
        Self::parse(s.as_ref(), true)
    }

    fn parse(s: &str, plain_http: bool) -> Result<Self, Error> {
        let mut url = Url::parse(s).map_err(|e| InvalidInputError::ServiceUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s, plain_http)?;

        // Normalize: remove trailing slashes from the path
        let trimmed = url.path().trim_end_matches('/').to_string();
        url.set_path(&trimmed);
        url.set_query(None);
        url.set_fragment(None);

        Ok(Self(url))
    }

    /// Returns the URL of an endpoint below this base.
    ///
    /// Segments are percent-encoded as path segments.
    pub fn endpoint(&self, segments: &[&str]) -> String {
        if segments.is_empty() {
            return self.as_str().to_string();
        }
        let mut url = self.0.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.to_string()
    }

    /// Returns the base URL as a string, without a trailing slash.
    pub fn as_str(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }

    /// Returns the inner URL.
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the URL scheme ("https" or "http").
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }

    fn validate(url: &Url, original: &str, plain_http: bool) -> Result<(), Error> {
        let invalid = |reason: &str| -> Error {
            InvalidInputError::ServiceUrl {
                value: original.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        if url.cannot_be_a_base() {
            return Err(invalid("must be an absolute URL"));
        }

        let Some(host) = url.host() else {
            return Err(invalid("must have a host"));
        };

        match url.scheme() {
            "https" => Ok(()),
            "http" if plain_http || is_local_network(&host) => Ok(()),
            "http" => Err(invalid(
                "must use HTTPS (HTTP allowed only for local network hosts)",
            )),
            _ => Err(invalid("scheme must be http or https")),
        }
    }
}

fn is_local_network(host: &Host<&str>) -> bool {
    match host {
        Host::Domain(name) => *name == "localhost" || name.ends_with(".local"),
        Host::Ipv4(ip) => ip.is_loopback() || ip.is_private() || ip.is_link_local(),
        Host::Ipv6(ip) => {
            ip.is_loopback() || ip.is_unique_local() || ip.is_unicast_link_local()
        }
    }
}

impl fmt::Display for ServiceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for ServiceUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ServiceUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ServiceUrl::new(&s).map_err(serde::de::Error::custom)
    }
}

impl AsRef<str> for ServiceUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
