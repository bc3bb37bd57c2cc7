//! Service endpoint configuration.

use serde::{Deserialize, Serialize};
use std::{
    fmt,
    hash::{Hash, Hasher},
};
use url::Url;

/// Remote service origin.
///
/// An origin is fixed when a client is constructed and cannot be
/// changed afterwards, so calls in transit never observe a
/// partially updated endpoint. Use a new client to talk to a
/// different endpoint.
#[derive(Debug, Clone, Eq, Serialize, Deserialize)]
pub struct Origin {
    name: String,
    url: Url,
}

impl Origin {
    /// Create a new origin.
    pub fn new(name: String, url: Url) -> Self {
        Self { name, url }
    }

    /// Origin for a named service region.
    pub fn for_region(region: &str) -> Result<Self, url::ParseError> {
        let url: Url =
            format!("https://trail.{}.trailkit.dev/", region).parse()?;
        Ok(Self {
            name: region.to_owned(),
            url,
        })
    }

    /// Name of the origin.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// URL of the origin.
    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl PartialEq for Origin {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Hash for Origin {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.url)
    }
}

impl From<Url> for Origin {
    fn from(url: Url) -> Self {
        let name = url.authority().to_owned();
        Self { name, url }
    }
}
