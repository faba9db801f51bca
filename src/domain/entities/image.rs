//! Remote image reference.

/// URL of an image served by a remote host.
///
/// Fetching and decoding belong to the image collaborator; the domain only
/// carries the address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteImage(String);

impl RemoteImage {
    /// Creates a new image reference from a URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Returns the full URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.0
    }

    /// Returns the authority part of the URL, or the whole string when it
    /// has no scheme.
    #[must_use]
    pub fn host(&self) -> &str {
        let rest = self
            .0
            .split_once("://")
            .map_or(self.0.as_str(), |(_, rest)| rest);
        let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
        &rest[..end]
    }
}

impl std::fmt::Display for RemoteImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RemoteImage {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_strips_scheme_and_path() {
        let image = RemoteImage::new("https://th.bing.com/th/id/OIP.abc?w=292&h=194");
        assert_eq!(image.host(), "th.bing.com");
    }

    #[test]
    fn test_host_without_scheme() {
        assert_eq!(RemoteImage::new("cdn.local").host(), "cdn.local");
        assert_eq!(RemoteImage::new("cdn.local/a.png").host(), "cdn.local");
    }
}
