//! Qualified names: a namespace URI paired with a local name.

use std::fmt;

use crate::config::{DUBLIN_CORE_NAMESPACE_URI, RSS_CONTENT_NAMESPACE_URI, WXR_NAMESPACE_URI};

/// An element or attribute name qualified by an optional namespace URI.
///
/// Names without a namespace belong to the default (RSS) vocabulary and are
/// written unprefixed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    namespace_uri: Option<String>,
    local_name: String,
}

impl QualifiedName {
    /// Create a name in the given namespace.
    #[must_use]
    pub fn new(namespace_uri: impl Into<String>, local_name: impl Into<String>) -> Self {
        Self {
            namespace_uri: Some(namespace_uri.into()),
            local_name: local_name.into(),
        }
    }

    /// Create a name in the default (unprefixed) vocabulary.
    #[must_use]
    pub fn local(local_name: impl Into<String>) -> Self {
        Self {
            namespace_uri: None,
            local_name: local_name.into(),
        }
    }

    /// Create a name in the WXR vocabulary.
    #[must_use]
    pub fn wxr(local_name: impl Into<String>) -> Self {
        Self::new(WXR_NAMESPACE_URI, local_name)
    }

    /// Create a name in the Dublin Core vocabulary.
    #[must_use]
    pub fn dublin_core(local_name: impl Into<String>) -> Self {
        Self::new(DUBLIN_CORE_NAMESPACE_URI, local_name)
    }

    /// Create a name in the RSS content module vocabulary.
    #[must_use]
    pub fn rss_content(local_name: impl Into<String>) -> Self {
        Self::new(RSS_CONTENT_NAMESPACE_URI, local_name)
    }

    /// The namespace URI, `None` for the default vocabulary.
    #[must_use]
    pub fn namespace_uri(&self) -> Option<&str> {
        self.namespace_uri.as_deref()
    }

    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// Whether this name lives in the WXR vocabulary.
    #[must_use]
    pub fn is_wxr(&self) -> bool {
        self.namespace_uri.as_deref() == Some(WXR_NAMESPACE_URI)
    }
}

/// Clark notation: `{uri}local`, or just `local` without a namespace.
impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace_uri {
            Some(uri) => write!(f, "{{{uri}}}{}", self.local_name),
            None => f.write_str(&self.local_name),
        }
    }
}
