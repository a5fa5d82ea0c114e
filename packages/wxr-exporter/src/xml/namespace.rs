//! Namespace registry for one export document.

use crate::config::{
    validate_prefix, DUBLIN_CORE_NAMESPACE_URI, DUBLIN_CORE_PREFIX, FALLBACK_PREFIX,
    RSS_CONTENT_NAMESPACE_URI, RSS_CONTENT_PREFIX, WXR_NAMESPACE_URI, WXR_PREFIX,
    XMLNS_NAMESPACE_URI, XML_NAMESPACE_URI,
};
use super::utils::is_xml_char;

/// A prefix bound to a namespace URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceBinding {
    pub prefix: String,
    pub uri: String,
}

/// Registry of prefix to URI bindings for a single document.
///
/// Bindings are kept in registration order, which is also the order the
/// `xmlns:*` declarations appear on the root element. There is no removal:
/// a registry lives exactly as long as one export run.
#[derive(Debug, Clone, Default)]
pub struct NamespaceRegistry {
    bindings: Vec<NamespaceBinding>,
}

impl NamespaceRegistry {
    /// Create a registry with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry seeded with the three core WXR namespaces.
    #[must_use]
    pub fn with_core_namespaces() -> Self {
        let mut registry = Self::new();
        registry.bind(WXR_PREFIX, WXR_NAMESPACE_URI);
        registry.bind(DUBLIN_CORE_PREFIX, DUBLIN_CORE_NAMESPACE_URI);
        registry.bind(RSS_CONTENT_PREFIX, RSS_CONTENT_NAMESPACE_URI);
        registry
    }

    /// Register a core namespace under a fixed prefix.
    pub fn bind(&mut self, prefix: impl Into<String>, uri: impl Into<String>) {
        self.bindings.push(NamespaceBinding {
            prefix: prefix.into(),
            uri: uri.into(),
        });
    }

    /// Whether an extension request for `uri` must be ignored.
    ///
    /// Extensions may claim neither the default (empty) namespace nor the
    /// WXR namespace. The two namespaces reserved by XML cannot be bound to
    /// any other prefix, and a URI must be representable in the document.
    #[must_use]
    pub fn rejects_if_invalid(uri: &str) -> bool {
        uri.is_empty()
            || uri == WXR_NAMESPACE_URI
            || uri == XML_NAMESPACE_URI
            || uri == XMLNS_NAMESPACE_URI
            || !uri.chars().all(is_xml_char)
    }

    /// Assign a unique prefix to an extension namespace.
    ///
    /// The preferred prefix is used as is when free; otherwise `0`, `1`, `2`,
    /// ... are appended until an unused prefix is found. Returns `None` when
    /// the request is rejected by [`Self::rejects_if_invalid`].
    pub fn request_extension_prefix(&mut self, preferred_prefix: &str, uri: &str) -> Option<String> {
        if Self::rejects_if_invalid(uri) {
            return None;
        }

        let base = if validate_prefix(preferred_prefix).is_ok() {
            preferred_prefix
        } else {
            FALLBACK_PREFIX
        };

        let mut prefix = base.to_string();
        let mut suffix = 0u32;
        while self.is_bound(&prefix) {
            prefix = format!("{base}{suffix}");
            suffix += 1;
        }

        self.bind(prefix.clone(), uri);
        Some(prefix)
    }

    /// Whether `prefix` is already taken.
    #[must_use]
    pub fn is_bound(&self, prefix: &str) -> bool {
        self.bindings.iter().any(|b| b.prefix == prefix)
    }

    /// The first prefix bound to `uri`.
    #[must_use]
    pub fn prefix_for(&self, uri: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|b| b.uri == uri)
            .map(|b| b.prefix.as_str())
    }

    /// The URI bound to `prefix`.
    #[must_use]
    pub fn uri_for(&self, prefix: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|b| b.prefix == prefix)
            .map(|b| b.uri.as_str())
    }

    /// All bindings in registration order.
    #[must_use]
    pub fn bindings(&self) -> &[NamespaceBinding] {
        &self.bindings
    }
}
