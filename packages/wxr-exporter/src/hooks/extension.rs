//! Extension namespaces and extension-markup descriptors.

use crate::xml::is_pi_safe;

/// A request by an extension to declare its own namespace on the root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionNamespaceRequest {
    /// Prefix the extension would like; it may be suffixed to keep it unique.
    pub preferred_prefix: String,
    pub uri: String,
    /// Name of the extension, used in logs only.
    pub plugin: String,
}

impl ExtensionNamespaceRequest {
    #[must_use]
    pub fn new(
        preferred_prefix: impl Into<String>,
        uri: impl Into<String>,
        plugin: impl Into<String>,
    ) -> Self {
        Self {
            preferred_prefix: preferred_prefix.into(),
            uri: uri.into(),
            plugin: plugin.into(),
        }
    }
}

/// Advertises that an extension wrote markup an importer may need it for.
///
/// Written as a `WXR_Importer` processing instruction after the root
/// element, so an importer can warn when the extension is not installed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionMarkupDescriptor {
    pub namespace_uri: String,
    pub plugin_name: String,
    pub plugin_slug: String,
    pub plugin_uri: String,
}

impl ExtensionMarkupDescriptor {
    #[must_use]
    pub fn new(
        namespace_uri: impl Into<String>,
        plugin_name: impl Into<String>,
        plugin_slug: impl Into<String>,
        plugin_uri: impl Into<String>,
    ) -> Self {
        Self {
            namespace_uri: namespace_uri.into(),
            plugin_name: plugin_name.into(),
            plugin_slug: plugin_slug.into(),
            plugin_uri: plugin_uri.into(),
        }
    }

    /// Render the processing-instruction data.
    ///
    /// Returns `None` when a field is empty or holds a value that cannot be
    /// quoted inside the instruction.
    ///
    /// # Examples
    /// ```
    /// use wxr_exporter::hooks::ExtensionMarkupDescriptor;
    ///
    /// let descriptor = ExtensionMarkupDescriptor::new(
    ///     "urn:acme", "Acme SEO", "acme-seo", "https://acme.example/seo",
    /// );
    /// assert_eq!(
    ///     descriptor.pi_data().as_deref(),
    ///     Some("namespace-uri='urn:acme' plugin-name='Acme SEO' plugin-slug='acme-seo' plugin-uri='https://acme.example/seo'")
    /// );
    /// assert!(ExtensionMarkupDescriptor::default().pi_data().is_none());
    /// ```
    #[must_use]
    pub fn pi_data(&self) -> Option<String> {
        let fields = [
            ("namespace-uri", &self.namespace_uri),
            ("plugin-name", &self.plugin_name),
            ("plugin-slug", &self.plugin_slug),
            ("plugin-uri", &self.plugin_uri),
        ];

        let mut parts = Vec::with_capacity(fields.len());
        for (key, value) in fields {
            if value.is_empty() || value.contains('\'') || !is_pi_safe(value) {
                return None;
            }
            parts.push(format!("{key}='{value}'"));
        }
        Some(parts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_is_malformed() {
        let descriptor = ExtensionMarkupDescriptor::new("urn:a", "A", "", "https://a.example");
        assert!(descriptor.pi_data().is_none());
    }

    #[test]
    fn test_quote_or_terminator_is_malformed() {
        let quoted = ExtensionMarkupDescriptor::new("urn:a", "Bob's", "a", "https://a.example");
        assert!(quoted.pi_data().is_none());

        let terminator = ExtensionMarkupDescriptor::new("urn:a", "A?>", "a", "https://a.example");
        assert!(terminator.pi_data().is_none());
    }
}
