//! Channel-level site metadata.

use super::EntityWriter;
use crate::config::WXR_NAMESPACE_URI;
use crate::error::Result;
use crate::types::SiteMetadata;
use crate::xml::QualifiedName;

impl EntityWriter<'_> {
    /// Write the site metadata children of `channel`.
    ///
    /// `docs` carries the WXR namespace URI as text, and `wxr:site_url` is
    /// only written for multi-site installs.
    pub fn write_site_metadata(&mut self, site: &SiteMetadata) -> Result<()> {
        self.rss("title", &site.name)?;
        self.rss("link", &site.url)?;
        self.rss("description", &site.description)?;
        self.rss("pubDate", &site.pub_date)?;
        self.rss("language", &site.language)?;
        self.rss("docs", WXR_NAMESPACE_URI)?;
        self.writer.write_element_with_attributes(
            &QualifiedName::local("generator"),
            &site.generator,
            &[(QualifiedName::wxr("wp_version"), site.generator_version.as_str())],
        )?;

        if let Some(site_url) = &site.site_url {
            self.wxr("site_url", site_url)?;
        }

        tracing::debug!(site = %site.name, multisite = site.is_multisite(), "Wrote channel metadata");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{child_names, finish, root_writer};
    use super::*;
    use crate::hooks::ExportHooks;
    use crate::xml::NamespaceRegistry;

    fn site() -> SiteMetadata {
        SiteMetadata {
            name: "Example".to_string(),
            url: "https://example.org".to_string(),
            description: "Just another site".to_string(),
            pub_date: "Mon, 01 Jan 2024 00:00:00 +0000".to_string(),
            language: "en-US".to_string(),
            generator: "https://wordpress.org/?v=6.4".to_string(),
            generator_version: "6.4".to_string(),
            site_url: None,
        }
    }

    fn write(site: &SiteMetadata) -> String {
        let hooks = ExportHooks::new();
        let mut writer = root_writer(NamespaceRegistry::with_core_namespaces());
        EntityWriter::new(&mut writer, &hooks)
            .write_site_metadata(site)
            .unwrap();
        finish(writer)
    }

    #[test]
    fn test_metadata_order() {
        let doc = write(&site());
        assert_eq!(
            child_names(&doc, "rss"),
            vec!["title", "link", "description", "pubDate", "language", "docs", "generator"]
        );
        assert!(doc.contains("<docs>http://wordpress.org/export/</docs>"));
        assert!(doc.contains("wxr:wp_version=\"6.4\""));
    }

    #[test]
    fn test_site_url_only_for_multisite() {
        let mut multisite = site();
        multisite.site_url = Some("https://network.example.org".to_string());
        let doc = write(&multisite);
        assert_eq!(child_names(&doc, "rss").last().map(String::as_str), Some("site_url"));
        assert!(doc.contains("<wxr:site_url>https://network.example.org</wxr:site_url>"));
    }
}
