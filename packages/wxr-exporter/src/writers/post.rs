//! `item` writer for posts and media, plus their term associations.

use super::EntityWriter;
use crate::config::WXR_NAMESPACE_URI;
use crate::error::Result;
use crate::types::{MetaOwner, Post, PostTerm, WrittenRecord};
use crate::xml::QualifiedName;

impl EntityWriter<'_> {
    /// Write one RSS `item` for a post or media attachment.
    ///
    /// Nested terms, meta and comments follow the fixed fields, in that order.
    pub fn write_post(&mut self, post: &Post) -> Result<()> {
        self.writer.start_element(&QualifiedName::local("item"))?;
        self.hooks.fire_post(self.writer, post)?;

        self.rss("title", &post.title)?;
        self.rss("link", &post.permalink)?;
        self.writer.write_element_with_attributes(
            &QualifiedName::local("guid"),
            &post.guid,
            &[(QualifiedName::local("isPermaLink"), "false")],
        )?;
        self.rss("description", &post.excerpt)?;
        self.writer
            .write_element(&QualifiedName::dublin_core("creator"), &post.author)?;
        self.writer
            .write_element(&QualifiedName::rss_content("encoded"), &post.content)?;

        self.wxr("id", &post.id.to_string())?;
        self.wxr("date", &post.date)?;
        self.wxr("date_gmt", &post.date_gmt)?;
        self.wxr("comment_status", &post.comment_status)?;
        self.wxr("ping_status", &post.ping_status)?;
        self.wxr("name", &post.name)?;
        self.wxr("status", &post.status)?;
        self.wxr("parent", &post.parent.to_string())?;
        self.wxr("menu_order", &post.menu_order.to_string())?;
        self.wxr("type", &post.post_type)?;
        self.wxr("password", &post.password)?;
        self.wxr("is_sticky", if post.is_sticky { "1" } else { "0" })?;

        if post.is_attachment() {
            let url = post.attachment_url.as_deref().unwrap_or_default();
            self.wxr("attachment_url", url)?;
        }

        for term in &post.terms {
            self.write_post_term(term)?;
        }
        self.write_meta_entries(&post.meta, MetaOwner::Post)?;
        for comment in &post.comments {
            self.write_comment(comment)?;
        }

        self.writer.end_element()?;

        tracing::info!(
            title = %post.title,
            post_type = %post.post_type,
            "Exported {}",
            post.kind()
        );
        self.hooks.notify_wrote(WrittenRecord::Post(post));
        Ok(())
    }

    /// Write a `category` element associating the current item with a term.
    ///
    /// Listeners on this element may add attributes only.
    pub fn write_post_term(&mut self, term: &PostTerm) -> Result<()> {
        self.writer.start_element(&QualifiedName::local("category"))?;
        self.writer
            .write_attribute(&QualifiedName::local("domain"), &term.taxonomy)?;
        self.writer
            .write_attribute(&QualifiedName::new(WXR_NAMESPACE_URI, "slug"), &term.slug)?;
        self.hooks.fire_post_term(self.writer, term)?;

        self.writer.write_text(&term.name)?;
        self.writer.end_element()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::test_support::{child_names, finish, root_writer};
    use super::*;
    use crate::hooks::ExportHooks;
    use crate::types::{Comment, MetaEntry};
    use crate::xml::{NamespaceRegistry, XmlWriter};

    fn hello() -> Post {
        Post {
            id: 7,
            title: "Hi".to_string(),
            permalink: "https://example.org/hi".to_string(),
            guid: "https://example.org/?p=7".to_string(),
            author: "alice".to_string(),
            content: "<p>Hello</p>".to_string(),
            status: "publish".to_string(),
            post_type: "post".to_string(),
            is_sticky: true,
            terms: vec![PostTerm {
                taxonomy: "category".to_string(),
                slug: "news".to_string(),
                name: "News & Views".to_string(),
            }],
            meta: vec![
                MetaEntry::new("_edit_lock", "1700000000:1"),
                MetaEntry::new("_thumbnail_id", "8"),
            ],
            comments: vec![Comment {
                id: 1,
                author: "Bob".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn write(hooks: &ExportHooks, namespaces: NamespaceRegistry, post: &Post) -> String {
        let mut writer = root_writer(namespaces);
        EntityWriter::new(&mut writer, hooks)
            .write_post(post)
            .unwrap();
        finish(writer)
    }

    #[test]
    fn test_item_field_order() {
        let doc = write(&ExportHooks::new(), NamespaceRegistry::with_core_namespaces(), &hello());
        assert_eq!(
            child_names(&doc, "item"),
            vec![
                "title", "link", "guid", "description", "creator", "encoded", "id", "date",
                "date_gmt", "comment_status", "ping_status", "name", "status", "parent",
                "menu_order", "type", "password", "is_sticky", "category", "meta", "comment",
            ]
        );
        assert!(doc.contains("<guid isPermaLink=\"false\">https://example.org/?p=7</guid>"));
        assert!(doc.contains("<dc:creator>alice</dc:creator>"));
        assert!(doc.contains("<wxr:is_sticky>1</wxr:is_sticky>"));
    }

    #[test]
    fn test_edit_lock_is_skipped() {
        let doc = write(&ExportHooks::new(), NamespaceRegistry::with_core_namespaces(), &hello());
        assert!(!doc.contains("_edit_lock"));
        assert!(doc.contains("<wxr:key>_thumbnail_id</wxr:key>"));
    }

    #[test]
    fn test_post_term_attributes_and_text() {
        let doc = write(&ExportHooks::new(), NamespaceRegistry::with_core_namespaces(), &hello());
        assert!(doc.contains(
            "<category domain=\"category\" wxr:slug=\"news\">News &amp; Views</category>"
        ));
    }

    #[test]
    fn test_attachment_writes_url() {
        let media = Post {
            post_type: "attachment".to_string(),
            attachment_url: Some("https://example.org/a.png".to_string()),
            terms: Vec::new(),
            meta: Vec::new(),
            comments: Vec::new(),
            ..hello()
        };
        let doc = write(&ExportHooks::new(), NamespaceRegistry::with_core_namespaces(), &media);
        assert_eq!(
            child_names(&doc, "item").last().map(String::as_str),
            Some("attachment_url")
        );
        assert!(doc.contains("<wxr:attachment_url>https://example.org/a.png</wxr:attachment_url>"));
    }

    #[test]
    fn test_post_term_listener_adds_attribute() {
        let mut namespaces = NamespaceRegistry::with_core_namespaces();
        namespaces.request_extension_prefix("acme", "urn:acme");

        let mut hooks = ExportHooks::new();
        hooks.on_post_term(|writer: &mut XmlWriter, term: &PostTerm| -> Result<()> {
            writer.write_attribute(&QualifiedName::new("urn:acme", "weight"), &term.slug.len().to_string())
        });

        let doc = write(&hooks, namespaces, &hello());
        assert!(doc.contains("wxr:slug=\"news\" acme:weight=\"4\">"));
    }

    #[test]
    fn test_post_listener_in_undeclared_namespace_fails() {
        let mut hooks = ExportHooks::new();
        hooks.on_post(|writer: &mut XmlWriter, _: &Post| -> Result<()> {
            writer.write_element(&QualifiedName::new("urn:rogue", "x"), "y")
        });

        let mut writer = root_writer(NamespaceRegistry::with_core_namespaces());
        let result = EntityWriter::new(&mut writer, &hooks).write_post(&hello());
        assert!(matches!(
            result,
            Err(crate::error::ExportError::UndeclaredNamespace(_))
        ));
    }
}
