//! `wxr:comment` writer.

use super::EntityWriter;
use crate::error::Result;
use crate::types::{Comment, MetaOwner, WrittenRecord};
use crate::xml::QualifiedName;

impl EntityWriter<'_> {
    /// Write one `wxr:comment` element nested in an `item`.
    pub fn write_comment(&mut self, comment: &Comment) -> Result<()> {
        self.writer.start_element(&QualifiedName::wxr("comment"))?;
        self.hooks.fire_comment(self.writer, comment)?;

        self.wxr("id", &comment.id.to_string())?;
        self.wxr("author", &comment.author)?;
        self.wxr("author_email", &comment.author_email)?;
        self.wxr("author_url", &comment.author_url)?;
        self.wxr("author_IP", &comment.author_ip)?;
        self.wxr("date", &comment.date)?;
        self.wxr("date_gmt", &comment.date_gmt)?;
        self.wxr("content", &comment.content)?;
        self.wxr("approved", &comment.approved)?;
        self.wxr("type", &comment.comment_type)?;
        self.wxr("parent", &comment.parent.to_string())?;
        self.wxr("user_id", &comment.user_id.to_string())?;

        self.write_meta_entries(&comment.meta, MetaOwner::Comment)?;

        self.writer.end_element()?;

        tracing::info!(id = comment.id, "Exported comment");
        self.hooks.notify_wrote(WrittenRecord::Comment(comment));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::super::test_support::{child_names, finish, root_writer};
    use super::*;
    use crate::hooks::ExportHooks;
    use crate::types::{MetaEntry, RecordKind};
    use crate::xml::NamespaceRegistry;

    #[test]
    fn test_comment_fields_meta_and_notification() {
        let comment = Comment {
            id: 12,
            author: "Bob".to_string(),
            author_ip: "127.0.0.1".to_string(),
            content: "Nice <b>post</b>".to_string(),
            approved: "1".to_string(),
            parent: 11,
            meta: vec![MetaEntry::new("akismet_result", "false")],
            ..Default::default()
        };

        let notified = Rc::new(Cell::new(0));
        let mut hooks = ExportHooks::new();
        let counter = Rc::clone(&notified);
        hooks.on_wrote(move |kind: RecordKind, count: usize, _: WrittenRecord<'_>| {
            assert_eq!(kind, RecordKind::Comment);
            counter.set(counter.get() + count);
        });

        let mut writer = root_writer(NamespaceRegistry::with_core_namespaces());
        EntityWriter::new(&mut writer, &hooks)
            .write_comment(&comment)
            .unwrap();
        let doc = finish(writer);

        assert_eq!(
            child_names(&doc, "comment"),
            vec![
                "id", "author", "author_email", "author_url", "author_IP", "date", "date_gmt",
                "content", "approved", "type", "parent", "user_id", "meta",
            ]
        );
        assert!(doc.contains("<wxr:content>Nice &lt;b&gt;post&lt;/b&gt;</wxr:content>"));
        assert!(doc.contains("<wxr:key>akismet_result</wxr:key>"));
        assert_eq!(notified.get(), 1);
    }
}
