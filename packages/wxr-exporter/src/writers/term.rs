//! `wxr:term` writer.

use super::EntityWriter;
use crate::error::Result;
use crate::types::{MetaOwner, Term, WrittenRecord};
use crate::xml::QualifiedName;

impl EntityWriter<'_> {
    /// Write one `wxr:term` element.
    ///
    /// `parent` is omitted for top-level terms and `description` when empty.
    pub fn write_term(&mut self, term: &Term) -> Result<()> {
        self.writer.start_element(&QualifiedName::wxr("term"))?;
        self.hooks.fire_term(self.writer, term)?;

        self.wxr("id", &term.id.to_string())?;
        self.wxr("name", &term.name)?;
        self.wxr("slug", &term.slug)?;
        self.wxr("taxonomy", &term.taxonomy)?;

        if term.parent != 0 {
            self.wxr("parent", &term.parent.to_string())?;
        }
        if !term.description.is_empty() {
            self.wxr("description", &term.description)?;
        }

        self.write_meta_entries(&term.meta, MetaOwner::Term)?;

        self.writer.end_element()?;

        tracing::info!(name = %term.name, taxonomy = %term.taxonomy, "Exported term");
        self.hooks.notify_wrote(WrittenRecord::Term(term));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::super::test_support::{child_names, finish, root_writer};
    use super::*;
    use crate::hooks::ExportHooks;
    use crate::types::MetaEntry;
    use crate::xml::NamespaceRegistry;

    fn write(term: &Term) -> String {
        let hooks = ExportHooks::new();
        let mut writer = root_writer(NamespaceRegistry::with_core_namespaces());
        EntityWriter::new(&mut writer, &hooks)
            .write_term(term)
            .unwrap();
        finish(writer)
    }

    #[test]
    fn test_top_level_term_omits_conditional_fields() {
        let term = Term {
            id: 3,
            name: "News".to_string(),
            slug: "news".to_string(),
            taxonomy: "category".to_string(),
            ..Default::default()
        };
        assert_eq!(
            child_names(&write(&term), "term"),
            vec!["id", "name", "slug", "taxonomy"]
        );
    }

    #[test]
    fn test_child_term_with_description_and_meta() {
        let term = Term {
            id: 4,
            name: "Local".to_string(),
            slug: "local".to_string(),
            taxonomy: "category".to_string(),
            parent: 3,
            description: "Local news".to_string(),
            meta: vec![MetaEntry::new("color", "blue")],
        };
        let doc = write(&term);
        assert_eq!(
            child_names(&doc, "term"),
            vec!["id", "name", "slug", "taxonomy", "parent", "description", "meta"]
        );
        assert!(doc.contains("<wxr:parent>3</wxr:parent>"));
    }
}
