//! Entity writers: one per record kind.
//!
//! Every writer follows the same sequence: open the element, fire the
//! record's listeners (so extensions can still add attributes), write the
//! fixed fields in wire order, write nested meta and children, close the
//! element, log, and notify observers. Field order is part of the format and
//! must not change.

mod channel;
mod comment;
mod link;
mod meta;
mod post;
mod term;
mod user;

use crate::error::Result;
use crate::hooks::ExportHooks;
use crate::xml::{QualifiedName, XmlWriter};

/// Writes records through an [`XmlWriter`], firing hooks along the way.
pub struct EntityWriter<'a> {
    writer: &'a mut XmlWriter,
    hooks: &'a ExportHooks,
}

impl<'a> EntityWriter<'a> {
    #[must_use]
    pub fn new(writer: &'a mut XmlWriter, hooks: &'a ExportHooks) -> Self {
        Self { writer, hooks }
    }

    /// Write `<wxr:{local}>text</wxr:{local}>`.
    fn wxr(&mut self, local: &str, text: &str) -> Result<()> {
        self.writer.write_element(&QualifiedName::wxr(local), text)
    }

    /// Write an unprefixed RSS element.
    fn rss(&mut self, local: &str, text: &str) -> Result<()> {
        self.writer.write_element(&QualifiedName::local(local), text)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::config::ExportConfig;
    use crate::xml::{NamespaceRegistry, OutputTarget, QualifiedName, XmlWriter};

    /// A compact in-memory writer with the root already open and declared.
    pub fn root_writer(namespaces: NamespaceRegistry) -> XmlWriter {
        let mut writer = XmlWriter::open(
            &OutputTarget::Memory,
            namespaces,
            &ExportConfig::default().compact(),
        )
        .unwrap();
        writer.start_element(&QualifiedName::local("rss")).unwrap();
        writer.declare_namespaces().unwrap();
        writer
    }

    /// Close the root and return the document.
    pub fn finish(mut writer: XmlWriter) -> String {
        writer.end_element().unwrap();
        writer.finish().unwrap().into_document().unwrap()
    }

    /// Local names of the element children of the first element named `tag`.
    pub fn child_names(doc: &str, tag: &str) -> Vec<String> {
        let parsed = roxmltree::Document::parse(doc).unwrap();
        let node = parsed
            .descendants()
            .find(|n| n.is_element() && n.tag_name().name() == tag)
            .unwrap();
        node.children()
            .filter(|n| n.is_element())
            .map(|n| n.tag_name().name().to_string())
            .collect()
    }
}
