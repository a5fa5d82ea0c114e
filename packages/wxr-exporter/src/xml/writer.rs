//! Namespace-aware streaming XML writer.
//!
//! Wraps `quick_xml::Writer` with the bookkeeping an export needs: qualified
//! names resolved through a [`NamespaceRegistry`], a start tag that stays open
//! for attributes until content follows, and a stack of open elements so the
//! document can only be finished once it is balanced.

use std::fmt;
use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};
use quick_xml::Writer;

use super::name::QualifiedName;
use super::namespace::NamespaceRegistry;
use super::output::{ExportOutput, OutputTarget, Sink};
use super::utils::{comment_safe, is_pi_safe, strip_invalid_chars};
use crate::config::{validate_prefix, ExportConfig};
use crate::error::{ExportError, Result};

fn xml_error(e: impl fmt::Display) -> ExportError {
    ExportError::Xml(e.to_string())
}

/// Streaming writer for one export document.
pub struct XmlWriter {
    inner: Writer<Sink>,
    namespaces: NamespaceRegistry,
    open: Vec<String>,
    pending: Option<BytesStart<'static>>,
    namespaces_declared: bool,
}

impl XmlWriter {
    /// Open `target` and prepare to write a document using `namespaces`.
    ///
    /// # Errors
    /// Returns [`ExportError::Open`] if the target cannot be opened.
    pub fn open(
        target: &OutputTarget,
        namespaces: NamespaceRegistry,
        config: &ExportConfig,
    ) -> Result<Self> {
        let sink = Sink::open(target)?;
        let inner = if config.indent_size > 0 {
            Writer::new_with_indent(sink, config.indent_char, config.indent_size)
        } else {
            Writer::new(sink)
        };

        Ok(Self {
            inner,
            namespaces,
            open: Vec::new(),
            pending: None,
            namespaces_declared: false,
        })
    }

    /// The namespace bindings of this document.
    #[must_use]
    pub fn namespaces(&self) -> &NamespaceRegistry {
        &self.namespaces
    }

    /// Number of currently open elements.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.open.len()
    }

    /// Bytes handed to the output target so far.
    #[must_use]
    pub fn bytes_written(&self) -> u64 {
        self.inner.get_ref().bytes_written()
    }

    /// Write the `<?xml ...?>` declaration.
    ///
    /// # Errors
    /// Returns [`ExportError::DeclarationNotFirst`] once anything else has
    /// been written or an element is open.
    pub fn write_declaration(&mut self, encoding: &str) -> Result<()> {
        if self.bytes_written() > 0 || self.pending.is_some() || !self.open.is_empty() {
            return Err(ExportError::DeclarationNotFirst);
        }
        self.inner
            .write_event(Event::Decl(BytesDecl::new("1.0", Some(encoding), None)))
            .map_err(xml_error)
    }

    /// Write a comment. Sequences that would end the comment early are broken up.
    pub fn write_comment(&mut self, text: &str) -> Result<()> {
        self.flush_start()?;
        self.inner
            .write_event(Event::Comment(BytesText::from_escaped(comment_safe(text))))
            .map_err(xml_error)
    }

    /// Write a processing instruction after validating its target and data.
    ///
    /// The target follows the same rules as a namespace prefix, so names
    /// starting with `xml` are refused.
    pub fn write_pi(&mut self, target: &str, data: &str) -> Result<()> {
        if validate_prefix(target).is_err() {
            return Err(ExportError::InvalidPiTarget(target.to_string()));
        }
        if !is_pi_safe(data) {
            return Err(ExportError::Xml(format!(
                "processing instruction '{target}' has data that would end it early"
            )));
        }
        self.flush_start()?;
        let content = if data.is_empty() {
            target.to_string()
        } else {
            format!("{target} {data}")
        };
        self.inner
            .write_event(Event::PI(BytesPI::new(content)))
            .map_err(xml_error)
    }

    /// Open an element. Its start tag accepts attributes until content is written.
    pub fn start_element(&mut self, name: &QualifiedName) -> Result<()> {
        let rendered = self.render(name)?;
        self.flush_start()?;
        self.pending = Some(BytesStart::new(rendered.clone()));
        self.open.push(rendered);
        Ok(())
    }

    /// Add an attribute to the element whose start tag is still open.
    pub fn write_attribute(&mut self, name: &QualifiedName, value: &str) -> Result<()> {
        let rendered = self.render(name)?;
        let Some(start) = self.pending.as_mut() else {
            return Err(ExportError::AttributeAfterContent { name: rendered });
        };
        start.push_attribute((rendered.as_str(), strip_invalid_chars(value).as_ref()));
        Ok(())
    }

    /// Declare every registered namespace on the root start tag.
    ///
    /// Names in a namespace other than the default one can only be written
    /// after this call.
    pub fn declare_namespaces(&mut self) -> Result<()> {
        let Some(start) = self.pending.as_mut() else {
            return Err(ExportError::NamespaceDeclarationOutsideRoot);
        };
        if self.open.len() != 1 || self.namespaces_declared {
            return Err(ExportError::NamespaceDeclarationOutsideRoot);
        }

        for binding in self.namespaces.bindings() {
            let attr = format!("xmlns:{}", binding.prefix);
            start.push_attribute((attr.as_str(), binding.uri.as_str()));
        }
        self.namespaces_declared = true;
        Ok(())
    }

    /// Write escaped character data inside the current element.
    ///
    /// Empty text writes nothing, so an element holding only empty text is
    /// self-closed.
    pub fn write_text(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.flush_start()?;
        self.inner
            .write_event(Event::Text(BytesText::new(&strip_invalid_chars(text))))
            .map_err(xml_error)
    }

    /// Close the innermost open element.
    pub fn end_element(&mut self) -> Result<()> {
        let name = self.open.pop().ok_or(ExportError::UnbalancedEnd)?;
        let written = match self.pending.take() {
            Some(start) => self.inner.write_event(Event::Empty(start)),
            None => self.inner.write_event(Event::End(BytesEnd::new(name))),
        };
        written.map_err(xml_error)
    }

    /// Write `<name>text</name>`.
    pub fn write_element(&mut self, name: &QualifiedName, text: &str) -> Result<()> {
        self.write_element_with_attributes(name, text, &[])
    }

    /// Write `<name attrs...>text</name>`.
    pub fn write_element_with_attributes(
        &mut self,
        name: &QualifiedName,
        text: &str,
        attributes: &[(QualifiedName, &str)],
    ) -> Result<()> {
        self.start_element(name)?;
        for (attr, value) in attributes {
            self.write_attribute(attr, value)?;
        }
        self.write_text(text)?;
        self.end_element()
    }

    /// Flush the output and return what the target yields.
    ///
    /// # Errors
    /// Returns [`ExportError::UnclosedElements`] if any element is still open.
    pub fn finish(mut self) -> Result<ExportOutput> {
        if !self.open.is_empty() {
            return Err(ExportError::UnclosedElements(self.open.len()));
        }
        self.inner.get_mut().write_all(b"\n")?;
        self.inner.into_inner().finish()
    }

    fn flush_start(&mut self) -> Result<()> {
        if let Some(start) = self.pending.take() {
            self.inner
                .write_event(Event::Start(start))
                .map_err(xml_error)?;
        }
        Ok(())
    }

    fn render(&self, name: &QualifiedName) -> Result<String> {
        let Some(uri) = name.namespace_uri() else {
            return Ok(name.local_name().to_string());
        };
        if !self.namespaces_declared {
            return Err(ExportError::UndeclaredNamespace(uri.to_string()));
        }
        self.namespaces
            .prefix_for(uri)
            .map(|prefix| format!("{prefix}:{}", name.local_name()))
            .ok_or_else(|| ExportError::UndeclaredNamespace(uri.to_string()))
    }
}
