//! The export orchestrator.
//!
//! Drives one document from declaration to close through [`ExportState`],
//! pulling each collection lazily from a [`ContentProvider`]. A fault while
//! iterating a collection ends that collection only; writer and I/O errors
//! end the run.

mod report;
mod state;

pub use report::{Collection, CollectionOutcome, ExportReport};
pub use state::ExportState;

use crate::config::{
    ExportConfig, DOCUMENT_ENCODING, IMPORTER_PI_TARGET, PREAMBLE_COMMENT, RSS_VERSION,
    WXR_VERSION,
};
use crate::content::{ContentProvider, ExportCounts, RecordStream};
use crate::error::Result;
use crate::hooks::ExportHooks;
use crate::writers::EntityWriter;
use crate::xml::{ExportOutput, NamespaceRegistry, OutputTarget, QualifiedName, XmlWriter};

/// Serializes the content of a provider into a WXR document.
///
/// # Example
///
/// ```
/// use wxr_exporter::{ContentSnapshot, ExportConfig, ExportHooks, Exporter, SiteMetadata};
///
/// let snapshot = ContentSnapshot::new(SiteMetadata::new("Example", "https://example.org"));
/// let mut exporter = Exporter::new(snapshot, ExportHooks::new(), ExportConfig::default());
/// let document = exporter.export_document().unwrap();
/// assert!(document.contains("wxr:version=\"1.3\""));
/// ```
pub struct Exporter<P: ContentProvider> {
    provider: P,
    hooks: ExportHooks,
    config: ExportConfig,
    state: ExportState,
    report: ExportReport,
}

impl<P: ContentProvider> Exporter<P> {
    #[must_use]
    pub fn new(provider: P, hooks: ExportHooks, config: ExportConfig) -> Self {
        Self {
            provider,
            hooks,
            config,
            state: ExportState::Idle,
            report: ExportReport::new(),
        }
    }

    /// Write the export document to `target`.
    ///
    /// Each call is a fresh run with its own namespace registry and report.
    ///
    /// # Errors
    /// Returns [`crate::ExportError::Open`] if the target cannot be opened,
    /// or any writer error raised while the document is produced.
    pub fn export(&mut self, target: &OutputTarget) -> Result<ExportOutput> {
        self.state = ExportState::Idle;
        self.report = ExportReport::new();

        let result = self.run(target);
        self.report.final_state = self.state;

        match &result {
            Ok(_) => tracing::debug!(output = %target, "Export finished"),
            Err(e) => tracing::error!(output = %target, state = %self.state, error = %e, "Export failed"),
        }
        result
    }

    /// Export into memory and return the document.
    pub fn export_document(&mut self) -> Result<String> {
        let output = self.export(&OutputTarget::Memory)?;
        Ok(output.into_document().unwrap_or_default())
    }

    /// Current state of the last (or running) export.
    #[must_use]
    pub fn state(&self) -> ExportState {
        self.state
    }

    /// Report of the last export.
    #[must_use]
    pub fn report(&self) -> &ExportReport {
        &self.report
    }

    #[must_use]
    pub fn hooks(&self) -> &ExportHooks {
        &self.hooks
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    #[must_use]
    pub fn encoding(&self) -> &str {
        self.provider.encoding()
    }

    #[must_use]
    pub fn counts(&self) -> ExportCounts {
        self.provider.counts()
    }

    #[must_use]
    pub fn user_ids(&self) -> Vec<u64> {
        self.provider.user_ids()
    }

    #[must_use]
    pub fn term_ids(&self) -> Vec<u64> {
        self.provider.term_ids()
    }

    #[must_use]
    pub fn link_ids(&self) -> Vec<u64> {
        self.provider.link_ids()
    }

    #[must_use]
    pub fn post_ids(&self) -> Vec<u64> {
        self.provider.post_ids()
    }

    #[must_use]
    pub fn media_ids(&self) -> Vec<u64> {
        self.provider.media_ids()
    }

    fn run(&mut self, target: &OutputTarget) -> Result<ExportOutput> {
        let encoding = self.document_encoding();
        self.hooks.export_started(&self.config.filters);

        let namespaces = self.build_namespaces();
        let mut writer = XmlWriter::open(target, namespaces, &self.config)?;
        self.advance();

        writer.write_declaration(encoding)?;
        writer.write_comment(PREAMBLE_COMMENT)?;
        self.advance();

        writer.start_element(&QualifiedName::local("rss"))?;
        writer.write_attribute(&QualifiedName::local("version"), RSS_VERSION)?;
        writer.declare_namespaces()?;
        writer.write_attribute(&QualifiedName::wxr("version"), WXR_VERSION)?;
        self.advance();

        writer.start_element(&QualifiedName::local("channel"))?;
        self.advance();

        let site = self.provider.site_metadata();
        EntityWriter::new(&mut writer, &self.hooks).write_site_metadata(&site)?;
        self.advance();

        let outcome = write_collection(
            &mut writer,
            &self.hooks,
            Collection::Users,
            self.provider.users(),
            |entity, user| entity.write_user(user),
        )?;
        self.finish_collection(outcome);

        let outcome = write_collection(
            &mut writer,
            &self.hooks,
            Collection::Terms,
            self.provider.terms(),
            |entity, term| entity.write_term(term),
        )?;
        self.finish_collection(outcome);

        let outcome = write_collection(
            &mut writer,
            &self.hooks,
            Collection::Links,
            self.provider.links(),
            |entity, link| entity.write_link(link),
        )?;
        self.finish_collection(outcome);

        self.hooks.fire_channel(&mut writer, &self.config.filters)?;
        self.advance();

        let outcome = write_collection(
            &mut writer,
            &self.hooks,
            Collection::Posts,
            self.provider.posts(),
            |entity, post| entity.write_post(post),
        )?;
        self.finish_collection(outcome);

        let outcome = write_collection(
            &mut writer,
            &self.hooks,
            Collection::Media,
            self.provider.media(),
            |entity, media| entity.write_post(media),
        )?;
        self.finish_collection(outcome);

        writer.end_element()?;
        self.advance();

        writer.end_element()?;
        self.advance();

        self.write_markup_descriptors(&mut writer)?;
        self.advance();

        let output = writer.finish()?;
        self.advance();
        Ok(output)
    }

    /// The encoding to declare. Only UTF-8 is written.
    fn document_encoding(&self) -> &'static str {
        let requested = self.provider.encoding();
        if !requested.eq_ignore_ascii_case(DOCUMENT_ENCODING) {
            tracing::warn!(
                requested = %requested,
                used = DOCUMENT_ENCODING,
                "Unsupported document encoding, falling back"
            );
        }
        DOCUMENT_ENCODING
    }

    fn build_namespaces(&mut self) -> NamespaceRegistry {
        let mut namespaces = NamespaceRegistry::with_core_namespaces();
        for request in self.hooks.namespace_requests() {
            match namespaces.request_extension_prefix(&request.preferred_prefix, &request.uri) {
                Some(prefix) => tracing::debug!(
                    plugin = %request.plugin,
                    prefix = %prefix,
                    uri = %request.uri,
                    "Registered extension namespace"
                ),
                None => {
                    self.report.dropped_namespaces += 1;
                    tracing::debug!(
                        plugin = %request.plugin,
                        uri = %request.uri,
                        "Dropped invalid extension namespace"
                    );
                }
            }
        }
        namespaces
    }

    fn write_markup_descriptors(&mut self, writer: &mut XmlWriter) -> Result<()> {
        for descriptor in self.hooks.markup_descriptors() {
            match descriptor.pi_data() {
                Some(data) => writer.write_pi(IMPORTER_PI_TARGET, &data)?,
                None => {
                    self.report.skipped_descriptors += 1;
                    tracing::debug!(
                        plugin = %descriptor.plugin_name,
                        "Skipped malformed extension markup descriptor"
                    );
                }
            }
        }
        Ok(())
    }

    fn finish_collection(&mut self, outcome: CollectionOutcome) {
        self.report.outcomes.push(outcome);
        self.advance();
    }

    fn advance(&mut self) {
        if let Some(next) = self.state.next() {
            tracing::debug!(from = %self.state, to = %next, "Export state");
            self.state = next;
        }
    }
}

/// Write every record of one collection, stopping at the first fault.
fn write_collection<T>(
    writer: &mut XmlWriter,
    hooks: &ExportHooks,
    collection: Collection,
    records: RecordStream<'_, T>,
    write: impl Fn(&mut EntityWriter<'_>, &T) -> Result<()>,
) -> Result<CollectionOutcome> {
    let mut written = 0;
    for record in records {
        match record {
            Ok(record) => {
                write(&mut EntityWriter::new(&mut *writer, hooks), &record)?;
                written += 1;
            }
            Err(fault) => {
                tracing::warn!(
                    collection = %collection,
                    written,
                    error = %fault,
                    "Collection ended early"
                );
                return Ok(CollectionOutcome {
                    collection,
                    written,
                    fault: Some(fault),
                });
            }
        }
    }
    Ok(CollectionOutcome {
        collection,
        written,
        fault: None,
    })
}
