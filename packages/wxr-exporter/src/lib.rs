//! WXR Exporter - Serialize a site's content into a WordPress eXtended RSS
//! (WXR 1.3) document.
//!
//! The exporter streams users, terms, links, posts and media from a
//! [`ContentProvider`] into a namespaced RSS document, one record at a time.
//! Extensions hook into every record through [`ExportHooks`] and may add
//! markup in their own namespaces without breaking well-formedness.
//!
//! # Example
//!
//! ```
//! use wxr_exporter::{ContentSnapshot, ExportConfig, ExportHooks, Exporter, SiteMetadata, User};
//!
//! let mut snapshot = ContentSnapshot::new(SiteMetadata::new("Example", "https://example.org"));
//! snapshot.users.push(User {
//!     id: 1,
//!     login: "alice".to_string(),
//!     ..Default::default()
//! });
//!
//! let mut exporter = Exporter::new(snapshot, ExportHooks::new(), ExportConfig::default());
//! let document = exporter.export_document().unwrap();
//! assert!(document.contains("<wxr:login>alice</wxr:login>"));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Format constants, prefix validation and run settings
//! - [`error`]: Error types and Result alias
//! - [`types`]: Record types handed to the writers
//! - [`content`]: Content providers and the serde-loadable snapshot
//! - [`xml`]: Qualified names, namespace registry and the streaming writer
//! - [`hooks`]: Extension hook bus and meta filters
//! - [`writers`]: One entity writer per record kind
//! - [`exporter`]: The orchestrating state machine
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod exporter;
pub mod hooks;
pub mod types;
pub mod writers;
pub mod xml;

// Re-export commonly used items
pub use config::{ExportConfig, ExportFilters};
pub use content::{ContentProvider, ContentSnapshot, ExportCounts, RecordStream};
pub use error::{ExportError, IterationFault, Result};
pub use exporter::{Collection, CollectionOutcome, ExportReport, ExportState, Exporter};
pub use hooks::{ExportHooks, ExtensionMarkupDescriptor, ExtensionNamespaceRequest};
pub use types::{
    Comment, Link, MetaEntry, MetaOwner, Post, PostTerm, RecordKind, SiteMetadata, Term, User,
    WrittenRecord,
};
pub use writers::EntityWriter;
pub use xml::{ExportOutput, NamespaceRegistry, OutputTarget, QualifiedName, XmlWriter};
