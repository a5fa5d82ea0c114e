//! Listener traits, one per injection point.
//!
//! Listeners that receive the writer may add markup, but only in their own
//! previously declared namespace: attributes on the element that was just
//! opened and/or complete child elements. They must not write into the
//! default or WXR namespace and must not close an element they did not open.
//! The writer refuses undeclared namespaces; the rest of the contract is the
//! listener's responsibility.

use crate::config::ExportFilters;
use crate::error::Result;
use crate::types::{MetaEntry, MetaOwner, RecordKind, WrittenRecord};
use crate::xml::XmlWriter;

/// Notified once before the output target is opened.
pub trait ExportStartListener {
    fn export_started(&self, filters: &ExportFilters);
}

impl<F> ExportStartListener for F
where
    F: Fn(&ExportFilters),
{
    fn export_started(&self, filters: &ExportFilters) {
        self(filters)
    }
}

/// Invoked once inside `channel`, after users, terms and links and before
/// posts and media.
pub trait ChannelListener {
    fn write_channel(&self, writer: &mut XmlWriter, filters: &ExportFilters) -> Result<()>;
}

impl<F> ChannelListener for F
where
    F: Fn(&mut XmlWriter, &ExportFilters) -> Result<()>,
{
    fn write_channel(&self, writer: &mut XmlWriter, filters: &ExportFilters) -> Result<()> {
        self(writer, filters)
    }
}

/// Invoked right after the element for a record of type `R` is opened,
/// before any of its fields are written.
pub trait RecordListener<R> {
    fn write_record(&self, writer: &mut XmlWriter, record: &R) -> Result<()>;
}

impl<R, F> RecordListener<R> for F
where
    F: Fn(&mut XmlWriter, &R) -> Result<()>,
{
    fn write_record(&self, writer: &mut XmlWriter, record: &R) -> Result<()> {
        self(writer, record)
    }
}

/// Invoked right after a `wxr:meta` element is opened.
pub trait MetaListener {
    fn write_meta(&self, writer: &mut XmlWriter, meta: &MetaEntry, owner: MetaOwner) -> Result<()>;
}

impl<F> MetaListener for F
where
    F: Fn(&mut XmlWriter, &MetaEntry, MetaOwner) -> Result<()>,
{
    fn write_meta(&self, writer: &mut XmlWriter, meta: &MetaEntry, owner: MetaOwner) -> Result<()> {
        self(writer, meta, owner)
    }
}

/// Notified after each user, term, link, post, media item or comment is
/// written, for external counters and metrics.
pub trait WriteObserver {
    fn wrote(&self, kind: RecordKind, count: usize, record: WrittenRecord<'_>);
}

impl<F> WriteObserver for F
where
    F: Fn(RecordKind, usize, WrittenRecord<'_>),
{
    fn wrote(&self, kind: RecordKind, count: usize, record: WrittenRecord<'_>) {
        self(kind, count, record)
    }
}
