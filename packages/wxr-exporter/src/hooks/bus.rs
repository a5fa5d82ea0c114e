//! The hook bus: ordered listeners for every injection point of an export.

use super::extension::{ExtensionMarkupDescriptor, ExtensionNamespaceRequest};
use super::listener::{
    ChannelListener, ExportStartListener, MetaListener, RecordListener, WriteObserver,
};
use super::meta_filter::{MetaFilter, MetaFilters};
use crate::config::ExportFilters;
use crate::error::Result;
use crate::types::{
    Comment, Link, MetaEntry, MetaOwner, Post, PostTerm, Term, User, WrittenRecord,
};
use crate::xml::XmlWriter;

type Listeners<R> = Vec<Box<dyn RecordListener<R>>>;

/// Registry of everything extensions contribute to an export.
///
/// Listeners fire in registration order. The bus is built before the run
/// and only read while the document is written.
pub struct ExportHooks {
    namespace_requests: Vec<ExtensionNamespaceRequest>,
    markup: Vec<ExtensionMarkupDescriptor>,
    export_start: Vec<Box<dyn ExportStartListener>>,
    channel: Vec<Box<dyn ChannelListener>>,
    user: Listeners<User>,
    term: Listeners<Term>,
    link: Listeners<Link>,
    post: Listeners<Post>,
    post_term: Listeners<PostTerm>,
    comment: Listeners<Comment>,
    meta: Vec<Box<dyn MetaListener>>,
    observers: Vec<Box<dyn WriteObserver>>,
    meta_filters: MetaFilters,
}

impl ExportHooks {
    /// Create a bus with no listeners and the default meta filters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            namespace_requests: Vec::new(),
            markup: Vec::new(),
            export_start: Vec::new(),
            channel: Vec::new(),
            user: Vec::new(),
            term: Vec::new(),
            link: Vec::new(),
            post: Vec::new(),
            post_term: Vec::new(),
            comment: Vec::new(),
            meta: Vec::new(),
            observers: Vec::new(),
            meta_filters: MetaFilters::with_defaults(),
        }
    }

    /// Ask for an extension namespace to be declared on the root element.
    pub fn request_namespace(&mut self, request: ExtensionNamespaceRequest) {
        self.namespace_requests.push(request);
    }

    /// Advertise extension markup through a processing instruction.
    pub fn advertise_markup(&mut self, descriptor: ExtensionMarkupDescriptor) {
        self.markup.push(descriptor);
    }

    pub fn on_export_start(&mut self, listener: impl ExportStartListener + 'static) {
        self.export_start.push(Box::new(listener));
    }

    pub fn on_channel(&mut self, listener: impl ChannelListener + 'static) {
        self.channel.push(Box::new(listener));
    }

    pub fn on_user(&mut self, listener: impl RecordListener<User> + 'static) {
        self.user.push(Box::new(listener));
    }

    pub fn on_term(&mut self, listener: impl RecordListener<Term> + 'static) {
        self.term.push(Box::new(listener));
    }

    pub fn on_link(&mut self, listener: impl RecordListener<Link> + 'static) {
        self.link.push(Box::new(listener));
    }

    /// Listen to posts and media items alike.
    pub fn on_post(&mut self, listener: impl RecordListener<Post> + 'static) {
        self.post.push(Box::new(listener));
    }

    /// Listen to `category` elements attached to items.
    ///
    /// These listeners may only add attributes, never child elements.
    pub fn on_post_term(&mut self, listener: impl RecordListener<PostTerm> + 'static) {
        self.post_term.push(Box::new(listener));
    }

    pub fn on_comment(&mut self, listener: impl RecordListener<Comment> + 'static) {
        self.comment.push(Box::new(listener));
    }

    pub fn on_meta(&mut self, listener: impl MetaListener + 'static) {
        self.meta.push(Box::new(listener));
    }

    pub fn on_wrote(&mut self, observer: impl WriteObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Add a predicate that keeps matching meta entries out of the export.
    pub fn skip_meta(&mut self, owner: MetaOwner, filter: impl MetaFilter + 'static) {
        self.meta_filters.register(owner, filter);
    }

    #[must_use]
    pub fn namespace_requests(&self) -> &[ExtensionNamespaceRequest] {
        &self.namespace_requests
    }

    #[must_use]
    pub fn markup_descriptors(&self) -> &[ExtensionMarkupDescriptor] {
        &self.markup
    }

    #[must_use]
    pub fn meta_filters(&self) -> &MetaFilters {
        &self.meta_filters
    }

    pub(crate) fn export_started(&self, filters: &ExportFilters) {
        for listener in &self.export_start {
            listener.export_started(filters);
        }
    }

    pub(crate) fn fire_channel(&self, writer: &mut XmlWriter, filters: &ExportFilters) -> Result<()> {
        self.channel
            .iter()
            .try_for_each(|l| l.write_channel(writer, filters))
    }

    pub(crate) fn fire_user(&self, writer: &mut XmlWriter, user: &User) -> Result<()> {
        fire(&self.user, writer, user)
    }

    pub(crate) fn fire_term(&self, writer: &mut XmlWriter, term: &Term) -> Result<()> {
        fire(&self.term, writer, term)
    }

    pub(crate) fn fire_link(&self, writer: &mut XmlWriter, link: &Link) -> Result<()> {
        fire(&self.link, writer, link)
    }

    pub(crate) fn fire_post(&self, writer: &mut XmlWriter, post: &Post) -> Result<()> {
        fire(&self.post, writer, post)
    }

    pub(crate) fn fire_post_term(&self, writer: &mut XmlWriter, term: &PostTerm) -> Result<()> {
        fire(&self.post_term, writer, term)
    }

    pub(crate) fn fire_comment(&self, writer: &mut XmlWriter, comment: &Comment) -> Result<()> {
        fire(&self.comment, writer, comment)
    }

    pub(crate) fn fire_meta(
        &self,
        writer: &mut XmlWriter,
        meta: &MetaEntry,
        owner: MetaOwner,
    ) -> Result<()> {
        self.meta
            .iter()
            .try_for_each(|l| l.write_meta(writer, meta, owner))
    }

    pub(crate) fn notify_wrote(&self, record: WrittenRecord<'_>) {
        let kind = record.kind();
        for observer in &self.observers {
            observer.wrote(kind, 1, record);
        }
    }
}

impl Default for ExportHooks {
    fn default() -> Self {
        Self::new()
    }
}

fn fire<R>(listeners: &Listeners<R>, writer: &mut XmlWriter, record: &R) -> Result<()> {
    listeners
        .iter()
        .try_for_each(|l| l.write_record(writer, record))
}
