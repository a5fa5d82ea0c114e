//! Extension hook bus.
//!
//! Extensions contribute to an export by registering listeners for fixed
//! injection points, declaring their own namespaces, advertising the markup
//! they add and filtering meta entries. Every listener receives the active
//! writer and the record being written.

mod bus;
mod extension;
mod listener;
mod meta_filter;

pub use bus::ExportHooks;
pub use extension::{ExtensionMarkupDescriptor, ExtensionNamespaceRequest};
pub use listener::{
    ChannelListener, ExportStartListener, MetaListener, RecordListener, WriteObserver,
};
pub use meta_filter::{MetaFilter, MetaFilters, SkipKeys, EDIT_LOCK_META_KEY, USER_NAME_META_KEYS};
