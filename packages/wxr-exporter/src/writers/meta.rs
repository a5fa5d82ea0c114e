//! Meta entry writer shared by posts, users, terms and comments.

use super::EntityWriter;
use crate::error::Result;
use crate::types::{MetaEntry, MetaOwner};
use crate::xml::QualifiedName;

impl EntityWriter<'_> {
    /// Write one `wxr:meta` element unless a skip filter matches.
    ///
    /// Returns whether the entry was written.
    pub fn write_meta(&mut self, meta: &MetaEntry, owner: MetaOwner) -> Result<bool> {
        if self.hooks.meta_filters().should_skip(owner, meta) {
            tracing::trace!(key = %meta.key, owner = %owner, "Skipped meta");
            return Ok(false);
        }

        self.writer.start_element(&QualifiedName::wxr("meta"))?;
        self.hooks.fire_meta(self.writer, meta, owner)?;

        self.wxr("key", &meta.key)?;
        self.wxr("value", &meta.value)?;

        self.writer.end_element()?;
        Ok(true)
    }

    pub(crate) fn write_meta_entries(&mut self, entries: &[MetaEntry], owner: MetaOwner) -> Result<()> {
        for meta in entries {
            self.write_meta(meta, owner)?;
        }
        Ok(())
    }
}
