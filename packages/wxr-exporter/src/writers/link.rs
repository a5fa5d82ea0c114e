//! `wxr:link` writer.

use super::EntityWriter;
use crate::error::Result;
use crate::types::{Link, WrittenRecord};
use crate::xml::QualifiedName;

impl EntityWriter<'_> {
    /// Write one `wxr:link` element, followed by one `wxr:category` per
    /// link category slug.
    pub fn write_link(&mut self, link: &Link) -> Result<()> {
        self.writer.start_element(&QualifiedName::wxr("link"))?;
        self.hooks.fire_link(self.writer, link)?;

        self.wxr("id", &link.id.to_string())?;
        self.wxr("url", &link.url)?;
        self.wxr("name", &link.name)?;
        self.wxr("image", &link.image)?;
        self.wxr("target", &link.target)?;
        self.wxr("description", &link.description)?;
        self.wxr("visible", &link.visible)?;
        self.wxr("owner", &link.owner.to_string())?;
        self.wxr("rating", &link.rating.to_string())?;
        self.wxr("updated", &link.updated)?;
        self.wxr("rel", &link.rel)?;
        self.wxr("notes", &link.notes)?;
        self.wxr("rss", &link.rss)?;

        for slug in &link.categories {
            self.wxr("category", slug)?;
        }

        self.writer.end_element()?;

        tracing::info!(name = %link.name, "Exported link");
        self.hooks.notify_wrote(WrittenRecord::Link(link));
        Ok(())
    }
}
