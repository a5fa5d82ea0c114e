//! `wxr:user` writer.

use super::EntityWriter;
use crate::error::Result;
use crate::types::{MetaOwner, User, WrittenRecord};
use crate::xml::QualifiedName;

impl EntityWriter<'_> {
    /// Write one `wxr:user` element.
    pub fn write_user(&mut self, user: &User) -> Result<()> {
        self.writer.start_element(&QualifiedName::wxr("user"))?;
        self.hooks.fire_user(self.writer, user)?;

        self.wxr("id", &user.id.to_string())?;
        self.wxr("login", &user.login)?;
        self.wxr("email", &user.email)?;
        self.wxr("display_name", &user.display_name)?;
        self.wxr("first_name", &user.first_name)?;
        self.wxr("last_name", &user.last_name)?;

        self.write_meta_entries(&user.meta, MetaOwner::User)?;

        self.writer.end_element()?;

        tracing::info!(login = %user.login, "Exported user");
        self.hooks.notify_wrote(WrittenRecord::User(user));
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
    use crate::xml::{NamespaceRegistry, XmlWriter};

    fn alice() -> User {
        User {
            id: 1,
            login: "alice".to_string(),
            email: "alice@example.org".to_string(),
            display_name: "Alice".to_string(),
            first_name: "Alice".to_string(),
            last_name: "Liddell".to_string(),
            meta: vec![
                MetaEntry::new("first_name", "Alice"),
                MetaEntry::new("nickname", "al"),
            ],
        }
    }

    #[test]
    fn test_user_field_order_and_name_meta_suppressed() {
        let hooks = ExportHooks::new();
        let mut writer = root_writer(NamespaceRegistry::with_core_namespaces());
        EntityWriter::new(&mut writer, &hooks)
            .write_user(&alice())
            .unwrap();

        let doc = finish(writer);
        assert_eq!(
            child_names(&doc, "user"),
            vec!["id", "login", "email", "display_name", "first_name", "last_name", "meta"]
        );
        assert!(doc.contains("<wxr:key>nickname</wxr:key>"));
        assert!(!doc.contains("<wxr:key>first_name</wxr:key>"));
    }

    #[test]
    fn test_user_listener_adds_attribute_before_fields() {
        let mut namespaces = NamespaceRegistry::with_core_namespaces();
        namespaces.request_extension_prefix("acme", "urn:acme");

        let mut hooks = ExportHooks::new();
        hooks.on_user(|writer: &mut XmlWriter, user: &User| -> Result<()> {
            writer.write_attribute(&QualifiedName::new("urn:acme", "role"), "editor")?;
            writer.write_element(&QualifiedName::new("urn:acme", "karma"), &user.id.to_string())
        });

        let mut writer = root_writer(namespaces);
        EntityWriter::new(&mut writer, &hooks)
            .write_user(&alice())
            .unwrap();

        let doc = finish(writer);
        assert!(doc.contains("<wxr:user acme:role=\"editor\"><acme:karma>1</acme:karma><wxr:id>1</wxr:id>"));
    }
}
