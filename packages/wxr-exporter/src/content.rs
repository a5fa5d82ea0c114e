//! Content providers: where the records to export come from.
//!
//! A provider hands out each collection as a lazy, forward-only stream so the
//! exporter never holds more than one record (plus its nested meta and
//! comments) at a time.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::{ExportFilters, DOCUMENT_ENCODING};
use crate::error::{IterationFault, Result};
use crate::types::{Link, Post, SiteMetadata, Term, User};

/// A lazily evaluated collection of records.
///
/// A yielded `Err` ends the collection: the exporter stops pulling from the
/// stream after the first fault.
pub type RecordStream<'a, T> = Box<dyn Iterator<Item = std::result::Result<T, IterationFault>> + 'a>;

/// Number of records per collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportCounts {
    pub users: usize,
    pub terms: usize,
    pub links: usize,
    pub posts: usize,
    pub media: usize,
    pub comments: usize,
}

/// Source of everything an export writes.
pub trait ContentProvider {
    /// Encoding of the text the records carry.
    fn encoding(&self) -> &str {
        DOCUMENT_ENCODING
    }

    /// Channel-level metadata.
    fn site_metadata(&self) -> SiteMetadata;

    fn users(&self) -> RecordStream<'_, User>;

    fn terms(&self) -> RecordStream<'_, Term>;

    fn links(&self) -> RecordStream<'_, Link>;

    /// Posts of every type except attachments.
    fn posts(&self) -> RecordStream<'_, Post>;

    /// Attachment posts.
    fn media(&self) -> RecordStream<'_, Post>;

    /// Aggregate counts per collection.
    fn counts(&self) -> ExportCounts;

    fn user_ids(&self) -> Vec<u64>;

    fn term_ids(&self) -> Vec<u64>;

    fn link_ids(&self) -> Vec<u64>;

    fn post_ids(&self) -> Vec<u64>;

    fn media_ids(&self) -> Vec<u64>;
}

/// An in-memory snapshot of a site's content.
///
/// Snapshots can be loaded from YAML or JSON and serve as a provider for
/// the CLI and for tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSnapshot {
    pub site: SiteMetadata,

    #[serde(default = "default_encoding")]
    pub encoding: String,

    /// Filters the snapshot was selected with.
    #[serde(default)]
    pub filters: ExportFilters,

    #[serde(default)]
    pub users: Vec<User>,

    #[serde(default)]
    pub terms: Vec<Term>,

    #[serde(default)]
    pub links: Vec<Link>,

    #[serde(default)]
    pub posts: Vec<Post>,

    #[serde(default)]
    pub media: Vec<Post>,
}

fn default_encoding() -> String {
    DOCUMENT_ENCODING.to_string()
}

impl ContentSnapshot {
    /// Create an empty snapshot for the given site.
    #[must_use]
    pub fn new(site: SiteMetadata) -> Self {
        Self {
            site,
            encoding: default_encoding(),
            filters: ExportFilters::default(),
            users: Vec::new(),
            terms: Vec::new(),
            links: Vec::new(),
            posts: Vec::new(),
            media: Vec::new(),
        }
    }

    /// Parse a YAML snapshot.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot, choosing JSON for `.json` files and YAML otherwise.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json(&text)
        } else {
            Self::from_yaml(&text)
        }
    }
}

fn stream<'a, T: Clone + 'a>(records: &'a [T]) -> RecordStream<'a, T> {
    Box::new(records.iter().cloned().map(Ok))
}

impl ContentProvider for ContentSnapshot {
    fn encoding(&self) -> &str {
        &self.encoding
    }

    fn site_metadata(&self) -> SiteMetadata {
        self.site.clone()
    }

    fn users(&self) -> RecordStream<'_, User> {
        stream(&self.users)
    }

    fn terms(&self) -> RecordStream<'_, Term> {
        stream(&self.terms)
    }

    fn links(&self) -> RecordStream<'_, Link> {
        stream(&self.links)
    }

    fn posts(&self) -> RecordStream<'_, Post> {
        stream(&self.posts)
    }

    fn media(&self) -> RecordStream<'_, Post> {
        stream(&self.media)
    }

    fn counts(&self) -> ExportCounts {
        ExportCounts {
            users: self.users.len(),
            terms: self.terms.len(),
            links: self.links.len(),
            posts: self.posts.len(),
            media: self.media.len(),
            comments: self
                .posts
                .iter()
                .chain(&self.media)
                .map(|p| p.comments.len())
                .sum(),
        }
    }

    fn user_ids(&self) -> Vec<u64> {
        self.users.iter().map(|u| u.id).collect()
    }

    fn term_ids(&self) -> Vec<u64> {
        self.terms.iter().map(|t| t.id).collect()
    }

    fn link_ids(&self) -> Vec<u64> {
        self.links.iter().map(|l| l.id).collect()
    }

    fn post_ids(&self) -> Vec<u64> {
        self.posts.iter().map(|p| p.id).collect()
    }

    fn media_ids(&self) -> Vec<u64> {
        self.media.iter().map(|m| m.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Comment;

    const SNAPSHOT: &str = r#"
site:
  name: Example
  url: https://example.org
users:
  - id: 1
    login: alice
  - id: 2
    login: bob
posts:
  - id: 10
    title: Hello
    post_type: post
    comments:
      - id: 100
        author: carol
"#;

    #[test]
    fn test_snapshot_from_yaml() {
        let snapshot = ContentSnapshot::from_yaml(SNAPSHOT).unwrap();
        assert_eq!(snapshot.encoding, "UTF-8");
        assert_eq!(snapshot.user_ids(), vec![1, 2]);
        assert_eq!(snapshot.post_ids(), vec![10]);
        assert!(snapshot.media_ids().is_empty());
    }

    #[test]
    fn test_counts_include_comments() {
        let mut snapshot = ContentSnapshot::from_yaml(SNAPSHOT).unwrap();
        snapshot.media.push(Post {
            id: 11,
            post_type: "attachment".to_string(),
            comments: vec![Comment::default()],
            ..Default::default()
        });

        let counts = snapshot.counts();
        assert_eq!(counts.users, 2);
        assert_eq!(counts.posts, 1);
        assert_eq!(counts.media, 1);
        assert_eq!(counts.comments, 2);
    }

    #[test]
    fn test_streams_yield_in_order() {
        let snapshot = ContentSnapshot::from_yaml(SNAPSHOT).unwrap();
        let logins: Vec<String> = snapshot
            .users()
            .map(|u| u.unwrap().login)
            .collect();
        assert_eq!(logins, vec!["alice", "bob"]);
    }

    #[test]
    fn test_from_path_picks_format_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let json_path = dir.path().join("site.json");
        fs::write(
            &json_path,
            r#"{"site": {"name": "J", "url": "https://j.example"}, "users": [{"id": 5}]}"#,
        )
        .unwrap();
        let snapshot = ContentSnapshot::from_path(&json_path).unwrap();
        assert_eq!(snapshot.site.name, "J");
        assert_eq!(snapshot.user_ids(), vec![5]);

        let yaml_path = dir.path().join("site.yaml");
        fs::write(&yaml_path, SNAPSHOT).unwrap();
        assert_eq!(ContentSnapshot::from_path(&yaml_path).unwrap().users.len(), 2);
    }
}
