//! Core data types for the exporter.
//!
//! Records are immutable snapshots assembled by a content provider. The
//! writers only read them; nothing here is ever mutated or persisted by the
//! export itself.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::{now_rfc2822, DEFAULT_GENERATOR};

/// Post type that marks a post record as a media attachment.
pub const ATTACHMENT_POST_TYPE: &str = "attachment";

/// Kinds of records the exporter writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    User,
    Term,
    Link,
    Post,
    Media,
    Comment,
}

impl RecordKind {
    /// Get the string value used in logs and notifications.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Term => "term",
            Self::Link => "link",
            Self::Post => "post",
            Self::Media => "media",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The kind of record a meta entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetaOwner {
    Post,
    User,
    Term,
    Comment,
}

impl MetaOwner {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Post => "post",
            Self::User => "user",
            Self::Term => "term",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for MetaOwner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Channel-level metadata about the exported site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteMetadata {
    /// Site title.
    pub name: String,

    /// Home URL.
    pub url: String,

    #[serde(default)]
    pub description: String,

    /// RFC 2822 date of the export.
    #[serde(default = "now_rfc2822")]
    pub pub_date: String,

    /// Language tag, e.g. `en-US`.
    #[serde(default)]
    pub language: String,

    #[serde(default = "default_generator")]
    pub generator: String,

    /// Version of the software that produced the content.
    #[serde(default)]
    pub generator_version: String,

    /// Network URL; present only for multi-site installs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,
}

fn default_generator() -> String {
    DEFAULT_GENERATOR.to_string()
}

impl SiteMetadata {
    /// Metadata for a single site published now, with the default generator.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            description: String::new(),
            pub_date: now_rfc2822(),
            language: String::new(),
            generator: default_generator(),
            generator_version: String::new(),
            site_url: None,
        }
    }

    /// Whether the site is part of a multi-site network.
    #[must_use]
    pub fn is_multisite(&self) -> bool {
        self.site_url.is_some()
    }
}

/// A single key/value meta entry attached to a post, user, term or comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaEntry {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl MetaEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An exported user (author).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: u64,
    pub login: String,
    pub email: String,
    pub display_name: String,
    pub first_name: String,
    pub last_name: String,
    pub meta: Vec<MetaEntry>,
}

/// A taxonomy term (category, tag, or custom taxonomy).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Term {
    pub id: u64,
    pub name: String,
    pub slug: String,
    pub taxonomy: String,
    /// Parent term id; zero for top-level terms.
    pub parent: u64,
    pub description: String,
    pub meta: Vec<MetaEntry>,
}

/// A blogroll link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub id: u64,
    pub url: String,
    pub name: String,
    pub image: String,
    pub target: String,
    pub description: String,
    /// `Y` or `N`.
    pub visible: String,
    pub owner: u64,
    pub rating: i64,
    pub updated: String,
    pub rel: String,
    pub notes: String,
    pub rss: String,
    /// Slugs of the link categories.
    pub categories: Vec<String>,
}

/// A term attached to a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostTerm {
    pub taxonomy: String,
    pub slug: String,
    pub name: String,
}

/// A comment on a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    pub id: u64,
    pub author: String,
    pub author_email: String,
    pub author_url: String,
    pub author_ip: String,
    pub date: String,
    pub date_gmt: String,
    pub content: String,
    /// `1`, `0`, `spam` or `trash`.
    pub approved: String,
    pub comment_type: String,
    pub parent: u64,
    pub user_id: u64,
    pub meta: Vec<MetaEntry>,
}

/// A post, page, custom post type entry or media attachment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub permalink: String,
    pub guid: String,
    pub excerpt: String,
    /// Login of the author, written as `dc:creator`.
    pub author: String,
    pub content: String,
    pub date: String,
    pub date_gmt: String,
    pub comment_status: String,
    pub ping_status: String,
    pub name: String,
    pub status: String,
    pub parent: u64,
    pub menu_order: i64,
    pub post_type: String,
    pub password: String,
    pub is_sticky: bool,
    /// URL of the attached file; only meaningful for attachments.
    pub attachment_url: Option<String>,
    pub terms: Vec<PostTerm>,
    pub meta: Vec<MetaEntry>,
    pub comments: Vec<Comment>,
}

impl Post {
    /// Whether this record is a media attachment.
    #[must_use]
    pub fn is_attachment(&self) -> bool {
        self.post_type == ATTACHMENT_POST_TYPE
    }

    /// The record kind used for logs and notifications.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        if self.is_attachment() {
            RecordKind::Media
        } else {
            RecordKind::Post
        }
    }
}

/// A borrowed view of a record that was just written.
#[derive(Debug, Clone, Copy)]
pub enum WrittenRecord<'a> {
    User(&'a User),
    Term(&'a Term),
    Link(&'a Link),
    Post(&'a Post),
    Comment(&'a Comment),
}

impl WrittenRecord<'_> {
    /// The kind of the underlying record.
    #[must_use]
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::User(_) => RecordKind::User,
            Self::Term(_) => RecordKind::Term,
            Self::Link(_) => RecordKind::Link,
            Self::Post(post) => post.kind(),
            Self::Comment(_) => RecordKind::Comment,
        }
    }
}
