//! Configuration constants and validation functions for the exporter.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::error::{ExportError, Result};

/// Version of the WXR vocabulary written to `wxr:version`.
pub const WXR_VERSION: &str = "1.3";

/// Version of the RSS base vocabulary written to `rss/@version`.
pub const RSS_VERSION: &str = "2.0";

/// Namespace URI of the WXR vocabulary.
pub const WXR_NAMESPACE_URI: &str = "http://wordpress.org/export/";

/// Namespace URI of Dublin Core (used for `dc:creator`).
pub const DUBLIN_CORE_NAMESPACE_URI: &str = "http://purl.org/dc/elements/1.1/";

/// Namespace URI of the RSS content module (used for `content:encoded`).
pub const RSS_CONTENT_NAMESPACE_URI: &str = "http://purl.org/rss/1.0/modules/content/";

/// Namespace URI bound to the `xml` prefix by XML itself.
pub const XML_NAMESPACE_URI: &str = "http://www.w3.org/XML/1998/namespace";

/// Namespace URI of `xmlns` attributes; it may never be declared.
pub const XMLNS_NAMESPACE_URI: &str = "http://www.w3.org/2000/xmlns/";

/// Prefix bound to [`WXR_NAMESPACE_URI`].
pub const WXR_PREFIX: &str = "wxr";

/// Prefix bound to [`DUBLIN_CORE_NAMESPACE_URI`].
pub const DUBLIN_CORE_PREFIX: &str = "dc";

/// Prefix bound to [`RSS_CONTENT_NAMESPACE_URI`].
pub const RSS_CONTENT_PREFIX: &str = "content";

/// Prefixes that are bound before any extension may register.
pub const RESERVED_PREFIXES: [&str; 3] = [WXR_PREFIX, RSS_CONTENT_PREFIX, DUBLIN_CORE_PREFIX];

/// Prefix used when an extension asks for an empty or invalid prefix.
pub const FALLBACK_PREFIX: &str = "ns";

/// Target of the processing instructions advertising extension markup.
pub const IMPORTER_PI_TARGET: &str = "WXR_Importer";

/// The only document encoding the writer produces.
pub const DOCUMENT_ENCODING: &str = "UTF-8";

/// Generator string used when a snapshot does not name one.
pub const DEFAULT_GENERATOR: &str = concat!("wxr-exporter/", env!("CARGO_PKG_VERSION"));

/// Informational comment written right after the XML declaration.
pub const PREAMBLE_COMMENT: &str = "
\tThis is a WordPress eXtended RSS file generated as an export of your site.
\tIt contains information about your site's posts, pages, comments, categories, and other content.
\tYou may use this file to transfer that content from one site to another.
\tThis file is not intended to serve as a complete backup of your site.
\tTo import this information into a WordPress site follow these steps:
\t1. Log in to that site as an administrator.
\t2. Go to Tools: Import in the WordPress admin panel.
\t3. Install the \"WordPress\" importer from the list.
\t4. Activate & Run Importer.
\t5. Upload this file using the form provided on that page.
\t6. You will first be asked to map the authors in this export file to users
\t   on the site. For each author, you may choose to map to an
\t   existing user on the site or to create a new user.
\t7. WordPress will then import each of the posts, pages, comments, categories, etc.
\t   contained in this file into your site.
";

/// Namespace prefix pattern: an XML NCName restricted to ASCII.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PREFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9._-]*$").expect("valid regex"));

/// Validate a namespace prefix.
///
/// Prefixes must be NCNames and must not start with `xml` in any case,
/// which XML reserves for itself.
///
/// # Examples
/// ```
/// use wxr_exporter::config::validate_prefix;
///
/// assert!(validate_prefix("acme").is_ok());
/// assert!(validate_prefix("acme-seo_2").is_ok());
/// assert!(validate_prefix("").is_err());
/// assert!(validate_prefix("1abc").is_err());
/// assert!(validate_prefix("xmlns").is_err());
/// ```
pub fn validate_prefix(prefix: &str) -> Result<()> {
    let reserved_by_xml = prefix
        .get(..3)
        .is_some_and(|head| head.eq_ignore_ascii_case("xml"));

    if PREFIX_PATTERN.is_match(prefix) && !reserved_by_xml {
        Ok(())
    } else {
        Err(ExportError::InvalidPrefix(prefix.to_string()))
    }
}

/// Current time formatted for the channel `pubDate` element.
pub fn now_rfc2822() -> String {
    chrono::Utc::now().to_rfc2822()
}

/// The selection criteria an export run was started with.
///
/// The exporter never interprets these; they are handed to export-start and
/// channel listeners so extensions can tailor their markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportFilters {
    /// Content selector, e.g. `all`, `post`, `page`.
    pub content: Option<String>,
    /// Restrict to posts by this author id.
    pub author: Option<u64>,
    /// Restrict to posts in this category slug.
    pub category: Option<String>,
    /// Earliest post date (inclusive), `YYYY-MM-DD`.
    pub start_date: Option<String>,
    /// Latest post date (inclusive), `YYYY-MM-DD`.
    pub end_date: Option<String>,
    /// Restrict to posts with this status.
    pub status: Option<String>,
}

/// Runtime settings for one export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Byte repeated for each indentation level.
    pub indent_char: u8,
    /// Number of `indent_char` per level; zero disables indentation.
    pub indent_size: usize,
    /// Selection criteria, passed through to listeners.
    pub filters: ExportFilters,
}

impl ExportConfig {
    /// Use the given filters.
    #[must_use]
    pub fn with_filters(mut self, filters: ExportFilters) -> Self {
        self.filters = filters;
        self
    }

    /// Indent with `size` spaces per level instead of tabs.
    #[must_use]
    pub fn with_space_indent(mut self, size: usize) -> Self {
        self.indent_char = b' ';
        self.indent_size = size;
        self
    }

    /// Disable indentation entirely.
    #[must_use]
    pub fn compact(mut self) -> Self {
        self.indent_size = 0;
        self
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            indent_char: b'\t',
            indent_size: 1,
            filters: ExportFilters::default(),
        }
    }
}
