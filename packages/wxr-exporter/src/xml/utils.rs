//! Character-level helpers that keep arbitrary input well-formed.

use std::borrow::Cow;

/// Whether `c` is allowed in an XML 1.0 document.
///
/// # Examples
/// ```
/// use wxr_exporter::xml::is_xml_char;
///
/// assert!(is_xml_char('a'));
/// assert!(is_xml_char('\n'));
/// assert!(!is_xml_char('\u{0}'));
/// assert!(!is_xml_char('\u{FFFE}'));
/// ```
#[must_use]
pub fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\u{9}' | '\u{A}' | '\u{D}'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Drop characters that XML 1.0 cannot represent, even as references.
///
/// Escaping of markup characters is left to the writer; this only removes
/// control characters such as NUL that would make the document malformed.
///
/// # Examples
/// ```
/// use wxr_exporter::xml::strip_invalid_chars;
///
/// assert_eq!(strip_invalid_chars("ok"), "ok");
/// assert_eq!(strip_invalid_chars("a\u{0}b\u{1B}c"), "abc");
/// ```
#[must_use]
pub fn strip_invalid_chars(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|c| is_xml_char(*c)).collect())
    }
}

/// Make text safe to place inside `<!-- -->`.
///
/// Comments may not contain `--` nor end with `-`.
#[must_use]
pub fn comment_safe(text: &str) -> String {
    let mut out = strip_invalid_chars(text).replace("--", "- -");
    // "- -" followed by "-" can reintroduce "--"
    while out.contains("--") {
        out = out.replace("--", "- -");
    }
    if out.ends_with('-') {
        out.push(' ');
    }
    out
}

/// Whether `data` can be placed in a processing instruction as is.
///
/// # Examples
/// ```
/// use wxr_exporter::xml::is_pi_safe;
///
/// assert!(is_pi_safe("plugin-name='SEO'"));
/// assert!(!is_pi_safe("evil ?> <root/>"));
/// ```
#[must_use]
pub fn is_pi_safe(data: &str) -> bool {
    !data.contains("?>") && data.chars().all(is_xml_char)
}
