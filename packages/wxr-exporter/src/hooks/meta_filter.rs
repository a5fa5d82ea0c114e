//! Composable predicates deciding which meta entries are left out.

use std::collections::HashMap;

use crate::types::{MetaEntry, MetaOwner};

/// Meta key holding the post edit lock, which is never worth exporting.
pub const EDIT_LOCK_META_KEY: &str = "_edit_lock";

/// User meta keys already carried as dedicated `wxr:user` fields.
pub const USER_NAME_META_KEYS: [&str; 2] = ["first_name", "last_name"];

/// A predicate returning `true` when a meta entry must not be written.
pub trait MetaFilter {
    fn skip(&self, meta: &MetaEntry) -> bool;
}

impl<F> MetaFilter for F
where
    F: Fn(&MetaEntry) -> bool,
{
    fn skip(&self, meta: &MetaEntry) -> bool {
        self(meta)
    }
}

/// Skips entries whose key is in a fixed list.
#[derive(Debug, Clone)]
pub struct SkipKeys {
    keys: Vec<String>,
}

impl SkipKeys {
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

impl MetaFilter for SkipKeys {
    fn skip(&self, meta: &MetaEntry) -> bool {
        self.keys.iter().any(|k| *k == meta.key)
    }
}

/// Ordered skip predicates per owner kind.
///
/// An entry is skipped if any predicate registered for its owner returns
/// `true`; evaluation stops at the first match.
#[derive(Default)]
pub struct MetaFilters {
    filters: HashMap<MetaOwner, Vec<Box<dyn MetaFilter>>>,
}

impl MetaFilters {
    /// Create a set with no predicates.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the default set: the post edit lock and the user name keys.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut filters = Self::new();
        filters.register(MetaOwner::Post, SkipKeys::new([EDIT_LOCK_META_KEY]));
        filters.register(MetaOwner::User, SkipKeys::new(USER_NAME_META_KEYS));
        filters
    }

    /// Append a predicate for one owner kind.
    pub fn register(&mut self, owner: MetaOwner, filter: impl MetaFilter + 'static) {
        self.filters.entry(owner).or_default().push(Box::new(filter));
    }

    /// Whether `meta` belonging to `owner` must be left out.
    #[must_use]
    pub fn should_skip(&self, owner: MetaOwner, meta: &MetaEntry) -> bool {
        self.filters
            .get(&owner)
            .is_some_and(|filters| filters.iter().any(|f| f.skip(meta)))
    }

    /// Number of predicates registered for `owner`.
    #[must_use]
    pub fn len_for(&self, owner: MetaOwner) -> usize {
        self.filters.get(&owner).map_or(0, Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_defaults_skip_edit_lock_for_posts_only() {
        let filters = MetaFilters::with_defaults();
        let lock = MetaEntry::new("_edit_lock", "1700000000:1");
        assert!(filters.should_skip(MetaOwner::Post, &lock));
        assert!(!filters.should_skip(MetaOwner::User, &lock));
        assert!(!filters.should_skip(MetaOwner::Post, &MetaEntry::new("_thumbnail_id", "4")));
    }

    #[test]
    fn test_defaults_skip_user_names() {
        let filters = MetaFilters::with_defaults();
        assert!(filters.should_skip(MetaOwner::User, &MetaEntry::new("first_name", "Alice")));
        assert!(filters.should_skip(MetaOwner::User, &MetaEntry::new("last_name", "Liddell")));
        assert!(!filters.should_skip(MetaOwner::User, &MetaEntry::new("nickname", "al")));
        assert!(!filters.should_skip(MetaOwner::Term, &MetaEntry::new("first_name", "x")));
    }

    #[test]
    fn test_custom_filter_is_ored_with_defaults() {
        let mut filters = MetaFilters::with_defaults();
        filters.register(MetaOwner::Post, |meta: &MetaEntry| meta.key.starts_with("_wp_old"));
        assert_eq!(filters.len_for(MetaOwner::Post), 2);
        assert!(filters.should_skip(MetaOwner::Post, &MetaEntry::new("_wp_old_slug", "x")));
        assert!(filters.should_skip(MetaOwner::Post, &MetaEntry::new("_edit_lock", "x")));
    }

    #[test]
    fn test_first_match_short_circuits() {
        let calls = Rc::new(Cell::new(0));
        let mut filters = MetaFilters::new();
        filters.register(MetaOwner::Comment, |_: &MetaEntry| true);
        let counter = Rc::clone(&calls);
        filters.register(MetaOwner::Comment, move |_: &MetaEntry| {
            counter.set(counter.get() + 1);
            false
        });

        assert!(filters.should_skip(MetaOwner::Comment, &MetaEntry::new("akismet", "x")));
        assert_eq!(calls.get(), 0);
    }
}
