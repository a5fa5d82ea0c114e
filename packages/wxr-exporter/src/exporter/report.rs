//! Per-run report: what each collection wrote and where it stopped.

use std::fmt;

use crate::error::IterationFault;

use super::state::ExportState;

/// The record collections an export walks through, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Users,
    Terms,
    Links,
    Posts,
    Media,
}

impl Collection {
    pub const ALL: [Collection; 5] = [
        Collection::Users,
        Collection::Terms,
        Collection::Links,
        Collection::Posts,
        Collection::Media,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Terms => "terms",
            Self::Links => "links",
            Self::Posts => "posts",
            Self::Media => "media",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How one collection fared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionOutcome {
    pub collection: Collection,
    /// Records written before the collection ended.
    pub written: usize,
    /// The fault that ended the collection early, if any.
    pub fault: Option<IterationFault>,
}

impl CollectionOutcome {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.fault.is_none()
    }
}

/// Summary of an export run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    pub outcomes: Vec<CollectionOutcome>,
    /// Extension namespace requests that were rejected.
    pub dropped_namespaces: usize,
    /// Extension markup descriptors that were skipped.
    pub skipped_descriptors: usize,
    pub final_state: ExportState,
}

impl ExportReport {
    pub(crate) fn new() -> Self {
        Self {
            outcomes: Vec::new(),
            dropped_namespaces: 0,
            skipped_descriptors: 0,
            final_state: ExportState::Idle,
        }
    }

    /// The outcome for `collection`, if it was reached.
    #[must_use]
    pub fn outcome(&self, collection: Collection) -> Option<&CollectionOutcome> {
        self.outcomes.iter().find(|o| o.collection == collection)
    }

    /// Records written for `collection`, zero if it was never reached.
    #[must_use]
    pub fn written(&self, collection: Collection) -> usize {
        self.outcome(collection).map_or(0, |o| o.written)
    }

    /// Collections that ended on a fault.
    pub fn faults(&self) -> impl Iterator<Item = (Collection, &IterationFault)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.fault.as_ref().map(|f| (o.collection, f)))
    }

    /// Whether the run closed and every collection was written in full.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.final_state.is_terminal() && self.outcomes.iter().all(CollectionOutcome::is_complete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_lookups() {
        let mut report = ExportReport::new();
        report.outcomes.push(CollectionOutcome {
            collection: Collection::Users,
            written: 2,
            fault: Some(IterationFault::new("db gone")),
        });
        report.outcomes.push(CollectionOutcome {
            collection: Collection::Terms,
            written: 3,
            fault: None,
        });
        report.final_state = ExportState::Closed;

        assert_eq!(report.written(Collection::Users), 2);
        assert_eq!(report.written(Collection::Media), 0);
        let faults: Vec<_> = report.faults().map(|(c, _)| c).collect();
        assert_eq!(faults, vec![Collection::Users]);
        assert!(!report.is_complete());
    }
}
