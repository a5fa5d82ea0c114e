//! Export state machine.

use std::fmt;

use serde::Serialize;

/// Where an export run currently is.
///
/// States advance strictly in declaration order; [`ExportState::next`] names
/// the only legal successor of each state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportState {
    Idle,
    Opened,
    PreambleWritten,
    RootOpen,
    ChannelOpen,
    MetadataWritten,
    UsersWritten,
    TermsWritten,
    LinksWritten,
    ChannelHookFired,
    PostsWritten,
    MediaWritten,
    ChannelClosed,
    RootClosed,
    ExtensionPIsWritten,
    Closed,
}

impl ExportState {
    /// The successor state, `None` once the run is closed.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        use ExportState::*;
        let next = match self {
            Idle => Opened,
            Opened => PreambleWritten,
            PreambleWritten => RootOpen,
            RootOpen => ChannelOpen,
            ChannelOpen => MetadataWritten,
            MetadataWritten => UsersWritten,
            UsersWritten => TermsWritten,
            TermsWritten => LinksWritten,
            LinksWritten => ChannelHookFired,
            ChannelHookFired => PostsWritten,
            PostsWritten => MediaWritten,
            MediaWritten => ChannelClosed,
            ChannelClosed => RootClosed,
            RootClosed => ExtensionPIsWritten,
            ExtensionPIsWritten => Closed,
            Closed => return None,
        };
        Some(next)
    }

    #[must_use]
    pub fn is_terminal(self) -> bool {
        self == Self::Closed
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        use ExportState::*;
        match self {
            Idle => "idle",
            Opened => "opened",
            PreambleWritten => "preamble_written",
            RootOpen => "root_open",
            ChannelOpen => "channel_open",
            MetadataWritten => "metadata_written",
            UsersWritten => "users_written",
            TermsWritten => "terms_written",
            LinksWritten => "links_written",
            ChannelHookFired => "channel_hook_fired",
            PostsWritten => "posts_written",
            MediaWritten => "media_written",
            ChannelClosed => "channel_closed",
            RootClosed => "root_closed",
            ExtensionPIsWritten => "extension_pis_written",
            Closed => "closed",
        }
    }
}

impl fmt::Display for ExportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_walk_visits_every_state_once() {
        let mut state = ExportState::Idle;
        let mut visited = vec![state];
        while let Some(next) = state.next() {
            assert!(next > state);
            visited.push(next);
            state = next;
        }
        assert_eq!(visited.len(), 16);
        assert!(state.is_terminal());
    }

    #[test]
    fn test_channel_hook_between_links_and_posts() {
        assert_eq!(
            ExportState::LinksWritten.next(),
            Some(ExportState::ChannelHookFired)
        );
        assert_eq!(
            ExportState::ChannelHookFired.next(),
            Some(ExportState::PostsWritten)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ExportState::ExtensionPIsWritten.to_string(), "extension_pis_written");
    }
}
