//! Transient status messages
//!
//! Messages form a FIFO ordered by `MessageId`. Ids are handed out in strictly
//! increasing order, so "oldest" is simply the smallest id.

use std::fmt;
use std::time::Duration;

/// Identifier of a status message, increasing in creation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(u64);

impl MessageId {
    pub const FIRST: Self = Self(1);

    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    #[must_use]
    pub(crate) const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Error,
    Success,
    Info,
}

/// A user-facing message awaiting display and expiry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    id: MessageId,
    text: String,
    kind: MessageKind,
    ttl: Option<Duration>,
}

impl StatusMessage {
    pub(crate) fn new(id: MessageId, kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            kind,
            ttl: None,
        }
    }

    #[must_use]
    pub(crate) fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub const fn id(&self) -> MessageId {
        self.id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn kind(&self) -> MessageKind {
        self.kind
    }

    /// Explicit lifetime; `None` means the caller's default applies
    #[must_use]
    pub const fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Lifetime to use given the caller's default
    #[must_use]
    pub fn ttl_or(&self, default: Duration) -> Duration {
        self.ttl.unwrap_or(default)
    }
}
