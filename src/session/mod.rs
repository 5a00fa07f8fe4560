//! Session controller
//!
//! `Session` is the thin layer between an input source and the engine. It owns
//! the current snapshot, serializes action dispatch, applies the caller's
//! fallback policy when word lists cannot be loaded, runs the message expiry
//! clock and keeps statistics for the games played.

mod input;
mod stats;

pub use input::InputEvent;
pub use stats::Statistics;

use crate::core::Word;
use crate::game::{Action, GameState, MessageId, StatusMessage, transition};
use crate::wordlists::{SourceError, WordSource};
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Default lifetime of a status message without an explicit ttl
pub const DEFAULT_MESSAGE_TTL: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Target to play when the word lists fail to load
    pub fallback_target: Option<Word>,
    /// Lifetime of messages that carry no ttl of their own
    pub message_ttl: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            fallback_target: None,
            message_ttl: DEFAULT_MESSAGE_TTL,
        }
    }
}

#[derive(Debug)]
pub struct Session {
    source: Arc<WordSource>,
    config: SessionConfig,
    state: GameState,
    stats: Statistics,
    /// When each pending message was first seen by `tick`
    observed: FxHashMap<MessageId, Instant>,
}

impl Session {
    /// Load the word lists and start the first game
    ///
    /// # Errors
    ///
    /// Returns the load error when no fallback target is configured, or
    /// `SourceError::Empty` if the loaded target list cannot supply a word.
    pub async fn start(source: Arc<WordSource>, config: SessionConfig) -> Result<Self, SourceError> {
        let target = Self::choose_target(&source, &config).await?;
        Ok(Self::with_state(source, config, GameState::new(target)))
    }

    /// Like [`Session::start`] but the first game uses `target`
    ///
    /// The requested word is never swapped for the fallback target.
    ///
    /// # Errors
    ///
    /// Returns the load error if the lists cannot be loaded, or
    /// `SourceError::NotATarget` if `target` is not in the target list.
    pub async fn start_with_target(
        source: Arc<WordSource>,
        config: SessionConfig,
        target: Word,
    ) -> Result<Self, SourceError> {
        let lists = source.ensure_loaded().await?;
        if !lists.is_target(&target) {
            return Err(SourceError::NotATarget {
                word: target.text().to_string(),
            });
        }
        Ok(Self::with_state(source, config, GameState::new(target)))
    }

    fn with_state(source: Arc<WordSource>, config: SessionConfig, state: GameState) -> Self {
        Self {
            source,
            config,
            state,
            stats: Statistics::default(),
            observed: FxHashMap::default(),
        }
    }

    async fn choose_target(source: &WordSource, config: &SessionConfig) -> Result<Word, SourceError> {
        match source.ensure_loaded().await {
            Ok(lists) => lists.pick_target(),
            Err(error) => {
                let Some(fallback) = config.fallback_target.clone() else {
                    return Err(error);
                };
                tracing::warn!(%error, word = %fallback, "word lists unavailable, using fallback target");
                Ok(fallback)
            }
        }
    }

    /// Start a new game, retrying the word list load first if it failed
    ///
    /// An unfinished game is abandoned without touching the statistics.
    ///
    /// # Errors
    ///
    /// Same as [`Session::start`]; the current game is kept on error.
    pub async fn restart(&mut self) -> Result<&GameState, SourceError> {
        let target = Self::choose_target(&self.source, &self.config).await?;
        self.state = GameState::with_message_ids_from(target, self.state.next_message_id());
        self.observed.clear();
        tracing::info!("new game started");
        Ok(&self.state)
    }

    /// Apply one action to the current game
    ///
    /// Statistics are updated on the action that ends a game.
    ///
    /// # Errors
    ///
    /// Only `Action::StartNewGame` can fail, when no target is available.
    pub fn dispatch(&mut self, action: Action) -> Result<&GameState, SourceError> {
        let next = transition(&self.state, action, &*self.source)?;
        if !self.state.is_game_over() && next.is_game_over() {
            self.stats.record(&next);
        }
        self.state = next;

        let pending = self.state.status_messages();
        self.observed.retain(|id, _| pending.iter().any(|m| m.id() == *id));
        Ok(&self.state)
    }

    /// Dispatch a symbolic input event
    ///
    /// `NewGame` goes through [`Session::restart`] so a failed load is retried.
    ///
    /// # Errors
    ///
    /// Only `NewGame` can fail; see [`Session::restart`].
    pub async fn handle_event(&mut self, event: InputEvent) -> Result<&GameState, SourceError> {
        match event {
            InputEvent::NewGame => self.restart().await,
            other => self.dispatch(other.action()),
        }
    }

    /// Advance the message clock to `now`
    ///
    /// Messages not seen before are stamped with `now`. Every message whose
    /// ttl has elapsed since it was stamped is removed, oldest first. Returns
    /// the number of messages removed.
    pub fn tick(&mut self, now: Instant) -> usize {
        for message in self.state.status_messages() {
            self.observed.entry(message.id()).or_insert(now);
        }

        let default_ttl = self.config.message_ttl;
        let expired: Vec<MessageId> = self
            .state
            .status_messages()
            .iter()
            .filter(|m| {
                self.observed
                    .get(&m.id())
                    .is_some_and(|&seen| now.saturating_duration_since(seen) >= m.ttl_or(default_ttl))
            })
            .map(StatusMessage::id)
            .collect();

        for &id in &expired {
            let oldest = self.state.status_messages().first().map(StatusMessage::id);
            let action = if oldest == Some(id) {
                Action::ExpireOldestMessage
            } else {
                Action::DismissMessage(id)
            };
            // Message actions never consult the dictionary
            if let Ok(next) = transition(&self.state, action, &*self.source) {
                self.state = next;
            }
            self.observed.remove(&id);
        }

        expired.len()
    }

    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub const fn stats(&self) -> &Statistics {
        &self.stats
    }

    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn source(&self) -> &WordSource {
        &self.source
    }
}
