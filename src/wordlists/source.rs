//! Single-flight word source
//!
//! `WordSource` owns an explicit load state and de-duplicates concurrent loads:
//! every caller of `ensure_loaded` that arrives while a load is in flight awaits
//! the same shared future, so the provider is asked at most once per attempt.
//! A failed attempt is recorded and the next caller starts a fresh one.

use super::{SourceError, WordLists, loader};
use crate::core::Word;
use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Future returned by a provider
pub type LoadFuture = BoxFuture<'static, Result<WordLists, SourceError>>;

type SharedLoad = Shared<BoxFuture<'static, Result<Arc<WordLists>, SourceError>>>;

/// Supplies the two word lists, possibly asynchronously
pub trait WordProvider: Send + Sync {
    /// Start fetching both lists
    fn fetch(&self) -> LoadFuture;

    /// Short label for logs
    fn name(&self) -> &'static str;
}

/// Lists compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedProvider;

impl WordProvider for EmbeddedProvider {
    fn fetch(&self) -> LoadFuture {
        async { WordLists::embedded() }.boxed()
    }

    fn name(&self) -> &'static str {
        "embedded"
    }
}

/// Two plain-text files, one word per line
#[derive(Debug, Clone)]
pub struct FileProvider {
    allowed: PathBuf,
    targets: PathBuf,
}

impl FileProvider {
    #[must_use]
    pub fn new(allowed: impl Into<PathBuf>, targets: impl Into<PathBuf>) -> Self {
        Self {
            allowed: allowed.into(),
            targets: targets.into(),
        }
    }
}

impl WordProvider for FileProvider {
    fn fetch(&self) -> LoadFuture {
        let allowed_path = self.allowed.clone();
        let targets_path = self.targets.clone();
        async move {
            let allowed = loader::load_from_file(&allowed_path).await?;
            let targets = loader::load_from_file(&targets_path).await?;
            WordLists::new(allowed, targets)
        }
        .boxed()
    }

    fn name(&self) -> &'static str {
        "file"
    }
}

enum LoadState {
    NotLoaded,
    Loading(SharedLoad),
    Ready(Arc<WordLists>),
    Failed(SourceError),
}

/// Observable summary of the load state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    NotLoaded,
    Loading,
    Ready,
    Failed(SourceError),
}

/// Word source with idempotent, single-flight loading
///
/// Construct one per session and inject it where words are needed.
pub struct WordSource {
    provider: Box<dyn WordProvider>,
    state: Mutex<LoadState>,
}

impl WordSource {
    #[must_use]
    pub fn new(provider: impl WordProvider + 'static) -> Self {
        Self {
            provider: Box::new(provider),
            state: Mutex::new(LoadState::NotLoaded),
        }
    }

    /// Source backed by the embedded lists
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(EmbeddedProvider)
    }

    /// Source backed by two word files
    #[must_use]
    pub fn from_files(allowed: impl Into<PathBuf>, targets: impl Into<PathBuf>) -> Self {
        Self::new(FileProvider::new(allowed, targets))
    }

    fn lock(&self) -> MutexGuard<'_, LoadState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Load the lists if needed and return them
    ///
    /// Idempotent after success. Concurrent callers share one in-flight load.
    ///
    /// # Errors
    ///
    /// Returns the provider's `SourceError` if this attempt failed; the failure
    /// is recorded and a later call retries.
    pub async fn ensure_loaded(&self) -> Result<Arc<WordLists>, SourceError> {
        let pending = {
            let mut state = self.lock();
            match &*state {
                LoadState::Ready(lists) => return Ok(Arc::clone(lists)),
                LoadState::Loading(pending) => pending.clone(),
                LoadState::NotLoaded | LoadState::Failed(_) => {
                    tracing::debug!(provider = self.provider.name(), "starting word list load");
                    let pending = self
                        .provider
                        .fetch()
                        .map(|result| result.map(Arc::new))
                        .boxed()
                        .shared();
                    *state = LoadState::Loading(pending.clone());
                    pending
                }
            }
        };

        let result = pending.clone().await;

        let mut state = self.lock();
        if matches!(&*state, LoadState::Loading(current) if current.ptr_eq(&pending)) {
            *state = match &result {
                Ok(lists) => {
                    tracing::info!(
                        provider = self.provider.name(),
                        allowed = lists.allowed_count(),
                        targets = lists.target_count(),
                        "word lists loaded"
                    );
                    LoadState::Ready(Arc::clone(lists))
                }
                Err(e) => {
                    tracing::warn!(provider = self.provider.name(), error = %e, "word list load failed");
                    LoadState::Failed(e.clone())
                }
            };
        }

        result
    }

    /// Current load state
    #[must_use]
    pub fn status(&self) -> LoadStatus {
        match &*self.lock() {
            LoadState::NotLoaded => LoadStatus::NotLoaded,
            LoadState::Loading(_) => LoadStatus::Loading,
            LoadState::Ready(_) => LoadStatus::Ready,
            LoadState::Failed(e) => LoadStatus::Failed(e.clone()),
        }
    }

    /// The loaded lists, if ready
    #[must_use]
    pub fn lists(&self) -> Option<Arc<WordLists>> {
        match &*self.lock() {
            LoadState::Ready(lists) => Some(Arc::clone(lists)),
            _ => None,
        }
    }

    /// Case-insensitive guess check; false until the lists are ready
    #[must_use]
    pub fn is_guess_allowed(&self, word: &str) -> bool {
        self.lists().is_some_and(|lists| lists.is_guess_allowed(word))
    }

    /// Pick a uniformly random target
    ///
    /// # Errors
    ///
    /// Returns `SourceError::NotLoaded` before a successful load.
    pub fn pick_target(&self) -> Result<Word, SourceError> {
        self.lists().ok_or(SourceError::NotLoaded)?.pick_target()
    }
}

impl std::fmt::Debug for WordSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordSource")
            .field("provider", &self.provider.name())
            .field("status", &self.status())
            .finish()
    }
}
