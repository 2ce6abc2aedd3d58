// src/util/testing.rs

use anyhow::Result;
use std::collections::BTreeMap;
use std::env;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{FlashcardRepository, FlashcardStore};
use crate::domain::{DomainError, Flashcard};

#[derive(Default)]
struct MockState {
    rows: BTreeMap<i64, Flashcard>,
    next_id: i64,
    open: usize,
    opened: usize,
}

#[derive(Clone, Copy, Default)]
struct MockBehavior {
    connect_failure: bool,
    zero_insert_id: bool,
    stale_updates: bool,
}

/// In-memory store for testing code that depends on FlashcardStore
///
/// Rows live in a shared table, so writes made through one connection are
/// visible to the next. The store also counts connections so tests can
/// assert that every operation released what it acquired.
///
/// # Examples
///
/// ```
/// use flashcard_api::application::FlashcardService;
/// use flashcard_api::domain::Flashcard;
/// use flashcard_api::util::testing::MockFlashcardStore;
///
/// let store = MockFlashcardStore::builder()
///     .with_flashcard(Flashcard {
///         id: 1,
///         question_content: Some("Question".to_string()),
///         answer_content: Some("Answer".to_string()),
///     })
///     .build();
/// let service = FlashcardService::new(store);
///
/// assert_eq!(service.list_all().unwrap().len(), 1);
/// assert_eq!(service.store().open_connections(), 0);
/// ```
#[derive(Clone)]
pub struct MockFlashcardStore {
    state: Arc<Mutex<MockState>>,
    behavior: MockBehavior,
}

impl MockFlashcardStore {
    pub fn builder() -> MockFlashcardStoreBuilder {
        MockFlashcardStoreBuilder::new()
    }

    /// Current table contents ordered by id
    pub fn rows(&self) -> Vec<Flashcard> {
        self.lock().rows.values().cloned().collect()
    }

    /// Connections acquired and not yet released
    pub fn open_connections(&self) -> usize {
        self.lock().open
    }

    /// Connections acquired since the store was built
    pub fn connections_opened(&self) -> usize {
        self.lock().opened
    }

    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FlashcardStore for MockFlashcardStore {
    type Repository = MockConnection;

    fn connect(&self) -> Result<MockConnection, DomainError> {
        if self.behavior.connect_failure {
            return Err(DomainError::Store("connection refused".to_string()));
        }

        let mut state = self.lock();
        state.open += 1;
        state.opened += 1;
        drop(state);

        Ok(MockConnection {
            state: Arc::clone(&self.state),
            behavior: self.behavior,
        })
    }
}

/// One acquired connection of MockFlashcardStore. Released on drop.
pub struct MockConnection {
    state: Arc<Mutex<MockState>>,
    behavior: MockBehavior,
}

impl MockConnection {
    fn lock(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for MockConnection {
    fn drop(&mut self) {
        let mut state = self.lock();
        state.open = state.open.saturating_sub(1);
    }
}

impl FlashcardRepository for MockConnection {
    fn list_all(&mut self) -> Result<Vec<Flashcard>, DomainError> {
        Ok(self.lock().rows.values().cloned().collect())
    }

    fn find_by_id(&mut self, id: i64) -> Result<Option<Flashcard>, DomainError> {
        Ok(self.lock().rows.get(&id).cloned())
    }

    fn insert(
        &mut self,
        question: Option<&str>,
        answer: Option<&str>,
    ) -> Result<i64, DomainError> {
        if self.behavior.zero_insert_id {
            return Ok(0);
        }

        let mut state = self.lock();
        state.next_id += 1;
        let id = state.next_id;
        state.rows.insert(
            id,
            Flashcard {
                id,
                question_content: question.map(str::to_string),
                answer_content: answer.map(str::to_string),
            },
        );
        Ok(id)
    }

    fn update(
        &mut self,
        id: i64,
        question: Option<&str>,
        answer: Option<&str>,
    ) -> Result<usize, DomainError> {
        if self.behavior.stale_updates {
            return Ok(0);
        }

        let mut state = self.lock();
        match state.rows.get_mut(&id) {
            Some(row) => {
                row.question_content = question.map(str::to_string);
                row.answer_content = answer.map(str::to_string);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    fn delete(&mut self, id: i64) -> Result<usize, DomainError> {
        Ok(self.lock().rows.remove(&id).map_or(0, |_| 1))
    }

    fn server_version(&mut self) -> Result<String, DomainError> {
        Ok("mock".to_string())
    }
}

/// Builder for MockFlashcardStore
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockFlashcardStoreBuilder {
    rows: BTreeMap<i64, Flashcard>,
    behavior: MockBehavior,
}

impl MockFlashcardStoreBuilder {
    pub fn new() -> Self {
        Self {
            rows: BTreeMap::new(),
            behavior: MockBehavior::default(),
        }
    }

    /// Seed a row; later inserts get ids above the highest seeded id
    pub fn with_flashcard(mut self, flashcard: Flashcard) -> Self {
        self.rows.insert(flashcard.id, flashcard);
        self
    }

    /// Every connect attempt fails with a store error
    pub fn with_connect_failure(mut self) -> Self {
        self.behavior.connect_failure = true;
        self
    }

    /// Inserts report identifier 0 and write nothing
    pub fn with_zero_insert_id(mut self) -> Self {
        self.behavior.zero_insert_id = true;
        self
    }

    /// Updates affect no rows, as if the row was deleted after it was read
    pub fn with_stale_updates(mut self) -> Self {
        self.behavior.stale_updates = true;
        self
    }

    pub fn build(self) -> MockFlashcardStore {
        let next_id = self.rows.keys().next_back().copied().unwrap_or(0);
        MockFlashcardStore {
            state: Arc::new(Mutex::new(MockState {
                rows: self.rows,
                next_id,
                ..MockState::default()
            })),
            behavior: self.behavior,
        }
    }
}

impl Default for MockFlashcardStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "h2", "tower", "mio"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
