// src/application/flashcard_service.rs
use crate::application::{FlashcardRepository, FlashcardStore};
use crate::constants::MISSING_CONTENT_MESSAGE;
use crate::domain::{DomainError, Flashcard, FlashcardInput};
use tracing::{debug, info, instrument};

/// Flashcard use cases.
///
/// Every method opens its own connection through the store and drops it
/// before returning, on success and on error alike.
pub struct FlashcardService<S: FlashcardStore> {
    store: S,
}

impl<S: FlashcardStore> FlashcardService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    #[instrument(level = "debug", skip(self))]
    pub fn list_all(&self) -> Result<Vec<Flashcard>, DomainError> {
        let mut repo = self.store.connect()?;
        let flashcards = repo.list_all()?;
        debug!(count = flashcards.len(), "Fetched flashcards");
        Ok(flashcards)
    }

    /// Insert a flashcard. No content check is applied here, unlike `update`.
    #[instrument(level = "debug", skip(self))]
    pub fn create(&self, input: FlashcardInput) -> Result<i64, DomainError> {
        let mut repo = self.store.connect()?;
        let id = repo.insert(
            input.question_content.as_deref(),
            input.answer_content.as_deref(),
        )?;

        if id == 0 {
            return Err(DomainError::Store(
                "Insert did not return a row identifier".to_string(),
            ));
        }

        info!(flashcard_id = id, "Added flashcard");
        Ok(id)
    }

    /// Edit a flashcard, keeping stored values for fields left empty.
    ///
    /// The read and the write are separate statements without a transaction;
    /// a concurrent edit landing in between is overwritten.
    #[instrument(level = "debug", skip(self))]
    pub fn update(&self, id: i64, input: FlashcardInput) -> Result<(), DomainError> {
        let mut repo = self.store.connect()?;
        let existing = repo.find_by_id(id)?.ok_or(DomainError::NotFound(id))?;

        let effective = input.merge_onto(&existing);
        if !effective.has_content() {
            debug!(flashcard_id = id, "Rejecting edit without content");
            return Err(DomainError::Validation(MISSING_CONTENT_MESSAGE.to_string()));
        }

        let affected = repo.update(
            id,
            effective.question_content.as_deref(),
            effective.answer_content.as_deref(),
        )?;

        if affected == 0 {
            return Err(DomainError::Store(format!(
                "Update of flashcard {id} affected no rows"
            )));
        }

        info!(flashcard_id = id, "Updated flashcard");
        Ok(())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut repo = self.store.connect()?;
        let affected = repo.delete(id)?;

        if affected == 0 {
            debug!(flashcard_id = id, "No flashcard to delete");
            return Err(DomainError::NotFound(id));
        }

        info!(flashcard_id = id, "Deleted flashcard");
        Ok(())
    }

    /// Open a connection and ask the store for its version.
    pub fn probe(&self) -> Result<String, DomainError> {
        let mut repo = self.store.connect()?;
        repo.server_version()
    }
}
