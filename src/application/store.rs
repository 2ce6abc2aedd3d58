// src/application/store.rs
use crate::domain::{DomainError, Flashcard};

/// Statements available on one open store connection.
///
/// A repository value owns its connection; dropping it releases the
/// connection.
pub trait FlashcardRepository {
    /// All rows, in whatever order the store returns them
    fn list_all(&mut self) -> Result<Vec<Flashcard>, DomainError>;

    fn find_by_id(&mut self, id: i64) -> Result<Option<Flashcard>, DomainError>;

    /// Insert a row and return the identifier the store assigned
    fn insert(&mut self, question: Option<&str>, answer: Option<&str>)
        -> Result<i64, DomainError>;

    /// Overwrite both content columns. Returns the number of affected rows.
    fn update(
        &mut self,
        id: i64,
        question: Option<&str>,
        answer: Option<&str>,
    ) -> Result<usize, DomainError>;

    /// Returns the number of affected rows
    fn delete(&mut self, id: i64) -> Result<usize, DomainError>;

    /// Version string reported by the store engine
    fn server_version(&mut self) -> Result<String, DomainError>;
}

/// Factory for per-request connections.
pub trait FlashcardStore: Send + Sync {
    type Repository: FlashcardRepository;

    fn connect(&self) -> Result<Self::Repository, DomainError>;
}
