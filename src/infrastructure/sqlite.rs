// src/infrastructure/sqlite.rs
use crate::application::{FlashcardRepository, FlashcardStore};
use crate::domain::{DomainError, Flashcard};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS Flashcard (
    ID INTEGER PRIMARY KEY AUTOINCREMENT,
    Question_Content TEXT,
    Answer_Content TEXT
)";

/// SQLite-backed store. Holds only the database location; every call to
/// `connect` opens a fresh connection.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = PathBuf::from(path.as_ref());
        debug!(?path, "Creating new SqliteStore");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the Flashcard table if the database file does not have it yet
    pub fn ensure_schema(&self) -> Result<(), DomainError> {
        let conn = self.open()?;
        conn.execute_batch(CREATE_TABLE_SQL)?;
        info!(path = ?self.path(), "Flashcard table ready");
        Ok(())
    }

    fn open(&self) -> Result<Connection, DomainError> {
        Connection::open(&self.path).map_err(|e| {
            DomainError::Store(format!(
                "Failed to open database {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

impl FlashcardStore for SqliteStore {
    type Repository = SqliteFlashcardRepository;

    fn connect(&self) -> Result<SqliteFlashcardRepository, DomainError> {
        let conn = self.open()?;
        Ok(SqliteFlashcardRepository { conn })
    }
}

/// Repository bound to one open connection. The connection closes when this
/// value is dropped.
pub struct SqliteFlashcardRepository {
    conn: Connection,
}

fn flashcard_from_row(row: &Row<'_>) -> rusqlite::Result<Flashcard> {
    Ok(Flashcard {
        id: row.get("ID")?,
        question_content: row.get("Question_Content")?,
        answer_content: row.get("Answer_Content")?,
    })
}

impl FlashcardRepository for SqliteFlashcardRepository {
    #[instrument(level = "debug", skip(self))]
    fn list_all(&mut self) -> Result<Vec<Flashcard>, DomainError> {
        let mut stmt = self.conn.prepare("SELECT * FROM Flashcard")?;
        let rows = stmt
            .query_map([], flashcard_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    #[instrument(level = "debug", skip(self))]
    fn find_by_id(&mut self, id: i64) -> Result<Option<Flashcard>, DomainError> {
        let flashcard = self
            .conn
            .query_row(
                "SELECT * FROM Flashcard WHERE ID = ?1",
                params![id],
                flashcard_from_row,
            )
            .optional()?;
        Ok(flashcard)
    }

    #[instrument(level = "debug", skip(self))]
    fn insert(
        &mut self,
        question: Option<&str>,
        answer: Option<&str>,
    ) -> Result<i64, DomainError> {
        self.conn.execute(
            "INSERT INTO Flashcard (Question_Content, Answer_Content) VALUES (?1, ?2)",
            params![question, answer],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    #[instrument(level = "debug", skip(self))]
    fn update(
        &mut self,
        id: i64,
        question: Option<&str>,
        answer: Option<&str>,
    ) -> Result<usize, DomainError> {
        let affected = self.conn.execute(
            "UPDATE Flashcard SET Question_Content = ?1, Answer_Content = ?2 WHERE ID = ?3",
            params![question, answer, id],
        )?;
        Ok(affected)
    }

    #[instrument(level = "debug", skip(self))]
    fn delete(&mut self, id: i64) -> Result<usize, DomainError> {
        let affected = self
            .conn
            .execute("DELETE FROM Flashcard WHERE ID = ?1", params![id])?;
        Ok(affected)
    }

    fn server_version(&mut self) -> Result<String, DomainError> {
        let version = self
            .conn
            .query_row("SELECT sqlite_version()", [], |row| row.get(0))?;
        Ok(version)
    }
}
