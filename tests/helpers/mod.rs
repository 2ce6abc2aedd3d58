use flashcard_api::application::FlashcardService;
use flashcard_api::config::ServerConfig;
use flashcard_api::infrastructure::SqliteStore;
use flashcard_api::ports;
use anyhow::{Context, Result};
use axum::Router;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// Test fixture for working with a temporary Flashcard database
#[allow(dead_code)]
pub struct TestDatabase {
    _temp_dir: TempDir,
    pub database_path: PathBuf,
}

#[allow(dead_code)]
impl TestDatabase {
    /// Create an empty database with the Flashcard table in place
    pub fn new() -> Result<Self> {
        let temp_dir = tempfile::tempdir()
            .context("Failed to create temporary directory")?;
        let database_path = temp_dir.path().join("flashcards.db");

        SqliteStore::new(&database_path)
            .ensure_schema()
            .context("Failed to create Flashcard table")?;

        Ok(Self {
            _temp_dir: temp_dir,
            database_path,
        })
    }

    pub fn store(&self) -> SqliteStore {
        SqliteStore::new(&self.database_path)
    }

    pub fn service(&self) -> FlashcardService<SqliteStore> {
        FlashcardService::new(self.store())
    }

    /// Application router with the default CORS origin
    pub fn app(&self) -> Result<Router> {
        let config = ServerConfig {
            database: self.database_path.clone(),
            ..ServerConfig::default()
        };
        ports::router(Arc::new(self.service()), &config)
    }
}

/// Values used across scenarios
#[allow(dead_code)]
pub mod sample {
    pub const QUESTION: &str = "2+2?";
    pub const ANSWER: &str = "4";

    // For testing error cases
    pub const NONEXISTENT: i64 = 999999999;
}
