// src/constants.rs
//
// Application-wide constants: defaults for the server configuration and the
// fixed messages returned to HTTP callers.

/// Port the server listens on when neither `--port` nor `PORT` is given.
///
/// Used in: `cli/args.rs`
pub const DEFAULT_PORT: u16 = 3001;

/// Address the server binds to by default (all interfaces).
///
/// Used in: `cli/args.rs`
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// The single origin allowed to call the API from a browser.
///
/// Used in: `cli/args.rs`
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

/// SQLite database file used when `DB_NAME` is not set.
///
/// Used in: `cli/args.rs`
pub const DEFAULT_DATABASE: &str = "flashcards.db";

/// Plain-text body of `GET /`.
///
/// Used in: `ports/http.rs`
pub const WELCOME_MESSAGE: &str = "Welcome to our application!";

/// Rejection text when an edit would leave a flashcard with neither a
/// question nor an answer.
///
/// Used in: `application/flashcard_service.rs`
pub const MISSING_CONTENT_MESSAGE: &str = "Please provide at least a question or an answer.";
