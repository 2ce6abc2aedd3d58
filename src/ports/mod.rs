// src/ports/mod.rs
pub mod error;
pub mod http;

pub use error::{ApiError, ErrorResponse, Operation};
pub use http::{flashcard_routes, router, MessageResponse, SharedService};
