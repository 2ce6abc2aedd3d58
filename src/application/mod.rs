// src/application/mod.rs
pub mod flashcard_service;
pub mod store;

pub use flashcard_service::FlashcardService;
pub use store::{FlashcardRepository, FlashcardStore};
