//! In-memory adapters for the test harness.

mod conversation_repository;

pub use conversation_repository::InMemoryConversationRepository;
