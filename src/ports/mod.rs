//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the simulated backend and its surroundings. Adapters implement these ports.
//!
//! - `ConversationRepository` - Entity store owned by the test harness
//! - `Clock` - Source of event timestamps
//! - `ConversationEndpoints` - One method per conversation resource operation

mod clock;
mod conversation_endpoints;
mod conversation_repository;

pub use clock::Clock;
pub use conversation_endpoints::ConversationEndpoints;
pub use conversation_repository::ConversationRepository;
