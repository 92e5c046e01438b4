//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory conversation repository
//! - `clock` - System and fixed clocks
//! - `mock_transport` - Request interception and routing

pub mod clock;
pub mod memory;
pub mod mock_transport;

pub use clock::{FixedClock, SystemClock};
pub use memory::InMemoryConversationRepository;
pub use mock_transport::MockTransportSession;
