//! In-memory analyzer adapters for dispatch tests.

mod directory;
mod transport;

pub use directory::InMemoryExchangeDirectory;
pub use transport::{ScriptedAnalyzerTransport, SentMessage};
