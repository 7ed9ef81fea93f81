//! Domain model for analyzer dispatch coordination.
//!
//! The analyzer domain models exchange descriptors with their capability
//! declarations, the index request offered to backends, and the
//! classification results folded back into an aggregate report. All
//! infrastructure concerns are kept outside the domain boundary.

mod analysis;
mod capabilities;
mod error;
mod exchange;
mod ids;
mod indexing;
mod launch;
mod name;

pub use analysis::{AnalysisReport, AnalyzedItem};
pub use capabilities::AnalyzerCapabilities;
pub use error::AnalyzerDomainError;
pub use exchange::AnalyzerExchange;
pub use ids::{DispatchId, IndexId, LaunchId, TestItemId};
pub use indexing::{CleanIndexRequest, IndexResponse};
pub use launch::{IndexLaunch, IndexLog, IndexTestItem};
pub use name::ExchangeName;
