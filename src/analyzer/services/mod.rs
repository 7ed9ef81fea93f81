//! Orchestration services for analyzer dispatch.

mod dispatch;
mod reduce;

pub use dispatch::{AnalyzerDispatchService, DispatchError, DispatchResult};
pub use reduce::run_analysis;
