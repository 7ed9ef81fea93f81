//! Analyzer exchange discovery and dispatch coordination.
//!
//! This module implements the multi-backend analyzer protocol: a directory
//! enumerates the analyzer exchanges currently registered on the broker,
//! the dispatch service addresses each of them over a transport, and the
//! analysis fold merges per-backend replies while removing classified items
//! from the request offered to later backends. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
