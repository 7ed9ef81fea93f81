//! Triage: analyzer dispatch coordination for test-failure analysis.
//!
//! This crate provides the dispatch core of a test-reporting platform:
//! discovering analyzer backends registered as named message exchanges,
//! fanning indexing and maintenance requests out to them, and folding
//! analysis replies into a per-backend result map while progressively
//! shrinking the outstanding request.
//!
//! # Architecture
//!
//! Triage follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (broker APIs, fakes)
//!
//! # Modules
//!
//! - [`analyzer`]: Analyzer exchange discovery and dispatch coordination

pub mod analyzer;
