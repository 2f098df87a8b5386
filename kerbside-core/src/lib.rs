//! Core types and service wiring for the kerbside collection lookup.

/// Static bin-label catalog and display fallbacks.
pub mod catalog;
/// Domain models and identifiers shared by all providers.
pub mod model;
/// Registry and helpers for plugging council-specific providers into the service.
pub mod plugin;
/// Traits describing the provider interfaces.
pub mod ports;
/// High-level service facade used by clients.
pub mod service;

pub use model::*;
pub use plugin::*;
pub use ports::*;
pub use service::*;
