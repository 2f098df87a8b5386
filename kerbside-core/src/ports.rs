//! Traits describing provider capabilities and shared helper types.

use async_trait::async_trait;
use reqwest::Error as ReqwestError;

use crate::model::{CollectionResult, CouncilMeta, PropertyId};

#[derive(thiserror::Error, Debug)]
/// Errors that can occur while talking to council backends.
pub enum PortError {
    /// Network layer failed: connection error, timeout, or an unreadable
    /// response body.
    #[error("Network error: {0}")]
    Network(#[from] ReqwestError),
    /// The council has no registered plugin.
    #[error("Unsupported council")]
    UnsupportedCouncil,
    /// Internal provider error.
    #[error("Internal error: {0}")]
    Internal(String),
}

#[async_trait]
/// Trait for council-specific collection schedule backends.
pub trait CollectionPort: Send + Sync {
    /// Metadata describing the council handled by this port.
    fn council(&self) -> &CouncilMeta;

    /// Fetch the collection schedule for a property.
    ///
    /// Implementations return `Err` only when the council site cannot be
    /// reached or read. A page whose markup does not match expectations
    /// still produces `Ok`: missing fields degrade individually and
    /// unusable bin blocks are skipped, never aborting the extraction.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::Network`] when the request fails.
    async fn collection(&self, property: &PropertyId) -> Result<CollectionResult, PortError>;
}
