//! High-level service facade combining all providers.

use std::sync::Arc;

use crate::model::{CollectionResult, CouncilId, PropertyId};
use crate::plugin::PluginRegistry;
use crate::ports::PortError;

/// Public entry point for loading collection schedules.
pub struct KerbsideService {
    registry: Arc<PluginRegistry>,
}

impl KerbsideService {
    /// Create a new service bound to the provided registry.
    #[must_use]
    pub fn new(registry: Arc<PluginRegistry>) -> Self {
        Self { registry }
    }

    /// List all available councils and their display names.
    #[must_use]
    pub fn councils(&self) -> Vec<(CouncilId, String)> {
        self.registry
            .councils()
            .into_iter()
            .map(|meta| (meta.id, meta.name))
            .collect()
    }

    /// Load the collection schedule for a property, keeping failure
    /// information.
    ///
    /// # Errors
    ///
    /// Returns a [`PortError`] if the council is unsupported or the
    /// provider request fails.
    pub async fn try_collection_for(
        &self,
        council: CouncilId,
        property: &PropertyId,
    ) -> Result<CollectionResult, PortError> {
        let plugin = self.registry.plugin(&council)?;
        plugin.collection_port.collection(property).await
    }

    /// Load the collection schedule for a property, degrading every
    /// failure to [`CollectionResult::unknown`].
    ///
    /// Callers always receive a displayable value; an unreachable site
    /// and a property with no published schedule look identical here.
    /// The underlying cause is logged before it is discarded.
    pub async fn collection_for(
        &self,
        council: CouncilId,
        property: &PropertyId,
    ) -> CollectionResult {
        match self.try_collection_for(council.clone(), property).await {
            Ok(result) => result,
            Err(err) => {
                log::warn!(
                    "collection lookup failed for property {} ({}): {err}",
                    property.0,
                    council.0
                );
                CollectionResult::unknown()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{BinEntry, CouncilMeta};
    use crate::plugin::CouncilPlugin;
    use crate::ports::CollectionPort;
    use async_trait::async_trait;

    struct FixedPort {
        meta: CouncilMeta,
        outcome: Result<CollectionResult, String>,
    }

    #[async_trait]
    impl CollectionPort for FixedPort {
        fn council(&self) -> &CouncilMeta {
            &self.meta
        }

        async fn collection(
            &self,
            _property: &PropertyId,
        ) -> Result<CollectionResult, PortError> {
            self.outcome.clone().map_err(PortError::Internal)
        }
    }

    fn service_with(outcome: Result<CollectionResult, String>) -> KerbsideService {
        let meta = CouncilMeta {
            id: CouncilId("testshire".to_owned()),
            name: "Testshire".to_owned(),
        };
        let plugin = CouncilPlugin {
            meta: meta.clone(),
            collection_port: Arc::new(FixedPort { meta, outcome }),
        };
        KerbsideService::new(Arc::new(PluginRegistry::new(vec![plugin])))
    }

    fn testshire() -> CouncilId {
        CouncilId("testshire".to_owned())
    }

    #[tokio::test]
    async fn collection_for_passes_through_provider_results() {
        let expected = CollectionResult {
            collection_day_label: "Your next collection is on Monday".to_owned(),
            bins: vec![BinEntry {
                raw_name: "Blue Box (Paper)".to_owned(),
                date_label: "14 Jul".to_owned(),
            }],
        };
        let service = service_with(Ok(expected.clone()));

        let result = service
            .collection_for(testshire(), &PropertyId("100100".to_owned()))
            .await;

        assert_eq!(result, expected);
    }

    #[tokio::test]
    async fn collection_for_collapses_provider_errors_to_unknown() {
        let service = service_with(Err("backend exploded".to_owned()));

        let result = service
            .collection_for(testshire(), &PropertyId("100100".to_owned()))
            .await;

        assert_eq!(result, CollectionResult::unknown());
    }

    #[tokio::test]
    async fn collection_for_collapses_unsupported_council_to_unknown() {
        let service = service_with(Ok(CollectionResult::unknown()));

        let result = service
            .collection_for(
                CouncilId("elsewhere".to_owned()),
                &PropertyId("100100".to_owned()),
            )
            .await;

        assert_eq!(result, CollectionResult::unknown());
    }

    #[tokio::test]
    async fn try_collection_for_surfaces_the_error() {
        let service = service_with(Err("backend exploded".to_owned()));

        let outcome = service
            .try_collection_for(testshire(), &PropertyId("100100".to_owned()))
            .await;

        assert!(matches!(outcome, Err(PortError::Internal(_))));
    }
}
