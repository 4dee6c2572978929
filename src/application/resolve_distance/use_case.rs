use std::sync::Arc;

use tracing::{debug, info, warn};

use super::dto::{DistanceReport, DistanceSource};
use crate::domain::distance::{
    entity::NewPincodeDistance, errors::DomainError, fallback::synthetic_route,
    repository::DistanceRepository, value_objects::Pincode,
};
use crate::domain::shared::duration::format_duration;
use crate::infrastructure::cache::memory_cache::MemoryCache;
use crate::infrastructure::geocoding::pincode_coords::coordinates_for_pincode;
use crate::infrastructure::routing::normalizer::{
    self, NormalizedRoute, ROUTE_POLYLINE_PLACEHOLDER,
};
use crate::infrastructure::routing::traits::RoutingProvider;

/// Cache of fully-built reports, keyed by `"{from}-{to}"`.
pub type DistanceCache = MemoryCache<DistanceReport>;

fn pair_key(from: &str, to: &str) -> String {
    format!("{from}-{to}")
}

/// Resolution engine: cache, then store, then routing provider, then the
/// synthetic fallback. Linear, no branching back.
pub struct ResolveDistanceUseCase {
    repository: Arc<dyn DistanceRepository>,
    router: Arc<dyn RoutingProvider>,
    cache: Arc<DistanceCache>,
}

impl ResolveDistanceUseCase {
    pub fn new(
        repository: Arc<dyn DistanceRepository>,
        router: Arc<dyn RoutingProvider>,
        cache: Arc<DistanceCache>,
    ) -> Self {
        Self {
            repository,
            router,
            cache,
        }
    }

    /// Resolves the distance for an ordered pincode pair.
    ///
    /// Provider trouble of any kind — connect failure, timeout, non-2xx,
    /// unparseable payload — is absorbed by the synthetic fallback and never
    /// surfaces. The only error that escapes is a store failure, for which no
    /// fallback exists.
    pub async fn execute(
        &self,
        from: &Pincode,
        to: &Pincode,
    ) -> Result<DistanceReport, DomainError> {
        let key = pair_key(from.as_str(), to.as_str());

        // The cache is transparent: a hit is returned verbatim, source tag and
        // all, never relabeled as a cache read.
        if let Some(hit) = self.cache.get(&key) {
            debug!("Cache hit for {}", key);
            return Ok(hit);
        }

        if let Some(stored) = self
            .repository
            .find_by_pair(from.as_str(), to.as_str())
            .await?
        {
            info!("Serving stored distance for {}", key);
            let report = DistanceReport::from_entity(&stored, DistanceSource::Database);
            self.cache.insert(key, report.clone());
            return Ok(report);
        }

        let report = match self.fetch_provider_route(from, to).await {
            Ok((route, raw)) => {
                let distance_km = route.distance_meters / 1000.0;
                let record = NewPincodeDistance {
                    from_pincode: from.as_str().to_string(),
                    to_pincode: to.as_str().to_string(),
                    distance_in_meters: route.distance_meters,
                    distance_in_km: distance_km,
                    duration_in_seconds: route.duration_seconds,
                    duration_text: format_duration(route.duration_seconds),
                    route_overview_polyline: ROUTE_POLYLINE_PLACEHOLDER.to_string(),
                    full_route_json: raw,
                };
                self.persist(record, DistanceSource::ExternalApi).await?
            }
            Err(reason) => {
                warn!(
                    "Routing provider failed for {}, using synthetic estimate: {:#}",
                    key, reason
                );
                let route = synthetic_route(from.as_str(), to.as_str());
                let record = NewPincodeDistance {
                    from_pincode: from.as_str().to_string(),
                    to_pincode: to.as_str().to_string(),
                    distance_in_meters: route.distance_km * 1000.0,
                    distance_in_km: route.distance_km,
                    duration_in_seconds: route.duration_seconds,
                    duration_text: format_duration(route.duration_seconds),
                    route_overview_polyline: route.polyline,
                    full_route_json: serde_json::json!({
                        "from": from.as_str(),
                        "to": to.as_str(),
                        "distance_km": route.distance_km,
                        "source": "fallback",
                    })
                    .to_string(),
                };
                self.persist(record, DistanceSource::Fallback).await?
            }
        };

        self.cache.insert(key, report.clone());
        Ok(report)
    }

    async fn fetch_provider_route(
        &self,
        from: &Pincode,
        to: &Pincode,
    ) -> anyhow::Result<(NormalizedRoute, String)> {
        let start = coordinates_for_pincode(from.as_str());
        let end = coordinates_for_pincode(to.as_str());
        let raw = self.router.fetch_route(start, end).await?;
        let route = normalizer::normalize(&raw)?;
        Ok((route, raw))
    }

    /// Inserts the computed record. Losing the insert race is not an error:
    /// the winner's row is authoritative, so it is re-read and served instead.
    async fn persist(
        &self,
        record: NewPincodeDistance,
        source: DistanceSource,
    ) -> Result<DistanceReport, DomainError> {
        let from = record.from_pincode.clone();
        let to = record.to_pincode.clone();

        match self.repository.insert(record).await {
            Ok(entity) => Ok(DistanceReport::from_entity(&entity, source)),
            Err(DomainError::Conflict) => {
                info!(
                    "Concurrent insert for {}-{}, re-reading the stored row",
                    from, to
                );
                match self.repository.find_by_pair(&from, &to).await? {
                    Some(entity) => {
                        Ok(DistanceReport::from_entity(&entity, DistanceSource::Database))
                    }
                    None => Err(DomainError::Infrastructure(format!(
                        "Record for {}-{} vanished after insert conflict",
                        from, to
                    ))),
                }
            }
            Err(e) => Err(e),
        }
    }
}
