use async_trait::async_trait;

/// Outbound routing provider. Returns the raw response body for the
/// normalizer; any transport-level failure (connect, timeout, non-2xx) is an
/// error here and is handled upstream by falling back to a synthetic estimate.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoutingProvider: Send + Sync {
    /// Fetches a route between two (latitude, longitude) points.
    async fn fetch_route(&self, start: (f64, f64), end: (f64, f64)) -> anyhow::Result<String>;
}
