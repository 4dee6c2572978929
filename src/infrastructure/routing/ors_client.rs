use super::traits::RoutingProvider;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use std::time::Duration;
use tracing::debug;

/// OpenRouteService directions client.
///
/// The key travels both as a query parameter and an `Authorization` header,
/// which is what the provider accepts. Log lines carry the URL with the key
/// redacted.
pub struct OrsRoutingClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl OrsRoutingClient {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    // ORS expects coordinates as lon,lat while the resolver hands back (lat, lon).
    fn request_url(&self, start: (f64, f64), end: (f64, f64)) -> String {
        format!(
            "{}?start={},{}&end={},{}&api_key={}",
            self.base_url, start.1, start.0, end.1, end.0, self.api_key
        )
    }
}

#[async_trait]
impl RoutingProvider for OrsRoutingClient {
    async fn fetch_route(&self, start: (f64, f64), end: (f64, f64)) -> anyhow::Result<String> {
        let url = self.request_url(start, end);
        debug!(
            "Routing request: {}",
            url.replace(&self.api_key, "API_KEY_HIDDEN")
        );

        let body = self
            .client
            .get(&url)
            .header(AUTHORIZATION, &self.api_key)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::OrsRoutingClient;
    use std::time::Duration;

    #[test]
    fn request_url_swaps_to_lon_lat_order() {
        let client = OrsRoutingClient::new(
            "https://ors.example/v2/directions/driving-car".to_string(),
            "secret".to_string(),
            Duration::from_secs(5),
        )
        .unwrap();

        let url = client.request_url((30.9010, 75.8577), (28.7041, 77.1025));
        assert_eq!(
            url,
            "https://ors.example/v2/directions/driving-car?start=75.8577,30.901&end=77.1025,28.7041&api_key=secret"
        );
    }
}
