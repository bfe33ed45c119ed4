use crate::api::RouteApi;
use crate::error::ClientError;
use crate::types::ClientConfig;
use async_trait::async_trait;
use bulkroute_types::{ChangeSet, Route, RouteCounts, RoutingSet};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;

pub struct BulkRouteClient {
    client: Client,
    base_url: Url,
    config: ClientConfig,
}

impl BulkRouteClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(format!(
                "{}: not usable as a base URL",
                config.base_url
            )));
        }
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, base_url, config })
    }

    /// Gets the route for a single alias.
    pub async fn get_route(&self, alias: &str) -> Result<Route, ClientError> {
        let endpoint = format!("route/{alias}");
        let url = self.url(&["route", alias])?;
        let body = self.send(self.client.get(url), &endpoint).await?;
        decode(&endpoint, &body)
    }

    /// Creates or updates a single alias.
    pub async fn set_route(&self, alias: &str, route: &Route) -> Result<(), ClientError> {
        let endpoint = format!("route/{alias}");
        let url = self.url(&["route", alias])?;
        self.send(self.client.put(url).json(route), &endpoint).await?;
        Ok(())
    }

    /// Deletes a single alias. The API treats a PUT without a body as removal.
    pub async fn delete_route(&self, alias: &str) -> Result<(), ClientError> {
        let endpoint = format!("route/{alias}");
        let url = self.url(&["route", alias])?;
        self.send(self.client.put(url), &endpoint).await?;
        Ok(())
    }

    /// Retrieves all authorized routes.
    pub async fn get_routes(&self) -> Result<RoutingSet, ClientError> {
        let endpoint = "routes";
        let body = self.send(self.client.get(self.url(&["routes"])?), endpoint).await?;
        decode_routes(endpoint, &body)
    }

    /// Applies a change set in one request; `Delete` entries go out as `null`.
    pub async fn set_routes(&self, changes: &ChangeSet) -> Result<RoutingSet, ClientError> {
        let endpoint = "routes";
        let body = self
            .send(self.client.post(self.url(&["routes"])?).json(changes), endpoint)
            .await?;
        decode_routes(endpoint, &body)
    }

    /// Number of routes per authorized domain.
    pub async fn count_routes(&self) -> Result<RouteCounts, ClientError> {
        let endpoint = "routes/count";
        let body = self
            .send(self.client.get(self.url(&["routes", "count"])?), endpoint)
            .await?;
        decode(endpoint, &body)
    }

    /// Appends percent-encoded path segments to the base URL. Aliases may carry
    /// `#`, `?` or `/` in their local part, so they are never spliced in raw.
    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder, endpoint: &str) -> Result<String, ClientError> {
        let credentials = &self.config.credentials;
        tracing::debug!("Calling {}", endpoint);
        let resp = request
            .basic_auth(&credentials.user, Some(&credentials.pass))
            .send()
            .await?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.text().await?)
    }
}

#[async_trait]
impl RouteApi for BulkRouteClient {
    async fn fetch_routes(&self) -> Result<RoutingSet, ClientError> {
        self.get_routes().await
    }

    async fn apply_batch(&self, batch: &ChangeSet) -> Result<RoutingSet, ClientError> {
        self.set_routes(batch).await
    }
}

fn decode<T: DeserializeOwned>(endpoint: &str, body: &str) -> Result<T, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::InvalidResponse {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })
}

fn decode_routes(endpoint: &str, body: &str) -> Result<RoutingSet, ClientError> {
    let wire: BTreeMap<String, Option<Route>> = decode(endpoint, body)?;
    let (routes, dropped) = RoutingSet::from_nullable(wire);
    for alias in dropped {
        tracing::warn!("Server returned a null route for {}, treating it as absent", alias);
    }
    Ok(routes)
}
