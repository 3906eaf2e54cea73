use serde::Serialize;
use statbot_core::{Category, StatsResult};
use statbot_logging::bot_info;

use crate::http::{ensure_success, map_reqwest_error, parse_url};
use crate::{FetchError, FetchSettings};

#[async_trait::async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch_stats(&self, token: &str, category: Category) -> Result<StatsResult, FetchError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct StatsRequest<'a> {
    network_id: u32,
    stats: &'a str,
    ftl: bool,
}

/// Client for the analytics `getCteStats` endpoint.
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: reqwest::Client,
    url: reqwest::Url,
    network_id: u32,
}

impl StatsClient {
    pub fn new(url: &str, network_id: u32, settings: &FetchSettings) -> Result<Self, FetchError> {
        Ok(Self {
            client: settings.build_client()?,
            url: parse_url(url)?,
            network_id,
        })
    }
}

#[async_trait::async_trait]
impl StatsSource for StatsClient {
    async fn fetch_stats(&self, token: &str, category: Category) -> Result<StatsResult, FetchError> {
        let response = self
            .client
            .post(self.url.clone())
            .bearer_auth(token)
            .json(&StatsRequest {
                network_id: self.network_id,
                stats: category.key(),
                ftl: false,
            })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let items: StatsResult = ensure_success(response)?
            .json()
            .await
            .map_err(map_reqwest_error)?;
        bot_info!("Fetched {} stats items for {}", items.len(), category.key());
        Ok(items)
    }
}
