use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::header;
use serde::Deserialize;

/* API contains the logic for calling external APIs.
 * Links the bot's logic with anything it needs from the internet:
 * the daily reference-rate XML feed, and the live rates service.
 */

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Malformed rates feed: {0}")]
    Xml(#[from] quick_xml::de::DeError),
    #[error("Rates feed contains no rate groups")]
    EmptyFeed,
}

/* Live rates for a base currency, fetched fresh on every request.
 * Values are keyed by currency code, ordered alphabetically.
 */
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LiveRates {
    pub base: String,
    pub date: String,
    #[serde(rename = "rates")]
    pub values: BTreeMap<String, f64>,
}

#[async_trait]
pub trait RatesSource: Send + Sync {
    async fn latest(&self, base: &str) -> Result<LiveRates, ApiError>;
}

fn json_client() -> Result<reqwest::Client, ApiError> {
    let mut h = header::HeaderMap::new();
    h.insert(
        "Accept",
        header::HeaderValue::from_static("application/json"),
    );

    Ok(reqwest::Client::builder().default_headers(h).build()?)
}

// Live rates from the Frankfurter API.
#[derive(Clone, Debug)]
pub struct FrankfurterApi {
    client: reqwest::Client,
    url: String,
}

impl FrankfurterApi {
    pub fn new(url: &str) -> Result<FrankfurterApi, ApiError> {
        Ok(FrankfurterApi {
            client: json_client()?,
            url: url.to_string(),
        })
    }
}

#[async_trait]
impl RatesSource for FrankfurterApi {
    async fn latest(&self, base: &str) -> Result<LiveRates, ApiError> {
        let rates = self
            .client
            .get(&self.url)
            .query(&[("from", base)])
            .send()
            .await?
            .error_for_status()?
            .json::<LiveRates>()
            .await?;

        Ok(rates)
    }
}

// Retrieves the raw body of the daily XML feed.
pub async fn fetch_snapshot_xml(url: &str) -> Result<String, ApiError> {
    let body = reqwest::get(url).await?.error_for_status()?.text().await?;
    Ok(body)
}
