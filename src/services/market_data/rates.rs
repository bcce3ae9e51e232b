use std::collections::HashMap;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum RateError {
    #[error("could not reach the rate provider: {0}")]
    Network(#[source] reqwest::Error),
    #[error("the rate provider rejected the configured API key")]
    Auth,
    #[error("unusable rate response: {0}")]
    InvalidResponse(String),
}

/// Body shape of the provider's `/latest/{code}` endpoint. Error replies
/// carry `result: "error"` and an `error-type` string instead of rates.
#[derive(Debug, Deserialize)]
struct RateTable {
    #[serde(default)]
    result: Option<String>,
    #[serde(default, rename = "error-type")]
    error_type: Option<String>,
    #[serde(default)]
    conversion_rates: HashMap<String, Decimal>,
}

pub struct RateClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl RateClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
            api_key,
        }
    }

    /// One outbound call per conversion: fetch the full rate table for
    /// `from`, then select the `to` entry. Codes must already be validated
    /// against the catalog.
    pub async fn fetch_rate(&self, from: &str, to: &str) -> Result<Decimal, RateError> {
        let url = format!("{}{}/latest/{}", self.base_url, self.api_key, from);
        let response = self
            .http
            .get(&url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(RateError::Network)?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(RateError::Auth);
        }

        let body = response.text().await.map_err(RateError::Network)?;
        let table: RateTable = serde_json::from_str(&body)
            .map_err(|err| RateError::InvalidResponse(format!("unparsable body ({err})")))?;

        debug!(from, to, "fetched rate table");
        select_rate(&table, to)
    }
}

fn select_rate(table: &RateTable, to: &str) -> Result<Decimal, RateError> {
    if table.result.as_deref() == Some("error") || table.error_type.is_some() {
        return Err(match table.error_type.as_deref() {
            Some("invalid-key") | Some("inactive-account") => RateError::Auth,
            Some(other) => RateError::InvalidResponse(format!("provider error: {other}")),
            None => RateError::InvalidResponse("provider error: unknown".to_string()),
        });
    }

    let rate = table
        .conversion_rates
        .get(to)
        .copied()
        .ok_or_else(|| RateError::InvalidResponse(format!("no rate for {to} in response")))?;

    if rate <= Decimal::ZERO {
        return Err(RateError::InvalidResponse(format!(
            "non-positive rate {rate} for {to}"
        )));
    }
    Ok(rate)
}
