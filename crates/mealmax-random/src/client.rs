//! Blocking random.org client

use crate::config::RandomOrgConfig;
use mealmax_core::{RandomError, RandomSource};
use reqwest::blocking::Client;
use tracing::{debug, error};

/// Random source backed by random.org's decimal-fractions endpoint
#[derive(Debug, Clone)]
pub struct RandomOrgClient {
    url: String,
    client: Client,
}

impl RandomOrgClient {
    /// Build a client with the configured deadline.
    pub fn new(config: &RandomOrgConfig) -> Result<Self, RandomError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| RandomError::Network(e.to_string()))?;
        Ok(Self {
            url: config.url.clone(),
            client,
        })
    }

    /// Endpoint this client queries
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl RandomSource for RandomOrgClient {
    fn fetch(&mut self) -> Result<f64, RandomError> {
        debug!(url = %self.url, "requesting random number");
        let body = self
            .client
            .get(&self.url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| {
                let err = classify(e);
                error!(%err, "random.org request failed");
                err
            })?;

        let value = parse_fraction(&body).inspect_err(|err| error!(%err, "bad random.org body"))?;
        debug!(value, "received random number");
        Ok(value)
    }
}

fn classify(err: reqwest::Error) -> RandomError {
    if err.is_timeout() {
        RandomError::Timeout
    } else {
        RandomError::Network(err.to_string())
    }
}

/// Parse a plain-text decimal body such as `"0.42\n"`.
///
/// Anything that is not a number in `[0, 1)` is a bad response.
pub fn parse_fraction(body: &str) -> Result<f64, RandomError> {
    let text = body.trim();
    text.parse::<f64>()
        .ok()
        .filter(|value| (0.0..1.0).contains(value))
        .ok_or_else(|| RandomError::BadResponse(text.to_string()))
}
