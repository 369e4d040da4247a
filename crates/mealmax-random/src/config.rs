//! Configuration for the random.org client

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// random.org endpoint settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RandomOrgConfig {
    /// Endpoint returning one decimal fraction as plain text
    #[serde(default = "default_url")]
    pub url: String,
    /// Request deadline in milliseconds
    #[serde(default = "default_timeout")]
    pub timeout_ms: u64,
}

fn default_url() -> String {
    "https://www.random.org/decimal-fractions/?num=1&dec=2&col=1&format=plain&rnd=new".to_string()
}

fn default_timeout() -> u64 {
    5000
}

impl RandomOrgConfig {
    /// Request deadline
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for RandomOrgConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_ms: default_timeout(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: RandomOrgConfig = ron::from_str("(timeout_ms: 250)").unwrap();
        assert_eq!(config.timeout(), Duration::from_millis(250));
        assert_eq!(config.url, default_url());

        let config: RandomOrgConfig = ron::from_str("()").unwrap();
        assert_eq!(config, RandomOrgConfig::default());
    }
}
