use crate::error::Error;
use crate::send_result::SendResult;

pub const DEFAULT_ENDPOINT_URL: &str = "https://inject.socketlabs.com/api/v1/email";

/// The most retries the Injection API client will make
pub const MAX_RETRIES: u8 = 5;

/// Injection API client settings. These are consumed by the transport; this
/// crate only carries and checks them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_id: u64,
    pub api_key: String,
    pub endpoint_url: String,
    pub request_timeout_secs: u64,
    pub number_of_retries: u8,
    pub proxy_url: Option<String>,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            server_id: 0,
            api_key: String::new(),
            endpoint_url: DEFAULT_ENDPOINT_URL.to_owned(),
            request_timeout_secs: 120,
            number_of_retries: 0,
            proxy_url: None,
        }
    }
}

impl Config {
    pub fn from_toml_str(s: &str) -> Result<Config, Error> {
        Ok(toml::from_str(s)?)
    }

    pub fn is_valid(&self) -> bool {
        self.credential_check().is_success()
            && self.request_timeout_secs > 0
            && self.number_of_retries <= MAX_RETRIES
    }

    /// `AuthenticationValidationFailed` unless both a server id and an api key
    /// are set
    pub fn credential_check(&self) -> SendResult {
        if self.server_id == 0 || self.api_key.trim().is_empty() {
            SendResult::AuthenticationValidationFailed
        } else {
            SendResult::Success
        }
    }
}
