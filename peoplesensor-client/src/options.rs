//! Connection options

pub const ENV_API_KEY: &str = "VIAM_API_KEY";
pub const ENV_API_KEY_ID: &str = "VIAM_API_KEY_ID";
pub const ENV_ADDRESS: &str = "VIAM_ADDRESS";

/// Credentials forwarded on every request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    pub api_key: String,
    pub api_key_id: String,
}

impl ClientOptions {
    pub fn with_api_key(api_key: &str, api_key_id: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            api_key_id: api_key_id.to_string(),
        }
    }

    /// Credentials from `VIAM_API_KEY` and `VIAM_API_KEY_ID`. Unset variables
    /// become empty strings.
    pub fn from_env() -> Self {
        Self {
            api_key: env_or_empty(ENV_API_KEY),
            api_key_id: env_or_empty(ENV_API_KEY_ID),
        }
    }
}

/// Robot address from `VIAM_ADDRESS`, empty if unset.
pub fn address_from_env() -> String {
    env_or_empty(ENV_ADDRESS)
}

fn env_or_empty(key: &str) -> String {
    std::env::var(key).unwrap_or_default()
}

/// Turn `host:port` into a base URL. Addresses that already carry a scheme are
/// kept, minus any trailing slash.
pub fn base_url(address: &str) -> String {
    let trimmed = address.trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_api_key() {
        let opts = ClientOptions::with_api_key("secret", "key-id");
        assert_eq!(opts.api_key, "secret");
        assert_eq!(opts.api_key_id, "key-id");
    }

    #[test]
    fn test_base_url() {
        assert_eq!(base_url("localhost:8080"), "http://localhost:8080");
        assert_eq!(base_url("https://robot.local/"), "https://robot.local");
        assert_eq!(base_url("http://127.0.0.1:9000"), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_env_or_empty_unset() {
        assert_eq!(env_or_empty("PEOPLESENSOR_TEST_SURELY_UNSET_VARIABLE"), "");
    }
}
