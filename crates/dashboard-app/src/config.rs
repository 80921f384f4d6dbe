//! Configuration for the dashboard application.
//!
//! The API base URL is an explicit value injected into the HTTP gateway at
//! construction time, never a literal buried in a request call. It comes
//! from `PRODUCT_API_URL` when set, with a local-development default.

/// Environment variable overriding the product API base URL.
pub const API_URL_ENV: &str = "PRODUCT_API_URL";

const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Base URL the gateway prefixes onto every resource path, e.g.
    /// `http://localhost:3000/api`.
    pub api_base_url: String,
}

impl DashboardConfig {
    /// Reads the configuration from the environment, falling back to the
    /// local-development default.
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var(API_URL_ENV)
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = DashboardConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:3000/api");
    }
}
