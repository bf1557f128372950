#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime settings for the catalog import tooling.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Origin of the back-office backend, e.g. `"http://localhost:3000"`.
    pub api_base_url: String,
    /// Path of the bulk product creation route, joined onto `api_base_url`.
    pub bulk_create_path: String,
    /// Request timeout for the bulk upload. `None` leaves the request unbounded.
    pub http_timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl AppConfig {
    /// Full URL of the bulk creation endpoint.
    #[must_use]
    pub fn bulk_create_url(&self) -> String {
        format!(
            "{}/{}",
            self.api_base_url.trim_end_matches('/'),
            self.bulk_create_path.trim_start_matches('/')
        )
    }
}
