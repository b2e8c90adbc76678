use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
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

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub spreadsheet_id: String,
    /// A1-notation range covering the four product columns, e.g. `"Sheet1!A:D"`.
    pub sheet_range: String,
    pub sheets_base_url: String,
    pub sheets_api_key: Option<String>,
    pub sheets_access_token: Option<String>,
    pub sheets_request_timeout_secs: u64,
    pub sheets_max_retries: u32,
    pub sheets_retry_backoff_base_ms: u64,
    pub rate_limit_max_requests: usize,
    pub rate_limit_window_secs: u64,
    /// Bearer tokens accepted by the server. Empty disables auth in development.
    pub api_keys: Vec<String>,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("spreadsheet_id", &self.spreadsheet_id)
            .field("sheet_range", &self.sheet_range)
            .field("sheets_base_url", &self.sheets_base_url)
            .field(
                "sheets_api_key",
                &self.sheets_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "sheets_access_token",
                &self.sheets_access_token.as_ref().map(|_| "[redacted]"),
            )
            .field(
                "sheets_request_timeout_secs",
                &self.sheets_request_timeout_secs,
            )
            .field("sheets_max_retries", &self.sheets_max_retries)
            .field(
                "sheets_retry_backoff_base_ms",
                &self.sheets_retry_backoff_base_ms,
            )
            .field("rate_limit_max_requests", &self.rate_limit_max_requests)
            .field("rate_limit_window_secs", &self.rate_limit_window_secs)
            .field("api_keys", &format_args!("[{} redacted]", self.api_keys.len()))
            .finish()
    }
}
