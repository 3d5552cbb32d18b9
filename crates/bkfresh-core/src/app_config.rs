use std::net::SocketAddr;
use std::path::PathBuf;

/// Sheet id shipped in templates; the remote stage stays off while it is set.
pub const SHEET_ID_PLACEHOLDER: &str = "YOUR_SHEET_ID_HERE";

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

/// Where the generated `deals.json` document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalDealsLocation {
    Url(String),
    Path(PathBuf),
}

impl LocalDealsLocation {
    /// Interpret a raw config value: `http://` and `https://` values are URLs,
    /// anything else is a filesystem path.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            LocalDealsLocation::Url(trimmed.to_string())
        } else {
            LocalDealsLocation::Path(PathBuf::from(trimmed))
        }
    }
}

impl std::fmt::Display for LocalDealsLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocalDealsLocation::Url(url) => write!(f, "{url}"),
            LocalDealsLocation::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    /// Published Google Sheet id. `None` when unset or still the placeholder.
    pub sheet_id: Option<String>,
    pub sheets_base_url: String,
    pub local_deals: LocalDealsLocation,
    pub source_timeout_secs: u64,
    pub user_agent: String,
}

impl AppConfig {
    /// Returns `true` when a real spreadsheet id is configured.
    #[must_use]
    pub fn remote_enabled(&self) -> bool {
        self.sheet_id.is_some()
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("env", &self.env)
            .field("bind_addr", &self.bind_addr)
            .field("log_level", &self.log_level)
            .field("sheet_id", &self.sheet_id.as_ref().map(|_| "[redacted]"))
            .field("sheets_base_url", &self.sheets_base_url)
            .field("local_deals", &self.local_deals)
            .field("source_timeout_secs", &self.source_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
