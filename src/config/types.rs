use serde::Deserialize;

/// Default simple-index root of the public Python package index
pub const DEFAULT_BASE_URL: &str = "https://pypi.python.org/simple/";

/// Default per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Main configuration structure for the survey
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub index: IndexConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Package index location
#[derive(Debug, Clone, Deserialize)]
pub struct IndexConfig {
    /// Root of the flat project listing; project pages live at `<base-url><name>/`
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,
}

/// HTTP client settings
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Timeout applied to every single request (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,
}

/// Output file locations
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Where the crawl stage writes its per-project classification
    #[serde(rename = "crawl-path", default = "default_crawl_path")]
    pub crawl_path: String,

    /// Where the aggregate stage writes its report
    #[serde(rename = "report-path", default = "default_report_path")]
    pub report_path: String,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            crawl_path: default_crawl_path(),
            report_path: default_report_path(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

fn default_crawl_path() -> String {
    "data.json".to_string()
}

fn default_report_path() -> String {
    "processed.json".to_string()
}
