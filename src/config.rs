use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const CONFIG_ENV: &str = "FOLLOWGRAPH_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "followgraph.toml";
const MAX_RETRIES_LIMIT: usize = 10;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub crawl: CrawlConfig,
    #[serde(default)]
    pub github: GithubConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Traversal bounds and seed
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Account the crawl starts from.
    pub seed_identity: String,
    /// Expansions stop recursing once this depth is reached (seed is depth 0).
    pub max_depth: usize,
    /// Only the first N followers and first N followed accounts are recursed into.
    pub branch_limit: usize,
    /// Collapse repeated source/target pairs into one link.
    pub dedup_edges: bool,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            seed_identity: "nanashi314".to_string(),
            max_depth: 2,
            branch_limit: 10,
            dedup_edges: false,
        }
    }
}

/// GitHub REST API client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub base_url: String,
    /// Name of the environment variable holding the bearer token.
    pub token_env: String,
    pub per_page: u32,
    pub timeout_secs: u64,
    pub max_retries: usize,
    pub user_agent: String,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.github.com".to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
            per_page: 30,
            timeout_secs: 30,
            max_retries: 0,
            user_agent: format!("followgraph/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Artifact output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub path: PathBuf,
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("graph.json"),
            pretty: true,
        }
    }
}

impl Config {
    /// Load configuration from file
    ///
    /// Loads environment variables from .env file (if present) before loading config.
    /// Looks for config file in this order:
    /// 1. Path specified in FOLLOWGRAPH_CONFIG environment variable
    /// 2. ./followgraph.toml in current directory
    ///
    /// Falls back to built-in defaults when neither is present.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration, preferring an explicitly named file.
    ///
    /// An explicit path (argument or FOLLOWGRAPH_CONFIG) must exist; only the
    /// implicit ./followgraph.toml is optional.
    pub fn load_from(explicit: Option<&Path>) -> Result<Self> {
        // Load .env file if it exists (ignore errors - file is optional)
        let _ = dotenv::dotenv();

        let explicit = explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

        let config = match explicit {
            Some(path) => Self::read_file(&path)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    Self::read_file(&default_path)?
                } else {
                    log::debug!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
                    Config::default()
                }
            }
        };

        config.validate()?;

        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.crawl.seed_identity.trim().is_empty() {
            anyhow::bail!("crawl.seed_identity must not be empty");
        }

        if self.github.per_page == 0 || self.github.per_page > 100 {
            anyhow::bail!("github.per_page must be between 1 and 100");
        }

        if self.github.timeout_secs == 0 {
            anyhow::bail!("github.timeout_secs must be greater than 0");
        }

        if self.github.max_retries > MAX_RETRIES_LIMIT {
            anyhow::bail!("github.max_retries must be at most {}", MAX_RETRIES_LIMIT);
        }

        let base = url::Url::parse(&self.github.base_url).with_context(|| {
            format!("github.base_url is not a valid URL: {}", self.github.base_url)
        })?;
        if base.cannot_be_a_base() {
            anyhow::bail!("github.base_url must be an absolute http(s) URL");
        }

        Ok(())
    }

    /// Bearer token from the configured environment variable, if set and non-empty.
    pub fn github_token(&self) -> Option<String> {
        std::env::var(&self.github.token_env)
            .ok()
            .filter(|t| !t.trim().is_empty())
    }

    /// Get artifact output path
    pub fn output_path(&self) -> &Path {
        &self.output.path
    }
}
