use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use gallery_core::{BrowserConfig, ConfigError, StaleResponsePolicy};
use gallery_engine::{EngineConfig, FetchSettings, DEFAULT_BASE_URL};
use serde::Deserialize;
use thiserror::Error;

use super::cli::CliArgs;
use super::logging::LogDestination;

const DEFAULT_CONFIG_FILENAME: &str = "gallery.ron";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum StaleResponses {
    /// Drop responses to superseded requests.
    #[default]
    Discard,
    /// Let whichever response arrives last replace the page.
    LastWriterWins,
}

impl From<StaleResponses> for StaleResponsePolicy {
    fn from(value: StaleResponses) -> Self {
        match value {
            StaleResponses::Discard => StaleResponsePolicy::DiscardStale,
            StaleResponses::LastWriterWins => StaleResponsePolicy::LastWriterWins,
        }
    }
}

#[derive(Debug, Error)]
pub enum AppConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub page_size: u32,
    pub assumed_total: u64,
    pub base_url: String,
    pub stale_responses: StaleResponses,
    pub connect_timeout_secs: Option<u64>,
    pub request_timeout_secs: Option<u64>,
    pub max_bytes: u64,
    pub log_to: LogDestination,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        let browser = BrowserConfig::default();
        Self {
            page_size: browser.page_size(),
            assumed_total: browser.assumed_total(),
            base_url: DEFAULT_BASE_URL.to_string(),
            stale_responses: StaleResponses::default(),
            connect_timeout_secs: None,
            request_timeout_secs: None,
            max_bytes: fetch.max_bytes,
            log_to: LogDestination::default(),
        }
    }
}

impl GalleryConfig {
    /// Loads the file from [`GalleryConfig::source_path`], else defaults.
    /// Command-line values override the file.
    pub fn load(args: &CliArgs) -> Result<Self, AppConfigError> {
        let mut config = match Self::source_path(args) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(args);
        Ok(config)
    }

    /// The file named on the command line, else `./gallery.ron` when it exists.
    pub fn source_path(args: &CliArgs) -> Option<PathBuf> {
        match &args.config {
            Some(path) => Some(path.clone()),
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILENAME);
                fallback.is_file().then(|| fallback.to_path_buf())
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, AppConfigError> {
        let content = fs::read_to_string(path).map_err(|source| AppConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = ron::from_str(&content).map_err(|source| AppConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, args: &CliArgs) {
        if let Some(page_size) = args.page_size {
            self.page_size = page_size;
        }
        if let Some(total) = args.assumed_total {
            self.assumed_total = total;
        }
        if let Some(base_url) = &args.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(policy) = args.stale_responses {
            self.stale_responses = policy;
        }
        if let Some(log_to) = args.log_to {
            self.log_to = log_to;
        }
    }

    pub fn browser_config(&self) -> Result<BrowserConfig, AppConfigError> {
        let config = BrowserConfig::new(self.page_size, self.assumed_total)?
            .with_stale_responses(self.stale_responses.into());
        Ok(config)
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            fetch: FetchSettings {
                base_url: self.base_url.clone(),
                page_size: self.page_size,
                connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
                request_timeout: self.request_timeout_secs.map(Duration::from_secs),
                max_bytes: self.max_bytes,
            },
            fetched_utc: Some(Arc::new(|| Utc::now().to_rfc3339())),
        }
    }
}
