use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: u32 = 12;
pub const DEFAULT_ASSUMED_TOTAL: u64 = 240;

/// What to do with a page response that answers a superseded request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StaleResponsePolicy {
    /// Only the most recently issued request may replace the resident page.
    #[default]
    DiscardStale,
    /// Any successful response replaces the resident page, in arrival order.
    LastWriterWins,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// Paging parameters supplied at construction.
///
/// `assumed_total` drives the page-navigation bounds only; it is never checked
/// against what the page source actually holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrowserConfig {
    page_size: u32,
    assumed_total: u64,
    stale_responses: StaleResponsePolicy,
}

impl BrowserConfig {
    pub fn new(page_size: u32, assumed_total: u64) -> Result<Self, ConfigError> {
        if page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        Ok(Self {
            page_size,
            assumed_total,
            stale_responses: StaleResponsePolicy::default(),
        })
    }

    pub fn with_stale_responses(mut self, policy: StaleResponsePolicy) -> Self {
        self.stale_responses = policy;
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn assumed_total(&self) -> u64 {
        self.assumed_total
    }

    pub fn stale_responses(&self) -> StaleResponsePolicy {
        self.stale_responses
    }

    /// Number of pages the navigation control offers. Never less than 1.
    pub fn page_count(&self) -> u32 {
        let size = u64::from(self.page_size);
        let pages = self.assumed_total.div_ceil(size).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            assumed_total: DEFAULT_ASSUMED_TOTAL,
            stale_responses: StaleResponsePolicy::default(),
        }
    }
}
