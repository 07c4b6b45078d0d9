//! Service configuration.

use recommend::{DEFAULT_LIMIT, HOME_LIMIT};

/// Books per browse page when the request does not say
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Tunables for [`crate::BookwormService`].
///
/// ## Usage
/// ```ignore
/// let config = ServiceConfig::default()
///     .with_page_size(12)
///     .with_home_limit(4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    pub page_size: usize,
    pub recommendation_limit: usize,
    pub home_limit: usize,
}

impl ServiceConfig {
    /// Configure the browse page size (default: 6)
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Configure the recommendations page length (default: 12)
    pub fn with_recommendation_limit(mut self, limit: usize) -> Self {
        self.recommendation_limit = limit;
        self
    }

    /// Configure the home page strip length (default: 6)
    pub fn with_home_limit(mut self, limit: usize) -> Self {
        self.home_limit = limit;
        self
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            recommendation_limit: DEFAULT_LIMIT,
            home_limit: HOME_LIMIT,
        }
    }
}
