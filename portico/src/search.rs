//! Global search box: debounced suggestions and the search redirect.

use std::time::{Duration, Instant};

use log::debug;

use crate::config::PortalConfig;
use crate::debounce::Debounce;

/// Path the search form redirects to.
pub const DEFAULT_SEARCH_PATH: &str = "/cours/";

/// Shortest query that triggers a suggestion.
pub const DEFAULT_MIN_SUGGEST_LEN: usize = 3;

/// State behind the global search input.
#[derive(Debug, Clone)]
pub struct SearchBox {
    debounce: Debounce<String>,
    min_suggest_len: usize,
    search_path: String,
}

impl SearchBox {
    /// Create a search box.
    pub fn new(delay: Duration, min_suggest_len: usize, search_path: impl Into<String>) -> Self {
        Self {
            debounce: Debounce::new(delay),
            min_suggest_len,
            search_path: search_path.into(),
        }
    }

    /// Create a search box from configuration.
    pub fn from_config(config: &PortalConfig) -> Self {
        Self::new(
            config.debounce(),
            config.min_suggest_len,
            config.search_path.clone(),
        )
    }

    /// Record the input's current text, restarting the suggestion timer.
    pub fn on_input(&mut self, text: &str, now: Instant) {
        self.debounce.push(text.to_string(), now);
    }

    /// Query to suggest for, once the input has been quiet long enough.
    ///
    /// Queries shorter than the minimum length are dropped.
    pub fn poll_suggestion(&mut self, now: Instant) -> Option<String> {
        let query = self.debounce.poll(now)?;
        if self.should_suggest(&query) {
            debug!("Suggesting for '{}'", query);
            Some(query)
        } else {
            None
        }
    }

    /// When a pending suggestion is due.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Whether `query` is long enough to suggest for, in UTF-16 code units.
    pub fn should_suggest(&self, query: &str) -> bool {
        query.encode_utf16().count() >= self.min_suggest_len
    }

    /// Redirect target for submitting `query`, or `None` for a blank query.
    pub fn search_url(&self, query: &str) -> Option<String> {
        if query.trim().is_empty() {
            return None;
        }
        Some(format!(
            "{}?search={}",
            self.search_path,
            urlencoding::encode(query)
        ))
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::from_config(&PortalConfig::default())
    }
}
