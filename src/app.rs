use crate::config::Config;
use crate::github::client::{GithubTracker, Tracker};
use std::sync::Arc;

/// Shared state handed to every webhook request. Built once at startup.
#[derive(Clone)]
pub struct App {
    pub tracker: Arc<dyn Tracker>,
    pub bot_login: Arc<str>,
}

impl App {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let tracker = GithubTracker::from_config(config)?;

        Ok(Self::with_tracker(Arc::new(tracker), &config.bot_login))
    }

    pub fn with_tracker(tracker: Arc<dyn Tracker>, bot_login: &str) -> Self {
        Self {
            tracker,
            bot_login: Arc::from(bot_login),
        }
    }
}
