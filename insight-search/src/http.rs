//! Shared HTTP client construction.
//!
//! The search engine and the page fetcher both build their client through
//! [`build_client`], so every request carries a browser User-Agent, the
//! configured timeout and a bounded redirect chain.

use crate::config::SearchConfig;
use crate::error::SearchError;
use rand::seq::SliceRandom;
use std::time::Duration;

/// Browser User-Agents, one picked at random per client.
const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:133.0) Gecko/20100101 Firefox/133.0",
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:133.0) Gecko/20100101 Firefox/133.0",
];

/// Build a client for `config`.
///
/// Cookies are kept for the lifetime of the client so consent redirects
/// resolve.
///
/// # Errors
///
/// [`SearchError::Config`] if `config` fails validation,
/// [`SearchError::Http`] if the TLS backend cannot be initialised.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    config.validate()?;

    let user_agent = config
        .user_agent
        .as_deref()
        .unwrap_or_else(|| random_user_agent());

    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(config.timeout_seconds))
        .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
        .cookie_store(true)
        .build()
        .map_err(|e| SearchError::Http(format!("cannot build HTTP client: {e}")))
}

/// A random entry from the built-in User-Agent list.
pub fn random_user_agent() -> &'static str {
    USER_AGENTS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(USER_AGENTS[0])
}
