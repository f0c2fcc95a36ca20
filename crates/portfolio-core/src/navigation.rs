//! View routing through the `page` query parameter.
//!
//! The browser URL is the only state the site keeps. It is read once at
//! startup by [`initial_view`] and written only by [`Navigator::navigate_to`],
//! which replaces the current history entry instead of pushing a new one.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PortfolioError, PortfolioResult};
use crate::url::PageUrl;

/// Query parameter holding the current view.
pub const PAGE_PARAM: &str = "page";

/// Top-level views of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Home,
    Resume,
    Contact,
}

impl View {
    pub const ALL: [View; 3] = [View::Home, View::Resume, View::Contact];

    /// Name used in the `page` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Home => "home",
            View::Resume => "resume",
            View::Contact => "contact",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = PortfolioError;

    /// Exact, case-sensitive match on the view name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| PortfolioError::InvalidView(s.to_string()))
    }
}

/// View named by the `page` parameter of `href`.
///
/// Missing or unrecognized values, and a missing href (no window, e.g.
/// pre-rendering), all fall back to [`View::Home`].
pub fn initial_view(href: Option<&str>) -> View {
    href.map(PageUrl::parse)
        .and_then(|url| url.query.get(PAGE_PARAM).and_then(|page| page.parse().ok()))
        .unwrap_or_default()
}

/// Relative URL (`path?query#fragment`) for showing `view` from `href`.
///
/// Home removes the `page` parameter; every other view sets it. Other
/// parameters and the fragment are left alone.
pub fn rewrite_href(href: &str, view: View) -> String {
    let mut url = PageUrl::parse(href);
    match view {
        View::Home => url.query.remove(PAGE_PARAM),
        other => url.query.set(PAGE_PARAM, other.as_str()),
    }
    url.relative()
}

/// Access to the host's current URL and history.
pub trait HistoryBackend {
    /// Current absolute href, `None` when there is no window.
    fn current_href(&self) -> Option<String>;

    /// Replace the current history entry with `relative_url` without
    /// reloading.
    fn replace(&self, relative_url: &str) -> PortfolioResult<()>;
}

/// Single owner of the current view and the only writer of the URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigator<H> {
    current: View,
    history: H,
}

impl<H: HistoryBackend> Navigator<H> {
    /// Read the initial view from the history's current URL.
    pub fn new(history: H) -> Self {
        let current = initial_view(history.current_href().as_deref());
        tracing::debug!(view = %current, "Initial view");
        Self { current, history }
    }

    pub fn current(&self) -> View {
        self.current
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// Show `view`, then rewrite the URL in place to match it.
    ///
    /// The view changes even when the URL cannot be written; the failure is
    /// only logged.
    pub fn navigate_to(&mut self, view: View) {
        self.current = view;

        let Some(href) = self.history.current_href() else {
            return;
        };
        let next = rewrite_href(&href, view);
        match self.history.replace(&next) {
            Ok(()) => tracing::info!(view = %view, url = %next, "Navigated"),
            Err(e) => tracing::warn!("Failed to update URL for {}: {}", view, e),
        }
    }
}
