//! `window.location` / `window.history` as a [`HistoryBackend`].

use portfolio_core::{HistoryBackend, PortfolioError, PortfolioResult};
use wasm_bindgen::JsValue;

use super::js_message;

/// The page's own URL and history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserHistory;

impl HistoryBackend for BrowserHistory {
    fn current_href(&self) -> Option<String> {
        web_sys::window()?.location().href().ok()
    }

    fn replace(&self, relative_url: &str) -> PortfolioResult<()> {
        let window =
            web_sys::window().ok_or_else(|| PortfolioError::History("no window".to_string()))?;
        let history = window
            .history()
            .map_err(|e| PortfolioError::History(js_message(&e)))?;
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(relative_url))
            .map_err(|e| PortfolioError::History(js_message(&e)))
    }
}
