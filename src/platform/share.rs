//! Native share sheet and file download for the contact card.

use async_trait::async_trait;
use gloo::file::{Blob, ObjectUrl};
use gloo::timers::callback::Timeout;
use js_sys::{Array, Function, Object, Promise, Reflect};
use portfolio_core::{ContactFile, FileDownloader, PortfolioError, PortfolioResult, ShareRequest, ShareSheet};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FilePropertyBag, HtmlAnchorElement};

use super::js_message;

/// `navigator.share`, probed through `navigator.canShare` on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserShareSheet;

fn navigator() -> Option<web_sys::Navigator> {
    web_sys::window().map(|window| window.navigator())
}

/// `target[name]` when it is a function.
fn method(target: &JsValue, name: &str) -> Option<Function> {
    Reflect::get(target, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

fn contact_file(file: &ContactFile) -> Result<web_sys::File, JsValue> {
    let parts = Array::of1(&JsValue::from_str(&file.contents));
    let options = FilePropertyBag::new();
    options.set_type(&file.mime_type);
    web_sys::File::new_with_str_sequence_and_options(&parts, &file.file_name, &options)
}

fn share_data(request: &ShareRequest) -> Result<Object, JsValue> {
    let file = contact_file(&request.file)?;
    let data = Object::new();
    Reflect::set(&data, &"title".into(), &JsValue::from_str(&request.title))?;
    Reflect::set(&data, &"text".into(), &JsValue::from_str(&request.text))?;
    Reflect::set(&data, &"files".into(), &Array::of1(&file))?;
    Ok(data)
}

#[async_trait(?Send)]
impl ShareSheet for BrowserShareSheet {
    async fn can_share(&self, request: &ShareRequest) -> bool {
        let Some(navigator) = navigator() else {
            return false;
        };
        if method(&navigator, "share").is_none() {
            return false;
        }
        let Some(can_share) = method(&navigator, "canShare") else {
            return false;
        };
        let Ok(data) = share_data(request) else {
            return false;
        };
        can_share
            .call1(&navigator, &data)
            .map(|answer| answer.is_truthy())
            .unwrap_or(false)
    }

    async fn share(&self, request: &ShareRequest) -> PortfolioResult<()> {
        let navigator = navigator().ok_or(PortfolioError::ShareUnavailable)?;
        let share = method(&navigator, "share").ok_or(PortfolioError::ShareUnavailable)?;
        let data = share_data(request).map_err(|e| PortfolioError::Share(js_message(&e)))?;

        let promise = share
            .call1(&navigator, &data)
            .map_err(|e| PortfolioError::Share(js_message(&e)))?
            .dyn_into::<Promise>()
            .map_err(|_| PortfolioError::Share("navigator.share did not return a promise".to_string()))?;
        JsFuture::from(promise)
            .await
            .map_err(|e| PortfolioError::Share(js_message(&e)))?;
        Ok(())
    }
}

/// Clicks a temporary `<a download>` pointing at an object URL.
#[derive(Debug, Clone, Copy)]
pub struct BrowserDownloader {
    /// Some browsers resolve the link after `click()` returns, so the object
    /// URL is revoked only after this delay
    revoke_delay_ms: u32,
}

impl BrowserDownloader {
    pub fn new(revoke_delay_ms: u32) -> Self {
        Self { revoke_delay_ms }
    }
}

fn download_error(err: JsValue) -> PortfolioError {
    PortfolioError::Download(js_message(&err))
}

impl FileDownloader for BrowserDownloader {
    fn download(&self, file: &ContactFile) -> PortfolioResult<()> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or_else(|| PortfolioError::Download("no document".to_string()))?;
        let body = document
            .body()
            .ok_or_else(|| PortfolioError::Download("no document body".to_string()))?;

        let blob = Blob::new_with_options(file.contents.as_str(), Some(file.mime_type.as_str()));
        let url = ObjectUrl::from(blob);

        let link: HtmlAnchorElement = document
            .create_element("a")
            .map_err(download_error)?
            .dyn_into()
            .map_err(|_| PortfolioError::Download("created element is not an anchor".to_string()))?;
        link.set_href(&url);
        link.set_download(&file.file_name);
        link.set_rel("noopener");

        body.append_child(&link).map_err(download_error)?;
        link.click();
        body.remove_child(&link).map_err(download_error)?;

        tracing::info!("Started download of {}", file.file_name);
        // ObjectUrl revokes itself on drop
        Timeout::new(self.revoke_delay_ms, move || drop(url)).forget();
        Ok(())
    }
}
