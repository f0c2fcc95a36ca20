use dioxus::prelude::*;
use portfolio_core::{Navigator, Site, View};

use crate::pages::{ContactPage, HomePage, ResumePage};
use crate::platform::BrowserHistory;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Owns the [`Navigator`], the only writer of the `page` query parameter:
///
/// - `/` or any unknown `?page=` - Home
/// - `/?page=resume` - Resume viewer
/// - `/?page=contact` - Contact card and QR codes
///
/// Pages never touch the URL; they receive navigation callbacks instead.
#[component]
pub fn App() -> Element {
    use_context_provider(Site::default);

    let mut navigator = use_signal(|| Navigator::new(BrowserHistory));
    let mut navigate = move |view: View| navigator.write().navigate_to(view);

    let view = navigator.read().current();

    rsx! {
        style { {GLOBAL_STYLES} }
        {match view {
            View::Home => rsx! {
                HomePage {
                    on_open_resume: move |_| navigate(View::Resume),
                    on_open_contact: move |_| navigate(View::Contact),
                }
            },
            View::Resume => rsx! {
                ResumePage { on_back: move |_| navigate(View::Home) }
            },
            View::Contact => rsx! {
                ContactPage { on_back: move |_| navigate(View::Home) }
            },
        }}
    }
}
