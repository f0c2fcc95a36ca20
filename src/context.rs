//! Site context for the portfolio pages.
//!
//! `App` provides the [`Site`] (contact record and configuration) once;
//! pages read it with [`use_site`].
//!
//! ## Usage
//!
//! ```ignore
//! let site = use_site();
//! rsx! { h1 { "{site.contact.full_name}" } }
//! ```

use dioxus::prelude::*;
use portfolio_core::Site;

/// Hook to access the site record and configuration.
pub fn use_site() -> Site {
    use_context::<Site>()
}
