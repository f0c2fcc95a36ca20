//! Portfolio UI Components
//!
//! Small Dioxus building blocks shared by the portfolio pages. Styling lives
//! in the app's global stylesheet; components only pick class names.
//!
//! ## Palette
//!
//! - **Ink (#111827)**: Text and primary buttons
//! - **Slate (#64748b)**: Muted labels
//! - **Sky (#3b82f6)**: Links and focus rings
//! - **Paper (#ffffff)**: Cards and QR backgrounds

pub mod components;

pub use components::*;
