//! Reusable UI components.

mod button;
mod contact_item;
mod metric;
mod qr_code_card;

pub use button::*;
pub use contact_item::*;
pub use metric::*;
pub use qr_code_card::*;
