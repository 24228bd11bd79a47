//! Components making up the business card widget
//!
//! All markup lives under the widget root so the scoped stylesheet in
//! [`crate::styles`] is the only thing styling it.

mod card;
mod dismiss;
mod floating;
mod icons;
mod qr_slot;
mod widget;

pub use card::*;
pub use dismiss::{register_script, release_script, KEY_ATTRIBUTE};
pub use floating::*;
pub use icons::*;
pub use qr_slot::*;
pub use widget::*;
