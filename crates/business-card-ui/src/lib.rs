//! Business Card UI Components
//!
//! Dioxus components rendering the business card widget from its
//! declarative attributes.
//!
//! ## Layout
//!
//! - **Front face**: logo, brand, subtitle
//! - **Back face**: person, WhatsApp link, email, legal lines, QR code
//! - **Floating mode**: a round button in a screen corner that reveals
//!   the card in a popover
//!
//! ## Themes
//!
//! - **wine** (#8e3b46), **graphite** (#2e2e2e), **navy** (#1f2a44) with
//!   white text
//! - **sand** (#f2ede4) with near-black text

pub mod components;
pub mod render;
pub mod styles;

pub use components::*;
pub use render::{render_document, render_widget};
