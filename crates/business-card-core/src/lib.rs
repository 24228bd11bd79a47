//! Business Card Core Library
//!
//! Everything behind the business card widget that does not touch a
//! rendering tree.
//!
//! ## Overview
//!
//! The widget is configured entirely by a fixed list of declarative
//! attributes. This crate turns those attributes into a
//! [`CardSnapshot`], builds the vCard payload shown as a QR code, and
//! models the floating popover and its outside-click listener.
//!
//! ## Quick Start
//!
//! ```
//! use business_card_core::{AttributeSet, CardElement, PopoverState};
//!
//! let attrs = AttributeSet::new()
//!     .with("name", "Ana Gomez")
//!     .with("phone", "555-1234")
//!     .with("floating", "");
//!
//! let mut card = CardElement::new(attrs);
//! card.mount();
//! assert_eq!(card.toggle_clicked(), PopoverState::Open);
//!
//! let vcard = business_card_core::contact::vcard(card.snapshot());
//! assert!(vcard.contains("N:Gomez;Ana;;;"));
//! ```

pub mod attributes;
pub mod config;
pub mod contact;
pub mod element;
pub mod error;
pub mod popover;
pub mod snapshot;

// Re-exports
pub use attributes::{camel_case, Attribute, AttributeChange, AttributeSet};
pub use element::CardElement;
pub use error::{CardError, CardResult};
pub use popover::{PopoverEvent, PopoverState};
pub use snapshot::{Anchor, CardSnapshot, FieldValue, Palette, Position, Variant};
