//! Floating Card - toggle button plus a popover holding the card.

use business_card_core::{CardSnapshot, PopoverEvent, PopoverState};
use dioxus::prelude::*;

use super::card::CardFaces;
use super::icons::PersonIcon;
use super::qr_slot::QrRenderer;

#[derive(Props, Clone, PartialEq)]
pub struct FloatingCardProps {
    pub snapshot: CardSnapshot,
    #[props(default)]
    pub qr_renderer: QrRenderer,
    /// Current popover state, owned by the widget
    pub popover: PopoverState,
    /// Called when the floating button is clicked
    pub on_event: EventHandler<PopoverEvent>,
}

/// Class list of the popover wrapper for a position and state.
pub fn wrapper_class(position_class: &str, popover: PopoverState) -> String {
    match popover {
        PopoverState::Closed => format!("wrapper {position_class}"),
        PopoverState::Open => format!("wrapper {position_class} {}", popover.class()),
    }
}

/// Floating mode
///
/// # Design Notes
///
/// - The button and popover anchor to the same corner
/// - The popover sits beside the button, clearing it horizontally
/// - Outside clicks are caught by the widget's document listener, so
///   nothing here covers the page
#[component]
pub fn FloatingCard(props: FloatingCardProps) -> Element {
    let variant = props.snapshot.variant.class();
    let position = props.snapshot.position.class();
    let wrapper = wrapper_class(&position, props.popover);
    let on_event = props.on_event;

    rsx! {
        div {
            id: "fab",
            class: "fab {variant} {position}",
            onclick: move |_| on_event.call(PopoverEvent::ToggleClicked),
            PersonIcon {}
        }

        div {
            id: "wrapper",
            class: "{wrapper}",
            CardFaces {
                snapshot: props.snapshot.clone(),
                qr_renderer: props.qr_renderer,
            }
        }
    }
}
