//! Card Widget - the attribute-driven business card.

use std::cell::Cell;
use std::rc::Rc;

use business_card_core::{AttributeSet, CardElement, CardSnapshot, PopoverEvent};
use dioxus::prelude::*;

use super::card::CardFaces;
use super::dismiss::{listen_outside_clicks, release_outside_clicks};
use super::floating::FloatingCard;
use super::qr_slot::QrRenderer;
use crate::styles::{stylesheet, ROOT_CLASS};

/// Properties for the CardWidget component
#[derive(Clone, PartialEq, Props)]
pub struct CardWidgetProps {
    /// Every attribute present on the host; unobserved names are ignored
    pub attributes: AttributeSet,
    /// Source of the QR image when `show-qr` is present
    #[props(default)]
    pub qr_renderer: QrRenderer,
}

/// Per-tree counter handing out widget keys.
#[derive(Clone, Default)]
struct WidgetKeys(Rc<Cell<u64>>);

/// Key of this widget instance, unique within its `VirtualDom`.
fn use_widget_key() -> String {
    use_hook(|| {
        let keys = try_consume_context::<WidgetKeys>()
            .unwrap_or_else(|| provide_root_context(WidgetKeys::default()));
        let n = keys.0.get();
        keys.0.set(n + 1);
        format!("bc-{n}")
    })
}

/// Business card widget configured entirely by attributes
///
/// The widget owns a [`CardElement`]. Attribute props are synced into it
/// on every change, and any observed change closes an open popover,
/// exactly as if the markup had been regenerated from scratch. While the
/// element is floating it holds one document-level outside-click listener.
///
/// # Example
///
/// ```rust,ignore
/// let attrs = AttributeSet::new()
///     .with("brand", "Acme")
///     .with("name", "Ana Gomez")
///     .with("phone", "555-1234")
///     .with("show-qr", "")
///     .with("floating", "");
///
/// rsx! {
///     CardWidget { attributes: attrs }
/// }
/// ```
#[component]
pub fn CardWidget(props: CardWidgetProps) -> Element {
    let key = use_widget_key();
    let mut element = use_signal(|| {
        let mut element = CardElement::new(props.attributes.clone());
        element.mount();
        element
    });

    use_effect(use_reactive((&props.attributes,), move |(attributes,)| {
        if element.peek().attributes() != &attributes {
            element.write().sync_attributes(&attributes);
        }
    }));

    // Listener follows the element's registration, not the popover state
    let listening = use_memo(move || element.read().has_dismiss_listener());
    let listener: Rc<Cell<Option<Task>>> = use_hook(Rc::default);
    let listener_key = key.clone();
    let installed = listener.clone();
    use_effect(move || {
        let previous = installed.take();
        if let Some(task) = previous {
            task.cancel();
        }
        if listening() {
            let task = spawn(listen_outside_clicks(listener_key.clone(), element));
            installed.set(Some(task));
        } else if previous.is_some() {
            release_outside_clicks(&listener_key);
        }
    });

    let drop_key = key.clone();
    use_drop(move || {
        if listener.take().is_some() {
            release_outside_clicks(&drop_key);
        }
    });

    let snapshot = CardSnapshot::from_attributes(&props.attributes);
    let popover = element.read().popover();

    rsx! {
        div { class: ROOT_CLASS, "data-bc": "{key}",
            style { {stylesheet()} }

            if snapshot.floating {
                FloatingCard {
                    snapshot: snapshot.clone(),
                    qr_renderer: props.qr_renderer,
                    popover,
                    on_event: move |event: PopoverEvent| {
                        element.write().handle(event);
                    },
                }
            } else {
                CardFaces {
                    snapshot: snapshot.clone(),
                    qr_renderer: props.qr_renderer,
                }
            }
        }
    }
}
