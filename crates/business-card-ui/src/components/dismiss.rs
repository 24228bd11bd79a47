//! Outside-click listener for floating mode.
//!
//! The listener lives on `document`, so the dismissing click still reaches
//! whatever page element was under it. Each widget registers under its own
//! key; registering again replaces the previous handler, so a widget never
//! holds more than one.

use business_card_core::{CardElement, PopoverEvent};
use dioxus::prelude::*;

/// Attribute on the widget root that the listener looks the widget up by.
pub const KEY_ATTRIBUTE: &str = "data-bc";

const REGISTER_SCRIPT: &str = r#"
const key = "__KEY__";
const registry = (window.__bcDismiss = window.__bcDismiss || {});
if (registry[key]) {
    document.removeEventListener("click", registry[key]);
}
const handler = (event) => {
    const root = document.querySelector('[__ATTR__="' + key + '"]');
    if (!root) {
        document.removeEventListener("click", handler);
        delete registry[key];
        return;
    }
    if (!root.contains(event.target)) {
        dioxus.send(true);
    }
};
registry[key] = handler;
document.addEventListener("click", handler);
"#;

const RELEASE_SCRIPT: &str = r#"
const registry = window.__bcDismiss || {};
if (registry["__KEY__"]) {
    document.removeEventListener("click", registry["__KEY__"]);
    delete registry["__KEY__"];
}
"#;

/// Script that installs the listener for the widget keyed `key`.
///
/// Clicks outside that widget's root are sent back through the eval
/// channel. Once the root is gone from the page the handler removes itself.
pub fn register_script(key: &str) -> String {
    REGISTER_SCRIPT
        .replace("__KEY__", key)
        .replace("__ATTR__", KEY_ATTRIBUTE)
}

/// Script that removes the listener for the widget keyed `key`.
pub fn release_script(key: &str) -> String {
    RELEASE_SCRIPT.replace("__KEY__", key)
}

/// Install the listener and feed outside clicks into `element` until the
/// task is cancelled.
pub(crate) async fn listen_outside_clicks(key: String, mut element: Signal<CardElement>) {
    let mut eval = document::eval(&register_script(&key));
    tracing::debug!(%key, "outside-click listener registered");

    while eval.recv::<bool>().await.is_ok() {
        if element.peek().popover().is_open() {
            element.write().handle(PopoverEvent::OutsideClicked);
        }
    }
    tracing::debug!(%key, "outside-click channel closed");
}

/// Remove the listener for `key`, if one is installed.
pub(crate) fn release_outside_clicks(key: &str) {
    let _ = document::eval(&release_script(key));
    tracing::debug!(%key, "outside-click listener released");
}
