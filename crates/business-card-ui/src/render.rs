//! Static HTML rendering of the widget.
//!
//! Renders one pass of the component tree to a string. Event handlers
//! are not carried over, so an exported floating widget shows its
//! closed popover.

use business_card_core::AttributeSet;
use dioxus::prelude::*;

use crate::components::{CardWidget, CardWidgetProps, QrRenderer};

/// Render the widget markup (root element with its style block).
///
/// A pure function of the attribute set: the same attributes always
/// produce byte-identical output.
pub fn render_widget(attributes: &AttributeSet, qr_renderer: QrRenderer) -> String {
    let mut dom = VirtualDom::new_with_props(
        CardWidget,
        CardWidgetProps {
            attributes: attributes.clone(),
            qr_renderer,
        },
    );
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

/// Render a standalone HTML page containing the widget.
pub fn render_document(attributes: &AttributeSet, qr_renderer: QrRenderer) -> String {
    let body = render_widget(attributes, qr_renderer);
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Business Card</title>\n</head>\n<body>\n{body}\n</body>\n</html>\n"
    )
}
