//! QR Slot - the contact QR code on the back face.

use business_card_core::contact::{qr_image_url, vcard, QR_DISPLAY_SIZE, QR_IMAGE_SIZE};
use business_card_core::CardSnapshot;
use dioxus::prelude::*;
use qrcode::render::svg;
use qrcode::QrCode;

/// Where the QR image comes from.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum QrRenderer {
    /// Image fetched from the remote QR service.
    #[default]
    Remote,
    /// SVG drawn locally from the same vCard payload.
    Inline,
}

/// Render a payload as a responsive SVG string.
///
/// The width/height attributes are removed so CSS controls the size;
/// the viewBox keeps the aspect ratio.
pub fn inline_qr_svg(payload: &str) -> Option<String> {
    match QrCode::new(payload.as_bytes()) {
        Ok(code) => {
            let svg_string = code
                .render()
                .min_dimensions(QR_IMAGE_SIZE, QR_IMAGE_SIZE)
                .dark_color(svg::Color("#000000"))
                .light_color(svg::Color("#ffffff"))
                .build();

            Some(strip_dimensions(&svg_string))
        }
        Err(e) => {
            tracing::error!("Failed to generate QR code: {:?}", e);
            None
        }
    }
}

/// Drop the root element's width/height, keeping everything from viewBox on.
fn strip_dimensions(svg: &str) -> String {
    let Some(start) = svg.find(" width=\"") else {
        return svg.to_string();
    };
    match svg[start..].find(" viewBox=") {
        Some(offset) => format!("{}{}", &svg[..start], &svg[start + offset..]),
        None => svg.to_string(),
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct QrSlotProps {
    pub snapshot: CardSnapshot,
    #[props(default)]
    pub renderer: QrRenderer,
}

/// QR block holding the vCard for the card's contact fields.
#[component]
pub fn QrSlot(props: QrSlotProps) -> Element {
    match props.renderer {
        QrRenderer::Remote => {
            let src = qr_image_url(&props.snapshot);
            rsx! {
                div { class: "qr",
                    img {
                        src: "{src}",
                        style: "width:{QR_DISPLAY_SIZE}px;height:{QR_DISPLAY_SIZE}px",
                    }
                }
            }
        }
        QrRenderer::Inline => {
            let svg = inline_qr_svg(&vcard(&props.snapshot));
            rsx! {
                div { class: "qr",
                    if let Some(svg) = svg {
                        div {
                            class: "qr-inline",
                            dangerous_inner_html: "{svg}",
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_renderer_is_remote() {
        assert_eq!(QrRenderer::default(), QrRenderer::Remote);
    }

    #[test]
    fn inline_svg_for_vcard() {
        let svg = inline_qr_svg(&vcard(&CardSnapshot::default())).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("viewBox"));
    }

    #[test]
    fn strips_root_dimensions_only() {
        let svg = r#"<svg xmlns="x" width="125" height="125" viewBox="0 0 125 125"><rect width="125"/></svg>"#;
        assert_eq!(
            strip_dimensions(svg),
            r#"<svg xmlns="x" viewBox="0 0 125 125"><rect width="125"/></svg>"#
        );
    }

    #[test]
    fn oversized_payload_has_no_svg() {
        let payload = "x".repeat(8000);
        assert!(inline_qr_svg(&payload).is_none());
    }
}
