//! Flip Card - front branding face and back contact face.

use business_card_core::contact::whatsapp_url;
use business_card_core::CardSnapshot;
use dioxus::prelude::*;

use super::icons::WhatsAppIcon;
use super::qr_slot::{QrRenderer, QrSlot};

#[derive(Props, Clone, PartialEq)]
pub struct CardFacesProps {
    /// Configuration to render
    pub snapshot: CardSnapshot,
    /// Source of the QR image when `show-qr` is present
    #[props(default)]
    pub qr_renderer: QrRenderer,
}

/// The 360×210 flip card.
///
/// Identical whether rendered inline or inside the floating popover.
/// Each optional fragment appears only when its field is present.
#[component]
pub fn CardFaces(props: CardFacesProps) -> Element {
    let snapshot = &props.snapshot;
    let variant = snapshot.variant.class();
    let whatsapp = whatsapp_url(snapshot.phone.as_deref());

    rsx! {
        div { class: "card",
            div { class: "inner {variant}",
                // Front: branding
                div { class: "face front {variant}",
                    if let Some(logo) = &snapshot.logo {
                        img { class: "logo", src: "{logo}" }
                    }
                    if let Some(brand) = &snapshot.brand {
                        div { class: "brand", "{brand}" }
                    }
                    if let Some(subtitle) = &snapshot.subtitle {
                        div { class: "subtitle", "{subtitle}" }
                    }
                }

                // Back: contact details
                div { class: "face back {variant}",
                    div { class: "content",
                        div {
                            if let Some(name) = &snapshot.name {
                                div { class: "person",
                                    strong { "{name}" }
                                    if let Some(role) = &snapshot.role {
                                        span { "{role}" }
                                    }
                                }
                            }
                            div { class: "contact",
                                if let Some(phone) = &snapshot.phone {
                                    a {
                                        class: "wa",
                                        href: "{whatsapp}",
                                        target: "_blank",
                                        WhatsAppIcon {}
                                        "{phone}"
                                    }
                                }
                                if let Some(email) = &snapshot.email {
                                    div { "{email}" }
                                }
                            }
                            div { class: "legal",
                                if let Some(nit) = &snapshot.nit {
                                    div { "{nit}" }
                                }
                                if let Some(address) = &snapshot.address {
                                    div { "{address}" }
                                }
                            }
                        }
                        if snapshot.show_qr {
                            QrSlot {
                                snapshot: snapshot.clone(),
                                renderer: props.qr_renderer,
                            }
                        }
                    }
                }
            }
        }
    }
}
