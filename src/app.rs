use business_card_core::config::save_attributes;
use business_card_core::AttributeChange;
use business_card_ui::CardWidget;
use dioxus::prelude::*;

use crate::components::AttributeEditor;
use crate::launch_state;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Hosts one widget and an editor that changes its attributes live, the
/// way a page would by setting attributes on the element.
#[component]
pub fn App() -> Element {
    let launch = use_hook(launch_state);
    let mut attributes = use_signal(|| launch.attributes.clone());
    let mut status: Signal<Option<String>> = use_signal(|| None);

    let save_path = launch.config_path.clone();
    let can_save = save_path.is_some();

    rsx! {
        style { {GLOBAL_STYLES} }

        main { class: "host-page",
            AttributeEditor {
                attributes: attributes(),
                status: status(),
                can_save,
                on_change: move |(name, value): (String, Option<String>)| {
                    let change = attributes.write().apply(&name, value.as_deref());
                    if change == AttributeChange::Ignored {
                        tracing::debug!(attribute = %name, "unobserved attribute edited");
                    }
                    status.set(None);
                },
                on_save: move |_| {
                    let Some(path) = save_path.as_ref() else {
                        return;
                    };
                    match save_attributes(path, &attributes.read()) {
                        Ok(()) => {
                            tracing::info!("Saved attributes to {}", path.display());
                            status.set(Some(format!("saved to {}", path.display())));
                        }
                        Err(e) => {
                            tracing::error!("Failed to save attributes: {}", e);
                            status.set(Some(format!("save failed: {e}")));
                        }
                    }
                },
            }

            section { class: "stage",
                CardWidget {
                    attributes: attributes(),
                    qr_renderer: launch.qr_renderer,
                }
            }
        }
    }
}
