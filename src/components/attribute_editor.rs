//! Attribute Editor - live form over the widget's attribute surface
//!
//! One control per observed attribute. Every edit is reported as an
//! attribute change, with `None` meaning the attribute was removed.

use business_card_core::{Attribute, AttributeSet, Position, Variant};
use dioxus::prelude::*;

/// Choices offered for an enumerated attribute.
fn choices(attr: Attribute) -> Vec<String> {
    match attr {
        Attribute::Variant => Variant::THEMED.iter().map(|v| v.class().to_string()).collect(),
        Attribute::Position => Position::ANCHORED.iter().map(|p| p.name().to_string()).collect(),
        _ => Vec::new(),
    }
}

/// Map an edited text value to an attribute change: empty removes it.
fn text_change(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct AttributeEditorProps {
    /// Current attributes of the widget
    pub attributes: AttributeSet,
    /// Called with (name, value) for every edit
    pub on_change: EventHandler<(String, Option<String>)>,
    /// Called when the save button is pressed
    pub on_save: EventHandler<()>,
    /// Whether a save location is known
    #[props(default = false)]
    pub can_save: bool,
    /// Result of the last save
    #[props(default)]
    pub status: Option<String>,
}

#[component]
pub fn AttributeEditor(props: AttributeEditorProps) -> Element {
    let on_change = props.on_change;
    let on_save = props.on_save;

    rsx! {
        aside { class: "attr-editor",
            h2 { class: "attr-editor__title", "Attributes" }

            for attr in Attribute::ALL {
                {
                    let name = attr.name();
                    let field = attr.field_name();
                    let current = props.attributes.observed(attr).unwrap_or_default().to_string();
                    let present = props.attributes.contains(name);

                    rsx! {
                        label {
                            key: "{name}",
                            class: "attr-row",
                            span { class: "attr-row__name", "{name}" }
                            span { class: "attr-row__field", "{field}" }

                            if attr.is_presence_flag() {
                                input {
                                    r#type: "checkbox",
                                    checked: present,
                                    onchange: move |_| {
                                        let value = if present { None } else { Some(String::new()) };
                                        on_change.call((name.to_string(), value));
                                    },
                                }
                            } else if matches!(attr, Attribute::Variant | Attribute::Position) {
                                select {
                                    class: "attr-row__input",
                                    value: "{current}",
                                    onchange: move |e| on_change.call((name.to_string(), text_change(e.value()))),
                                    option { value: "", "(default)" }
                                    for choice in choices(attr) {
                                        option { key: "{choice}", value: "{choice}", "{choice}" }
                                    }
                                }
                            } else {
                                input {
                                    class: "attr-row__input",
                                    r#type: "text",
                                    value: "{current}",
                                    oninput: move |e| on_change.call((name.to_string(), text_change(e.value()))),
                                }
                            }
                        }
                    }
                }
            }

            footer { class: "attr-editor__footer",
                button {
                    class: "btn-save",
                    disabled: !props.can_save,
                    onclick: move |_| on_save.call(()),
                    "Save"
                }
                if let Some(status) = &props.status {
                    span { class: "attr-editor__status", "{status}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enum_choices() {
        assert_eq!(choices(Attribute::Variant), vec!["wine", "graphite", "navy", "sand"]);
        assert_eq!(
            choices(Attribute::Position),
            vec!["bottom-right", "bottom-left", "top-right", "top-left"]
        );
        assert!(choices(Attribute::Brand).is_empty());
    }

    #[test]
    fn clearing_text_removes_attribute() {
        assert_eq!(text_change(String::new()), None);
        assert_eq!(text_change("Acme".to_string()), Some("Acme".to_string()));
    }
}
