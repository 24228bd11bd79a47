//! Inline SVG icons used by the card.

use dioxus::prelude::*;

/// Person outline shown on the floating button.
#[component]
pub fn PersonIcon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "22",
            height: "22",
            view_box: "0 0 24 24",
            fill: "none",
            path {
                d: "M17 8.5C17 5.73858 14.7614 3.5 12 3.5C9.23858 3.5 7 5.73858 7 8.5C7 11.2614 9.23858 13.5 12 13.5C14.7614 13.5 17 11.2614 17 8.5Z",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "square",
            }
            path {
                d: "M19 20.5C19 16.634 15.866 13.5 12 13.5C8.13401 13.5 5 16.634 5 20.5",
                stroke: "currentColor",
                stroke_width: "1.5",
                stroke_linecap: "square",
            }
        }
    }
}

/// WhatsApp glyph shown before the phone number.
#[component]
pub fn WhatsAppIcon() -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "10",
            height: "10",
            view_box: "0 0 24 24",
            fill: "none",
            path {
                "opacity": "0.4",
                "fill-rule": "evenodd",
                "clip-rule": "evenodd",
                d: "M12.002 1.99805C17.5259 1.99805 22.0039 6.47608 22.0039 12C22.0039 17.5239 17.5259 22.0019 12.002 22.002C10.1018 22.002 8.4856 21.5861 6.97266 20.666L2.00195 22L3.34375 17.0049C2.43381 15.4978 2 13.8889 2 12C2 6.47607 6.47803 1.99805 12.002 1.99805ZM11.6221 15.4209C13.1126 16.3912 14.9993 17 17 17V14L13.498 13.5L11.6221 15.4209ZM7 7C7.00021 8.76799 7.54961 10.6891 8.62305 12.374L10.4971 10.5L10 7H7Z",
                fill: "#000000",
            }
            path {
                d: "M12.0019 22.002C17.5259 22.002 22.0039 17.5239 22.0039 12C22.0039 6.47607 17.5259 1.99805 12.0019 1.99805C6.47802 1.99805 2 6.47607 2 12C2 13.8889 2.43396 15.4979 3.34399 17.005L2.00177 22L6.97239 20.666C8.48539 21.5862 10.1017 22.002 12.0019 22.002Z",
                stroke: "#000000",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
            path {
                d: "M8.6175 12.4037L10.4966 10.5L10.0004 7H7C7.00036 10 8.58063 13.4407 11.6225 15.4209M11.6225 15.4209C13.1131 16.3912 14.9993 17 17 17V14L13.4982 13.5L11.6225 15.4209Z",
                stroke: "#000000",
                stroke_width: "1.5",
                stroke_linecap: "round",
                stroke_linejoin: "round",
            }
        }
    }
}
