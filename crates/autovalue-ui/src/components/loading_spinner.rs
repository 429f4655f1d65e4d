//! Loading Spinner Component
//!
//! Pulsing activity indicator with a single line of text. Either covers the
//! whole viewport or sits inline with fixed vertical padding.

use dioxus::prelude::*;

use crate::status::{resolve_spinner, DEFAULT_LOADING_MESSAGE};

/// Properties for the LoadingSpinner component
#[derive(Clone, PartialEq, Props)]
pub struct LoadingSpinnerProps {
    /// Text shown under the pulse
    #[props(default = DEFAULT_LOADING_MESSAGE.to_string())]
    pub message: String,
    /// Cover the viewport instead of rendering inline
    #[props(default = false)]
    pub fullscreen: bool,
}

/// Displays a pulsing loading indicator
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LoadingSpinner {}
///     LoadingSpinner { message: "Fetching valuation...".to_string(), fullscreen: true }
/// }
/// ```
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    let view = resolve_spinner(Some(&props.message), Some(props.fullscreen));

    rsx! {
        div {
            class: "{view.classes}",
            role: "status",
            "aria-live": "polite",
            div { class: "spinner-content",
                span { class: "{view.ring_classes}", "aria-hidden": "true" }
                p { class: "{view.message_classes}", "{view.message}" }
            }
        }
    }
}
