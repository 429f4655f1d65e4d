//! Field Error Component
//!
//! Inline warning row shown under a form input. Renders nothing when there
//! is no message.

use dioxus::prelude::*;

use crate::status::{resolve_field_error, StatusView, WARNING_ICON_CLASS, WARNING_ICON_SIZE};

/// Warning icon plus message for a single form field
///
/// `class` is merged into the row's built-in classes.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FieldError { message: vin_error(), class: "mt-2".to_string() }
/// }
/// ```
#[component]
pub fn FieldError(
    /// Error text; absent or empty renders nothing
    #[props(default)]
    message: Option<String>,
    /// Extra classes appended to the built-in ones
    #[props(default)]
    class: String,
) -> Element {
    let StatusView::Rendered(view) = resolve_field_error(message.as_deref(), &class) else {
        return rsx! {};
    };
    let icon_style = format!(
        "width: {WARNING_ICON_SIZE}px; height: {WARNING_ICON_SIZE}px; font-size: {WARNING_ICON_SIZE}px;"
    );

    rsx! {
        p { class: "{view.classes}", role: "alert",
            span {
                class: WARNING_ICON_CLASS,
                style: "{icon_style}",
                "aria-hidden": "true",
                "{view.icon}"
            }
            span { class: "field-error-message", "{view.message}" }
        }
    }
}
