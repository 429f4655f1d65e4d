//! Valuation Content Component
//!
//! Summary panel for a single vehicle: identity, specs, and (when a
//! valuation exists) the reserve price against the market average.

use autovalue_core::format::{format_mileage, format_price};
use autovalue_core::{PricePosition, Transmission};
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant, CloseButton};

/// Label of the continue action for a signed-in user
pub const CONTINUE_LABEL: &str = "Continue";

/// Label of the continue action for a signed-out user
pub const SIGN_IN_LABEL: &str = "Sign in to continue";

/// Notice shown instead of prices when there is no valuation yet
pub const NO_VALUATION_NOTICE: &str = "No valuation available for this vehicle yet.";

/// Inputs the valuation panel needs from its caller.
///
/// `on_close` and `on_continue` are callbacks owned by the caller; the panel
/// only invokes them.
#[derive(Clone, PartialEq, Props)]
pub struct ValuationContentProps {
    pub make: String,
    pub model: String,
    pub year: u16,
    pub vin: String,
    pub transmission: Transmission,
    pub mileage: u32,
    pub reserve_price: f64,
    pub average_price: f64,
    /// Whether the prices above are meaningful
    pub has_valuation: bool,
    pub is_logged_in: bool,
    pub on_close: EventHandler<()>,
    pub on_continue: EventHandler<()>,
}

/// Label for the continue button
pub fn continue_label(is_logged_in: bool) -> &'static str {
    if is_logged_in {
        CONTINUE_LABEL
    } else {
        SIGN_IN_LABEL
    }
}

/// Comparison line under the prices, e.g. `"$700 below market average"`
pub fn price_comparison(reserve: f64, average: f64) -> String {
    let position = PricePosition::compare(reserve, average);
    match position {
        PricePosition::AtMarket => capitalize(position.label()),
        _ => format!("{} {}", format_price((reserve - average).abs()), position.label()),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Vehicle valuation summary panel
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     ValuationContent {
///         make: record.make.clone(),
///         model: record.model.clone(),
///         year: record.year,
///         vin: record.vin.clone(),
///         transmission: record.transmission,
///         mileage: record.mileage,
///         reserve_price: record.reserve_price.unwrap_or_default(),
///         average_price: record.average_price.unwrap_or_default(),
///         has_valuation: record.has_valuation(),
///         is_logged_in: logged_in(),
///         on_close: move |_| show_panel.set(false),
///         on_continue: move |_| navigator.push(Route::Gallery {}),
///     }
/// }
/// ```
#[component]
pub fn ValuationContent(props: ValuationContentProps) -> Element {
    let title = format!("{} {} {}", props.year, props.make, props.model);
    let mileage = format_mileage(props.mileage);
    let label = continue_label(props.is_logged_in);
    let on_close = props.on_close;
    let on_continue = props.on_continue;

    rsx! {
        section { class: "valuation-content",
            header { class: "valuation-header",
                h2 { class: "valuation-title", "{title}" }
                CloseButton { onclick: move |_| on_close.call(()) }
            }

            dl { class: "valuation-details",
                div { class: "detail-row",
                    dt { "VIN" }
                    dd { class: "mono", "{props.vin}" }
                }
                div { class: "detail-row",
                    dt { "Transmission" }
                    dd { "{props.transmission.label()}" }
                }
                div { class: "detail-row",
                    dt { "Mileage" }
                    dd { "{mileage}" }
                }
            }

            if props.has_valuation {
                div { class: "valuation-prices",
                    div { class: "price-block",
                        span { class: "price-label", "Reserve price" }
                        span { class: "price-value", "{format_price(props.reserve_price)}" }
                    }
                    div { class: "price-block",
                        span { class: "price-label", "Market average" }
                        span { class: "price-value muted", "{format_price(props.average_price)}" }
                    }
                    p { class: "price-comparison",
                        "{price_comparison(props.reserve_price, props.average_price)}"
                    }
                }
            } else {
                p { class: "valuation-missing", "{NO_VALUATION_NOTICE}" }
            }

            div { class: "valuation-actions",
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| on_continue.call(()),
                    "{label}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn continue_label_depends_on_login() {
        assert_eq!(continue_label(true), "Continue");
        assert_eq!(continue_label(false), "Sign in to continue");
    }

    #[test]
    fn comparison_text() {
        assert_eq!(price_comparison(14_500.0, 15_200.0), "$700 below market average");
        assert_eq!(price_comparison(16_000.0, 15_000.0), "$1,000 above market average");
        assert_eq!(price_comparison(15_000.0, 15_000.0), "In line with market average");
        assert_eq!(price_comparison(15_000.0, 0.0), "In line with market average");
    }
}
