//! Gallery page - every status component in each of its states.

use autovalue_core::Transmission;
use autovalue_ui::{Button, ButtonVariant, FieldError, LoadingSpinner, ValuationContent};
use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn Gallery() -> Element {
    let navigator = use_navigator();
    let mut show_fullscreen = use_signal(|| false);
    let mut last_action: Signal<Option<&'static str>> = use_signal(|| None);

    rsx! {
        main { class: "page gallery",
            header { class: "page-header",
                h1 { class: "page-title", "Component gallery" }
            }

            section { class: "gallery-section",
                h2 { class: "section-header", "Loading" }
                LoadingSpinner {}
                LoadingSpinner { message: "Crunching market data...".to_string() }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        show_fullscreen.set(true);
                    },
                    "Show fullscreen spinner"
                }
                if show_fullscreen() {
                    div { onclick: move |_| show_fullscreen.set(false),
                        LoadingSpinner { message: "Click anywhere to dismiss".to_string(), fullscreen: true }
                    }
                }
            }

            section { class: "gallery-section",
                h2 { class: "section-header", "Field errors" }
                p { class: "body-text", "Without a message (renders nothing):" }
                FieldError {}
                FieldError { message: String::new() }
                p { class: "body-text", "With a message:" }
                FieldError { message: "Mileage must be a whole number".to_string() }
                FieldError {
                    message: "Reserve price is required".to_string(),
                    class: "mt-2 gallery-outline".to_string(),
                }
            }

            section { class: "gallery-section",
                h2 { class: "section-header", "Valuation" }
                ValuationContent {
                    make: "Toyota".to_string(),
                    model: "Corolla".to_string(),
                    year: 2019,
                    vin: "JTDBR32E720123456".to_string(),
                    transmission: Transmission::Automatic,
                    mileage: 45_210,
                    reserve_price: 14_500.0,
                    average_price: 15_200.0,
                    has_valuation: true,
                    is_logged_in: true,
                    on_close: move |_| last_action.set(Some("close")),
                    on_continue: move |_| last_action.set(Some("continue")),
                }
                ValuationContent {
                    make: "Honda".to_string(),
                    model: "Civic".to_string(),
                    year: 2021,
                    vin: "2HGFC2F59MH512345".to_string(),
                    transmission: Transmission::Manual,
                    mileage: 1,
                    reserve_price: 0.0,
                    average_price: 0.0,
                    has_valuation: false,
                    is_logged_in: false,
                    on_close: move |_| last_action.set(Some("close")),
                    on_continue: move |_| last_action.set(Some("continue")),
                }
                if let Some(action) = last_action() {
                    p { class: "notice", "last callback: {action}" }
                }
            }

            footer { class: "page-footer",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        navigator.push(Route::Valuation {});
                    },
                    "Back"
                }
            }
        }
    }
}
