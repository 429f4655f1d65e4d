//! Valuation page - VIN lookup and the valuation panel.
//!
//! This page owns all state: the VIN being typed, its error, whether a lookup
//! is in flight, and the record found. The components below it only receive
//! plain values and callbacks.

use autovalue_core::format::format_price;
use autovalue_core::valuations::find_by_vin;
use autovalue_core::{CoreResult, ValuationRecord};
use autovalue_ui::{Button, ButtonVariant, FieldError, LoadingSpinner, ValuationContent};
use dioxus::prelude::*;

use crate::app::Route;
use crate::context::{use_backend, use_logged_in, SharedBackend};

/// Records served when no backend is configured
const SAMPLE_VALUATIONS: &str = include_str!("../../assets/sample_valuations.json");

/// Length of a modern VIN
pub const VIN_LENGTH: usize = 17;

/// Uppercase and drop whitespace
pub fn normalize_vin(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// What is wrong with a normalized VIN, if anything
pub fn vin_problem(vin: &str) -> Option<String> {
    if vin.is_empty() {
        return Some("Enter a VIN to look up".to_string());
    }
    if let Some(bad) = vin
        .chars()
        .find(|c| !c.is_ascii_alphanumeric() || matches!(c, 'I' | 'O' | 'Q'))
    {
        return Some(format!("'{bad}' cannot appear in a VIN"));
    }
    if vin.len() != VIN_LENGTH {
        return Some(format!(
            "A VIN has {VIN_LENGTH} characters, this one has {}",
            vin.len()
        ));
    }
    None
}

/// Bundled sample records
fn sample_valuations() -> Vec<ValuationRecord> {
    serde_json::from_str(SAMPLE_VALUATIONS).unwrap_or_else(|e| {
        tracing::error!("Bundled sample valuations are invalid: {}", e);
        Vec::new()
    })
}

/// Look a VIN up on the backend, or in the bundled samples when offline
async fn lookup_valuation(backend: SharedBackend, vin: &str) -> CoreResult<Option<ValuationRecord>> {
    match backend {
        Some(client) => find_by_vin(&client, vin).await,
        None => Ok(sample_valuations().into_iter().find(|r| r.vin == vin)),
    }
}

/// Valuation page component.
#[component]
pub fn Valuation() -> Element {
    let backend = use_backend();
    let mut logged_in = use_logged_in();
    let navigator = use_navigator();

    let mut vin_input = use_signal(String::new);
    let mut vin_error: Signal<Option<String>> = use_signal(|| None);
    let mut loading = use_signal(|| false);
    let mut record: Signal<Option<ValuationRecord>> = use_signal(|| None);
    let mut notice: Signal<Option<String>> = use_signal(|| None);

    let offline = backend.is_none();
    let sign_out_backend = backend.clone();

    let mut run_lookup = move || {
        let vin = normalize_vin(&vin_input());
        if let Some(problem) = vin_problem(&vin) {
            vin_error.set(Some(problem));
            return;
        }
        vin_error.set(None);
        notice.set(None);
        loading.set(true);

        let backend = backend.clone();
        spawn(async move {
            let result = lookup_valuation(backend, &vin).await;
            loading.set(false);
            match result {
                Ok(Some(found)) => {
                    tracing::info!(vin = %found.vin, "Valuation loaded");
                    record.set(Some(found));
                }
                Ok(None) => {
                    vin_error.set(Some(format!("No vehicle found for VIN {vin}")));
                }
                Err(e) => {
                    tracing::error!("Valuation lookup failed: {}", e);
                    vin_error.set(Some(
                        "The valuation service is unavailable, try again later".to_string(),
                    ));
                }
            }
        });
    };

    let on_continue = move |_: ()| {
        let Some(current) = record() else {
            return;
        };
        if logged_in() {
            let reserve = current
                .reserve_price
                .map(format_price)
                .unwrap_or_else(|| "no reserve".to_string());
            notice.set(Some(format!("Ready to list {} at {}.", current.title(), reserve)));
        } else {
            notice.set(Some(
                "Open the sign-in link from your email to continue.".to_string(),
            ));
        }
        record.set(None);
    };

    let sign_out = move |_: ()| {
        if let Some(client) = &sign_out_backend {
            if let Err(e) = client.sign_out() {
                tracing::error!("Sign out failed: {}", e);
                return;
            }
        }
        logged_in.set(false);
    };

    rsx! {
        main { class: "page",
            header { class: "page-header",
                h1 { class: "page-title", "AutoValue" }
                p { class: "tagline", "What is your car worth?" }
                if offline {
                    p { class: "offline-badge", "offline - showing sample vehicles" }
                }
            }

            if loading() {
                LoadingSpinner { message: "Fetching valuation...".to_string(), fullscreen: true }
            }

            form {
                class: "vin-form",
                onsubmit: move |e| {
                    e.prevent_default();
                    run_lookup();
                },
                label { class: "input-label", r#for: "vin-input", "VIN" }
                input {
                    id: "vin-input",
                    class: "input-field mono",
                    r#type: "text",
                    maxlength: "20",
                    placeholder: "17-character vehicle identification number",
                    value: "{vin_input}",
                    oninput: move |e| {
                        vin_input.set(e.value());
                        vin_error.set(None);
                    },
                }
                FieldError { message: vin_error(), class: "vin-error".to_string() }
                button { class: "btn-primary", r#type: "submit", disabled: loading(), "Value my car" }
            }

            if let Some(current) = record() {
                ValuationContent {
                    make: current.make.clone(),
                    model: current.model.clone(),
                    year: current.year,
                    vin: current.vin.clone(),
                    transmission: current.transmission,
                    mileage: current.mileage,
                    reserve_price: current.reserve_price.unwrap_or_default(),
                    average_price: current.average_price.unwrap_or_default(),
                    has_valuation: current.has_valuation(),
                    is_logged_in: logged_in(),
                    on_close: move |_| record.set(None),
                    on_continue: on_continue,
                }
            }

            if let Some(text) = notice() {
                p { class: "notice", "{text}" }
            }

            footer { class: "page-footer",
                if logged_in() {
                    Button { variant: ButtonVariant::Ghost, onclick: sign_out, "Sign out" }
                }
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| {
                        navigator.push(Route::Gallery {});
                    },
                    "Component gallery"
                }
            }
        }
    }
}
