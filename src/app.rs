use dioxus::prelude::*;

use crate::context::{LoggedIn, SharedBackend};
use crate::pages::{Gallery, Valuation};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - VIN lookup and valuation panel
/// - `/gallery` - Every status component in each of its states
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Valuation {},
    #[route("/gallery")]
    Gallery {},
}

/// Root application component.
///
/// Provides global styles, backend context, and routing.
#[component]
pub fn App() -> Element {
    let backend: SharedBackend = use_hook(autovalue_core::backend);
    let logged_in: Signal<bool> =
        use_signal(|| backend.as_ref().is_some_and(|client| client.is_logged_in()));

    use_context_provider(|| backend.clone());
    use_context_provider(|| LoggedIn(logged_in));

    // Keep the session fresh for as long as the window is open, and follow
    // sign-outs the backend forces (rejected refresh token, expiry)
    use_effect(move || {
        if let Some(client) = autovalue_core::backend() {
            let mut logged_in = logged_in;
            spawn(async move {
                client
                    .run_auto_refresh(move |now_logged_in: bool| {
                        if *logged_in.peek() != now_logged_in {
                            logged_in.set(now_logged_in);
                        }
                    })
                    .await;
            });
        }
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
