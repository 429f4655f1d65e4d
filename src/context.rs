//! Backend context provider for AutoValue.
//!
//! Hands the process-wide backend client and the sign-in state to every
//! page via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let backend = use_backend();
//! let logged_in = use_logged_in();
//! ```

use std::sync::Arc;

use autovalue_core::BackendClient;
use dioxus::prelude::*;

/// Backend handle as stored in context. `None` when running offline.
pub type SharedBackend = Option<Arc<BackendClient>>;

/// Sign-in state, tracked separately so pages re-render when it changes
#[derive(Clone, Copy)]
pub struct LoggedIn(pub Signal<bool>);

/// Hook to access the backend client from context.
pub fn use_backend() -> SharedBackend {
    use_context::<SharedBackend>()
}

/// Hook to read (and, after sign-in or sign-out, update) the sign-in state.
pub fn use_logged_in() -> Signal<bool> {
    use_context::<LoggedIn>().0
}
