//! AutoValue Core Library
//!
//! Domain records for vehicle valuations and the process-wide handle to the
//! hosted backend.
//!
//! ## Overview
//!
//! The desktop app and the UI crate only ever see plain records from here:
//! a [`ValuationRecord`] carries what the valuation panel displays, and the
//! [`BackendClient`] is built once at startup from environment configuration.
//!
//! ## Quick Start
//!
//! ```ignore
//! use autovalue_core::{backend, init_backend, BackendConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     autovalue_core::logging::init_logging();
//!
//!     let config = BackendConfig::from_env()?;
//!     init_backend(config, "/tmp/autovalue")?;
//!
//!     if let Some(client) = backend() {
//!         println!("signed in: {}", client.is_logged_in());
//!     }
//!     Ok(())
//! }
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod session;
pub mod types;
pub mod valuations;

// Re-exports
pub use backend::{backend, init_backend, BackendClient};
pub use config::{AuthOptions, BackendConfig};
pub use error::{BackendError, ConfigError, CoreResult, ParseTransmissionError};
pub use session::Session;
pub use types::*;
