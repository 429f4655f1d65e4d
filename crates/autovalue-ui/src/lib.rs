//! AutoValue UI Components
//!
//! Stateless Dioxus components for the valuation flow.
//!
//! ## Design Philosophy
//!
//! Every component is a pure function of its props:
//! - layout is picked from a flag or from whether a value is present
//! - text is embedded verbatim
//! - the only way back to the caller is an explicit `EventHandler`
//!
//! The layout decisions live in [`status`] as plain data so they can be
//! tested without a renderer; the components only turn that data into markup.

pub mod components;
pub mod status;

pub use components::*;
pub use status::*;
