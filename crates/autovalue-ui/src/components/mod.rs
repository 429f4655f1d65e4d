//! Reusable UI components
//!
//! Class names are resolved to styles by the application's global stylesheet.

mod button;
mod field_error;
mod loading_spinner;
mod valuation_content;

pub use button::*;
pub use field_error::*;
pub use loading_spinner::*;
pub use valuation_content::*;
