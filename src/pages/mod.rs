//! Page components for AutoValue.

mod gallery;
mod valuation;

pub use gallery::Gallery;
pub use valuation::Valuation;
