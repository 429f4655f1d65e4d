//! Theme for AutoValue.

mod styles;

pub use styles::GLOBAL_STYLES;
