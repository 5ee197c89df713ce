#![forbid(unsafe_code)]

//! Core: logging facade and color-profile detection shared by termseq crates.

pub mod color_profile;
pub mod logging;

pub use color_profile::{ColorProfile, ParseColorProfileError};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, trace, trace_span, warn};
