#![forbid(unsafe_code)]

//! Byte-exact ANSI/VT control-sequence emission.
//!
//! [`catalog`] is the fixed table of sequences; [`emitter`] turns semantic
//! operations into those bytes on any [`std::io::Write`] sink.

pub mod catalog;
pub mod emitter;

pub use catalog::{EraseDisplayMode, EraseLineMode, MouseMode, Sequence};
pub use emitter::Emitter;
pub use termseq_core::ColorProfile;
