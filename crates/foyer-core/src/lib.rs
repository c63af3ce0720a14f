//! Core primitives for the Foyer UI toolkit.
//!
//! This crate provides the pieces of the toolkit that have no rendering or
//! widget dependencies:
//!
//! - [`Signal`] — a type-safe signal/slot mechanism for change notification
//! - [`logging`] — tracing target names used across the toolkit
//!
//! Widgets emit signals when committed state changes (for example a text
//! edit emitting its value-changed notification); application code connects
//! closures to observe them.

pub mod logging;
mod signal;

pub use signal::{ConnectionId, Signal};
