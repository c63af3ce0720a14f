//! Logging facilities for Foyer.
//!
//! Foyer uses the `tracing` crate for instrumentation. Install a subscriber
//! in your application to see logs:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!     // ...
//! }
//! ```
//!
//! The constants in [`targets`] can be used with `tracing` filter
//! directives to narrow output to a single subsystem, for example
//! `RUST_LOG=foyer::widget=debug`.

/// Target names for log filtering.
pub mod targets {
    /// Core primitives (signals).
    pub const CORE: &str = "foyer_core";
    /// Signal/slot system.
    pub const SIGNAL: &str = "foyer_core::signal";
    /// Widget tree and event handling.
    pub const WIDGET: &str = "foyer::widget";
    /// Theme XML parsing and configuration.
    pub const THEME: &str = "foyer::theme";
    /// Image loading and resources.
    pub const RENDER: &str = "foyer_render";
}
