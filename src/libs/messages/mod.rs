//! User-facing messages.
//!
//! All text printed by the command layer is defined once, as variants of
//! [`Message`] rendered through its `Display` implementation in
//! [`display`]. The `msg_*!` macros in [`macros`] decide whether the text goes
//! to the terminal or, in debug mode, through `tracing`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
