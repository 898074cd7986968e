//! Session controller for sketchpad.
//!
//! This crate wires the pure version tracker to a persistence backend:
//! - [`Session`] owns the in-memory history, seeds it from storage at
//!   startup, and writes the whole sequence back after every change that
//!   altered it. The in-memory sequence is authoritative; persistence is
//!   best-effort and its failures only cost durability.
//! - [`view`] renders the recorded history for display.

pub mod error;
pub mod session;
pub mod view;

pub use error::{CoreError, CoreResult};
pub use session::Session;
