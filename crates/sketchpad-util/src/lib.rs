//! Shared utilities for sketchpad.
//!
//! This crate provides the common plumbing used across the sketchpad
//! workspace:
//! - Logging setup with tracing
//! - Platform directory resolution

pub mod log;
pub mod path;
