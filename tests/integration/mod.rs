//! Integration tests against live container engines
//!
//! Each engine module is gated behind the cargo feature of the same name, since
//! the tests need the engine CLI installed and its daemon running.

pub mod common;
pub mod docker;
pub mod nerdctl;
pub mod podman;
