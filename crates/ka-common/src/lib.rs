//! Shared plumbing for the key-ages workspace.

pub mod logging;
