//! Process-level helpers for the plugin binary.

pub mod bootstrap;
