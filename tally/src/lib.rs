//! Shared console plumbing for the tally binaries.

pub mod render;
