//! Request handlers.

pub mod quiz;
pub mod stats;
