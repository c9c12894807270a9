//! CLI library components for the roster dashboard.

pub mod config;
pub mod logging;
pub mod pipeline;
