//! CLI library components for relnorm.

pub mod display;
pub mod logging;
