//! Library side of the `gen-stringify` generator.

pub mod config;
pub mod logging;
pub mod pipeline;
