//! CLI library components for the Rate Manager.

pub mod logging;
pub mod pipeline;
pub mod request;
