//! Canonical rate schedule construction.
//!
//! The pipeline is stateless: every function here is a pure transformation
//! of its inputs and can be called concurrently for independent requests.
//!
//! - [`resolve_field`]: mapped source value, or the field's default
//! - [`transform_numeric`]: tolerant parse, discount then gain, six decimals
//! - [`build`] / [`build_with_report`]: one output row per source row

pub mod builder;
pub mod mapper;
pub mod numeric;

pub use builder::{BuildReport, build, build_with_report};
pub use mapper::resolve_field;
pub use numeric::{format_fixed, parse_decimal, transform_numeric};
