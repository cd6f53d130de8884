mod arange;
mod range;

pub use arange::arange;
pub use range::{sample, RangeSampler};
