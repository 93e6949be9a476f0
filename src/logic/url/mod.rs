//! URL Module - Input Normalization
//!
//! First stage of the pipeline: turns a raw caller string into a
//! [`NormalizedUrl`] or rejects it with [`InvalidUrl`] before any other
//! work happens.

pub mod normalize;
pub mod types;

pub use normalize::normalize;
pub use types::{InvalidUrl, NormalizedUrl, Scheme};
