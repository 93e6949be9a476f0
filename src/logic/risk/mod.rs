//! Risk Module - Threshold Classification
//!
//! `types` holds data structures, `rules` holds thresholds, `classifier`
//! holds the pure mapping. Keep them separate.

pub mod classifier;
pub mod rules;
pub mod types;

pub use classifier::{classify, classify_with_thresholds};
pub use rules::RiskThresholds;
pub use types::{RiskCategory, RiskClassification};
