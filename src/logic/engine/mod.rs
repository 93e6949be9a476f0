//! Engine Module - Analysis Orchestration
//!
//! The caller-facing surface: `analyze` runs the full pipeline and
//! `engine_status` reports health for status endpoints.

pub mod analyzer;
pub mod types;

#[cfg(test)]
mod tests;

pub use analyzer::analyze;
pub use types::{
    AnalysisError, AnalysisResult, EngineStatus, FeatureBreakdown,
};

use crate::logic::model::store;
use crate::logic::reputation;

/// Engine health snapshot
pub fn engine_status() -> EngineStatus {
    let (analysis_count, avg_latency_ms) = store::analysis_stats();

    EngineStatus {
        model_loaded: store::is_model_loaded(),
        model_version: store::active_version(),
        reputation_available: reputation::current().is_some(),
        analysis_count,
        avg_latency_ms,
    }
}
