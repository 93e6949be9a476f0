//! URL Risk Core - URL Risk Scoring Engine
//!
//! Deterministic feature extraction from an arbitrary URL string plus a
//! pluggable scoring model, producing a calibrated risk classification with
//! explainable sub-scores. Presentation layers (dashboard, CLI, API) consume
//! [`AnalysisResult`] and the static feature-weights table; they are not part
//! of this crate.

pub mod constants;
pub mod logic;

pub use logic::config::EngineConfig;
pub use logic::engine::{analyze, engine_status, AnalysisError, AnalysisResult};
pub use logic::explain::{explain, weights_table, WeightsTable};
pub use logic::features::{FeatureVector, FEATURE_COUNT};
pub use logic::model::{store, ScoreResult, ScoringModel};
pub use logic::reputation::{CertValidity, DomainAge, ReputationProvider};
pub use logic::risk::{RiskCategory, RiskClassification, RiskThresholds};
pub use logic::url::{normalize, InvalidUrl, NormalizedUrl};
