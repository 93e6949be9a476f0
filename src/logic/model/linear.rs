//! Weighted-Linear Scoring Model
//!
//! Reference implementation of [`ScoringModel`]: min/max normalization,
//! signed per-feature weights, logistic squashing. A trained artifact
//! (calibrated logistic regression, gradient-boosted trees behind the same
//! trait) is a drop-in replacement.
//!
//! Determinism: same vector + same artifact => bit-identical probability.
//! Nothing on this path reads a clock, the environment, or a RNG.

use serde::{Deserialize, Serialize};

use crate::logic::features::{
    feature_name, validate_layout, FeatureVector, FEATURE_COUNT,
};
use super::types::{FeatureContribution, ScoreError, ScoreResult};
use super::ScoringModel;

// ============================================================================
// ARTIFACT
// ============================================================================

/// Per-feature normalization bounds from calibration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizationParams {
    pub min_vals: Vec<f32>,
    pub max_vals: Vec<f32>,
}

/// Serialized form of a linear model (JSON on disk)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearArtifact {
    /// Model version string, surfaced in every ScoreResult
    pub version: String,
    /// Feature layout this artifact was built against
    pub feature_version: u8,
    pub layout_hash: u32,
    pub bias: f32,
    /// Logit scale: logit = steepness * Σ(weight*normalized) + bias
    pub steepness: f32,
    /// Signed weights, layout order; positive pushes toward malicious
    pub weights: Vec<f32>,
    pub normalization: NormalizationParams,
    /// Raw-scale medians substituted for missing features
    pub imputation: Vec<f32>,
}

// ============================================================================
// MODEL
// ============================================================================

pub struct LinearModel {
    artifact: LinearArtifact,
}

impl LinearModel {
    /// Validate an artifact and wrap it
    pub fn from_artifact(artifact: LinearArtifact) -> Result<Self, super::types::ModelError> {
        use super::types::ModelError;

        validate_layout(artifact.feature_version, artifact.layout_hash)
            .map_err(|e| ModelError::Incompatible { message: e.to_string() })?;

        for (name, len) in [
            ("weights", artifact.weights.len()),
            ("normalization.min_vals", artifact.normalization.min_vals.len()),
            ("normalization.max_vals", artifact.normalization.max_vals.len()),
            ("imputation", artifact.imputation.len()),
        ] {
            if len != FEATURE_COUNT {
                return Err(ModelError::Incompatible {
                    message: format!("{} has {} entries, expected {}", name, len, FEATURE_COUNT),
                });
            }
        }

        let finite = artifact.weights.iter().all(|w| w.is_finite())
            && artifact.bias.is_finite()
            && artifact.steepness.is_finite();
        if !finite {
            return Err(ModelError::Incompatible {
                message: "non-finite weight, bias or steepness".to_string(),
            });
        }

        Ok(Self { artifact })
    }

    /// Built-in starter baseline
    ///
    /// Hand-set weights, not the product of a calibration run. Deployments
    /// with labeled data should load a calibrated artifact instead.
    pub fn baseline() -> Self {
        let artifact = LinearArtifact {
            version: "linear-baseline-v1".to_string(),
            feature_version: crate::logic::features::FEATURE_VERSION,
            layout_hash: crate::logic::features::layout_hash(),
            bias: 0.0,
            steepness: 6.0,
            weights: vec![
                0.15,  // url_length
                0.08,  // host_length
                0.05,  // path_length
                0.05,  // query_length
                0.02,  // fragment_length
                0.10,  // subdomain_count
                0.05,  // path_depth
                0.05,  // param_count
                -0.25, // has_https
                0.25,  // host_is_ip
                0.30,  // has_at_symbol
                0.10,  // has_explicit_port
                0.18,  // credential_keyword_hits
                0.12,  // financial_keyword_hits
                0.03,  // tld_length
                -0.05, // is_popular_tld
                0.15,  // is_shortener
                0.20,  // double_slash_count
                -0.20, // domain_age_days
                -0.15, // cert_valid
            ],
            normalization: NormalizationParams {
                min_vals: vec![0.0; FEATURE_COUNT],
                max_vals: vec![
                    150.0,  // url_length
                    60.0,   // host_length
                    80.0,   // path_length
                    100.0,  // query_length
                    50.0,   // fragment_length
                    5.0,    // subdomain_count
                    10.0,   // path_depth
                    15.0,   // param_count
                    1.0,    // has_https
                    1.0,    // host_is_ip
                    1.0,    // has_at_symbol
                    1.0,    // has_explicit_port
                    5.0,    // credential_keyword_hits
                    5.0,    // financial_keyword_hits
                    10.0,   // tld_length
                    1.0,    // is_popular_tld
                    1.0,    // is_shortener
                    3.0,    // double_slash_count
                    3650.0, // domain_age_days
                    1.0,    // cert_valid
                ],
            },
            imputation: {
                let mut medians = vec![0.0; FEATURE_COUNT];
                // Only the external features can actually be missing
                medians[crate::logic::features::layout::IDX_DOMAIN_AGE_DAYS] = 1825.0;
                medians[crate::logic::features::layout::IDX_CERT_VALID] = 1.0;
                medians
            },
        };

        Self::from_artifact(artifact).expect("baseline artifact is valid by construction")
    }

    pub fn artifact(&self) -> &LinearArtifact {
        &self.artifact
    }

    fn normalized(&self, index: usize, raw: f32) -> f32 {
        let min = self.artifact.normalization.min_vals[index];
        let max = self.artifact.normalization.max_vals[index];
        let range = (max - min).max(1e-8);
        ((raw - min) / range).clamp(0.0, 1.0)
    }
}

impl ScoringModel for LinearModel {
    fn score(&self, vector: &FeatureVector) -> Result<ScoreResult, ScoreError> {
        vector.validate()?;

        let mut contributions = Vec::with_capacity(FEATURE_COUNT);
        let mut logit_sum = 0.0f32;

        for index in 0..FEATURE_COUNT {
            let imputed = vector.is_missing(index);
            let raw = if imputed {
                self.artifact.imputation[index]
            } else {
                vector.values[index]
            };

            let weight = self.artifact.weights[index];
            let contribution = weight * self.normalized(index, raw);
            logit_sum += contribution;

            contributions.push(FeatureContribution {
                name: feature_name(index).unwrap_or("unknown").to_string(),
                value: raw,
                weight,
                contribution,
                imputed,
            });
        }

        let logit = self.artifact.steepness * logit_sum + self.artifact.bias;
        let probability = logistic(logit);

        Ok(ScoreResult {
            probability,
            contributions,
            model_version: self.artifact.version.clone(),
        })
    }

    fn version(&self) -> &str {
        &self.artifact.version
    }

    fn weights(&self) -> &[f32] {
        &self.artifact.weights
    }
}

fn logistic(z: f32) -> f32 {
    1.0 / (1.0 + (-z).exp())
}

// ============================================================================
// TESTS
// ============================================================================
