//! Analysis Orchestrator
//!
//! Sequences normalize -> extract -> reputation -> score -> classify.
//!
//! The model Arc is pinned before any slow work so a hot-swap mid-call
//! cannot change the artifact under us. The reputation stage is the only
//! suspension point: both lookups run on the blocking pool under one
//! timeout, and on expiry the pending handles are simply dropped - late
//! results are discarded, the analysis proceeds on imputed values (or fails,
//! in fail-closed mode).

use std::time::Instant;

use uuid::Uuid;

use crate::logic::config::EngineConfig;
use crate::logic::features::{self, behavioral};
use crate::logic::model::store;
use crate::logic::reputation::{self, CertValidity, DomainAge};
use crate::logic::risk;
use crate::logic::url::normalize;
use super::types::{AnalysisError, AnalysisResult, FeatureBreakdown};

/// Analyze one URL string
pub async fn analyze(raw: &str, config: &EngineConfig) -> Result<AnalysisResult, AnalysisError> {
    let started = Instant::now();
    let timestamp = chrono::Utc::now();

    let url = normalize(raw)?;

    // Pin the active artifact for the whole call
    let model = store::current().ok_or_else(|| AnalysisError::ModelUnavailable {
        message: "no scoring model loaded".to_string(),
    })?;

    let mut vector = features::extract(&url);

    let (domain_age, certificate) = reputation_stage(&url.host, config).await?;
    behavioral::apply_domain_age(&mut vector, domain_age);
    behavioral::apply_certificate(&mut vector, certificate);

    let degraded_features: Vec<String> = vector
        .missing_features()
        .iter()
        .map(|s| s.to_string())
        .collect();
    let degraded = !degraded_features.is_empty();
    if degraded {
        log::debug!("analysis of {} degraded: {:?}", url.host, degraded_features);
    }

    let score = model
        .score(&vector)
        .map_err(|e| AnalysisError::ModelUnavailable { message: e.to_string() })?;

    let classification = risk::classify_with_thresholds(&score, &config.thresholds, degraded);

    let elapsed = started.elapsed();
    store::record_analysis(elapsed.as_micros() as u64);

    Ok(AnalysisResult {
        analysis_id: Uuid::new_v4(),
        url: url.to_string(),
        features: FeatureBreakdown::from_parts(&url, &vector, domain_age, certificate),
        vector,
        score,
        classification,
        degraded_features,
        processing_ms: elapsed.as_secs_f32() * 1000.0,
        timestamp,
    })
}

/// Run both reputation lookups under one timeout
///
/// No provider installed means both verdicts are Unknown immediately. A
/// timeout either degrades (default) or fails the call (fail-closed).
async fn reputation_stage(
    host: &str,
    config: &EngineConfig,
) -> Result<(DomainAge, CertValidity), AnalysisError> {
    // Kill-switch: lookups disabled means unknown, never fabricated
    if !crate::constants::is_reputation_enabled() {
        return Ok((DomainAge::Unknown, CertValidity::Unknown));
    }

    let Some(provider) = reputation::current() else {
        return Ok((DomainAge::Unknown, CertValidity::Unknown));
    };

    let age_provider = provider.clone();
    let age_host = host.to_string();
    let age_task = tokio::task::spawn_blocking(move || age_provider.domain_age_days(&age_host));

    let cert_host = host.to_string();
    let cert_task =
        tokio::task::spawn_blocking(move || provider.certificate_validity(&cert_host));

    let lookups = async {
        let age = age_task.await.unwrap_or(DomainAge::Unknown);
        let cert = cert_task.await.unwrap_or(CertValidity::Unknown);
        (age, cert)
    };

    match tokio::time::timeout(config.reputation_timeout(), lookups).await {
        Ok(verdicts) => Ok(verdicts),
        Err(_) if config.fail_closed => {
            Err(AnalysisError::Timeout { elapsed_ms: config.reputation_timeout_ms })
        }
        Err(_) => {
            log::warn!(
                "reputation lookups for {} exceeded {} ms, proceeding with unknown values",
                host,
                config.reputation_timeout_ms
            );
            Ok((DomainAge::Unknown, CertValidity::Unknown))
        }
    }
}
