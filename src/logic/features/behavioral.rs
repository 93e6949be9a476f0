//! Behavioral Feature Extraction
//!
//! Redirect heuristics plus the two externally-sourced features. Domain age
//! and certificate validity start out missing and are only filled by
//! `apply_domain_age` / `apply_certificate` with real collaborator data -
//! unavailable data stays an explicit missing mark.

use crate::logic::reputation::{CertValidity, DomainAge};
use crate::logic::url::NormalizedUrl;
use super::layout::{IDX_CERT_VALID, IDX_DOMAIN_AGE_DAYS};
use super::vector::FeatureVector;

pub fn extract(url: &NormalizedUrl, vector: &mut FeatureVector) {
    vector.set_by_name("double_slash_count", double_slash_count(&url.raw) as f32);

    // External features: unknown until the reputation stage fills them
    vector.set_missing(IDX_DOMAIN_AGE_DAYS);
    vector.set_missing(IDX_CERT_VALID);
}

/// `//` occurrences beyond the scheme separator (open-redirect indicator)
pub fn double_slash_count(raw: &str) -> usize {
    let total = raw.matches("//").count();
    if raw.contains("://") {
        total.saturating_sub(1)
    } else {
        total
    }
}

/// Fill `domain_age_days` from the reputation collaborator
pub fn apply_domain_age(vector: &mut FeatureVector, age: DomainAge) {
    match age {
        DomainAge::Known(days) => vector.set(IDX_DOMAIN_AGE_DAYS, days as f32),
        DomainAge::Unknown => vector.set_missing(IDX_DOMAIN_AGE_DAYS),
    }
}

/// Fill `cert_valid` from the reputation collaborator
pub fn apply_certificate(vector: &mut FeatureVector, cert: CertValidity) {
    match cert {
        CertValidity::Valid => vector.set(IDX_CERT_VALID, 1.0),
        CertValidity::Invalid => vector.set(IDX_CERT_VALID, 0.0),
        CertValidity::Unknown => vector.set_missing(IDX_CERT_VALID),
    }
}
