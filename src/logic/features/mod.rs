//! Features Module - Feature Extraction Engine
//!
//! One submodule per feature group; `extract` runs them all over a
//! normalized URL. Extraction never fails for a valid [`NormalizedUrl`] -
//! externally-sourced features simply stay missing until the reputation
//! stage fills them.

pub mod behavioral;
pub mod content;
pub mod layout;
pub mod lexical;
pub mod security;
pub mod structural;
pub mod vector;

#[cfg(test)]
mod tests;

pub use layout::{
    feature_group, feature_index, feature_name, layout_hash, validate_layout, FeatureGroup,
    LayoutMismatchError, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION,
};
pub use vector::FeatureVector;

use crate::logic::url::NormalizedUrl;

/// Derive the full feature vector for a normalized URL
///
/// Pure with respect to the URL: no network, no clock, no randomness. The
/// two reputation-backed features come back marked missing.
pub fn extract(url: &NormalizedUrl) -> FeatureVector {
    let mut vector = FeatureVector::new();

    lexical::extract(url, &mut vector);
    structural::extract(url, &mut vector);
    security::extract(url, &mut vector);
    content::extract(url, &mut vector);
    behavioral::extract(url, &mut vector);

    vector
}
