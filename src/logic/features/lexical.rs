//! Lexical Feature Extraction
//!
//! Raw length signals of the input and its components.

use crate::logic::url::NormalizedUrl;
use super::vector::FeatureVector;

pub fn extract(url: &NormalizedUrl, vector: &mut FeatureVector) {
    vector.set_by_name("url_length", url.raw.len() as f32);
    vector.set_by_name("host_length", url.host.len() as f32);
    vector.set_by_name("path_length", url.path.len() as f32);
    vector.set_by_name(
        "query_length",
        url.query.as_deref().map_or(0, str::len) as f32,
    );
    vector.set_by_name(
        "fragment_length",
        url.fragment.as_deref().map_or(0, str::len) as f32,
    );
}
