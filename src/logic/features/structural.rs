//! Structural Feature Extraction
//!
//! Shape of the URL: subdomain depth, path depth, parameter count.

use crate::logic::url::NormalizedUrl;
use super::vector::FeatureVector;

pub fn extract(url: &NormalizedUrl, vector: &mut FeatureVector) {
    vector.set_by_name("subdomain_count", subdomain_count(&url.host) as f32);
    vector.set_by_name("path_depth", path_depth(&url.path) as f32);
    vector.set_by_name("param_count", url.params.len() as f32);
}

/// Dot-separated host labels minus 2 (registrable domain + TLD), floored at 0
pub fn subdomain_count(host: &str) -> usize {
    host.split('.').filter(|l| !l.is_empty()).count().saturating_sub(2)
}

/// Count of non-empty path segments
pub fn path_depth(path: &str) -> usize {
    path.split('/').filter(|s| !s.is_empty()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::url::normalize;

    #[test]
    fn test_subdomain_count() {
        assert_eq!(subdomain_count("example.com"), 0);
        assert_eq!(subdomain_count("www.example.com"), 1);
        assert_eq!(subdomain_count("a.b.c.example.com"), 3);
        assert_eq!(subdomain_count("localhost"), 0);
    }

    #[test]
    fn test_path_depth() {
        assert_eq!(path_depth("/"), 0);
        assert_eq!(path_depth("/login"), 1);
        assert_eq!(path_depth("/a/b/c"), 3);
        assert_eq!(path_depth("/a//b/"), 2);
    }

    #[test]
    fn test_structural_extract() {
        let url = normalize("https://login.secure.example.com/account/verify?a=1&b=2").unwrap();
        let mut vector = FeatureVector::new();
        extract(&url, &mut vector);

        assert_eq!(vector.get_by_name("subdomain_count"), Some(2.0));
        assert_eq!(vector.get_by_name("path_depth"), Some(2.0));
        assert_eq!(vector.get_by_name("param_count"), Some(2.0));
    }
}
