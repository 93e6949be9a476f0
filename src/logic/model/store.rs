//! Model Store
//!
//! Process-wide home of the active scoring model. Load/reload happens at
//! startup or on explicit operator action, never on the analysis path.
//!
//! Hot-swap safety: the active model lives behind an RwLock'd `Arc`. An
//! analysis clones the Arc once up front and keeps scoring against that
//! artifact even if a reload swaps the pointer mid-flight.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use sha2::{Digest, Sha256};

use super::linear::{LinearArtifact, LinearModel};
use super::types::ModelError;
use super::ScoringModel;

// ============================================================================
// STATE
// ============================================================================

static ACTIVE_MODEL: Lazy<RwLock<Option<Arc<dyn ScoringModel>>>> =
    Lazy::new(|| RwLock::new(None));

/// Latency stats (microseconds / count), fed by the orchestrator
static LATENCY_SUM: AtomicU64 = AtomicU64::new(0);
static ANALYSIS_COUNT: AtomicU64 = AtomicU64::new(0);

// ============================================================================
// PUBLIC API
// ============================================================================

/// Current model handle, if one is loaded
pub fn current() -> Option<Arc<dyn ScoringModel>> {
    ACTIVE_MODEL.read().clone()
}

/// Check if a model is loaded
pub fn is_model_loaded() -> bool {
    ACTIVE_MODEL.read().is_some()
}

/// Version string of the active model
pub fn active_version() -> Option<String> {
    ACTIVE_MODEL.read().as_ref().map(|m| m.version().to_string())
}

/// Install a model (atomic swap; in-flight analyses keep the old one)
pub fn install(model: Arc<dyn ScoringModel>) {
    let version = model.version().to_string();
    *ACTIVE_MODEL.write() = Some(model);
    log::info!("Scoring model installed: {}", version);
}

/// Install the built-in weighted-linear baseline
pub fn install_baseline() {
    install(Arc::new(LinearModel::baseline()));
}

/// Unload the model; analyses fail with ModelUnavailable until reload
pub fn unload() {
    *ACTIVE_MODEL.write() = None;
    log::info!("Scoring model unloaded");
}

/// Load a linear artifact from a JSON file, optionally verifying its SHA256
pub fn load_from_file(path: &Path, expected_sha256: Option<&str>) -> Result<(), ModelError> {
    if !path.exists() {
        return Err(ModelError::NotFound { path: path.display().to_string() });
    }

    let bytes = std::fs::read(path)
        .map_err(|e| ModelError::Io { message: e.to_string() })?;

    if let Some(expected) = expected_sha256 {
        let actual = sha256_hex(&bytes);
        if !actual.eq_ignore_ascii_case(expected) {
            return Err(ModelError::ChecksumMismatch {
                expected: expected.to_string(),
                actual,
            });
        }
    }

    let artifact: LinearArtifact = serde_json::from_slice(&bytes)
        .map_err(|e| ModelError::Parse { message: e.to_string() })?;

    let model = LinearModel::from_artifact(artifact)?;
    log::info!("Loaded scoring model {} from {}", model.version(), path.display());
    install(Arc::new(model));

    Ok(())
}

/// Load a model by version from the default model directory
///
/// Looks for `<dir>/<version>.json`; a `<version>.json.sha256` sidecar, when
/// present, is enforced.
pub fn load_version(version: &str) -> Result<(), ModelError> {
    load_version_from(&default_model_dir(), version)
}

/// Load a model by version from a specific directory
pub fn load_version_from(dir: &Path, version: &str) -> Result<(), ModelError> {
    let path = dir.join(format!("{}.json", version));
    let sidecar = dir.join(format!("{}.json.sha256", version));

    let expected = if sidecar.exists() {
        let content = std::fs::read_to_string(&sidecar)
            .map_err(|e| ModelError::Io { message: e.to_string() })?;
        Some(content.trim().to_string())
    } else {
        None
    };

    load_from_file(&path, expected.as_deref())
}

/// Default directory for model artifacts
pub fn default_model_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("url-risk-core")
        .join("models")
}

// ============================================================================
// STATS
// ============================================================================

/// Record one completed analysis (called by the orchestrator)
pub fn record_analysis(duration_us: u64) {
    LATENCY_SUM.fetch_add(duration_us, Ordering::Relaxed);
    ANALYSIS_COUNT.fetch_add(1, Ordering::Relaxed);
}

/// (analysis count, average latency in ms)
pub fn analysis_stats() -> (u64, f32) {
    let sum = LATENCY_SUM.load(Ordering::Relaxed);
    let count = ANALYSIS_COUNT.load(Ordering::Relaxed);
    let avg_ms = if count > 0 { (sum as f32 / count as f32) / 1000.0 } else { 0.0 };
    (count, avg_ms)
}

// ============================================================================
// UTILITIES
// ============================================================================

/// SHA256 of a byte slice, lower-case hex
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::test_support::global_state_lock;

    #[test]
    fn test_install_and_unload() {
        let _guard = global_state_lock();

        install_baseline();
        assert!(is_model_loaded());
        assert_eq!(active_version().as_deref(), Some("linear-baseline-v1"));

        unload();
        assert!(!is_model_loaded());
        assert!(current().is_none());

        install_baseline();
    }

    #[test]
    fn test_inflight_handle_survives_swap() {
        let _guard = global_state_lock();

        install_baseline();
        let pinned = current().unwrap();

        unload();
        // The pinned Arc still scores
        assert_eq!(pinned.version(), "linear-baseline-v1");

        install_baseline();
    }

    #[test]
    fn test_load_from_file_roundtrip() {
        let _guard = global_state_lock();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");

        let mut artifact = LinearModel::baseline().artifact().clone();
        artifact.version = "linear-test-v2".to_string();
        std::fs::write(&path, serde_json::to_vec_pretty(&artifact).unwrap()).unwrap();

        load_from_file(&path, None).unwrap();
        assert_eq!(active_version().as_deref(), Some("linear-test-v2"));

        install_baseline();
    }

    #[test]
    fn test_load_verifies_checksum() {
        let _guard = global_state_lock();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.json");

        let artifact = LinearModel::baseline().artifact().clone();
        let bytes = serde_json::to_vec(&artifact).unwrap();
        std::fs::write(&path, &bytes).unwrap();

        let good = sha256_hex(&bytes);
        assert!(load_from_file(&path, Some(&good)).is_ok());

        let bad = "0".repeat(64);
        match load_from_file(&path, Some(&bad)) {
            Err(ModelError::ChecksumMismatch { .. }) => {}
            other => panic!("expected checksum mismatch, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_load_version_with_sidecar() {
        let _guard = global_state_lock();

        let dir = tempfile::tempdir().unwrap();

        let mut artifact = LinearModel::baseline().artifact().clone();
        artifact.version = "linear-test-v3".to_string();
        let bytes = serde_json::to_vec(&artifact).unwrap();
        std::fs::write(dir.path().join("linear-test-v3.json"), &bytes).unwrap();
        std::fs::write(
            dir.path().join("linear-test-v3.json.sha256"),
            format!("{}\n", sha256_hex(&bytes)),
        )
        .unwrap();

        load_version_from(dir.path(), "linear-test-v3").unwrap();
        assert_eq!(active_version().as_deref(), Some("linear-test-v3"));

        // Tampering with the artifact trips the sidecar check
        std::fs::write(dir.path().join("linear-test-v3.json"), b"{}").unwrap();
        assert!(matches!(
            load_version_from(dir.path(), "linear-test-v3"),
            Err(ModelError::ChecksumMismatch { .. })
        ));

        install_baseline();
    }

    #[test]
    fn test_load_missing_file() {
        match load_from_file(Path::new("/nonexistent/model.json"), None) {
            Err(ModelError::NotFound { .. }) => {}
            other => panic!("expected NotFound, got {:?}", other.err()),
        }
    }
}
