use std::path::Path;

use rcc_core::errors::{ErrorInfo, RccError};

use crate::config::ClusterConfig;
use crate::engine::ClusterOutcome;

/// Serialises a clustering outcome into indented JSON.
pub fn outcome_to_json(outcome: &ClusterOutcome) -> Result<String, RccError> {
    serde_json::to_string_pretty(outcome)
        .map_err(|err| RccError::Serde(ErrorInfo::new("outcome-serialize", err.to_string())))
}

/// Deserialises a clustering outcome from JSON text.
pub fn outcome_from_json(json: &str) -> Result<ClusterOutcome, RccError> {
    serde_json::from_str(json)
        .map_err(|err| RccError::Serde(ErrorInfo::new("outcome-deserialize", err.to_string())))
}

/// Serialises a clustering configuration into JSON.
pub fn config_to_json(config: &ClusterConfig) -> Result<String, RccError> {
    serde_json::to_string_pretty(config)
        .map_err(|err| RccError::Serde(ErrorInfo::new("config-serialize", err.to_string())))
}

/// Deserialises a clustering configuration from JSON text.
pub fn config_from_json(json: &str) -> Result<ClusterConfig, RccError> {
    serde_json::from_str(json)
        .map_err(|err| RccError::Serde(ErrorInfo::new("config-deserialize", err.to_string())))
}

/// Writes a JSON payload to disk with deterministic formatting.
pub fn write_json(path: &Path, json: &str) -> Result<(), RccError> {
    std::fs::write(path, json).map_err(|err| {
        RccError::Serde(
            ErrorInfo::new("json-write", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}

/// Reads a JSON payload from disk.
pub fn read_json(path: &Path) -> Result<String, RccError> {
    std::fs::read_to_string(path).map_err(|err| {
        RccError::Serde(
            ErrorInfo::new("json-read", err.to_string())
                .with_context("path", path.display().to_string()),
        )
    })
}
