//! Network Manifest Loader

use std::path::Path;

use validator::Validate;

use super::dto::ManifestDto;
use crate::domain::models::network::NetworkDescription;
use crate::shared::errors::ManifestError;

/// Read and validate a manifest file
///
/// # Errors
///
/// Returns `ManifestError` if the file cannot be read, is not valid JSON, or
/// describes an invalid network.
pub fn load_manifest(path: impl AsRef<Path>) -> Result<Vec<NetworkDescription>, ManifestError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let networks = parse_manifest(&contents)?;
    tracing::info!(path = %path.display(), count = networks.len(), "Loaded network manifest");
    Ok(networks)
}

/// Parse and validate manifest JSON
///
/// # Errors
///
/// Returns `ManifestError` if the JSON is malformed or a network is invalid.
pub fn parse_manifest(contents: &str) -> Result<Vec<NetworkDescription>, ManifestError> {
    let manifest: ManifestDto = serde_json::from_str(contents)?;
    manifest.validate()?;

    let mut networks = Vec::with_capacity(manifest.networks.len());
    for dto in manifest.networks {
        if networks
            .iter()
            .any(|n: &NetworkDescription| n.source_id() == dto.source_id)
        {
            return Err(ManifestError::Validation(vec![format!(
                "sourceId '{}' is listed more than once",
                dto.source_id
            )]));
        }
        networks.push(NetworkDescription::try_from(dto)?);
    }

    Ok(networks)
}
