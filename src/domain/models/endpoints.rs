//! SOS Endpoints
//!
//! The SOS exposes its standard operations on the main service URL and its
//! offering administration on a sibling `admin` path.

use crate::shared::errors::DomainError;

const SOS_SEGMENT: &str = "sos";
const ADMIN_SEGMENT: &str = "admin";

/// Main and administrative endpoints of one SOS instance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SosEndpoints {
    sos_url: String,
    admin_url: String,
}

impl SosEndpoints {
    /// Build the endpoints from the main service URL
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidSosUrl` if the URL path has no segment
    /// equal to `sos`.
    pub fn from_sos_url(sos_url: impl Into<String>) -> Result<Self, DomainError> {
        let sos_url = sos_url.into();
        let admin_url =
            derive_admin_url(&sos_url).ok_or_else(|| DomainError::InvalidSosUrl(sos_url.clone()))?;

        Ok(Self { sos_url, admin_url })
    }

    #[must_use]
    pub fn sos_url(&self) -> &str {
        &self.sos_url
    }

    #[must_use]
    pub fn admin_url(&self) -> &str {
        &self.admin_url
    }
}

/// Replace the last path segment equal to `sos` with `admin`.
///
/// Everything before that segment is kept, everything after it (including
/// the query string) is dropped. The authority part is never considered,
/// so a host literally named `sos` does not match.
#[must_use]
pub fn derive_admin_url(sos_url: &str) -> Option<String> {
    let authority_start = sos_url.find("://").map_or(0, |i| i + 3);
    let path_start = authority_start + sos_url[authority_start..].find('/')?;
    let path_end = sos_url[path_start..]
        .find(['?', '#'])
        .map_or(sos_url.len(), |i| path_start + i);

    let mut offset = path_start;
    let mut last_match = None;
    for segment in sos_url[path_start..path_end].split('/') {
        if segment == SOS_SEGMENT {
            last_match = Some(offset);
        }
        offset += segment.len() + 1;
    }

    last_match.map(|start| format!("{}{ADMIN_SEGMENT}", &sos_url[..start]))
}
