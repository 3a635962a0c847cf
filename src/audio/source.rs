//! Reading track sources from disk or over http(s).

use std::path::PathBuf;
use std::time::Duration;

use crate::player::RejectReason;

/// Where the bytes of a track come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    Remote(String),
    Local(PathBuf),
}

/// Classify a track locator. `file://` URLs and bare paths are local.
pub fn classify(locator: &str) -> SourceKind {
    let trimmed = locator.trim();
    let lower = trimmed.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        SourceKind::Remote(trimmed.to_string())
    } else if let Some(path) = trimmed.strip_prefix("file://") {
        SourceKind::Local(PathBuf::from(path))
    } else {
        SourceKind::Local(PathBuf::from(trimmed))
    }
}

/// Read the whole source into memory.
pub fn fetch(locator: &str, timeout: Duration) -> Result<Vec<u8>, RejectReason> {
    let fail = |message: String| RejectReason::Fetch {
        locator: locator.to_string(),
        message,
    };

    match classify(locator) {
        SourceKind::Local(path) => std::fs::read(&path).map_err(|e| fail(e.to_string())),
        SourceKind::Remote(url) => {
            let client = reqwest::blocking::Client::builder()
                .timeout(timeout)
                .redirect(reqwest::redirect::Policy::limited(10))
                .build()
                .map_err(|e| fail(e.to_string()))?;

            let response = client
                .get(&url)
                .send()
                .and_then(|r| r.error_for_status())
                .map_err(|e| fail(e.to_string()))?;

            let bytes = response.bytes().map_err(|e| fail(e.to_string()))?;
            log::debug!("fetched {} bytes from {url}", bytes.len());
            Ok(bytes.to_vec())
        }
    }
}
