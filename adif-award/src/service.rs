//! ADIF processing service
//!
//! Ties a record source to callsign extraction and tier classification.

use std::sync::Arc;

use adif_common::{Error, Result};
use serde::Serialize;
use tracing::debug;

use crate::award::{classify, AwardTier};
use crate::extract::extract;
use crate::source::RecordSource;

/// Reported callsign when a log has no usable `call` values
pub const UNKNOWN_CALLSIGN: &str = "Unknown";

/// Accepted file extensions (compared case-insensitively)
const ADIF_EXTENSIONS: [&str; 2] = [".adi", ".adif"];

/// Result of processing one uploaded log
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AwardSummary {
    pub unique_addresses: usize,
    pub award_tier: AwardTier,
    /// First callsign in the log, not necessarily unique
    pub callsign: String,
}

/// Processes ADIF content into an [`AwardSummary`]
#[derive(Clone)]
pub struct AdifService {
    source: Arc<dyn RecordSource>,
}

impl AdifService {
    pub fn new(source: Arc<dyn RecordSource>) -> Self {
        Self { source }
    }

    /// Check a filename for an ADIF extension. A missing or empty name fails.
    pub fn is_valid_adif_file(filename: Option<&str>) -> bool {
        let Some(name) = filename.filter(|n| !n.is_empty()) else {
            return false;
        };
        let name = name.to_lowercase();
        ADIF_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
    }

    /// Parse, extract and classify decoded file content
    pub fn process_adif_content(&self, content: &str) -> Result<AwardSummary> {
        let records = self.source.parse_records(content)?;
        let extraction = extract(&records);

        let count = i64::try_from(extraction.unique_count)
            .map_err(|_| Error::Internal("unique count exceeds i64".to_string()))?;
        let award_tier = classify(count)?;

        let callsign = extraction
            .first_callsign()
            .unwrap_or(UNKNOWN_CALLSIGN)
            .to_string();

        debug!(
            "{} record(s), {} unique callsign(s) -> {}",
            records.len(),
            extraction.unique_count,
            award_tier
        );

        Ok(AwardSummary {
            unique_addresses: extraction.unique_count,
            award_tier,
            callsign,
        })
    }
}
