//! Record sources
//!
//! The service never parses ADIF itself; it asks a [`RecordSource`] for the
//! records in an uploaded log. Production uses [`AdifRecordSource`], tests
//! substitute their own implementations.

use adif_common::{parse_adif, Record, Result};
use tracing::debug;

/// Turns decoded file content into records
pub trait RecordSource: Send + Sync {
    fn parse_records(&self, content: &str) -> Result<Vec<Record>>;
}

/// Record source backed by the ADIF parser in `adif-common`
#[derive(Debug, Clone, Copy, Default)]
pub struct AdifRecordSource;

impl RecordSource for AdifRecordSource {
    fn parse_records(&self, content: &str) -> Result<Vec<Record>> {
        let file = parse_adif(content)?;
        debug!(
            "Parsed {} record(s), {} header field(s)",
            file.records.len(),
            file.header.len()
        );
        Ok(file.records)
    }
}
