//! Callsign extraction from parsed records

use std::collections::HashSet;

use adif_common::Record;

/// Callsigns pulled from a log, in record order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Distinct values in `callsigns` (exact string equality)
    pub unique_count: usize,
    /// One entry per record with a non-empty `call`, duplicates kept
    pub callsigns: Vec<String>,
}

impl Extraction {
    /// Callsign of the first qualifying record, if any
    pub fn first_callsign(&self) -> Option<&str> {
        self.callsigns.first().map(String::as_str)
    }
}

/// Collect non-empty `call` values and count the distinct ones.
/// Records with no `call` field, or an empty one, are skipped.
pub fn extract(records: &[Record]) -> Extraction {
    let callsigns: Vec<String> = records
        .iter()
        .filter_map(Record::call)
        .filter(|call| !call.is_empty())
        .map(str::to_string)
        .collect();

    let unique_count = callsigns.iter().collect::<HashSet<_>>().len();

    Extraction {
        unique_count,
        callsigns,
    }
}
