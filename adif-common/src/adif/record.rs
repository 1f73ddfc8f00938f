//! A single ADIF record (one QSO)

use std::collections::HashMap;

/// Field name holding the worked station's callsign
pub const CALL_FIELD: &str = "call";

/// One logged contact as a field-name to value mapping.
///
/// ADIF field names are case-insensitive, so names are stored lower-cased
/// and every lookup is normalized the same way. Values are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value under the same name
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.fields.insert(name.to_ascii_lowercase(), value.into());
    }

    /// Get a field value (case-insensitive lookup)
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Check if a field exists
    pub fn has(&self, name: &str) -> bool {
        self.fields.contains_key(&name.to_ascii_lowercase())
    }

    pub fn call(&self) -> Option<&str> {
        self.get(CALL_FIELD)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: AsRef<str>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (name, value) in iter {
            record.insert(name.as_ref(), value);
        }
        record
    }
}
