//! ADIF Parser
//!
//! Reads the tag-delimited ADI format: `<NAME:LENGTH>value` or
//! `<NAME:LENGTH:TYPE>value` fields, records closed by `<EOR>`, and an
//! optional header closed by `<EOH>`. Free text between tags is ignored.
//!
//! A file that does not open with `<` carries a free-text header. Everything
//! before `<EOH>` belongs to it, and only well-formed fields are kept from it.

use tracing::debug;

use super::record::Record;
use crate::{Error, Result};

/// Parsed ADIF file
#[derive(Debug, Clone, Default)]
pub struct AdifFile {
    /// Header fields (before <EOH>)
    pub header: Record,
    /// QSO records, in file order
    pub records: Vec<Record>,
}

/// Parse an ADIF string into header and records
///
/// Field lengths count characters, so multi-byte UTF-8 values are taken
/// whole. Fields left over after the last `<EOR>` do not form a record.
pub fn parse_adif(content: &str) -> Result<AdifFile> {
    let mut file = AdifFile::default();
    let mut current = Record::new();

    let mut rest = match split_header(content) {
        Some((header, body)) => {
            file.header = parse_header_fields(header);
            body
        }
        None => content,
    };

    while let Some((spec, after)) = split_tag(rest) {
        let offset = content.len() - rest.len();

        let mut parts = spec.split(':');
        let name = parts.next().unwrap_or_default().trim();
        if name.is_empty() {
            return Err(Error::Parse(format!("empty tag name at byte {}", offset)));
        }

        if name.eq_ignore_ascii_case("eoh") {
            file.header = std::mem::take(&mut current);
            rest = after;
            continue;
        }

        if name.eq_ignore_ascii_case("eor") {
            if !current.is_empty() {
                file.records.push(std::mem::take(&mut current));
            }
            rest = after;
            continue;
        }

        // Length is optional only for flag-style tags with no data
        let length = match parts.next() {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                Error::Parse(format!(
                    "invalid length '{}' for field <{}> at byte {}",
                    raw, name, offset
                ))
            })?,
            None => 0,
        };

        let value = take_chars(after, length).ok_or_else(|| {
            Error::Parse(format!(
                "field <{}> at byte {} declares {} characters but the input ends first",
                name, offset, length
            ))
        })?;

        current.insert(name, value);
        rest = &after[value.len()..];
    }

    if !current.is_empty() {
        debug!(
            "Ignoring {} trailing field(s) not closed by <EOR>",
            current.len()
        );
    }

    Ok(file)
}

/// Split a free-text header from the body at the first `<EOH>`.
/// Files opening with `<` have no free-text header.
fn split_header(content: &str) -> Option<(&str, &str)> {
    if content.starts_with('<') {
        return None;
    }
    // ASCII upper-casing keeps byte offsets aligned with `content`
    let eoh = content.to_ascii_uppercase().find("<EOH>")?;
    Some((&content[..eoh], &content[eoh + "<EOH>".len()..]))
}

/// Collect `<NAME:LENGTH>` fields from header text, skipping anything else
fn parse_header_fields(text: &str) -> Record {
    let mut header = Record::new();
    let mut rest = text;

    while let Some((spec, after)) = split_tag(rest) {
        rest = after;

        let mut parts = spec.split(':');
        let name = parts.next().unwrap_or_default().trim();
        if name.is_empty() || name.contains(char::is_whitespace) {
            continue;
        }
        let Some(length) = parts.next().and_then(|l| l.trim().parse::<usize>().ok()) else {
            continue;
        };
        let Some(value) = take_chars(after, length) else {
            continue;
        };

        header.insert(name, value);
        rest = &after[value.len()..];
    }

    header
}

/// Split off the next `<...>` tag, returning its contents and the text after it
fn split_tag(input: &str) -> Option<(&str, &str)> {
    let open = input.find('<')?;
    let after_open = &input[open + 1..];
    let close = after_open.find('>')?;
    Some((&after_open[..close], &after_open[close + 1..]))
}

/// Take exactly `count` characters from the front of `input`
fn take_chars(input: &str, count: usize) -> Option<&str> {
    if count == 0 {
        return Some("");
    }
    match input.char_indices().nth(count) {
        Some((end, _)) => Some(&input[..end]),
        None if input.chars().count() == count => Some(input),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_record() {
        let adif = r#"
<CALL:5>W1ABC
<BAND:3>20M
<MODE:3>FT8
<QSO_DATE:8>20260103
<TIME_ON:6>152600
<RST_SENT:3>-12
<GRIDSQUARE:4>FN31
<EOR>
"#;

        let file = parse_adif(adif).unwrap();
        assert_eq!(file.records.len(), 1);

        let rec = &file.records[0];
        assert_eq!(rec.call(), Some("W1ABC"));
        assert_eq!(rec.get("band"), Some("20M"));
        assert_eq!(rec.get("mode"), Some("FT8"));
        assert_eq!(rec.get("gridsquare"), Some("FN31"));
    }

    #[test]
    fn test_parse_header() {
        let adif = r#"Log exported for award checking
<ADIF_VER:5>3.1.4
<PROGRAMID:4>LoTW
<EOH>

<CALL:5>W6ELI<BAND:3>20M<QSL_RCVD:1>Y<EOR>
"#;

        let file = parse_adif(adif).unwrap();
        assert_eq!(file.header.get("adif_ver"), Some("3.1.4"));
        assert_eq!(file.header.get("programid"), Some("LoTW"));
        assert!(!file.header.has("call"));

        assert_eq!(file.records.len(), 1);
        assert_eq!(file.records[0].call(), Some("W6ELI"));
        assert_eq!(file.records[0].get("qsl_rcvd"), Some("Y"));
    }

    #[test]
    fn test_header_text_with_url() {
        let adif = "Exported by MyLogger <https://example.com/logger>\n\
                    <ADIF_VER:5>3.1.4<EOH>\n<CALL:5>AB1CD<EOR>\n";

        let file = parse_adif(adif).unwrap();
        assert_eq!(file.header.get("adif_ver"), Some("3.1.4"));
        assert!(!file.header.has("https"));
        assert_eq!(file.records.len(), 1);
        assert_eq!(file.records[0].call(), Some("AB1CD"));
    }

    #[test]
    fn test_header_text_with_bracketed_note() {
        let adif = "Note: <see README: section 2>\n<eoh>\n<CALL:5>AB1CD<EOR>";

        let file = parse_adif(adif).unwrap();
        assert!(file.header.is_empty());
        assert_eq!(file.records.len(), 1);
        assert_eq!(file.records[0].call(), Some("AB1CD"));
    }

    #[test]
    fn test_header_skips_truncated_field() {
        let adif = "Log <PROGRAMID:40>short<EOH><CALL:4>K3AB<EOR>";

        let file = parse_adif(adif).unwrap();
        assert!(!file.header.has("programid"));
        assert_eq!(file.records[0].call(), Some("K3AB"));
    }

    #[test]
    fn test_parse_multiple_records() {
        let adif = r#"
<CALL:5>W1ABC<BAND:3>20M<MODE:3>FT8<QSO_DATE:8>20260103<TIME_ON:4>1526<EOR>
<CALL:5>N2XYZ<BAND:3>40M<MODE:2>CW<QSO_DATE:8>20260103<TIME_ON:4>1630<EOR>
<CALL:4>K3AB<BAND:3>15M<MODE:3>SSB<QSO_DATE:8>20260103<TIME_ON:4>1745<EOR>
"#;

        let file = parse_adif(adif).unwrap();
        assert_eq!(file.records.len(), 3);
        assert_eq!(file.records[0].call(), Some("W1ABC"));
        assert_eq!(file.records[1].call(), Some("N2XYZ"));
        assert_eq!(file.records[2].call(), Some("K3AB"));
    }

    #[test]
    fn test_lowercase_tags_and_typed_fields() {
        let adif = "<call:6:s>VK2XYZ<freq:6:N>14.074<eor>";

        let file = parse_adif(adif).unwrap();
        assert_eq!(file.records.len(), 1);
        assert_eq!(file.records[0].call(), Some("VK2XYZ"));
        assert_eq!(file.records[0].get("FREQ"), Some("14.074"));
    }

    #[test]
    fn test_value_may_contain_tag_text() {
        let adif = "<CALL:4>G4AB<COMMENT:9>tnx <EOR>!<EOR>";

        let file = parse_adif(adif).unwrap();
        assert_eq!(file.records.len(), 1);
        assert_eq!(file.records[0].get("comment"), Some("tnx <EOR>"));
    }

    #[test]
    fn test_length_counts_characters() {
        let adif = "<CALL:5>DL1AB<NAME:5>Jürgen<EOR>";

        let file = parse_adif(adif).unwrap();
        assert_eq!(file.records[0].get("name"), Some("Jürge"));
    }

    #[test]
    fn test_record_without_call_is_kept() {
        let adif = "<BAND:3>20M<EOR><CALL:4>K3AB<EOR>";

        let file = parse_adif(adif).unwrap();
        assert_eq!(file.records.len(), 2);
        assert_eq!(file.records[0].call(), None);
    }

    #[test]
    fn test_empty_input_and_empty_records() {
        assert!(parse_adif("").unwrap().records.is_empty());
        assert!(parse_adif("<EOR><eor>").unwrap().records.is_empty());
        assert!(parse_adif("just some text").unwrap().records.is_empty());
    }

    #[test]
    fn test_unterminated_record_is_ignored() {
        let file = parse_adif("<CALL:4>K3AB<EOR><CALL:5>W1ABC").unwrap();
        assert_eq!(file.records.len(), 1);
        assert_eq!(file.records[0].call(), Some("K3AB"));
    }

    #[test]
    fn test_invalid_length_is_an_error() {
        let err = parse_adif("<CALL:X>K3AB<EOR>").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().contains("invalid length 'X'"));
    }

    #[test]
    fn test_truncated_value_is_an_error() {
        let err = parse_adif("<CALL:10>K3AB").unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_empty_tag_name_is_an_error() {
        assert!(matches!(parse_adif("<:3>abc<EOR>"), Err(Error::Parse(_))));
    }
}
