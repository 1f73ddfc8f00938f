//! Award tier classification
//!
//! Maps a count of unique callsigns onto a named tier. A count must be
//! strictly greater than a tier's threshold to qualify for it; a count equal
//! to a threshold falls into the band below.

use std::fmt;

use adif_common::{Error, Result};
use serde::Serialize;

/// Award tiers, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum AwardTier {
    #[serde(rename = "Participant")]
    Participant,
    #[serde(rename = "Bedsit")]
    Bedsit,
    #[serde(rename = "Terraced House")]
    TerracedHouse,
    #[serde(rename = "Semi-Detached House")]
    SemiDetachedHouse,
    #[serde(rename = "Detached House")]
    DetachedHouse,
    #[serde(rename = "Townhouse")]
    Townhouse,
    #[serde(rename = "Country Cottage")]
    CountryCottage,
    #[serde(rename = "Victorian Villa")]
    VictorianVilla,
    #[serde(rename = "Mansion")]
    Mansion,
}

impl AwardTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            AwardTier::Participant => "Participant",
            AwardTier::Bedsit => "Bedsit",
            AwardTier::TerracedHouse => "Terraced House",
            AwardTier::SemiDetachedHouse => "Semi-Detached House",
            AwardTier::DetachedHouse => "Detached House",
            AwardTier::Townhouse => "Townhouse",
            AwardTier::CountryCottage => "Country Cottage",
            AwardTier::VictorianVilla => "Victorian Villa",
            AwardTier::Mansion => "Mansion",
        }
    }
}

impl fmt::Display for AwardTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// (exclusive lower bound, tier), descending by threshold.
/// The final entry's bound is below every valid count.
pub static TIER_TABLE: &[(i64, AwardTier)] = &[
    (1_000_000, AwardTier::Mansion),
    (500_000, AwardTier::VictorianVilla),
    (250_000, AwardTier::CountryCottage),
    (100_000, AwardTier::Townhouse),
    (10_000, AwardTier::DetachedHouse),
    (1_000, AwardTier::SemiDetachedHouse),
    (500, AwardTier::TerracedHouse),
    (100, AwardTier::Bedsit),
    (i64::MIN, AwardTier::Participant),
];

/// Determine the award tier for a count of unique callsigns
///
/// Returns `Error::InvalidArgument` for a negative count.
pub fn classify(count: i64) -> Result<AwardTier> {
    if count < 0 {
        return Err(Error::InvalidArgument(format!(
            "unique count must be non-negative, got {}",
            count
        )));
    }

    let tier = TIER_TABLE
        .iter()
        .find(|(threshold, _)| count > *threshold)
        .map(|(_, tier)| *tier)
        .unwrap_or(AwardTier::Participant);

    Ok(tier)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        let cases = [
            (0, AwardTier::Participant),
            (1, AwardTier::Participant),
            (100, AwardTier::Participant),
            (101, AwardTier::Bedsit),
            (500, AwardTier::Bedsit),
            (501, AwardTier::TerracedHouse),
            (1_000, AwardTier::TerracedHouse),
            (1_001, AwardTier::SemiDetachedHouse),
            (10_000, AwardTier::SemiDetachedHouse),
            (10_001, AwardTier::DetachedHouse),
            (100_000, AwardTier::DetachedHouse),
            (100_001, AwardTier::Townhouse),
            (250_000, AwardTier::Townhouse),
            (250_001, AwardTier::CountryCottage),
            (500_000, AwardTier::CountryCottage),
            (500_001, AwardTier::VictorianVilla),
            (1_000_000, AwardTier::VictorianVilla),
            (1_000_001, AwardTier::Mansion),
            (i64::MAX, AwardTier::Mansion),
        ];

        for (count, expected) in cases {
            assert_eq!(classify(count).unwrap(), expected, "count = {}", count);
        }
    }

    #[test]
    fn test_negative_count_rejected() {
        let err = classify(-1).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(classify(i64::MIN).is_err());
    }

    #[test]
    fn test_monotonic_in_count() {
        // Dense below the first boundaries, then stepping over the rest
        let counts = (0..=2_000)
            .chain((2_001..=1_100_000).step_by(997))
            .chain([5_000_000]);

        let mut previous = (0, AwardTier::Participant);
        for count in counts {
            let tier = classify(count).unwrap();
            assert!(
                tier >= previous.1,
                "{} -> {} is lower than {} -> {}",
                count,
                tier,
                previous.0,
                previous.1
            );
            previous = (count, tier);
        }
    }

    #[test]
    fn test_table_is_descending_and_total() {
        for pair in TIER_TABLE.windows(2) {
            assert!(pair[0].0 > pair[1].0);
            assert!(pair[0].1 > pair[1].1);
        }
        assert_eq!(TIER_TABLE.len(), 9);
        assert_eq!(TIER_TABLE.last().map(|(_, t)| *t), Some(AwardTier::Participant));
    }

    #[test]
    fn test_names_match_serialized_form() {
        for (_, tier) in TIER_TABLE {
            let json = serde_json::to_value(tier).unwrap();
            assert_eq!(json, tier.as_str());
            assert_eq!(tier.to_string(), tier.as_str());
        }
    }
}
