use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString};
use tracing::warn;

/// Pitch repertoire as named in the Korean-language feed.
#[derive(
    Debug, Ord, PartialOrd, Eq, PartialEq, Hash, EnumString, EnumIter, Copy, Clone, Serialize,
    Deserialize,
)]
pub enum PitchType {
    #[strum(serialize = "직구")]
    FourSeam,
    #[strum(serialize = "투심")]
    TwoSeam,
    #[strum(serialize = "커터")]
    Cutter,
    #[strum(serialize = "슬라이더")]
    Slider,
    #[strum(serialize = "커브")]
    Curve,
    #[strum(serialize = "스위퍼")]
    Sweeper,
    #[strum(serialize = "포크")]
    Fork,
    #[strum(serialize = "체인지업")]
    ChangeUp,
    #[strum(serialize = "너클볼")]
    Knuckle,
}

impl PitchType {
    /// English display label for the pitch type.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FourSeam => "Four Seam",
            Self::TwoSeam => "Two Seam",
            Self::Cutter => "Cutter",
            Self::Slider => "Slider",
            Self::Curve => "Curve",
            Self::Sweeper => "Sweeper",
            Self::Fork => "Fork",
            Self::ChangeUp => "Change Up",
            Self::Knuckle => "Knuckle",
        }
    }
}

/// Translates a Korean pitch-type name into its English label.
///
/// Same contract as [`crate::translate_pitch_result`]: an unrecognized name
/// errors rather than passing through a placeholder.
pub fn translate_pitch_type(name: &str) -> Result<&'static str> {
    match PitchType::from_str(name) {
        Ok(pitch_type) => Ok(pitch_type.label()),
        Err(_) => {
            warn!("unrecognized pitch type name {name:?}");
            Err(anyhow!("unrecognized pitch type name {name:?}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn translates_all_known_names() {
        let expected = [
            ("직구", "Four Seam"),
            ("투심", "Two Seam"),
            ("커터", "Cutter"),
            ("슬라이더", "Slider"),
            ("커브", "Curve"),
            ("스위퍼", "Sweeper"),
            ("포크", "Fork"),
            ("체인지업", "Change Up"),
            ("너클볼", "Knuckle"),
        ];
        assert_eq!(expected.len(), PitchType::iter().count());
        for (name, label) in expected {
            assert_eq!(translate_pitch_type(name).unwrap(), label);
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let err = translate_pitch_type("싱커").unwrap_err();
        assert!(err.to_string().contains("싱커"));
        assert!(translate_pitch_type("").is_err());
        assert!(translate_pitch_type("Slider").is_err());
    }

    #[test]
    fn labels_are_nonempty_and_distinct() {
        let labels: HashSet<&str> = PitchType::iter().map(PitchType::label).collect();
        assert_eq!(labels.len(), PitchType::iter().count());
        assert!(labels.iter().all(|l| !l.is_empty()));
    }
}
