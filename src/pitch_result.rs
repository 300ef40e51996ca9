use std::str::FromStr;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use strum_macros::{EnumIter, EnumString};
use tracing::warn;

/// Outcome of a single pitched ball as it appears in the event feed.
///
/// The feed uses one-letter codes; `V` and `W` are the bunt variants of a
/// swinging strike and a foul.
#[derive(
    Debug, Ord, PartialOrd, Eq, PartialEq, Hash, EnumString, EnumIter, Copy, Clone, Serialize,
    Deserialize,
)]
pub enum PitchResult {
    #[strum(serialize = "H")]
    Hit,
    #[strum(serialize = "S")]
    SwingingStrike,
    #[strum(serialize = "F")]
    Foul,
    #[strum(serialize = "T")]
    CalledStrike,
    #[strum(serialize = "B")]
    Ball,
    #[strum(serialize = "V")]
    MissedBunt,
    #[strum(serialize = "W")]
    FoulBunt,
}

impl PitchResult {
    /// English display label for the code.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hit => "Hit",
            Self::SwingingStrike => "Swing",
            Self::Foul => "Foul",
            Self::CalledStrike => "Strike",
            Self::Ball => "Ball",
            Self::MissedBunt => "Swing (Bunt)",
            Self::FoulBunt => "Foul (Bunt)",
        }
    }

    /// Whether the batter offered at the pitch, bunt attempts included.
    pub fn is_swing(self) -> bool {
        [
            Self::Hit,
            Self::SwingingStrike,
            Self::MissedBunt,
            Self::Foul,
            Self::FoulBunt,
        ]
        .contains(&self)
    }

    /// Whether the bat met the ball (in play or foul). Contact implies a swing.
    pub fn is_contact(self) -> bool {
        [Self::Hit, Self::Foul, Self::FoulBunt].contains(&self)
    }
}

/// Translates a raw pitch-result code into its English label.
///
/// Unknown codes are an error, not a blank label: a code outside the known
/// set means the data provider changed their format and we want to hear
/// about it at the boundary.
pub fn translate_pitch_result(code: &str) -> Result<&'static str> {
    match PitchResult::from_str(code) {
        Ok(result) => Ok(result.label()),
        Err(_) => {
            warn!("unrecognized pitch result code {code:?}");
            Err(anyhow!("unrecognized pitch result code {code:?}"))
        }
    }
}

/// Membership test over raw codes. Unknown codes are simply not swings.
pub fn is_swing(code: &str) -> bool {
    PitchResult::from_str(code).map_or(false, PitchResult::is_swing)
}

/// Membership test over raw codes. Unknown codes are simply not contact.
pub fn is_contact(code: &str) -> bool {
    PitchResult::from_str(code).map_or(false, PitchResult::is_contact)
}
