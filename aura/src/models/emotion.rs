use serde::{Deserialize, Serialize};

/// The fixed emotion vocabulary a face can be tagged with.
///
/// `Neutral` is the fallback for faceless images and for faces whose
/// strongest emotion is still rated very unlikely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sorrow,
    Anger,
    Surprise,
    Neutral,
}

impl Emotion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sorrow => "sorrow",
            Emotion::Anger => "anger",
            Emotion::Surprise => "surprise",
            Emotion::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Emotion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordinal likelihood scale reported by the vision service for each
/// face emotion. Declaration order is rank order (0..=4); wire values the
/// service may add later fold into `VeryUnlikely`, matching how absent
/// levels are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Likelihood {
    VeryUnlikely,
    Unlikely,
    Possible,
    Likely,
    VeryLikely,
}

// Hand-written to reconcile three derive-level constraints that serde cannot
// satisfy together: declaration order must stay rank order (`rank()` uses
// `self as u8`) with `VeryUnlikely` first, `Ord` must rank `VeryUnlikely`
// lowest, and unknown wire values must fold into `VeryUnlikely`. Serde's
// `#[serde(other)]` only accepts the *last* variant, so this transcribes the
// intended `rename_all = "SCREAMING_SNAKE_CASE"` + `other` behavior directly.
impl<'de> Deserialize<'de> for Likelihood {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "UNLIKELY" => Likelihood::Unlikely,
            "POSSIBLE" => Likelihood::Possible,
            "LIKELY" => Likelihood::Likely,
            "VERY_LIKELY" => Likelihood::VeryLikely,
            _ => Likelihood::VeryUnlikely,
        })
    }
}

impl Likelihood {
    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl Default for Likelihood {
    fn default() -> Self {
        Self::VeryUnlikely
    }
}
