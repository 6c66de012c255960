use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const POSITIVE_THRESHOLD: f64 = 0.05;
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

/// Maps a compound score onto a label. Both thresholds are exclusive, so
/// scores in `[-0.05, 0.05]` (and NaN) are neutral.
pub fn classify(compound: f64) -> SentimentLabel {
    if compound > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if compound < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

impl SentimentLabel {
    pub const ALL: [SentimentLabel; 3] = [
        SentimentLabel::Positive,
        SentimentLabel::Neutral,
        SentimentLabel::Negative,
    ];

    /// Display text for the sentiment badge.
    pub fn text(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "Positive",
            SentimentLabel::Neutral => "Neutral",
            SentimentLabel::Negative => "Negative",
        }
    }

    /// Badge background as a `#rrggbb` string.
    pub fn color(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "#4caf50",
            SentimentLabel::Neutral => "#ffc107",
            SentimentLabel::Negative => "#f44336",
        }
    }

    /// Badge background as RGB components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            SentimentLabel::Positive => (0x4c, 0xaf, 0x50),
            SentimentLabel::Neutral => (0xff, 0xc1, 0x07),
            SentimentLabel::Negative => (0xf4, 0x43, 0x36),
        }
    }

    /// Identifier used by the sentiment selector (`positive`, ...).
    pub fn id(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Neutral => "neutral",
            SentimentLabel::Negative => "negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl FromStr for SentimentLabel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(SentimentLabel::Positive),
            "neutral" => Ok(SentimentLabel::Neutral),
            "negative" => Ok(SentimentLabel::Negative),
            other => Err(Error::InvalidRequest(format!("Unknown sentiment: {}", other))),
        }
    }
}
