//! Letter grade model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A letter grade on the fixed 13-symbol scale, best (`A+`) to worst (`F`).
///
/// An ungraded (in progress) course carries no `Grade` at all; it is modeled
/// as `Option<Grade>` on [`Course`](crate::models::Course) and serialized as
/// the empty string for compatibility with the original record format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    /// A+ (best)
    #[serde(rename = "A+")]
    APlus,
    /// A
    A,
    /// A-
    #[serde(rename = "A-")]
    AMinus,
    /// B+
    #[serde(rename = "B+")]
    BPlus,
    /// B
    B,
    /// B-
    #[serde(rename = "B-")]
    BMinus,
    /// C+
    #[serde(rename = "C+")]
    CPlus,
    /// C
    C,
    /// C-
    #[serde(rename = "C-")]
    CMinus,
    /// D+
    #[serde(rename = "D+")]
    DPlus,
    /// D
    D,
    /// D-
    #[serde(rename = "D-")]
    DMinus,
    /// F (worst)
    F,
}

impl Grade {
    /// Number of letter grades on the scale
    pub const COUNT: usize = 13;

    /// All letter grades, ordered best to worst
    pub const ALL: [Self; Self::COUNT] = [
        Self::APlus,
        Self::A,
        Self::AMinus,
        Self::BPlus,
        Self::B,
        Self::BMinus,
        Self::CPlus,
        Self::C,
        Self::CMinus,
        Self::DPlus,
        Self::D,
        Self::DMinus,
        Self::F,
    ];

    /// Get the display symbol for this grade (e.g., "A+")
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::AMinus => "A-",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::BMinus => "B-",
            Self::CPlus => "C+",
            Self::C => "C",
            Self::CMinus => "C-",
            Self::DPlus => "D+",
            Self::D => "D",
            Self::DMinus => "D-",
            Self::F => "F",
        }
    }

    /// Position on the scale, 0 for `A+` through 12 for `F`
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A+" => Ok(Self::APlus),
            "A" => Ok(Self::A),
            "A-" => Ok(Self::AMinus),
            "B+" => Ok(Self::BPlus),
            "B" => Ok(Self::B),
            "B-" => Ok(Self::BMinus),
            "C+" => Ok(Self::CPlus),
            "C" => Ok(Self::C),
            "C-" => Ok(Self::CMinus),
            "D+" => Ok(Self::DPlus),
            "D" => Ok(Self::D),
            "D-" => Ok(Self::DMinus),
            "F" => Ok(Self::F),
            other => Err(format!("Unknown letter grade: '{other}'")),
        }
    }
}

/// Serde adapter for `Option<Grade>` that maps the empty string to `None`.
///
/// The original record format stores an ungraded course as `"grade": ""`
/// rather than omitting the field, so a plain `Option` derive won't do.
pub(crate) mod optional {
    use super::Grade;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(grade: &Option<Grade>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match grade {
            Some(g) => serializer.serialize_str(g.as_str()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Grade>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_symbol() {
        for grade in Grade::ALL {
            assert_eq!(grade.as_str().parse::<Grade>(), Ok(grade));
        }
    }

    #[test]
    fn rejects_unknown_symbols() {
        assert!("E".parse::<Grade>().is_err());
        assert!("a+".parse::<Grade>().is_err());
        assert!(String::new().parse::<Grade>().is_err());
    }

    #[test]
    fn ordered_best_to_worst() {
        assert!(Grade::APlus < Grade::A);
        assert!(Grade::DMinus < Grade::F);
        assert_eq!(Grade::APlus.index(), 0);
        assert_eq!(Grade::F.index(), Grade::COUNT - 1);
    }
}
