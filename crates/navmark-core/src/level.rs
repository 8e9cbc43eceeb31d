//! Visitor / content permission levels.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Permission tier. A category or item tagged with level `n` is visible to
/// visitors whose level is `>= n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Anonymous visitor; also the default for untagged content.
    #[default]
    Guest = 0,
    User = 1,
    Vip = 2,
    Admin = 3,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Guest, Level::User, Level::Vip, Level::Admin];

    /// Maps any integer onto a level, clamping out-of-range values.
    pub fn from_number(n: i64) -> Self {
        match n {
            i64::MIN..=0 => Level::Guest,
            1 => Level::User,
            2 => Level::Vip,
            _ => Level::Admin,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            Level::Guest => "guest",
            Level::User => "user",
            Level::Vip => "vip",
            Level::Admin => "admin",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Level {
    type Err = String;

    /// Accepts `0`..`3` or a tier name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return match n {
                0..=3 => Ok(Level::from_number(i64::from(n))),
                _ => Err(format!("level out of range (0-3): {n}")),
            };
        }
        Level::ALL
            .into_iter()
            .find(|level| level.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown level: {s}"))
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.as_u8())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let n = i64::deserialize(deserializer)?;
        Ok(Level::from_number(n))
    }
}
