//! Preset registry: the fixed set of egg doneness levels

use std::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};

use crate::error::TimerError;

/// Illustration shown while nothing has been picked yet
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg?height=200&width=200&text=Egg";

/// Key of a doneness preset. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PresetKey {
    Soft,
    Medium,
    Hard,
}

impl PresetKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetKey::Soft => "soft",
            PresetKey::Medium => "medium",
            PresetKey::Hard => "hard",
        }
    }

    /// Look up the preset record for this key
    pub fn preset(&self) -> &'static Preset {
        match self {
            PresetKey::Soft => &PRESETS[0],
            PresetKey::Medium => &PRESETS[1],
            PresetKey::Hard => &PRESETS[2],
        }
    }
}

impl fmt::Display for PresetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresetKey {
    type Err = TimerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "soft" => Ok(PresetKey::Soft),
            "medium" => Ok(PresetKey::Medium),
            "hard" => Ok(PresetKey::Hard),
            _ => Err(TimerError::InvalidPreset(s.to_string())),
        }
    }
}

/// Immutable preset record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preset {
    pub key: PresetKey,
    pub label: &'static str,
    pub duration_seconds: u32,
    pub image_ref: &'static str,
}

impl Preset {
    /// All presets, softest first
    pub fn all() -> &'static [Preset] {
        &PRESETS
    }

    /// Parse a textual key and return its preset
    pub fn lookup(key: &str) -> Result<&'static Preset, TimerError> {
        key.parse::<PresetKey>().map(|k| k.preset())
    }

    /// First word of the label, e.g. "Lembek"
    pub fn short_label(&self) -> &'static str {
        self.label.split(' ').next().unwrap_or(self.label)
    }
}

static PRESETS: [Preset; 3] = [
    Preset {
        key: PresetKey::Soft,
        label: "Lembek (Soft Boiled)",
        duration_seconds: 360,
        image_ref: "/softboiled1.gif",
    },
    Preset {
        key: PresetKey::Medium,
        label: "Medium (Medium Boiled)",
        duration_seconds: 480,
        image_ref: "/softboiled.gif",
    },
    Preset {
        key: PresetKey::Hard,
        label: "Matang (Hard Boiled)",
        duration_seconds: 600,
        image_ref: "/hardboiled.gif",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_durations() {
        assert_eq!(PresetKey::Soft.preset().duration_seconds, 360);
        assert_eq!(PresetKey::Medium.preset().duration_seconds, 480);
        assert_eq!(PresetKey::Hard.preset().duration_seconds, 600);
    }

    #[test]
    fn test_all_keys_map_to_their_own_record() {
        for preset in Preset::all() {
            assert_eq!(preset.key.preset(), preset);
        }
        assert_eq!(Preset::all().len(), 3);
    }

    #[test]
    fn test_parse_key() {
        assert_eq!("soft".parse::<PresetKey>().unwrap(), PresetKey::Soft);
        assert_eq!(" Hard ".parse::<PresetKey>().unwrap(), PresetKey::Hard);
        assert!(matches!(
            "raw".parse::<PresetKey>(),
            Err(TimerError::InvalidPreset(k)) if k == "raw"
        ));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Preset::lookup("medium").unwrap().label, "Medium (Medium Boiled)");
        assert!(Preset::lookup("").is_err());
    }

    #[test]
    fn test_short_label() {
        assert_eq!(PresetKey::Soft.preset().short_label(), "Lembek");
        assert_eq!(PresetKey::Hard.preset().short_label(), "Matang");
    }
}
