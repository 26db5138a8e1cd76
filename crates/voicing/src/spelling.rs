//! Output spelling of black-key pitch classes.

use serde::{Deserialize, Serialize};

use crate::chroma::Chroma;
use crate::tables::{NOTE_NAMES_FLAT, NOTE_NAMES_SHARP};

/// Keys written with flats. F is the only one whose root is a white key.
pub const FLAT_KEYS: [Chroma; 6] = [
    Chroma::DB,
    Chroma::EB,
    Chroma::F,
    Chroma::GB,
    Chroma::AB,
    Chroma::BB,
];

/// How black-key pitch classes are written on output.
///
/// `Display` impls always use flats; this only affects the `*_with`
/// renderers. Deserializes from `"flats"` / `"sharps"` so it can live in a
/// host application's config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spelling {
    #[default]
    Flats,
    Sharps,
}

impl Spelling {
    /// Conventional spelling for music in the key of `root`.
    pub fn for_key(root: Chroma) -> Self {
        if FLAT_KEYS.contains(&root) {
            Spelling::Flats
        } else {
            Spelling::Sharps
        }
    }

    pub fn name(self, offset: u8) -> &'static str {
        let idx = (offset % 12) as usize;
        match self {
            Spelling::Flats => NOTE_NAMES_FLAT[idx],
            Spelling::Sharps => NOTE_NAMES_SHARP[idx],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_and_sharp_names() {
        assert_eq!(Spelling::Flats.name(1), "Db");
        assert_eq!(Spelling::Sharps.name(1), "C#");
        assert_eq!(Spelling::Sharps.name(4), "E");
        assert_eq!(Spelling::default(), Spelling::Flats);
    }

    #[test]
    fn key_based_spelling() {
        assert_eq!(Spelling::for_key(Chroma::F), Spelling::Flats);
        assert_eq!(Spelling::for_key(Chroma::EB), Spelling::Flats);
        assert_eq!(Spelling::for_key(Chroma::D), Spelling::Sharps);
        assert_eq!(Spelling::for_key(Chroma::C), Spelling::Sharps);
        assert_eq!(Spelling::for_key(Chroma::B), Spelling::Sharps);

        let flat_keys: Vec<&str> = (0..12)
            .map(Chroma::new)
            .filter(|&root| Spelling::for_key(root) == Spelling::Flats)
            .map(Chroma::name)
            .collect();
        assert_eq!(flat_keys, ["Db", "Eb", "F", "Gb", "Ab", "Bb"]);
    }

    #[test]
    fn deserializes_from_config_names() {
        let spelling: Spelling = serde_json::from_str("\"sharps\"").unwrap();
        assert_eq!(spelling, Spelling::Sharps);
    }
}
