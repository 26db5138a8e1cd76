//! Chord-tone names for pitches measured against a root.
//!
//! A pitch's offset above the root narrows it to one or two candidate
//! functions; the other offsets present in the chord (and whether the pitch
//! sits more than an octave above the root) settle the rest. For example a
//! major second is `sus2` under a triad with no third, `add2` alongside a
//! third, and `9`/`add9` once it is voiced above the octave.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// Set of offsets (0-11) above a root, as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OffsetSet(u16);

impl OffsetSet {
    pub fn from_offsets(offsets: impl IntoIterator<Item = u8>) -> Self {
        let mut mask = 0u16;
        for offset in offsets {
            mask |= 1 << (offset % 12);
        }
        OffsetSet(mask)
    }

    pub const fn mask(self) -> u16 {
        self.0
    }

    pub fn with(self, offset: u8) -> Self {
        OffsetSet(self.0 | 1 << (offset % 12))
    }

    pub fn contains(self, offset: u8) -> bool {
        self.0 & (1 << (offset % 12)) != 0
    }

    /// True if any of `offsets` is present.
    pub fn has_any(self, offsets: &[u8]) -> bool {
        offsets.iter().any(|&o| self.contains(o))
    }

    pub fn has_all(self, offsets: &[u8]) -> bool {
        offsets.iter().all(|&o| self.contains(o))
    }

    /// True if every offset in `other` is also in `self`.
    pub fn covers(self, other: OffsetSet) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Functional name of one chord tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChordTone {
    #[serde(rename = "1")]
    Root,
    #[serde(rename = "b9")]
    Flat9,
    #[serde(rename = "9")]
    Ninth,
    #[serde(rename = "add9")]
    Add9,
    #[serde(rename = "add2")]
    Add2,
    #[serde(rename = "sus2")]
    Sus2,
    #[serde(rename = "#9")]
    Sharp9,
    #[serde(rename = "min3")]
    MinorThird,
    #[serde(rename = "maj3")]
    MajorThird,
    #[serde(rename = "11")]
    Eleventh,
    #[serde(rename = "add11")]
    Add11,
    #[serde(rename = "add4")]
    Add4,
    #[serde(rename = "sus4")]
    Sus4,
    #[serde(rename = "#11")]
    Sharp11,
    #[serde(rename = "b5")]
    Flat5,
    #[serde(rename = "5")]
    Fifth,
    #[serde(rename = "b13")]
    Flat13,
    #[serde(rename = "#5")]
    Sharp5,
    #[serde(rename = "13")]
    Thirteenth,
    #[serde(rename = "dim7")]
    Diminished7,
    #[serde(rename = "6")]
    Sixth,
    #[serde(rename = "dom7")]
    Dominant7,
    #[serde(rename = "min7")]
    Minor7,
    #[serde(rename = "maj7")]
    Major7,
}

impl ChordTone {
    /// Name one tone.
    ///
    /// `offset` is the tone's distance above the root pitch class,
    /// `above_octave` is whether it sounds more than an octave above the
    /// reference root, and `present` holds every offset in the chord
    /// (including this one).
    pub fn classify(offset: u8, above_octave: bool, present: OffsetSet) -> Self {
        let has = |offsets: &[u8]| present.has_any(offsets);

        let tone = match offset % 12 {
            0 => ChordTone::Root,
            1 => ChordTone::Flat9,
            2 => match (above_octave, has(&[10, 11]), has(&[3, 4])) {
                (true, true, _) => ChordTone::Ninth,
                (true, false, _) => ChordTone::Add9,
                (false, _, true) => ChordTone::Add2,
                (false, _, false) => ChordTone::Sus2,
            },
            3 if has(&[4]) => ChordTone::Sharp9,
            3 => ChordTone::MinorThird,
            4 => ChordTone::MajorThird,
            5 => match (above_octave, has(&[10, 11]), has(&[3, 4])) {
                (true, true, _) => ChordTone::Eleventh,
                (true, false, _) => ChordTone::Add11,
                (false, _, true) => ChordTone::Add4,
                (false, _, false) => ChordTone::Sus4,
            },
            6 if has(&[4, 7, 9]) => ChordTone::Sharp11,
            6 if has(&[3, 5]) => ChordTone::Flat5,
            6 if above_octave => ChordTone::Sharp11,
            6 => ChordTone::Flat5,
            7 => ChordTone::Fifth,
            8 if has(&[1, 3, 5, 6, 7, 9, 10]) => ChordTone::Flat13,
            8 => ChordTone::Sharp5,
            9 if above_octave => ChordTone::Thirteenth,
            9 if present.has_all(&[0, 3, 6]) && !has(&[10, 11]) => ChordTone::Diminished7,
            9 => ChordTone::Sixth,
            10 if has(&[4]) => ChordTone::Dominant7,
            10 => ChordTone::Minor7,
            _ => ChordTone::Major7,
        };

        trace!(offset, above_octave, tone = %tone, "classified chord tone");
        tone
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ChordTone::Root => "1",
            ChordTone::Flat9 => "b9",
            ChordTone::Ninth => "9",
            ChordTone::Add9 => "add9",
            ChordTone::Add2 => "add2",
            ChordTone::Sus2 => "sus2",
            ChordTone::Sharp9 => "#9",
            ChordTone::MinorThird => "min3",
            ChordTone::MajorThird => "maj3",
            ChordTone::Eleventh => "11",
            ChordTone::Add11 => "add11",
            ChordTone::Add4 => "add4",
            ChordTone::Sus4 => "sus4",
            ChordTone::Sharp11 => "#11",
            ChordTone::Flat5 => "b5",
            ChordTone::Fifth => "5",
            ChordTone::Flat13 => "b13",
            ChordTone::Sharp5 => "#5",
            ChordTone::Thirteenth => "13",
            ChordTone::Diminished7 => "dim7",
            ChordTone::Sixth => "6",
            ChordTone::Dominant7 => "dom7",
            ChordTone::Minor7 => "min7",
            ChordTone::Major7 => "maj7",
        }
    }
}

impl fmt::Display for ChordTone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq<&str> for ChordTone {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(offsets: &[u8]) -> OffsetSet {
        OffsetSet::from_offsets(offsets.iter().copied())
    }

    #[test]
    fn offset_set_queries() {
        let s = set(&[0, 4, 7, 16]);
        assert!(s.contains(4));
        assert!(s.contains(7));
        assert!(!s.contains(3));
        assert!(s.has_any(&[3, 4]));
        assert!(s.has_all(&[0, 4, 7]));
        assert!(!s.has_all(&[0, 3, 7]));
        assert!(s.covers(set(&[0, 7])));
        assert!(!s.covers(set(&[0, 10])));
        assert_eq!(s.with(10).mask(), 0b100_1001_0001);
    }

    #[test]
    fn fixed_offsets() {
        let any = set(&[0]);
        assert_eq!(ChordTone::classify(0, false, any), ChordTone::Root);
        assert_eq!(ChordTone::classify(1, true, any), ChordTone::Flat9);
        assert_eq!(ChordTone::classify(4, false, any), ChordTone::MajorThird);
        assert_eq!(ChordTone::classify(7, true, any), ChordTone::Fifth);
        assert_eq!(ChordTone::classify(11, false, any), ChordTone::Major7);
    }

    #[test]
    fn second_depends_on_register_and_context() {
        assert_eq!(ChordTone::classify(2, true, set(&[0, 2, 4, 10])), ChordTone::Ninth);
        assert_eq!(ChordTone::classify(2, true, set(&[0, 2, 4, 7])), ChordTone::Add9);
        assert_eq!(ChordTone::classify(2, false, set(&[0, 2, 4, 7])), ChordTone::Add2);
        assert_eq!(ChordTone::classify(2, false, set(&[0, 2, 7])), ChordTone::Sus2);
    }

    #[test]
    fn fourth_depends_on_register_and_context() {
        assert_eq!(ChordTone::classify(5, true, set(&[0, 3, 5, 10])), ChordTone::Eleventh);
        assert_eq!(ChordTone::classify(5, true, set(&[0, 3, 5, 7])), ChordTone::Add11);
        assert_eq!(ChordTone::classify(5, false, set(&[0, 3, 5])), ChordTone::Add4);
        assert_eq!(ChordTone::classify(5, false, set(&[0, 5, 7])), ChordTone::Sus4);
    }

    #[test]
    fn third_sharp_nine() {
        assert_eq!(ChordTone::classify(3, true, set(&[0, 3, 4, 10])), ChordTone::Sharp9);
        assert_eq!(ChordTone::classify(3, false, set(&[0, 3, 7])), ChordTone::MinorThird);
    }

    #[test]
    fn tritone_tie_breaks() {
        assert_eq!(ChordTone::classify(6, false, set(&[0, 4, 6])), ChordTone::Sharp11);
        assert_eq!(ChordTone::classify(6, false, set(&[0, 3, 6])), ChordTone::Flat5);
        assert_eq!(ChordTone::classify(6, true, set(&[0, 6])), ChordTone::Sharp11);
        assert_eq!(ChordTone::classify(6, false, set(&[0, 6])), ChordTone::Flat5);
    }

    #[test]
    fn minor_sixth_tie_break() {
        assert_eq!(ChordTone::classify(8, false, set(&[0, 4, 8])), ChordTone::Sharp5);
        assert_eq!(ChordTone::classify(8, false, set(&[0, 4, 7, 8])), ChordTone::Flat13);
    }

    #[test]
    fn major_sixth_tie_breaks() {
        assert_eq!(ChordTone::classify(9, true, set(&[0, 4, 9])), ChordTone::Thirteenth);
        assert_eq!(ChordTone::classify(9, false, set(&[0, 3, 6, 9])), ChordTone::Diminished7);
        assert_eq!(ChordTone::classify(9, false, set(&[0, 3, 6, 9, 10])), ChordTone::Sixth);
        assert_eq!(ChordTone::classify(9, false, set(&[0, 4, 7, 9])), ChordTone::Sixth);
    }

    #[test]
    fn seventh_follows_the_third() {
        assert_eq!(ChordTone::classify(10, false, set(&[0, 4, 10])), ChordTone::Dominant7);
        assert_eq!(ChordTone::classify(10, false, set(&[0, 3, 10])), ChordTone::Minor7);
        assert_eq!(ChordTone::classify(10, false, set(&[0, 7, 10])), ChordTone::Minor7);
    }

    #[test]
    fn tags_render_and_serialize() {
        assert_eq!(ChordTone::Sharp11.to_string(), "#11");
        assert_eq!(ChordTone::Dominant7, "dom7");
        assert_eq!(serde_json::to_string(&ChordTone::Flat13).unwrap(), "\"b13\"");
        let tone: ChordTone = serde_json::from_str("\"add9\"").unwrap();
        assert_eq!(tone, ChordTone::Add9);
    }
}
