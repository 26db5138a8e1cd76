//! Name tables for pitch classes and intervals.
//!
//! Both tables accept enharmonic aliases on input but render a single
//! canonical name on output. Pitch classes are always spelled with flats.

use crate::error::{Error, NameKind, Result};

/// Every accepted pitch-class name and its offset above C.
pub static PITCH_CLASS_NAMES: [(&str, u8); 17] = [
    ("C", 0),
    ("C#", 1),
    ("Db", 1),
    ("D", 2),
    ("D#", 3),
    ("Eb", 3),
    ("E", 4),
    ("F", 5),
    ("F#", 6),
    ("Gb", 6),
    ("G", 7),
    ("G#", 8),
    ("Ab", 8),
    ("A", 9),
    ("A#", 10),
    ("Bb", 10),
    ("B", 11),
];

/// Every accepted interval name and its distance in semitones.
pub static INTERVAL_NAMES: [(&str, i32); 18] = [
    ("U", 0),
    ("P1", 0),
    ("m2", 1),
    ("M2", 2),
    ("m3", 3),
    ("M3", 4),
    ("P4", 5),
    ("A4", 6),
    ("T", 6),
    ("d5", 6),
    ("P5", 7),
    ("m6", 8),
    ("M6", 9),
    ("m7", 10),
    ("D7", 10),
    ("M7", 11),
    ("O", 12),
    ("P8", 12),
];

pub(crate) const NOTE_NAMES_FLAT: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];
pub(crate) const NOTE_NAMES_SHARP: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const INTERVAL_NAMES_CANONICAL: [&str; 12] = [
    "U", "m2", "M2", "m3", "M3", "P4", "T", "P5", "m6", "M6", "m7", "M7",
];

/// Look up the offset (0-11) of a pitch-class name.
pub fn offset_of(name: &str) -> Result<u8> {
    PITCH_CLASS_NAMES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, offset)| offset)
        .ok_or_else(|| Error::unknown(NameKind::PitchClass, name))
}

/// Canonical (flat) name for an offset. Offsets are reduced mod 12.
pub fn chroma_name(offset: u8) -> &'static str {
    NOTE_NAMES_FLAT[(offset % 12) as usize]
}

/// Look up the distance (0-12) of an interval name.
pub fn distance_of(name: &str) -> Result<i32> {
    INTERVAL_NAMES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, distance)| distance)
        .ok_or_else(|| Error::unknown(NameKind::Interval, name))
}

/// Canonical interval name for an offset within the octave.
pub fn interval_name(offset: u8) -> &'static str {
    INTERVAL_NAMES_CANONICAL[(offset % 12) as usize]
}
