//! Chord voicings: a root pitch class plus the pitches actually sounding.

use std::fmt;
use std::ops::{Add, Div, Index, Mul, Not, Rem, Shl, Shr, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::chord_tone::{ChordTone, OffsetSet};
use crate::chroma::Chroma;
use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::parser;
use crate::pitch::Pitch;
use crate::spelling::Spelling;

/// How to look a pitch up inside a voicing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PitchKey {
    /// Exact pitch (same value).
    Pitch(Pitch),
    /// First pitch of this pitch class, any octave.
    Chroma(Chroma),
    /// Pitch whose printed form (`"Db4"`) is exactly this text. Enharmonic
    /// spellings such as `"C#4"` never match since output uses flats.
    Name(String),
}

impl PitchKey {
    pub fn matches(&self, pitch: &Pitch) -> bool {
        match self {
            PitchKey::Pitch(p) => p == pitch,
            PitchKey::Chroma(c) => c == pitch,
            PitchKey::Name(name) => pitch.to_string() == *name,
        }
    }
}

impl From<Pitch> for PitchKey {
    fn from(pitch: Pitch) -> Self {
        PitchKey::Pitch(pitch)
    }
}

impl From<i32> for PitchKey {
    fn from(value: i32) -> Self {
        PitchKey::Pitch(Pitch::new(value))
    }
}

impl From<Chroma> for PitchKey {
    fn from(chroma: Chroma) -> Self {
        PitchKey::Chroma(chroma)
    }
}

/// `"Eb"` is a pitch-class key, `"Eb4"` a printed-name key.
impl FromStr for PitchKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.chars().any(|c| c.is_ascii_digit()) {
            s.parse::<Pitch>()?;
            Ok(PitchKey::Name(s.to_string()))
        } else {
            Ok(PitchKey::Chroma(s.parse()?))
        }
    }
}

/// A root pitch class plus a sorted list of pitches.
///
/// The root need not sound in `pitches` (rootless voicings are fine).
/// Pitches are kept ascending after every operation that adds pitches;
/// duplicates are allowed. The operator-style transforms (`+`, `-`, `*`,
/// `/`, `<<`, `>>`) return a new voicing; only the index-addressed
/// mutators (`set`, `delete`, ...) edit in place.
///
/// Serializes as its CSV form, `"<root offset>,<value>,<value>,..."`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Voicing {
    root: Chroma,
    pitches: Vec<Pitch>,
}

impl Voicing {
    pub fn new(root: impl Into<Chroma>, pitches: impl IntoIterator<Item = Pitch>) -> Self {
        let mut pitches: Vec<Pitch> = pitches.into_iter().collect();
        pitches.sort();
        Voicing {
            root: root.into(),
            pitches,
        }
    }

    /// Decode `"<root offset>,<value>,<value>,..."`.
    pub fn from_csv(csv: &str) -> Result<Self> {
        let values = parser::csv_values(csv)?;
        let (root, pitches) = values
            .split_first()
            .ok_or_else(|| Error::invalid("a root offset", csv))?;
        let voicing = Voicing::new(*root, pitches.iter().copied().map(Pitch::new));
        debug!(csv, voicing = %voicing, "decoded voicing");
        Ok(voicing)
    }

    /// Encode as `"<root offset>,<value>,<value>,..."`; just the root when empty.
    pub fn to_csv(&self) -> String {
        let mut csv = self.root.offset().to_string();
        for pitch in &self.pitches {
            csv.push(',');
            csv.push_str(&pitch.value().to_string());
        }
        csv
    }

    pub fn root(&self) -> Chroma {
        self.root
    }

    pub fn set_root(&mut self, root: impl Into<Chroma>) {
        self.root = root.into();
    }

    pub fn pitches(&self) -> &[Pitch] {
        &self.pitches
    }

    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pitch> {
        self.pitches.iter()
    }

    pub fn contains(&self, pitch: Pitch) -> bool {
        self.pitches.contains(&pitch)
    }

    /// Copy with `pitch` added, unless an equal pitch is already present.
    pub fn add(&self, pitch: Pitch) -> Voicing {
        let mut ret = self.clone();
        if !ret.contains(pitch) {
            ret.pitches.push(pitch);
            ret.pitches.sort();
        }
        ret
    }

    /// Copy with every pitch in `pitches` added, duplicates included.
    pub fn add_all(&self, pitches: &[Pitch]) -> Voicing {
        let mut ret = self.clone();
        ret.pitches.extend_from_slice(pitches);
        ret.pitches.sort();
        ret
    }

    /// Copy with another voicing's pitches added; the root stays ours.
    pub fn add_voicing(&self, other: &Voicing) -> Voicing {
        self.add_all(&other.pitches)
    }

    /// Copy with one occurrence of `pitch` removed. Absent pitches are ignored.
    pub fn remove(&self, pitch: Pitch) -> Voicing {
        self.remove_all(&[pitch])
    }

    /// Copy with one occurrence of each listed pitch removed.
    pub fn remove_all(&self, pitches: &[Pitch]) -> Voicing {
        let mut ret = self.clone();
        for pitch in pitches {
            if let Some(idx) = ret.pitches.iter().position(|p| p == pitch) {
                ret.pitches.remove(idx);
            }
        }
        ret
    }

    pub fn remove_voicing(&self, other: &Voicing) -> Voicing {
        self.remove_all(&other.pitches)
    }

    /// Copy with the root and every pitch moved up by `interval`.
    pub fn transpose_up(&self, interval: impl Into<Interval>) -> Voicing {
        let interval = interval.into();
        let mut ret = self.clone();
        ret.root = ret.root.transpose_up(interval);
        for pitch in &mut ret.pitches {
            *pitch = pitch.transpose_up(interval);
        }
        ret
    }

    pub fn transpose_down(&self, interval: impl Into<Interval>) -> Voicing {
        let interval = interval.into();
        let mut ret = self.clone();
        ret.root = ret.root.transpose_down(interval);
        for pitch in &mut ret.pitches {
            *pitch = pitch.transpose_down(interval);
        }
        ret
    }

    /// Copy shifted so that the root, taken at or just below the lowest
    /// pitch, lands on `target`. Empty voicings are returned unchanged.
    pub fn transpose_to(&self, target: impl Into<Pitch>) -> Voicing {
        let Some(&lowest) = self.pitches.first() else {
            return self.clone();
        };
        let root = lowest.transpose_down(lowest.chroma().difference(self.root));
        self.transpose_down(root.difference(target))
    }

    /// Semitones between every pair of pitches.
    ///
    /// Row `i` (for all but the top pitch) has one entry per pitch: the
    /// distance up to pitch `j` when `j > i`, else 0. Empty for fewer than
    /// two pitches.
    pub fn matrix(&self) -> Vec<Vec<i32>> {
        let n = self.pitches.len();
        if n <= 1 {
            return Vec::new();
        }

        (0..n - 1)
            .map(|i| {
                (0..n)
                    .map(|j| {
                        if j > i {
                            self.pitches[j] - self.pitches[i]
                        } else {
                            0
                        }
                    })
                    .collect()
            })
            .collect()
    }

    /// Position of the first pitch matching `key`.
    pub fn index(&self, key: impl Into<PitchKey>) -> Option<usize> {
        let key = key.into();
        self.pitches.iter().position(|p| key.matches(p))
    }

    pub fn get(&self, index: usize) -> Option<&Pitch> {
        self.pitches.get(index)
    }

    pub fn get_key(&self, key: impl Into<PitchKey>) -> Option<&Pitch> {
        self.index(key).map(|idx| &self.pitches[idx])
    }

    /// Replace the pitch at `index` in place. Panics if out of bounds.
    pub fn set(&mut self, index: usize, pitch: impl Into<Pitch>) {
        self.pitches[index] = pitch.into();
    }

    /// Replace the first pitch matching `key`. Returns false (and leaves the
    /// voicing alone) when nothing matches.
    pub fn set_key(&mut self, key: impl Into<PitchKey>, pitch: impl Into<Pitch>) -> bool {
        match self.index(key) {
            Some(idx) => {
                self.pitches[idx] = pitch.into();
                true
            }
            None => false,
        }
    }

    /// Remove and return the pitch at `index`. Panics if out of bounds.
    pub fn delete(&mut self, index: usize) -> Pitch {
        self.pitches.remove(index)
    }

    /// Remove the first pitch matching `key`, if any.
    pub fn delete_key(&mut self, key: impl Into<PitchKey>) -> Option<Pitch> {
        let idx = self.index(key)?;
        Some(self.pitches.remove(idx))
    }

    /// True if every pitch of `other` sounds here and this voicing has more.
    pub fn is_superset_of(&self, other: &Voicing) -> bool {
        other.pitches.iter().all(|p| self.pitches.contains(p)) && self.len() > other.len()
    }

    pub fn is_superset_or_equal(&self, other: &Voicing) -> bool {
        self.is_superset_of(other) || self == other
    }

    /// The lower pitch of every pair exactly `interval` apart. A pitch is
    /// repeated once per higher partner.
    pub fn match_interval(&self, interval: impl Into<Interval>) -> Vec<Pitch> {
        let distance = interval.into().distance();
        let mut lowers = Vec::new();
        for (i, &lower) in self.pitches.iter().enumerate() {
            for &upper in &self.pitches[i + 1..] {
                if upper - lower == distance {
                    lowers.push(lower);
                }
            }
        }
        lowers
    }

    /// Offset of each pitch above the root pitch class, in pitch order.
    pub fn offsets(&self) -> Vec<u8> {
        self.pitches
            .iter()
            .map(|p| p.transpose_down(i32::from(self.root.offset())).offset())
            .collect()
    }

    /// Name every pitch as a chord tone of the root, in pitch order.
    ///
    /// Registral decisions (`9` vs `add2`, `13` vs `6`, ...) are measured from
    /// the root at or just below the lowest pitch.
    pub fn chord_tones(&self) -> Vec<ChordTone> {
        if self.pitches.is_empty() {
            return Vec::new();
        }

        let offsets = self.offsets();
        let present = OffsetSet::from_offsets(offsets.iter().copied());
        let root = self.pitches[0].transpose_down(i32::from(offsets[0]));

        let tones: Vec<ChordTone> = self
            .pitches
            .iter()
            .zip(&offsets)
            .map(|(&pitch, &offset)| ChordTone::classify(offset, pitch - root > 12, present))
            .collect();

        debug!(root = %self.root, ?offsets, ?tones, "classified voicing");
        tones
    }

    /// Chord-symbol suffix printed between the root and the pitch list.
    /// Voicings are named by their root alone, so this is always empty.
    pub fn quality(&self) -> &'static str {
        ""
    }

    pub fn pitch_names(&self, spelling: Spelling) -> Vec<String> {
        self.pitches.iter().map(|p| p.name_with(spelling)).collect()
    }
}

/// Equal when the pitch lists match after sliding `self` so the lowest
/// pitches coincide. Empty voicings compare by root.
impl PartialEq for Voicing {
    fn eq(&self, other: &Voicing) -> bool {
        if self.len() != other.len() {
            return false;
        }
        match (self.pitches.first(), other.pitches.first()) {
            (Some(&ours), Some(&theirs)) => {
                self.transpose_down(ours - theirs).pitches == other.pitches
            }
            _ => self.root == other.root,
        }
    }
}

impl Eq for Voicing {}

impl fmt::Display for Voicing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}[", self.root, self.quality())?;
        for (i, pitch) in self.pitches.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", pitch)?;
        }
        f.write_str("]")
    }
}

impl TryFrom<String> for Voicing {
    type Error = Error;

    fn try_from(csv: String) -> Result<Self> {
        Voicing::from_csv(&csv)
    }
}

impl From<Voicing> for String {
    fn from(voicing: Voicing) -> Self {
        voicing.to_csv()
    }
}

impl Index<usize> for Voicing {
    type Output = Pitch;

    fn index(&self, index: usize) -> &Pitch {
        &self.pitches[index]
    }
}

impl<'a> IntoIterator for &'a Voicing {
    type Item = &'a Pitch;
    type IntoIter = std::slice::Iter<'a, Pitch>;

    fn into_iter(self) -> Self::IntoIter {
        self.pitches.iter()
    }
}

impl Add<Pitch> for &Voicing {
    type Output = Voicing;

    fn add(self, rhs: Pitch) -> Voicing {
        Voicing::add(self, rhs)
    }
}

impl Add<&[Pitch]> for &Voicing {
    type Output = Voicing;

    fn add(self, rhs: &[Pitch]) -> Voicing {
        self.add_all(rhs)
    }
}

impl Add<&Voicing> for &Voicing {
    type Output = Voicing;

    fn add(self, rhs: &Voicing) -> Voicing {
        self.add_voicing(rhs)
    }
}

impl Sub<Pitch> for &Voicing {
    type Output = Voicing;

    fn sub(self, rhs: Pitch) -> Voicing {
        self.remove(rhs)
    }
}

impl Sub<&[Pitch]> for &Voicing {
    type Output = Voicing;

    fn sub(self, rhs: &[Pitch]) -> Voicing {
        self.remove_all(rhs)
    }
}

impl Sub<&Voicing> for &Voicing {
    type Output = Voicing;

    fn sub(self, rhs: &Voicing) -> Voicing {
        self.remove_voicing(rhs)
    }
}

impl<T: Into<Interval>> Mul<T> for &Voicing {
    type Output = Voicing;

    fn mul(self, rhs: T) -> Voicing {
        self.transpose_up(rhs)
    }
}

impl<T: Into<Interval>> Shr<T> for &Voicing {
    type Output = Voicing;

    fn shr(self, rhs: T) -> Voicing {
        self.transpose_up(rhs)
    }
}

impl<T: Into<Interval>> Div<T> for &Voicing {
    type Output = Voicing;

    fn div(self, rhs: T) -> Voicing {
        self.transpose_down(rhs)
    }
}

impl<T: Into<Interval>> Shl<T> for &Voicing {
    type Output = Voicing;

    fn shl(self, rhs: T) -> Voicing {
        self.transpose_down(rhs)
    }
}

impl<T: Into<Interval>> Rem<T> for &Voicing {
    type Output = Vec<Pitch>;

    fn rem(self, rhs: T) -> Vec<Pitch> {
        self.match_interval(rhs)
    }
}

/// `!voicing` names the chord tones.
impl Not for &Voicing {
    type Output = Vec<ChordTone>;

    fn not(self) -> Vec<ChordTone> {
        self.chord_tones()
    }
}
