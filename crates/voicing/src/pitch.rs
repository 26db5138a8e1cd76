//! Absolute pitches.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Shl, Shr, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chroma::Chroma;
use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::parser;
use crate::spelling::Spelling;
use crate::tables;

/// An absolute pitch as a semitone number; 60 is middle C (C4).
///
/// `value == offset + (octave + 1) * 12`, so MIDI note numbers map directly.
/// Arithmetic is plain `i32`: values are expected to stay far inside its
/// range (any musical pitch does). Only the name-based constructor checks
/// for overflow, since its octave comes from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pitch {
    value: i32,
}

impl Pitch {
    pub const fn new(value: i32) -> Self {
        Pitch { value }
    }

    /// Fails on an unknown name or an octave too far out to represent.
    pub fn from_name(name: &str, octave: i32) -> Result<Self> {
        let offset = i32::from(tables::offset_of(name)?);
        octave
            .checked_add(1)
            .and_then(|o| o.checked_mul(12))
            .and_then(|base| base.checked_add(offset))
            .map(Pitch::new)
            .ok_or_else(|| Error::invalid("an octave in range", octave.to_string()))
    }

    pub fn from_chroma(chroma: Chroma, octave: i32) -> Self {
        Pitch::new(i32::from(chroma.offset()) + (octave + 1) * 12)
    }

    pub const fn value(self) -> i32 {
        self.value
    }

    pub fn offset(self) -> u8 {
        self.value.rem_euclid(12) as u8
    }

    pub fn octave(self) -> i32 {
        self.value.div_euclid(12) - 1
    }

    pub fn name(self) -> &'static str {
        tables::chroma_name(self.offset())
    }

    pub fn name_with(self, spelling: Spelling) -> String {
        format!("{}{}", spelling.name(self.offset()), self.octave())
    }

    pub fn chroma(self) -> Chroma {
        Chroma::from(self)
    }

    pub fn set_offset(&mut self, offset: i32) {
        self.value = (self.octave() + 1) * 12 + offset;
    }

    pub fn set_octave(&mut self, octave: i32) {
        self.value = i32::from(self.offset()) + (octave + 1) * 12;
    }

    /// Respell to another pitch class in the same octave.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        let offset = tables::offset_of(name)?;
        self.set_offset(i32::from(offset));
        Ok(())
    }

    pub fn set_chroma(&mut self, chroma: Chroma) {
        self.set_offset(i32::from(chroma.offset()));
    }

    pub fn transpose_up(self, interval: impl Into<Interval>) -> Self {
        Pitch::new(self.value + interval.into().distance())
    }

    pub fn transpose_down(self, interval: impl Into<Interval>) -> Self {
        Pitch::new(self.value - interval.into().distance())
    }

    /// Shift up by another pitch's raw value, for callers that carry a
    /// semitone count as a `Pitch`.
    pub fn shift_up(self, by: Pitch) -> Self {
        Pitch::new(self.value + by.value)
    }

    pub fn shift_down(self, by: Pitch) -> Self {
        Pitch::new(self.value - by.value)
    }

    /// Both pitches, ascending.
    pub fn combine(self, other: impl Into<Pitch>) -> Vec<Pitch> {
        self.combine_all(&[other.into()])
    }

    /// This pitch merged into `others`, ascending. Duplicates are kept.
    pub fn combine_all(self, others: &[Pitch]) -> Vec<Pitch> {
        let mut pitches = Vec::with_capacity(others.len() + 1);
        pitches.push(self);
        pitches.extend_from_slice(others);
        pitches.sort();
        pitches
    }

    /// Semitones from `other` up to `self`.
    pub fn difference(self, other: impl Into<Pitch>) -> i32 {
        self.value - other.into().value
    }

    /// `pitches` without any element equal to this one, order preserved.
    pub fn remove_from(self, pitches: &[Pitch]) -> Vec<Pitch> {
        pitches.iter().filter(|&&p| p != self).copied().collect()
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.name(), self.octave())
    }
}

impl FromStr for Pitch {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, octave) = parser::pitch_literal(s)?;
        Pitch::from_name(&name, octave)
    }
}

impl From<i32> for Pitch {
    fn from(value: i32) -> Self {
        Pitch::new(value)
    }
}

impl PartialEq<i32> for Pitch {
    fn eq(&self, other: &i32) -> bool {
        self.value == *other
    }
}

impl PartialOrd<i32> for Pitch {
    fn partial_cmp(&self, other: &i32) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

/// Matches on pitch class only, ignoring the octave. Unknown names never match.
impl PartialEq<str> for Pitch {
    fn eq(&self, other: &str) -> bool {
        tables::offset_of(other).is_ok_and(|offset| offset == self.offset())
    }
}

impl PartialEq<&str> for Pitch {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<Chroma> for Pitch {
    fn eq(&self, other: &Chroma) -> bool {
        self.offset() == other.offset()
    }
}

impl PartialEq<Interval> for Pitch {
    fn eq(&self, other: &Interval) -> bool {
        self.offset() == other.offset()
    }
}

// `*` and `>>` transpose up; `/` and `<<` transpose down.
macro_rules! pitch_transpose_ops {
    ($($rhs:ty),*) => {$(
        impl Mul<$rhs> for Pitch {
            type Output = Pitch;

            fn mul(self, rhs: $rhs) -> Pitch {
                self.transpose_up(rhs)
            }
        }

        impl Shr<$rhs> for Pitch {
            type Output = Pitch;

            fn shr(self, rhs: $rhs) -> Pitch {
                self.transpose_up(rhs)
            }
        }

        impl Div<$rhs> for Pitch {
            type Output = Pitch;

            fn div(self, rhs: $rhs) -> Pitch {
                self.transpose_down(rhs)
            }
        }

        impl Shl<$rhs> for Pitch {
            type Output = Pitch;

            fn shl(self, rhs: $rhs) -> Pitch {
                self.transpose_down(rhs)
            }
        }
    )*};
}

pitch_transpose_ops!(Interval, i32, Chroma);

impl Mul for Pitch {
    type Output = Pitch;

    fn mul(self, rhs: Pitch) -> Pitch {
        self.shift_up(rhs)
    }
}

impl Shr for Pitch {
    type Output = Pitch;

    fn shr(self, rhs: Pitch) -> Pitch {
        self.shift_up(rhs)
    }
}

impl Div for Pitch {
    type Output = Pitch;

    fn div(self, rhs: Pitch) -> Pitch {
        self.shift_down(rhs)
    }
}

impl Shl for Pitch {
    type Output = Pitch;

    fn shl(self, rhs: Pitch) -> Pitch {
        self.shift_down(rhs)
    }
}

impl Add for Pitch {
    type Output = Vec<Pitch>;

    fn add(self, rhs: Pitch) -> Vec<Pitch> {
        self.combine(rhs)
    }
}

impl Add<i32> for Pitch {
    type Output = Vec<Pitch>;

    fn add(self, rhs: i32) -> Vec<Pitch> {
        self.combine(rhs)
    }
}

impl Add<&[Pitch]> for Pitch {
    type Output = Vec<Pitch>;

    fn add(self, rhs: &[Pitch]) -> Vec<Pitch> {
        self.combine_all(rhs)
    }
}

impl Add<Vec<Pitch>> for Pitch {
    type Output = Vec<Pitch>;

    fn add(self, rhs: Vec<Pitch>) -> Vec<Pitch> {
        self.combine_all(&rhs)
    }
}

impl Add<Pitch> for Vec<Pitch> {
    type Output = Vec<Pitch>;

    fn add(self, rhs: Pitch) -> Vec<Pitch> {
        rhs.combine_all(&self)
    }
}

impl Sub for Pitch {
    type Output = i32;

    fn sub(self, rhs: Pitch) -> i32 {
        self.difference(rhs)
    }
}

impl Sub<i32> for Pitch {
    type Output = i32;

    fn sub(self, rhs: i32) -> i32 {
        self.difference(rhs)
    }
}

/// `pitches - pitch` removes every occurrence of that pitch.
impl Sub<Pitch> for Vec<Pitch> {
    type Output = Vec<Pitch>;

    fn sub(self, rhs: Pitch) -> Vec<Pitch> {
        rhs.remove_from(&self)
    }
}
