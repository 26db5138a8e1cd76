//! Signed semitone distances.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chroma::Chroma;
use crate::error::{Error, Result};
use crate::parser;
use crate::tables;

/// A signed distance in semitones, never reduced.
///
/// `offset` and `octave` are derived views: `distance == octave * 12 + offset`
/// with `offset` always in `0..12` (so -1 is a major seventh one octave down).
/// Like [`Pitch`](crate::Pitch), distances are expected to stay far inside
/// `i32`; only [`Interval::from_name`] checks for overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Interval {
    distance: i32,
}

impl Interval {
    pub const UNISON: Interval = Interval::new(0);
    pub const MINOR_SECOND: Interval = Interval::new(1);
    pub const MAJOR_SECOND: Interval = Interval::new(2);
    pub const MINOR_THIRD: Interval = Interval::new(3);
    pub const MAJOR_THIRD: Interval = Interval::new(4);
    pub const PERFECT_FOURTH: Interval = Interval::new(5);
    pub const TRITONE: Interval = Interval::new(6);
    pub const PERFECT_FIFTH: Interval = Interval::new(7);
    pub const MINOR_SIXTH: Interval = Interval::new(8);
    pub const MAJOR_SIXTH: Interval = Interval::new(9);
    pub const MINOR_SEVENTH: Interval = Interval::new(10);
    pub const MAJOR_SEVENTH: Interval = Interval::new(11);
    pub const OCTAVE: Interval = Interval::new(12);

    pub const fn new(distance: i32) -> Self {
        Interval { distance }
    }

    /// `distance = table[name] + octave * 12`. Fails on an unknown name or
    /// an octave too far out to represent.
    pub fn from_name(name: &str, octave: i32) -> Result<Self> {
        let distance = tables::distance_of(name)?;
        octave
            .checked_mul(12)
            .and_then(|base| base.checked_add(distance))
            .map(Interval::new)
            .ok_or_else(|| Error::invalid("an octave in range", octave.to_string()))
    }

    pub const fn distance(self) -> i32 {
        self.distance
    }

    pub fn offset(self) -> u8 {
        self.distance.rem_euclid(12) as u8
    }

    pub fn octave(self) -> i32 {
        self.distance.div_euclid(12)
    }

    /// Replace the offset, keeping the octave.
    pub fn set_offset(&mut self, offset: i32) {
        self.distance = offset + self.octave() * 12;
    }

    /// Replace the octave, keeping the offset.
    pub fn set_octave(&mut self, octave: i32) {
        self.distance = octave * 12 + i32::from(self.offset());
    }

    /// Canonical name of the offset (`U`, `m2`, ... `M7`).
    pub fn name(self) -> &'static str {
        tables::interval_name(self.offset())
    }

    /// Replace the offset by name, keeping the octave. `O`/`P8` therefore
    /// land one octave higher.
    pub fn set_name(&mut self, name: &str) -> Result<()> {
        let offset = tables::distance_of(name)?;
        self.set_offset(offset);
        Ok(())
    }

    /// The same interval widened by `octave` octaves.
    pub const fn compound(self, octave: i32) -> Self {
        Interval::new(self.distance + octave * 12)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.octave() {
            0 => f.write_str(self.name()),
            octave => write!(f, "{}({})", self.name(), octave),
        }
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let (name, octave) = parser::interval_literal(s)?;
        Interval::from_name(name, octave)
    }
}

impl From<i32> for Interval {
    fn from(distance: i32) -> Self {
        Interval::new(distance)
    }
}

/// A pitch class read as the distance above C.
impl From<Chroma> for Interval {
    fn from(chroma: Chroma) -> Self {
        Interval::new(i32::from(chroma.offset()))
    }
}

impl PartialEq<i32> for Interval {
    fn eq(&self, other: &i32) -> bool {
        self.distance == *other
    }
}

impl PartialOrd<i32> for Interval {
    fn partial_cmp(&self, other: &i32) -> Option<std::cmp::Ordering> {
        self.distance.partial_cmp(other)
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        Interval::new(self.distance + rhs.distance)
    }
}

impl Add<i32> for Interval {
    type Output = Interval;

    fn add(self, rhs: i32) -> Interval {
        Interval::new(self.distance + rhs)
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        Interval::new(self.distance - rhs.distance)
    }
}

impl Sub<i32> for Interval {
    type Output = Interval;

    fn sub(self, rhs: i32) -> Interval {
        Interval::new(self.distance - rhs)
    }
}
