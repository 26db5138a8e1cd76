//! Pitch classes.

use std::fmt;
use std::ops::{Add, Div, Mul, Shl, Shr, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::pitch::Pitch;
use crate::spelling::Spelling;
use crate::tables;

/// A pitch class: an offset 0-11 above C with no octave.
///
/// Serializes as its offset; deserializing reduces mod 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct Chroma {
    offset: u8,
}

impl Chroma {
    pub const C: Chroma = Chroma { offset: 0 };
    pub const DB: Chroma = Chroma { offset: 1 };
    pub const D: Chroma = Chroma { offset: 2 };
    pub const EB: Chroma = Chroma { offset: 3 };
    pub const E: Chroma = Chroma { offset: 4 };
    pub const F: Chroma = Chroma { offset: 5 };
    pub const GB: Chroma = Chroma { offset: 6 };
    pub const G: Chroma = Chroma { offset: 7 };
    pub const AB: Chroma = Chroma { offset: 8 };
    pub const A: Chroma = Chroma { offset: 9 };
    pub const BB: Chroma = Chroma { offset: 10 };
    pub const B: Chroma = Chroma { offset: 11 };

    /// Any integer, reduced mod 12 (negative values wrap upward).
    pub fn new(value: i32) -> Self {
        Chroma {
            offset: value.rem_euclid(12) as u8,
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        Ok(Chroma {
            offset: tables::offset_of(name)?,
        })
    }

    pub const fn offset(self) -> u8 {
        self.offset
    }

    /// Canonical (flat) name.
    pub fn name(self) -> &'static str {
        tables::chroma_name(self.offset)
    }

    pub fn name_with(self, spelling: Spelling) -> &'static str {
        spelling.name(self.offset)
    }

    /// This pitch class in a given octave (`Chroma::C.at(4)` is middle C).
    pub fn at(self, octave: i32) -> Pitch {
        Pitch::from_chroma(self, octave)
    }

    /// Transpose upward. Only the interval's offset matters; its octave is
    /// dropped since a pitch class has none.
    pub fn transpose_up(self, interval: impl Into<Interval>) -> Self {
        let interval = interval.into();
        Chroma::new(i32::from(interval.offset()) + i32::from(self.offset))
    }

    /// Transpose downward by the full signed distance, then reduce.
    pub fn transpose_down(self, interval: impl Into<Interval>) -> Self {
        let interval = interval.into();
        Chroma::new(i32::from(self.offset) - interval.distance())
    }

    /// Semitones from `other` up to `self`, always in `0..12`.
    pub fn difference(self, other: Chroma) -> i32 {
        (i32::from(self.offset) - i32::from(other.offset)).rem_euclid(12)
    }

    /// The pitches that do not belong to this pitch class, order preserved.
    pub fn filter_out(self, pitches: &[Pitch]) -> Vec<Pitch> {
        pitches
            .iter()
            .filter(|p| p.offset() != self.offset)
            .copied()
            .collect()
    }
}

impl fmt::Display for Chroma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Chroma {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Chroma::from_name(s)
    }
}

impl From<i32> for Chroma {
    fn from(value: i32) -> Self {
        Chroma::new(value)
    }
}

impl From<Chroma> for i32 {
    fn from(chroma: Chroma) -> Self {
        i32::from(chroma.offset)
    }
}

impl From<Pitch> for Chroma {
    fn from(pitch: Pitch) -> Self {
        Chroma {
            offset: pitch.offset(),
        }
    }
}

impl PartialEq<i32> for Chroma {
    fn eq(&self, other: &i32) -> bool {
        i32::from(self.offset) == other.rem_euclid(12)
    }
}

impl PartialEq<Pitch> for Chroma {
    fn eq(&self, other: &Pitch) -> bool {
        self.offset == other.offset()
    }
}

// `+`, `*` and `>>` transpose up; `/` and `<<` transpose down.
macro_rules! chroma_transpose_ops {
    ($($rhs:ty),*) => {$(
        impl Add<$rhs> for Chroma {
            type Output = Chroma;

            fn add(self, rhs: $rhs) -> Chroma {
                self.transpose_up(rhs)
            }
        }

        impl Mul<$rhs> for Chroma {
            type Output = Chroma;

            fn mul(self, rhs: $rhs) -> Chroma {
                self.transpose_up(rhs)
            }
        }

        impl Shr<$rhs> for Chroma {
            type Output = Chroma;

            fn shr(self, rhs: $rhs) -> Chroma {
                self.transpose_up(rhs)
            }
        }

        impl Div<$rhs> for Chroma {
            type Output = Chroma;

            fn div(self, rhs: $rhs) -> Chroma {
                self.transpose_down(rhs)
            }
        }

        impl Shl<$rhs> for Chroma {
            type Output = Chroma;

            fn shl(self, rhs: $rhs) -> Chroma {
                self.transpose_down(rhs)
            }
        }
    )*};
}

chroma_transpose_ops!(Interval, i32, Chroma);

impl Sub<Interval> for Chroma {
    type Output = Chroma;

    fn sub(self, rhs: Interval) -> Chroma {
        self.transpose_down(rhs)
    }
}

impl Sub<i32> for Chroma {
    type Output = Chroma;

    fn sub(self, rhs: i32) -> Chroma {
        self.transpose_down(rhs)
    }
}

/// Chroma minus chroma is a distance, not a transposition.
impl Sub for Chroma {
    type Output = i32;

    fn sub(self, rhs: Chroma) -> i32 {
        self.difference(rhs)
    }
}

/// `pitches - chroma` drops every pitch of that pitch class.
impl Sub<Chroma> for Vec<Pitch> {
    type Output = Vec<Pitch>;

    fn sub(self, rhs: Chroma) -> Vec<Pitch> {
        rhs.filter_out(&self)
    }
}
