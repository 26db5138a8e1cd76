//! Pitch classes, intervals, pitches and chord voicings.
//!
//! The numeric model is layered: a [`Chroma`] is an offset 0-11 above C, an
//! [`Interval`] is a signed semitone distance, a [`Pitch`] is an absolute
//! semitone number (60 is middle C), and a [`Voicing`] is a root pitch class
//! plus the pitches actually sounding. Voicings can name each of their
//! pitches as a chord tone of the root (`1`, `maj3`, `dom7`, `#11`, ...).
//!
//! # Example
//!
//! ```
//! use voicing::{Chroma, Interval, Voicing};
//!
//! let c7 = Voicing::new(Chroma::C, [
//!     Chroma::C.at(4),
//!     Chroma::E.at(4),
//!     Chroma::G.at(4),
//!     Chroma::BB.at(4),
//! ]);
//!
//! let tones: Vec<String> = c7.chord_tones().iter().map(|t| t.to_string()).collect();
//! assert_eq!(tones, ["1", "maj3", "5", "dom7"]);
//! assert_eq!(c7.to_string(), "C[C4 E4 G4 Bb4]");
//!
//! let f7 = &c7 * Interval::PERFECT_FOURTH;
//! assert_eq!(f7.to_csv(), "5,65,69,72,75");
//! assert_eq!(Voicing::from_csv("5,65,69,72,75").unwrap(), c7);
//! ```

pub mod chord_tone;
pub mod chroma;
pub mod error;
pub mod interval;
pub mod parser;
pub mod pitch;
pub mod spelling;
pub mod tables;
pub mod voicing;

pub use chord_tone::{ChordTone, OffsetSet};
pub use chroma::Chroma;
pub use error::{Error, NameKind, Result};
pub use interval::Interval;
pub use pitch::Pitch;
pub use spelling::Spelling;
pub use voicing::{PitchKey, Voicing};
