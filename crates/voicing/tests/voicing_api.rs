//! End-to-end checks against the public API: parsing, classification,
//! persistence and serde.

use pretty_assertions::assert_eq;
use voicing::{ChordTone, Chroma, Error, Interval, NameKind, Pitch, PitchKey, Spelling, Voicing};

fn parse_voicing(root: &str, pitches: &[&str]) -> Voicing {
    let root: Chroma = root.parse().unwrap();
    let pitches = pitches.iter().map(|p| p.parse::<Pitch>().unwrap());
    Voicing::new(root, pitches)
}

fn tags(v: &Voicing) -> Vec<String> {
    (!v).iter().map(ChordTone::to_string).collect()
}

#[test]
fn common_chords_classify() {
    let cases: &[(&str, &[&str], &[&str])] = &[
        ("C", &["C4", "E4", "G4"], &["1", "maj3", "5"]),
        ("C", &["C4", "E4", "G4", "Bb4"], &["1", "maj3", "5", "dom7"]),
        ("D", &["D3", "F3", "A3", "C4"], &["1", "min3", "5", "min7"]),
        ("G", &["G2", "B3", "F4", "A4", "E5"], &["1", "maj3", "dom7", "9", "13"]),
        ("F", &["F3", "G3", "A3", "C4"], &["1", "add2", "maj3", "5"]),
        ("F", &["F3", "A3", "C4", "G4"], &["1", "maj3", "5", "add9"]),
        ("A", &["A3", "D4", "E4"], &["1", "sus4", "5"]),
        ("E", &["E3", "B3", "F#4"], &["1", "5", "add9"]),
        ("Bb", &["Bb2", "D3", "Ab3", "E4"], &["1", "maj3", "dom7", "#11"]),
        ("B", &["B3", "D4", "F4", "A4"], &["1", "min3", "b5", "min7"]),
        ("C", &["C4", "E4", "G#4"], &["1", "maj3", "#5"]),
        ("C", &["C4", "E4", "G4", "Ab4"], &["1", "maj3", "5", "b13"]),
        ("Eb", &["Eb3", "G3", "Bb3", "D4"], &["1", "maj3", "5", "maj7"]),
        ("C", &["C3", "E3", "Bb3", "Eb4"], &["1", "maj3", "dom7", "#9"]),
    ];

    for (root, pitches, expected) in cases {
        let v = parse_voicing(root, pitches);
        assert_eq!(tags(&v), *expected, "{}", v);
    }
}

#[test]
fn chord_tone_count_matches_pitch_count() {
    let v = Voicing::from_csv("7,43,55,59,62,65,69,76").unwrap();
    assert_eq!(v.chord_tones().len(), v.len());
    assert!(Voicing::from_csv("7").unwrap().chord_tones().is_empty());
}

#[test]
fn csv_round_trip_preserves_root_and_values() {
    for csv in ["0,60,64,67", "11,35,47,62,66,69", "3", "9,-3,0,4"] {
        let v = Voicing::from_csv(csv).unwrap();
        assert_eq!(v.to_csv(), csv);
        let back = Voicing::from_csv(&v.to_csv()).unwrap();
        assert_eq!(back.root(), v.root());
        assert_eq!(back.pitches(), v.pitches());
    }
}

#[test]
fn csv_tolerates_spaces_and_sorts() {
    let v = Voicing::from_csv(" 0, 67 ,60,64 ").unwrap();
    assert_eq!(v.to_csv(), "0,60,64,67");
}

#[test]
fn malformed_input_is_an_error() {
    assert!(matches!(
        Voicing::from_csv("0,60,sixty"),
        Err(Error::InvalidValue { .. })
    ));
    assert!(Voicing::from_csv("").is_err());
    assert_eq!(
        "H".parse::<Chroma>(),
        Err(Error::UnknownName {
            kind: NameKind::PitchClass,
            name: "H".to_string(),
        })
    );
    assert!(matches!(
        Interval::from_name("P9", 0),
        Err(Error::UnknownName {
            kind: NameKind::Interval,
            ..
        })
    ));
    assert!("C4x".parse::<Pitch>().is_err());
}

#[test]
fn serde_json_uses_compact_forms() {
    let v = parse_voicing("G", &["G3", "B3", "D4", "F4"]);
    let json = serde_json::to_string(&v).unwrap();
    assert_eq!(json, "\"7,55,59,62,65\"");

    let back: Voicing = serde_json::from_str(&json).unwrap();
    assert_eq!(back.root(), Chroma::G);
    assert_eq!(back.pitches(), v.pitches());

    assert!(serde_json::from_str::<Voicing>("\"G,55\"").is_err());

    let tones = serde_json::to_string(&v.chord_tones()).unwrap();
    assert_eq!(tones, r#"["1","maj3","5","dom7"]"#);

    let spelling: Spelling = serde_json::from_str("\"sharps\"").unwrap();
    assert_eq!(v.pitch_names(spelling), ["G3", "B3", "D4", "F4"]);
}

#[test]
fn transposed_voicings_are_equal() {
    let v = parse_voicing("C", &["C4", "E4", "G4", "B4"]);
    for k in -12..=12 {
        let moved = &v * k;
        assert_eq!(moved, v);
        assert_eq!(moved.root(), Chroma::C + k);
        assert_eq!(&moved / k, v);
    }
    assert_ne!(v, parse_voicing("C", &["C4", "E4", "G4", "Bb4"]));
}

#[test]
fn lookups_soft_fail() {
    let mut v = parse_voicing("C", &["C3", "G3", "E4", "C5"]);
    assert_eq!(v.index("C".parse::<PitchKey>().unwrap()), Some(0));
    assert_eq!(v.index("C5".parse::<PitchKey>().unwrap()), Some(3));
    assert_eq!(v.index(Chroma::F), None);

    assert!(!v.set_key(Chroma::F, Chroma::F.at(4)));
    assert_eq!(v.delete_key(Chroma::F), None);
    assert_eq!(v.len(), 4);

    let without = &v - Chroma::A.at(4);
    assert_eq!(without.pitches(), v.pitches());
}

#[test]
fn spacing_matrix_and_intervals() {
    let v = parse_voicing("C", &["C4", "E4", "G4", "C5"]);
    assert_eq!(
        v.matrix(),
        vec![
            vec![0, 4, 7, 12],
            vec![0, 0, 3, 8],
            vec![0, 0, 0, 5],
        ]
    );
    assert!((&v % Interval::PERFECT_FIFTH).contains(&Chroma::C.at(4)));
    assert_eq!(&v % Interval::OCTAVE, vec![Chroma::C.at(4)]);
}

#[test]
fn supersets_and_display() {
    let triad = parse_voicing("A", &["A3", "C4", "E4"]);
    let seventh = &triad + Chroma::G.at(4);
    assert!(seventh.is_superset_of(&triad));
    assert!(seventh.is_superset_or_equal(&triad));
    assert!(!triad.is_superset_of(&seventh));
    assert_eq!(seventh.quality(), "");
    assert_eq!(seventh.to_string(), "A[A3 C4 E4 G4]");
    assert_eq!(
        Voicing::new(Chroma::C, [60, 64, 67, 70].map(Pitch::new)).to_string(),
        "C[C4 E4 G4 Bb4]"
    );
}

#[test]
fn transpose_to_lands_root_on_target() {
    let v = parse_voicing("D", &["F#3", "A3", "D4"]);
    let moved = v.transpose_to(Chroma::G.at(3));
    assert_eq!(moved.root(), Chroma::G);
    assert_eq!(moved.to_string(), "G[B3 D4 G4]");
}
