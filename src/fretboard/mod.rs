// SPDX-License-Identifier: MPL-2.0
//! Guitar neck model for the note-finding trainer.
//!
//! Strings are indexed high to low (0 = high E4, 5 = low E2) and frets run
//! from 0 (open string) to [`FRETBOARD_FRETS`].

pub mod game;

pub use game::{GuessOutcome, NotePicker, RandomPicker, Round, RoundStatus, Trainer};

pub use crate::config::{FRETBOARD_FRETS, FRETBOARD_STRINGS};
use std::fmt;

/// One of the twelve pitch classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Note {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl Note {
    /// Chromatic scale starting from C.
    pub const ALL: [Note; 12] = [
        Note::C,
        Note::CSharp,
        Note::D,
        Note::DSharp,
        Note::E,
        Note::F,
        Note::FSharp,
        Note::G,
        Note::GSharp,
        Note::A,
        Note::ASharp,
        Note::B,
    ];

    /// Pitch class from a semitone count, wrapping modulo 12.
    #[must_use]
    pub fn from_semitone(semitone: usize) -> Self {
        Self::ALL[semitone % 12]
    }

    /// Position in the chromatic scale (C = 0).
    #[must_use]
    pub fn semitone(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Note::C => "C",
            Note::CSharp => "C#",
            Note::D => "D",
            Note::DSharp => "D#",
            Note::E => "E",
            Note::F => "F",
            Note::FSharp => "F#",
            Note::G => "G",
            Note::GSharp => "G#",
            Note::A => "A",
            Note::ASharp => "A#",
            Note::B => "B",
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Note name plus octave, e.g. `G#3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pitch {
    pub note: Note,
    pub octave: i8,
}

impl Pitch {
    /// Pitch of a MIDI note number (60 = C4).
    #[must_use]
    pub fn from_midi(midi: u8) -> Self {
        let midi = usize::from(midi);
        Self {
            note: Note::from_semitone(midi),
            octave: (midi / 12) as i8 - 1,
        }
    }

    /// MIDI note number (60 = C4).
    #[must_use]
    pub fn midi(self) -> i32 {
        (i32::from(self.octave) + 1) * 12 + self.note.semitone() as i32
    }

    /// Equal-tempered frequency in Hz, tuned to A4 = 440 Hz.
    #[must_use]
    pub fn frequency(self) -> f32 {
        440.0 * 2f32.powf((self.midi() - 69) as f32 / 12.0)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.note, self.octave)
    }
}

/// A string/fret intersection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub string: usize,
    pub fret: usize,
}

impl Position {
    #[must_use]
    pub fn new(string: usize, fret: usize) -> Self {
        Self { string, fret }
    }

    #[must_use]
    pub fn is_on_neck(self) -> bool {
        self.string < FRETBOARD_STRINGS && self.fret <= FRETBOARD_FRETS
    }
}

/// Standard tuning, high to low: E4 B3 G3 D3 A2 E2.
pub const OPEN_STRINGS_MIDI: [u8; FRETBOARD_STRINGS] = [64, 59, 55, 50, 45, 40];

/// Frets carrying a single inlay dot.
pub const SINGLE_MARKERS: [usize; 8] = [3, 5, 7, 9, 15, 17, 19, 21];

/// Fret carrying the double inlay.
pub const DOUBLE_MARKER: usize = 12;

/// Inlay dots drawn under `fret`.
#[must_use]
pub fn marker_dots(fret: usize) -> usize {
    if fret == DOUBLE_MARKER {
        2
    } else if SINGLE_MARKERS.contains(&fret) {
        1
    } else {
        0
    }
}

/// Pitch class at a position, or `None` off the neck.
#[must_use]
pub fn note_at(position: Position) -> Option<Note> {
    pitch_at(position).map(|pitch| pitch.note)
}

/// Scientific pitch at a position, or `None` off the neck.
#[must_use]
pub fn pitch_at(position: Position) -> Option<Pitch> {
    if !position.is_on_neck() {
        return None;
    }
    let midi = OPEN_STRINGS_MIDI[position.string] as usize + position.fret;
    u8::try_from(midi).ok().map(Pitch::from_midi)
}

/// Open-string note for `string`.
#[must_use]
pub fn open_note(string: usize) -> Option<Note> {
    note_at(Position::new(string, 0))
}

/// Every position on the neck, string by string.
pub fn positions() -> impl Iterator<Item = Position> {
    (0..FRETBOARD_STRINGS)
        .flat_map(|string| (0..=FRETBOARD_FRETS).map(move |fret| Position::new(string, fret)))
}

/// All positions sounding `note`.
#[must_use]
pub fn occurrences(note: Note) -> Vec<Position> {
    positions()
        .filter(|&position| note_at(position) == Some(note))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn open_strings_are_standard_tuning() {
        let names: Vec<String> = (0..FRETBOARD_STRINGS)
            .filter_map(|s| pitch_at(Position::new(s, 0)))
            .map(|p| p.to_string())
            .collect();
        assert_eq!(names, ["E4", "B3", "G3", "D3", "A2", "E2"]);
    }

    #[test]
    fn note_wraps_after_twelve_frets() {
        assert_eq!(note_at(Position::new(5, 12)), Some(Note::E));
        assert_eq!(note_at(Position::new(5, 1)), Some(Note::F));
        assert_eq!(pitch_at(Position::new(5, 12)).map(|p| p.octave), Some(3));
    }

    #[test]
    fn fifth_fret_matches_next_string() {
        // A2 string, fret 5 = D3
        assert_eq!(pitch_at(Position::new(4, 5)), pitch_at(Position::new(3, 0)));
        // G3 string, fret 4 = B3
        assert_eq!(pitch_at(Position::new(2, 4)), pitch_at(Position::new(1, 0)));
    }

    #[test]
    fn off_neck_positions_have_no_note() {
        assert_eq!(note_at(Position::new(6, 0)), None);
        assert_eq!(note_at(Position::new(0, 23)), None);
    }

    #[test]
    fn occurrence_counts() {
        // 23 positions per string: every class twice except the one just
        // below the open note
        assert_eq!(occurrences(Note::E).len(), 12);
        assert_eq!(occurrences(Note::C).len(), 12);
        assert_eq!(occurrences(Note::FSharp).len(), 11);
        // Below both E strings
        assert_eq!(occurrences(Note::DSharp).len(), 10);
        let total: usize = Note::ALL.iter().map(|&n| occurrences(n).len()).sum();
        assert_eq!(total, FRETBOARD_STRINGS * (FRETBOARD_FRETS + 1));
    }

    #[test]
    fn markers() {
        assert_eq!(marker_dots(12), 2);
        assert_eq!(marker_dots(3), 1);
        assert_eq!(marker_dots(21), 1);
        assert_eq!(marker_dots(4), 0);
        assert_eq!(marker_dots(0), 0);
    }

    #[test]
    fn middle_c_is_c4() {
        assert_eq!(Pitch::from_midi(60).to_string(), "C4");
    }

    #[test]
    fn frequencies_follow_concert_pitch() {
        assert_eq!(Pitch::from_midi(69).midi(), 69);
        assert_abs_diff_eq!(Pitch::from_midi(69).frequency(), 440.0, epsilon = 1e-3);
        let high_e = pitch_at(Position::new(0, 0)).expect("open string is on the neck");
        assert_eq!(high_e.midi(), 64);
        assert_abs_diff_eq!(high_e.frequency(), 329.628, epsilon = 1e-2);
    }
}
