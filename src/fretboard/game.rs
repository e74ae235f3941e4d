// SPDX-License-Identifier: MPL-2.0
//! Round logic for the trainer: find every position of the target note.

use super::{note_at, occurrences, Note, Position};
use std::collections::BTreeSet;

/// Chooses the target note of each round.
pub trait NotePicker {
    fn pick(&mut self) -> Note;
}

/// Largest multiple of 12 that fits in a byte; draws at or above it are
/// rejected so every note is equally likely.
const UNBIASED_LIMIT: u8 = 252;

/// Uniform picker backed by OS randomness.
#[derive(Debug, Default)]
pub struct RandomPicker {
    /// Last note handed out when the OS source is unavailable.
    fallback: usize,
}

impl NotePicker for RandomPicker {
    fn pick(&mut self) -> Note {
        let mut byte = [0u8; 1];
        loop {
            if let Err(err) = getrandom::fill(&mut byte) {
                tracing::warn!(error = %err, "no OS randomness, stepping through notes");
                // Fourths, so consecutive rounds still differ
                self.fallback = (self.fallback + 5) % 12;
                return Note::from_semitone(self.fallback);
            }
            if byte[0] < UNBIASED_LIMIT {
                return Note::from_semitone(usize::from(byte[0]));
            }
        }
    }
}

/// Cycles through a fixed list of notes.
impl<I> NotePicker for std::iter::Cycle<I>
where
    I: Iterator<Item = Note> + Clone,
{
    fn pick(&mut self) -> Note {
        self.next().unwrap_or(Note::E)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    Playing,
    Won,
}

/// Result of one guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Round already won or position off the neck.
    Ignored,
    /// The position sounds a different note.
    Wrong { played: Note },
    /// Correct, but this position was already found.
    AlreadyFound,
    /// Correct and new.
    Found { found: usize, total: usize },
    /// Correct, new, and the last one missing.
    Won { total: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    target: Note,
    total: usize,
    found: BTreeSet<Position>,
    status: RoundStatus,
}

impl Round {
    #[must_use]
    pub fn new(target: Note) -> Self {
        Self {
            target,
            total: occurrences(target).len(),
            found: BTreeSet::new(),
            status: RoundStatus::Playing,
        }
    }

    #[must_use]
    pub fn target(&self) -> Note {
        self.target
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    #[must_use]
    pub fn is_found(&self, position: Position) -> bool {
        self.found.contains(&position)
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn guess(&mut self, position: Position) -> GuessOutcome {
        if self.status == RoundStatus::Won {
            return GuessOutcome::Ignored;
        }
        let Some(played) = note_at(position) else {
            return GuessOutcome::Ignored;
        };
        if played != self.target {
            return GuessOutcome::Wrong { played };
        }
        if !self.found.insert(position) {
            return GuessOutcome::AlreadyFound;
        }
        if self.found.len() == self.total {
            self.status = RoundStatus::Won;
            return GuessOutcome::Won { total: self.total };
        }
        GuessOutcome::Found {
            found: self.found.len(),
            total: self.total,
        }
    }
}

/// A round plus the picker that starts the next one.
pub struct Trainer {
    picker: Box<dyn NotePicker>,
    round: Round,
}

impl std::fmt::Debug for Trainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trainer").field("round", &self.round).finish()
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new(Box::new(RandomPicker::default()))
    }
}

impl Trainer {
    #[must_use]
    pub fn new(mut picker: Box<dyn NotePicker>) -> Self {
        let round = Round::new(picker.pick());
        Self { picker, round }
    }

    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn guess(&mut self, position: Position) -> GuessOutcome {
        self.round.guess(position)
    }

    /// Discards the current round and starts a fresh one.
    pub fn new_round(&mut self) {
        self.round = Round::new(self.picker.pick());
        tracing::debug!(target_note = %self.round.target(), "new fretboard round");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(notes: &'static [Note]) -> Box<dyn NotePicker> {
        Box::new(notes.iter().copied().cycle())
    }

    #[test]
    fn wrong_note_reports_played_note() {
        let mut round = Round::new(Note::A);
        assert_eq!(
            round.guess(Position::new(5, 0)),
            GuessOutcome::Wrong { played: Note::E }
        );
        assert_eq!(round.found_count(), 0);
    }

    #[test]
    fn duplicate_guess_is_noop() {
        let mut round = Round::new(Note::A);
        let position = Position::new(4, 0);
        assert!(matches!(round.guess(position), GuessOutcome::Found { found: 1, .. }));
        assert_eq!(round.guess(position), GuessOutcome::AlreadyFound);
        assert_eq!(round.found_count(), 1);
    }

    #[test]
    fn off_neck_guess_is_ignored() {
        let mut round = Round::new(Note::A);
        assert_eq!(round.guess(Position::new(9, 0)), GuessOutcome::Ignored);
    }

    #[test]
    fn finding_every_occurrence_wins() {
        let mut round = Round::new(Note::DSharp);
        let targets = occurrences(Note::DSharp);
        let (last, rest) = targets.split_last().expect("at least one occurrence");
        for &position in rest {
            assert!(matches!(round.guess(position), GuessOutcome::Found { .. }));
        }
        assert_eq!(round.status(), RoundStatus::Playing);
        assert_eq!(round.guess(*last), GuessOutcome::Won { total: 10 });
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.guess(*last), GuessOutcome::Ignored);
    }

    #[test]
    fn new_round_clears_progress_and_uses_picker() {
        let mut trainer = Trainer::new(fixed(&[Note::E, Note::G]));
        assert_eq!(trainer.round().target(), Note::E);
        trainer.guess(Position::new(0, 0));
        trainer.new_round();
        assert_eq!(trainer.round().target(), Note::G);
        assert_eq!(trainer.round().found_count(), 0);
    }

    #[test]
    fn random_picker_yields_valid_notes() {
        let mut picker = RandomPicker::default();
        for _ in 0..50 {
            assert!(Note::ALL.contains(&picker.pick()));
        }
    }

    #[test]
    fn random_picker_is_not_constant() {
        let mut picker = RandomPicker::default();
        let distinct: BTreeSet<Note> = (0..200).map(|_| picker.pick()).collect();
        assert!(distinct.len() > 1);
    }
}
