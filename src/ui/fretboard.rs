// SPDX-License-Identifier: MPL-2.0
//! Fretboard trainer screen.
//!
//! Shows the target note, a clickable neck (one row per string, one cell per
//! fret) and a feedback line naming the pitch of the last guess.

use crate::fretboard::{
    self, marker_dots, open_note, pitch_at, GuessOutcome, Pitch, Position, RoundStatus, Trainer,
    FRETBOARD_FRETS, FRETBOARD_STRINGS,
};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::styles::fretboard::CellMark;
use iced::widget::{button, container, scrollable, text, Column, Row, Space};
use iced::{alignment::Horizontal, Alignment, Element, Length};

const INLAY_SIZE: f32 = 8.0;

#[derive(Debug, Clone)]
pub enum Message {
    Guess(Position),
    NewRound,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Whether guesses are heard; otherwise a hint says the pitch is only shown.
    pub sound: bool,
}

#[derive(Debug, Default)]
pub struct State {
    trainer: Trainer,
    last_guess: Option<(Position, GuessOutcome)>,
}

impl State {
    #[must_use]
    pub fn new(trainer: Trainer) -> Self {
        Self {
            trainer,
            last_guess: None,
        }
    }

    #[must_use]
    pub fn trainer(&self) -> &Trainer {
        &self.trainer
    }

    /// Outcome of the most recent guess in this round.
    #[must_use]
    pub fn last_guess(&self) -> Option<(Position, GuessOutcome)> {
        self.last_guess
    }

    /// Applies a message and returns the pitch to sound, if any. Every
    /// guess on the neck sounds, right or wrong, until the round is won.
    pub fn update(&mut self, message: Message) -> Option<Pitch> {
        match message {
            Message::Guess(position) => {
                let outcome = self.trainer.guess(position);
                if outcome == GuessOutcome::Ignored {
                    return None;
                }
                self.last_guess = Some((position, outcome));
                pitch_at(position)
            }
            Message::NewRound => {
                self.trainer.new_round();
                self.last_guess = None;
                None
            }
        }
    }

    fn mark(&self, position: Position) -> CellMark {
        if self.trainer.round().is_found(position) {
            return CellMark::Found;
        }
        match self.last_guess {
            Some((last, GuessOutcome::Wrong { .. })) if last == position => CellMark::Missed,
            _ => CellMark::Idle,
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let i18n = ctx.i18n;
        let round = self.trainer.round();
        let target = round.target().to_string();

        let prompt = text(i18n.tr_with_args("fretboard-prompt", &[("note", &target)]))
            .size(typography::TITLE_MD);
        let progress = text(i18n.tr_with_args(
            "fretboard-progress",
            &[
                ("found", &round.found_count().to_string()),
                ("total", &round.total().to_string()),
            ],
        ))
        .size(typography::BODY);

        let new_round_style = if round.status() == RoundStatus::Won {
            styles::button::selected
        } else {
            styles::button::unselected
        };
        let new_round = button(text(i18n.tr("fretboard-new-round")).size(typography::BODY))
            .padding([spacing::XXS, spacing::SM])
            .style(new_round_style)
            .on_press(Message::NewRound);

        let header = Row::new()
            .spacing(spacing::MD)
            .align_y(Alignment::Center)
            .push(prompt)
            .push(progress)
            .push(Space::new().width(Length::Fill))
            .push(new_round);

        let board = Column::new()
            .push(container(self.neck()).padding(spacing::XS).style(styles::fretboard::neck))
            .push(fret_numbers())
            .spacing(spacing::XXS);

        let board = scrollable(board).direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new(),
        ));

        let mut content = Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .width(Length::Fill)
            .push(text(i18n.tr("fretboard-title")).size(typography::TITLE_LG))
            .push(header)
            .push(board)
            .push(text(self.feedback(i18n)).size(typography::BODY_LG));

        if !ctx.sound {
            content = content.push(text(i18n.tr("fretboard-sound-off")).size(typography::CAPTION));
        }

        content.into()
    }

    fn neck(&self) -> Element<'_, Message> {
        let rows = (0..FRETBOARD_STRINGS).fold(Column::new(), |column, string| {
            let label = open_note(string).map(|note| note.to_string()).unwrap_or_default();
            let row = (0..=FRETBOARD_FRETS).fold(
                Row::new()
                    .align_y(Alignment::Center)
                    .push(
                        text(label)
                            .size(typography::CAPTION)
                            .width(Length::Fixed(sizing::FRET_CELL_WIDTH / 2.0)),
                    ),
                |row, fret| {
                    let cell = self.cell(Position::new(string, fret));
                    if fret == 0 {
                        // Nut
                        row.push(cell)
                            .push(Space::new().width(Length::Fixed(sizing::NUT_WIDTH)))
                    } else {
                        row.push(cell)
                    }
                },
            );
            column.push(row)
        });

        Column::new().push(rows).push(inlays()).into()
    }

    fn cell(&self, position: Position) -> Element<'_, Message> {
        let mark = self.mark(position);
        let label = match mark {
            CellMark::Found => fretboard::note_at(position)
                .map(|note| note.to_string())
                .unwrap_or_default(),
            _ => String::new(),
        };
        button(
            text(label)
                .size(typography::CAPTION)
                .align_x(Horizontal::Center)
                .width(Length::Fill),
        )
        .width(Length::Fixed(sizing::FRET_CELL_WIDTH))
        .height(Length::Fixed(sizing::STRING_ROW_HEIGHT))
        .padding(spacing::XXS)
        .style(styles::fretboard::cell(mark))
        .on_press(Message::Guess(position))
        .into()
    }

    fn feedback(&self, i18n: &I18n) -> String {
        let target = self.trainer.round().target().to_string();
        let Some((position, outcome)) = self.last_guess else {
            return i18n.tr("fretboard-hint");
        };
        let pitch = pitch_at(position)
            .map(|pitch| pitch.to_string())
            .unwrap_or_default();

        match outcome {
            GuessOutcome::Wrong { .. } => i18n.tr_with_args(
                "fretboard-wrong",
                &[("pitch", &pitch), ("note", &target)],
            ),
            GuessOutcome::AlreadyFound => {
                i18n.tr_with_args("fretboard-already-found", &[("pitch", &pitch)])
            }
            GuessOutcome::Found { found, total } => i18n.tr_with_args(
                "fretboard-found",
                &[
                    ("pitch", &pitch),
                    ("found", &found.to_string()),
                    ("total", &total.to_string()),
                ],
            ),
            GuessOutcome::Won { total } => i18n.tr_with_args(
                "fretboard-won",
                &[("note", &target), ("total", &total.to_string())],
            ),
            GuessOutcome::Ignored => i18n.tr("fretboard-hint"),
        }
    }
}

/// Row of inlay dots aligned with the fret cells.
fn inlays<'a>() -> Element<'a, Message> {
    (0..=FRETBOARD_FRETS).fold(
        Row::new()
            .align_y(Alignment::Center)
            .push(Space::new().width(Length::Fixed(sizing::FRET_CELL_WIDTH / 2.0))),
        |row, fret| {
            let dots = (0..marker_dots(fret)).fold(
                Row::new().spacing(spacing::XXS),
                |dots, _| {
                    dots.push(
                        container(Space::new())
                            .width(Length::Fixed(INLAY_SIZE))
                            .height(Length::Fixed(INLAY_SIZE))
                            .style(styles::fretboard::inlay),
                    )
                },
            );
            let slot = container(dots)
                .center_x(Length::Fixed(sizing::FRET_CELL_WIDTH))
                .height(Length::Fixed(spacing::MD));
            if fret == 0 {
                row.push(slot)
                    .push(Space::new().width(Length::Fixed(sizing::NUT_WIDTH)))
            } else {
                row.push(slot)
            }
        },
    )
    .into()
}

/// Fret numbers under the neck, offset by the neck padding.
fn fret_numbers<'a>() -> Element<'a, Message> {
    let row = (0..=FRETBOARD_FRETS).fold(
        Row::new().push(Space::new().width(Length::Fixed(sizing::FRET_CELL_WIDTH / 2.0))),
        |row, fret| {
            let number = container(text(fret.to_string()).size(typography::CAPTION))
                .center_x(Length::Fixed(sizing::FRET_CELL_WIDTH));
            if fret == 0 {
                row.push(number)
                    .push(Space::new().width(Length::Fixed(sizing::NUT_WIDTH)))
            } else {
                row.push(number)
            }
        },
    );
    container(row).padding([0.0, spacing::XS]).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::{occurrences, Note, NotePicker};

    fn state(notes: &'static [Note]) -> State {
        let picker: Box<dyn NotePicker> = Box::new(notes.iter().copied().cycle());
        State::new(Trainer::new(picker))
    }

    #[test]
    fn wrong_guess_marks_cell_as_missed() {
        let mut state = state(&[Note::A]);
        let position = Position::new(0, 0);
        let sounded = state.update(Message::Guess(position));

        assert_eq!(sounded.map(|pitch| pitch.to_string()).as_deref(), Some("E4"));
        assert_eq!(
            state.last_guess(),
            Some((position, GuessOutcome::Wrong { played: Note::E }))
        );
        assert_eq!(state.mark(position), CellMark::Missed);
    }

    #[test]
    fn found_cell_stays_marked_after_next_miss() {
        let mut state = state(&[Note::A]);
        let hit = Position::new(4, 0);
        state.update(Message::Guess(hit));
        state.update(Message::Guess(Position::new(0, 1)));

        assert_eq!(state.mark(hit), CellMark::Found);
        assert_eq!(state.mark(Position::new(0, 1)), CellMark::Missed);
    }

    #[test]
    fn ignored_guess_keeps_previous_feedback() {
        let mut state = state(&[Note::A]);
        state.update(Message::Guess(Position::new(4, 0)));
        let before = state.last_guess();
        state.update(Message::Guess(Position::new(7, 0)));
        assert_eq!(state.last_guess(), before);
    }

    #[test]
    fn new_round_clears_feedback_and_marks() {
        let mut state = state(&[Note::A, Note::C]);
        let hit = Position::new(4, 0);
        state.update(Message::Guess(hit));
        state.update(Message::NewRound);

        assert!(state.last_guess().is_none());
        assert_eq!(state.mark(hit), CellMark::Idle);
        assert_eq!(state.trainer().round().target(), Note::C);
    }

    #[test]
    fn feedback_names_the_played_pitch() {
        let i18n = I18n::default();
        let mut state = state(&[Note::A]);
        state.update(Message::Guess(Position::new(0, 0)));
        let line = state.feedback(&i18n);
        assert!(line.contains("E4"), "feedback was {line}");
    }

    #[test]
    fn winning_round_renders() {
        let i18n = I18n::default();
        let mut state = state(&[Note::DSharp]);
        for position in occurrences(Note::DSharp) {
            state.update(Message::Guess(position));
        }
        assert_eq!(state.trainer().round().status(), RoundStatus::Won);
        assert!(matches!(
            state.last_guess(),
            Some((_, GuessOutcome::Won { total: 10 }))
        ));
        let _element = state.view(ViewContext {
            i18n: &i18n,
            sound: false,
        });
    }

    #[test]
    fn guesses_after_a_win_are_silent() {
        let mut state = state(&[Note::DSharp]);
        for position in occurrences(Note::DSharp) {
            assert!(state.update(Message::Guess(position)).is_some());
        }
        assert!(state.update(Message::Guess(Position::new(0, 0))).is_none());
        assert!(state.update(Message::Guess(Position::new(9, 0))).is_none());
        assert!(state.update(Message::NewRound).is_none());
    }
}
