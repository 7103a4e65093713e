//! Lesson navigation on `TutorApp`.

use tutor_common::{Notice, Section};
use tutor_lessons::Move;

use super::core::TutorApp;

impl TutorApp {
    pub fn select_unit(&mut self, query: &str) -> Move {
        let step = self.navigator.select_unit(query);
        self.leave_lesson(&step);
        step
    }

    pub fn select_lesson(&mut self, query: &str) -> Move {
        let step = self.navigator.select_lesson(query);
        self.leave_lesson(&step);
        step
    }

    pub fn next_lesson(&mut self) -> Move {
        let step = self.navigator.next();
        self.leave_lesson(&step);
        step
    }

    pub fn previous_lesson(&mut self) -> Move {
        let step = self.navigator.previous();
        self.leave_lesson(&step);
        step
    }

    /// Switch tab. Conversations of other sections are kept.
    pub fn select_section(&mut self, section: Section) -> Section {
        let active = self.navigator.select_section(section);
        if active != section {
            let lesson = self.navigator.lesson().name.clone();
            self.notify(Notice::info(
                "Section unavailable",
                format!("{lesson} has no {section} section; showing {active}."),
            ));
        }
        active
    }

    fn leave_lesson(&mut self, step: &Move) {
        if let Move::Moved { from } = step {
            self.registry().drop_lesson(&from.unit, &from.lesson);
        }
    }
}
