//! Lesson selection state and navigation.
//!
//! The navigator only tracks *where* the learner is. Discarding the
//! conversations of a lesson the learner leaves is the caller's job; every
//! lesson-changing action returns [`Move::Moved`] naming the lesson left.

use tracing::{debug, warn};
use tutor_common::{ConversationKey, Section};

use crate::curriculum::{Curriculum, Lesson, Unit};

/// A `(unit, lesson)` pair by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonId {
    pub unit: String,
    pub lesson: String,
}

/// Outcome of a navigation action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Move {
    /// The active lesson did not change.
    Stayed,
    /// The active lesson changed; `from` is the lesson that was left.
    Moved { from: LessonId },
}

impl Move {
    pub fn moved(&self) -> bool {
        matches!(self, Move::Moved { .. })
    }
}

#[derive(Debug, Clone)]
pub struct Navigator {
    curriculum: Curriculum,
    unit: usize,
    lesson: usize,
    section: Section,
}

impl Navigator {
    /// Starts on the first lesson of the first unit.
    pub fn new(curriculum: Curriculum) -> Self {
        let section = curriculum.units()[0].lessons()[0].default_section();
        Self {
            curriculum,
            unit: 0,
            lesson: 0,
            section,
        }
    }

    pub fn curriculum(&self) -> &Curriculum {
        &self.curriculum
    }

    pub fn unit(&self) -> &Unit {
        &self.curriculum.units()[self.unit]
    }

    pub fn lesson(&self) -> &Lesson {
        &self.unit().lessons()[self.lesson]
    }

    pub fn section(&self) -> Section {
        self.section
    }

    /// Zero-based `(unit, lesson)` position.
    pub fn position(&self) -> (usize, usize) {
        (self.unit, self.lesson)
    }

    pub fn lesson_id(&self) -> LessonId {
        LessonId {
            unit: self.unit().name.clone(),
            lesson: self.lesson().name.clone(),
        }
    }

    /// Key of the conversation the learner currently targets.
    pub fn key(&self) -> ConversationKey {
        ConversationKey::new(&self.unit().name, &self.lesson().name, self.section)
    }

    /// Switch unit. Unknown targets clamp to the first unit. A real change
    /// lands on the new unit's first lesson and its default section.
    pub fn select_unit(&mut self, query: &str) -> Move {
        let index = self.curriculum.find_unit(query).unwrap_or_else(|| {
            warn!(query, "unknown unit, using the first unit");
            0
        });
        if index == self.unit {
            return Move::Stayed;
        }

        let from = self.lesson_id();
        self.unit = index;
        self.enter_lesson(0);
        debug!(unit = %self.unit().name, "unit selected");
        Move::Moved { from }
    }

    /// Switch lesson within the current unit. Unknown targets clamp to the
    /// first lesson.
    pub fn select_lesson(&mut self, query: &str) -> Move {
        let index = self.unit().find_lesson(query).unwrap_or_else(|| {
            warn!(query, "unknown lesson, using the first lesson");
            0
        });
        self.go_to_lesson(index)
    }

    /// Switch section. Sections the lesson does not offer clamp to its
    /// default. Returns the section now active.
    pub fn select_section(&mut self, section: Section) -> Section {
        let lesson = self.lesson();
        let active = if lesson.offers(section) {
            section
        } else {
            warn!(%section, lesson = %lesson.name, "section not offered, using default");
            lesson.default_section()
        };
        self.section = active;
        active
    }

    /// Move to the previous lesson. No-op on the first lesson.
    pub fn previous(&mut self) -> Move {
        match self.lesson.checked_sub(1) {
            Some(index) => self.go_to_lesson(index),
            None => Move::Stayed,
        }
    }

    /// Move to the next lesson. No-op on the last (general) entry.
    pub fn next(&mut self) -> Move {
        let index = self.lesson + 1;
        if index >= self.unit().lessons().len() {
            return Move::Stayed;
        }
        self.go_to_lesson(index)
    }

    fn go_to_lesson(&mut self, index: usize) -> Move {
        if index == self.lesson {
            return Move::Stayed;
        }
        let from = self.lesson_id();
        self.enter_lesson(index);
        debug!(lesson = %self.lesson().name, "lesson selected");
        Move::Moved { from }
    }

    fn enter_lesson(&mut self, index: usize) {
        self.lesson = index;
        self.section = self.lesson().default_section();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_config::{CurriculumConfig, UnitConfig};

    fn navigator() -> Navigator {
        let config = CurriculumConfig {
            units: vec![
                UnitConfig {
                    name: "Unit 1".into(),
                    lessons: vec!["Lesson 1".into(), "Lesson 2".into()],
                },
                UnitConfig {
                    name: "Unit 2".into(),
                    lessons: vec!["Lesson A".into()],
                },
            ],
            ..CurriculumConfig::default()
        };
        Navigator::new(Curriculum::from_config(&config).unwrap())
    }

    #[test]
    fn starts_at_first_lesson_explanation() {
        let nav = navigator();
        assert_eq!(nav.position(), (0, 0));
        assert_eq!(nav.section(), Section::Explanation);
        assert_eq!(
            nav.key(),
            ConversationKey::new("Unit 1", "Lesson 1", Section::Explanation)
        );
    }

    #[test]
    fn unit_change_resets_lesson_and_section() {
        let mut nav = navigator();
        nav.select_lesson("Lesson 2");
        nav.select_section(Section::Grammar);

        let moved = nav.select_unit("Unit 2");
        assert_eq!(
            moved,
            Move::Moved {
                from: LessonId {
                    unit: "Unit 1".into(),
                    lesson: "Lesson 2".into()
                }
            }
        );
        assert_eq!(nav.lesson().name, "Lesson A");
        assert_eq!(nav.section(), Section::Explanation);
    }

    #[test]
    fn same_unit_is_a_no_op() {
        let mut nav = navigator();
        nav.select_section(Section::Practice);
        assert_eq!(nav.select_unit("unit 1"), Move::Stayed);
        assert_eq!(nav.section(), Section::Practice);
    }

    #[test]
    fn unknown_unit_clamps_to_first() {
        let mut nav = navigator();
        nav.select_unit("2");
        assert!(nav.select_unit("Unit 99").moved());
        assert_eq!(nav.unit().name, "Unit 1");
        assert_eq!(nav.lesson().name, "Lesson 1");
    }

    #[test]
    fn unknown_lesson_clamps_to_first() {
        let mut nav = navigator();
        nav.select_lesson("2");
        let moved = nav.select_lesson("Lesson 42");
        assert!(moved.moved());
        assert_eq!(nav.lesson().name, "Lesson 1");
    }

    #[test]
    fn lesson_change_resets_section() {
        let mut nav = navigator();
        nav.select_section(Section::Practice);
        nav.select_lesson("Lesson 2");
        assert_eq!(nav.section(), Section::Explanation);
    }

    #[test]
    fn general_entry_uses_general_section() {
        let mut nav = navigator();
        nav.select_lesson("General Exercises");
        assert_eq!(nav.section(), Section::General);
        assert_eq!(nav.select_section(Section::Practice), Section::General);
    }

    #[test]
    fn unavailable_section_clamps_to_default() {
        let mut nav = navigator();
        assert_eq!(nav.select_section(Section::General), Section::Explanation);
        assert_eq!(nav.select_section(Section::Grammar), Section::Grammar);
    }

    #[test]
    fn previous_is_no_op_on_first_lesson() {
        let mut nav = navigator();
        assert_eq!(nav.previous(), Move::Stayed);
        assert_eq!(nav.position(), (0, 0));
    }

    #[test]
    fn next_walks_to_general_then_stops() {
        let mut nav = navigator();
        assert!(nav.next().moved());
        assert!(nav.next().moved());
        assert!(nav.lesson().general);
        assert_eq!(nav.next(), Move::Stayed);
        assert_eq!(nav.position(), (0, 2));

        assert!(nav.previous().moved());
        assert_eq!(nav.lesson().name, "Lesson 2");
    }

    #[test]
    fn section_change_keeps_lesson() {
        let mut nav = navigator();
        nav.select_section(Section::Practice);
        assert_eq!(nav.position(), (0, 0));
        assert_eq!(nav.key().section, Section::Practice);
    }
}
