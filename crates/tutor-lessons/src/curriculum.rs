//! Course structure built from `[curriculum]` config.

use tutor_common::{Section, TutorError};
use tutor_config::CurriculumConfig;

const LESSON_SECTIONS: [Section; 3] = [Section::Explanation, Section::Practice, Section::Grammar];
const GENERAL_SECTIONS: [Section; 1] = [Section::General];

/// A lesson entry. The trailing general-exercises entry of each unit has
/// `general == true` and offers a single section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    pub name: String,
    pub general: bool,
}

impl Lesson {
    /// Sections offered by this lesson, in tab order.
    pub fn sections(&self) -> &'static [Section] {
        if self.general {
            &GENERAL_SECTIONS
        } else {
            &LESSON_SECTIONS
        }
    }

    pub fn default_section(&self) -> Section {
        self.sections()[0]
    }

    pub fn offers(&self, section: Section) -> bool {
        self.sections().contains(&section)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    pub name: String,
    lessons: Vec<Lesson>,
}

impl Unit {
    /// All lessons including the trailing general entry. Never empty.
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Resolve a lesson by 1-based number or case-insensitive name.
    pub fn find_lesson(&self, query: &str) -> Option<usize> {
        find_by_name_or_number(self.lessons.iter().map(|l| l.name.as_str()), query)
    }
}

#[derive(Debug, Clone)]
pub struct Curriculum {
    pub title: String,
    units: Vec<Unit>,
}

impl Curriculum {
    pub fn from_config(config: &CurriculumConfig) -> Result<Self, TutorError> {
        if config.units.is_empty() {
            return Err(TutorError::Navigation("curriculum has no units".into()));
        }

        let units = config
            .units
            .iter()
            .map(|unit| {
                let mut lessons: Vec<Lesson> = unit
                    .lessons
                    .iter()
                    .map(|name| Lesson {
                        name: name.trim().to_string(),
                        general: false,
                    })
                    .collect();
                lessons.push(Lesson {
                    name: config.general_label.trim().to_string(),
                    general: true,
                });
                Unit {
                    name: unit.name.trim().to_string(),
                    lessons,
                }
            })
            .collect();

        Ok(Self {
            title: config.title.clone(),
            units,
        })
    }

    /// All units. Never empty.
    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    /// Resolve a unit by 1-based number or case-insensitive name.
    pub fn find_unit(&self, query: &str) -> Option<usize> {
        find_by_name_or_number(self.units.iter().map(|u| u.name.as_str()), query)
    }
}

fn find_by_name_or_number<'a>(
    names: impl ExactSizeIterator<Item = &'a str>,
    query: &str,
) -> Option<usize> {
    let query = query.trim();
    let count = names.len();
    if let Ok(n) = query.parse::<usize>() {
        return (1..=count).contains(&n).then(|| n - 1);
    }
    names
        .enumerate()
        .find(|(_, name)| name.eq_ignore_ascii_case(query))
        .map(|(i, _)| i)
}
