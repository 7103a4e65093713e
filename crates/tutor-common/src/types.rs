use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A tab within a lesson. Each section owns its own conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Explanation,
    Practice,
    Grammar,
    General,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Explanation,
        Section::Practice,
        Section::Grammar,
        Section::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Explanation => "explanation",
            Section::Practice => "practice",
            Section::Grammar => "grammar",
            Section::General => "general",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "explanation" | "explain" => Ok(Section::Explanation),
            "practice" | "dialogue" | "exercises" => Ok(Section::Practice),
            "grammar" => Ok(Section::Grammar),
            "general" => Ok(Section::General),
            other => Err(format!("unknown section: {other}")),
        }
    }
}

/// Identifies one conversation: `(unit, lesson, section)`.
///
/// All writers and readers of the session registry build keys through
/// [`ConversationKey::new`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversationKey {
    pub unit: String,
    pub lesson: String,
    pub section: Section,
}

impl ConversationKey {
    pub fn new(unit: impl Into<String>, lesson: impl Into<String>, section: Section) -> Self {
        Self {
            unit: unit.into(),
            lesson: lesson.into(),
            section,
        }
    }

    /// Returns `true` if this key belongs to the given `(unit, lesson)` pair.
    pub fn is_lesson(&self, unit: &str, lesson: &str) -> bool {
        self.unit == unit && self.lesson == lesson
    }
}

impl fmt::Display for ConversationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.unit, self.lesson, self.section)
    }
}
