//! Course structure: units and their ordered lessons.

use serde::{Deserialize, Serialize};

/// One unit and its lessons in teaching order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitConfig {
    pub name: String,
    #[serde(default)]
    pub lessons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CurriculumConfig {
    pub title: String,
    /// Label of the trailing general-exercises entry appended to every unit.
    pub general_label: String,
    pub units: Vec<UnitConfig>,
}

impl Default for CurriculumConfig {
    fn default() -> Self {
        Self {
            title: "Egyptian Dialect AI Tutor".into(),
            general_label: "General Exercises".into(),
            units: vec![UnitConfig {
                name: "Unit 1".into(),
                lessons: vec!["Lesson 1".into()],
            }],
        }
    }
}
