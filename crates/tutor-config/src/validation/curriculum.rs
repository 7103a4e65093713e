//! Curriculum validation: unit and lesson naming.

use std::collections::HashSet;

use crate::schema::TutorConfig;

use super::helpers::validate_non_empty;

pub(crate) fn validate_curriculum(errors: &mut Vec<String>, config: &TutorConfig) {
    let curriculum = &config.curriculum;
    validate_non_empty(errors, "curriculum.general_label", &curriculum.general_label);

    if curriculum.units.is_empty() {
        errors.push("curriculum.units must contain at least one unit".into());
        return;
    }

    let mut unit_names = HashSet::new();
    for (i, unit) in curriculum.units.iter().enumerate() {
        validate_non_empty(errors, &format!("curriculum.units[{i}].name"), &unit.name);
        if !unit_names.insert(unit.name.trim()) {
            errors.push(format!("duplicate unit name {:?}", unit.name));
        }

        let mut lesson_names = HashSet::new();
        for (j, lesson) in unit.lessons.iter().enumerate() {
            validate_non_empty(
                errors,
                &format!("curriculum.units[{i}].lessons[{j}]"),
                lesson,
            );
            if lesson.trim() == curriculum.general_label.trim() {
                errors.push(format!(
                    "lesson {lesson:?} in unit {:?} collides with the general exercises label",
                    unit.name
                ));
            }
            if !lesson_names.insert(lesson.trim()) {
                errors.push(format!(
                    "duplicate lesson {lesson:?} in unit {:?}",
                    unit.name
                ));
            }
        }
    }
}
