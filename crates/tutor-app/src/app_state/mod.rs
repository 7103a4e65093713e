//! Learner-facing application state.
//!
//! [`TutorApp`] ties the current lesson selection to the learner's
//! conversations. Lesson changes discard the conversations of the lesson
//! left behind; section changes keep them.

mod conversation;
mod core;
mod navigation;


pub use self::core::TutorApp;
