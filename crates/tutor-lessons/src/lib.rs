//! Lesson content for the tutor.
//!
//! - [`Curriculum`]: units and their ordered lessons, each unit closed by a
//!   synthetic general-exercises entry.
//! - [`Navigator`]: the learner's current `(unit, lesson, section)` and the
//!   navigation actions that move it.
//! - [`PromptSource`]: where system prompt text comes from (local files or a
//!   remote document store).

pub mod curriculum;
pub mod navigator;
pub mod prompts;

pub use curriculum::{Curriculum, Lesson, Unit};
pub use navigator::{LessonId, Move, Navigator};
pub use prompts::{
    compose_system_prompt, prompt_path, slug, LocalPromptSource, PromptKind, PromptSource,
    RemotePromptSource, ResolvingPromptSource,
};
