//! Conversation session management.
//!
//! A [`Conversation`] is the ordered message log of one
//! `(unit, lesson, section)`, always opened by exactly one system message.
//! The [`SessionRegistry`] owns every conversation of one learner and
//! mediates each model round-trip; the [`SessionStore`] keeps one registry
//! per learner.

mod conversation;
mod registry;
mod store;


pub use conversation::Conversation;
pub use registry::{contains_end_marker, SessionRegistry, TurnReply, TurnSettings};
pub use store::SessionStore;
