pub mod errors;
pub mod id;
pub mod notifications;
pub mod types;

pub use errors::{ConfigError, TutorError};
pub use id::SessionId;
pub use notifications::{Notice, NoticeLevel, NoticeQueue};
pub use types::{ConversationKey, Section};

pub type Result<T> = std::result::Result<T, TutorError>;
