//! Domain model types (pure).
//!
//! Static content records, section anchors, user intents and the error
//! taxonomy. Nothing here knows about time or the terminal.

pub mod content;
pub mod error;
pub mod key_action;
pub mod section;

// Re-export for convenience
pub use content::{ContactLink, Education, Experience, PortfolioContent, Profile, Project, Skill};
pub use error::{AppError, ContactField, ContentError, SubmissionError, ValidationError};
pub use key_action::KeyAction;
pub use section::{SectionId, UnknownAnchor};
