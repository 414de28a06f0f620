//! Recipe lifecycle state machines
//!
//! Pure decision logic - NO IO. The action handlers consult these modules to
//! decide what to ask the user and which single command to issue.

pub mod enhancement;
pub mod moderation;

pub use enhancement::{EnhanceRoute, EnhancementStatus, ReviewAction};
pub use moderation::{ModerationIntent, ModerationStatus, ModerationTransition};
