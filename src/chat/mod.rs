//! Chat messages and message assembly.
//!
//! - **Message**: role-tagged chat messages and the validated sequence type
//! - **Assemble**: turns substituted template text into a `MessageSequence`

mod assemble;
mod message;

pub use assemble::{ASSISTANT_TAG, SYSTEM_TAG, USER_TAG, assemble};
pub use message::{ChatMessage, MessageSequence, Role};
