//! Message assembly from substituted template text.
//!
//! Only the first system section, the first assistant section and the first
//! two user sections are used. Anything beyond that is ignored, and a second
//! user section without an assistant section is ignored too.

use super::message::MessageSequence;
use crate::error::{PromptError, Result};
use crate::template::extract_sections;

/// Section tag holding the system prompt.
pub const SYSTEM_TAG: &str = "SYSTEM_CONFIG";

/// Section tag holding user turns.
pub const USER_TAG: &str = "USER_CONFIG";

/// Section tag holding the example assistant reply.
pub const ASSISTANT_TAG: &str = "ASSISTANT_CONFIG";

/// Build a message sequence from substituted template text.
///
/// `template` names the source in errors.
///
/// # Returns
///
/// * `Ok(MessageSequence)` - `[system, user]`, optionally followed by
///   `assistant` and then a second `user`
/// * `Err(PromptError::MalformedTemplate)` - No system or no user section
pub fn assemble(template: &str, text: &str) -> Result<MessageSequence> {
    let system = extract_sections(text, SYSTEM_TAG)
        .into_iter()
        .next()
        .ok_or_else(|| malformed(template, SYSTEM_TAG))?;

    let mut users = extract_sections(text, USER_TAG).into_iter();
    let user = users.next().ok_or_else(|| malformed(template, USER_TAG))?;
    let follow_up = users.next();

    let example_reply = extract_sections(text, ASSISTANT_TAG).into_iter().next();

    let sequence = MessageSequence::new(system, user, example_reply, follow_up);
    tracing::debug!(
        template,
        messages = sequence.len(),
        "assembled message sequence"
    );
    Ok(sequence)
}

fn malformed(template: &str, missing: &str) -> PromptError {
    PromptError::MalformedTemplate {
        template: template.to_string(),
        missing: missing.to_string(),
    }
}
