use crate::model::ChatMessage;

pub const DEFAULT_SYSTEM_ROLE: &str = "You are a NatBot, a helpful assistant.";

/// Prepends the system instruction to the caller's turns.
///
/// Caller messages keep their order and are not inspected, so a client that
/// sends its own system message ends up with two.
pub fn build_conversation(system_role: &str, messages: &[ChatMessage]) -> Vec<ChatMessage> {
    let mut conversation = Vec::with_capacity(messages.len() + 1);
    conversation.push(ChatMessage::system(system_role));
    conversation.extend_from_slice(messages);
    conversation
}
