//! Keyword-driven assistant replies.
//!
//! A stateless chat helper: the reply depends only on the message. No conversation history is
//! stored.

use serde::{Deserialize, Serialize};

use crate::{EngineError, EngineResult};

struct ReplyRule {
    keywords: &'static [&'static str],
    response: &'static str,
}

static REPLY_RULES: &[ReplyRule] = &[
    ReplyRule {
        keywords: &["fever", "temperature"],
        response: "For fever, I recommend:\n\
            1. Rest and stay hydrated\n\
            2. Take paracetamol if temperature is above 100°F\n\
            3. Use cold compress\n\
            4. If fever persists for more than 3 days, consult a doctor immediately.",
    },
    ReplyRule {
        keywords: &["headache", "pain"],
        response: "For headache relief:\n\
            1. Get adequate rest\n\
            2. Stay hydrated\n\
            3. Avoid bright lights\n\
            4. You can take pain relievers like paracetamol\n\
            5. If pain is severe or persistent, please consult a doctor.",
    },
    ReplyRule {
        keywords: &["appointment", "doctor"],
        response: "I can help you book an appointment. Please specify:\n\
            1. Type of specialist you need\n\
            2. Preferred date and time\n\
            3. Your symptoms\n\
            \n\
            Would you like me to show available doctors?",
    },
];

const FALLBACK_REPLY: &str = "I understand you're experiencing some health concerns. \
    Could you please provide more details about your symptoms? \
    This will help me assist you better.\n\
    \n\
    I can help with:\n\
    • Symptom assessment\n\
    • Booking appointments\n\
    • Medicine information\n\
    • Health tips";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssistantReply {
    pub response: String,
}

/// Only an empty message is rejected; a whitespace-only message gets the generic prompt.
pub(crate) fn assistant_reply(message: &str) -> EngineResult<AssistantReply> {
    if message.is_empty() {
        return Err(EngineError::InvalidInput("Message is required".into()));
    }
    let lower = message.to_lowercase();

    let response = REPLY_RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|&k| lower.contains(k)))
        .map_or(FALLBACK_REPLY, |rule| rule.response);

    Ok(AssistantReply {
        response: response.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fever_message_gets_fever_guidance() {
        let reply = assistant_reply("My TEMPERATURE is high").unwrap();
        assert!(reply.response.starts_with("For fever"));
        assert!(reply.response.contains("100°F"));
    }

    #[test]
    fn fever_rule_wins_over_pain_rule() {
        let reply = assistant_reply("fever and back pain").unwrap();
        assert!(reply.response.starts_with("For fever"));
    }

    #[test]
    fn pain_message_gets_headache_guidance() {
        let reply = assistant_reply("my knee pain").unwrap();
        assert!(reply.response.starts_with("For headache relief"));
    }

    #[test]
    fn doctor_message_gets_booking_guidance() {
        let reply = assistant_reply("I need a doctor").unwrap();
        assert!(reply.response.starts_with("I can help you book an appointment"));
        assert!(reply.response.contains("\n\nWould you like"));
    }

    #[test]
    fn other_messages_get_generic_prompt() {
        let reply = assistant_reply("hello").unwrap();
        assert_eq!(reply.response, FALLBACK_REPLY);
        assert!(reply.response.contains("• Health tips"));
    }

    #[test]
    fn empty_message_is_rejected() {
        let err = assistant_reply("").expect_err("empty message should be rejected");
        assert!(matches!(err, EngineError::InvalidInput(msg) if msg == "Message is required"));
    }

    #[test]
    fn whitespace_message_gets_generic_prompt() {
        let reply = assistant_reply("   ").unwrap();
        assert_eq!(reply.response, FALLBACK_REPLY);
    }
}
