//! Reply resolution
//!
//! Maps an incoming message (plus any prior exchanges) to a reply:
//! 1. Normalize the input (trim + lowercase) for matching
//! 2. Walk the rule table top to bottom; the first matching rule wins
//! 3. Fall back to echoing the original text
//!
//! Resolution is pure: no I/O, no shared state, total over all inputs.
//! The caller's history is never mutated; the result carries a new
//! sequence with the fresh exchange appended.

use serde::{Deserialize, Serialize};

/// One user-message/bot-reply pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exchange {
    #[serde(rename = "user")]
    pub user_text: String,
    #[serde(rename = "bot")]
    pub bot_text: String,
}

/// Ordered prior exchanges, supplied by the caller. Not persisted here.
pub type History = Vec<Exchange>;

/// Outcome of resolving one message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyResult {
    pub reply: String,
    pub tokens_used: usize,
    pub history: History,
}

const PROMPT_FOR_INPUT: &str = "Ты ничего не написал. Напиши что-нибудь!";
const GREETING_REPLY: &str = "Привет! Чем могу помочь?";
const STATUS_REPLY: &str = "У меня всё хорошо, спасибо! А у тебя?";

const GREETINGS: &[&str] = &["привет", "здравствуй", "добрый день", "добрый вечер", "hello"];
const STATUS_PHRASES: &[&str] = &["как дела", "how are you"];

/// A fixed-reply rule. Predicates see the trimmed, lowercased input.
struct Rule {
    name: &'static str,
    applies: fn(&str) -> bool,
    reply: &'static str,
}

/// Evaluated top to bottom; order is the precedence.
const RULES: &[Rule] = &[
    Rule {
        name: "empty",
        applies: is_blank,
        reply: PROMPT_FOR_INPUT,
    },
    Rule {
        name: "greeting",
        applies: is_greeting,
        reply: GREETING_REPLY,
    },
    Rule {
        name: "status",
        applies: asks_how_are_you,
        reply: STATUS_REPLY,
    },
];

fn is_blank(normalized: &str) -> bool {
    normalized.is_empty()
}

fn is_greeting(normalized: &str) -> bool {
    GREETINGS.iter().any(|g| normalized.contains(g))
}

fn asks_how_are_you(normalized: &str) -> bool {
    STATUS_PHRASES.iter().any(|p| normalized.contains(p))
}

/// Resolve a message against the rule table.
///
/// Matching runs on the trimmed, lowercased text; the echo fallback and
/// `tokens_used` use the original text as received.
pub fn resolve(text: &str, history: &[Exchange]) -> ReplyResult {
    let normalized = text.trim().to_lowercase();

    let reply = match RULES.iter().find(|rule| (rule.applies)(&normalized)) {
        Some(rule) => {
            tracing::debug!(rule = rule.name, "matched reply rule");
            rule.reply.to_string()
        }
        None => format!("Ты сказал: {text}"),
    };

    let mut history = history.to_vec();
    history.push(Exchange {
        user_text: text.to_string(),
        bot_text: reply.clone(),
    });

    ReplyResult {
        reply,
        tokens_used: text.split_whitespace().count(),
        history,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_prompts_for_input() {
        for input in ["", " ", "   ", "\t\n", "\u{a0}"] {
            assert_eq!(resolve(input, &[]).reply, PROMPT_FOR_INPUT, "input: {input:?}");
        }
    }

    #[test]
    fn greeting_matches_case_insensitively() {
        assert_eq!(resolve("Привет", &[]).reply, GREETING_REPLY);
        assert_eq!(resolve("ПРИВЕТ!!!", &[]).reply, GREETING_REPLY);
        assert_eq!(resolve("ну привет, бот", &[]).reply, GREETING_REPLY);
        assert_eq!(resolve("Hello there", &[]).reply, GREETING_REPLY);
    }

    #[test]
    fn status_phrase_matches() {
        assert_eq!(resolve("Как дела?", &[]).reply, STATUS_REPLY);
        assert_eq!(resolve("so, how are you doing", &[]).reply, STATUS_REPLY);
    }

    #[test]
    fn greeting_wins_over_status() {
        // both rules apply; table order decides
        assert_eq!(resolve("Привет, как дела?", &[]).reply, GREETING_REPLY);
    }

    #[test]
    fn unmatched_input_echoes_verbatim() {
        assert_eq!(resolve("banana", &[]).reply, "Ты сказал: banana");
        // original case and whitespace survive the echo
        assert_eq!(resolve("  BaNaNa  ", &[]).reply, "Ты сказал:   BaNaNa  ");
    }

    #[test]
    fn tokens_counted_on_original_text() {
        assert_eq!(resolve("hello world", &[]).tokens_used, 2);
        assert_eq!(resolve("", &[]).tokens_used, 0);
        assert_eq!(resolve("   ", &[]).tokens_used, 0);
        assert_eq!(resolve("banana", &[]).tokens_used, 1);
        assert_eq!(resolve("  раз  два   три ", &[]).tokens_used, 3);
    }

    #[test]
    fn history_grows_by_one_and_keeps_order() {
        let prior = vec![Exchange {
            user_text: "hi".into(),
            bot_text: "hello".into(),
        }];

        let result = resolve("bye", &prior);
        assert_eq!(result.history.len(), 2);
        assert_eq!(result.history[0], prior[0]);
        assert_eq!(result.history[1].user_text, "bye");
        assert_eq!(result.history[1].bot_text, result.reply);
        // caller's copy is untouched
        assert_eq!(prior.len(), 1);
    }

    #[test]
    fn exchange_serializes_with_short_field_names() {
        let exchange = Exchange {
            user_text: "hi".into(),
            bot_text: "hello".into(),
        };
        let value = serde_json::to_value(&exchange).unwrap();
        assert_eq!(value, serde_json::json!({"user": "hi", "bot": "hello"}));
    }
}
