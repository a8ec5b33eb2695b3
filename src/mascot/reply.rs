//! Keyword-driven mascot replies
//!
//! Rules are checked in order; the first match wins. Matching is
//! case-insensitive over the whole message.

pub fn reply_to(message: &str) -> String {
    let lower = message.to_lowercase();

    if lower.contains("python") {
        return "Python is a great place to start! Try the flashcards deck, \
                or open a challenge in the practice area."
            .to_string();
    }
    if lower.contains("sql") || lower.contains("database") {
        return "Databases love practice. Fire up the SQL console and try a \
                SELECT statement."
            .to_string();
    }
    if lower.contains("error") || lower.contains("bug") {
        return "Bugs happen to everyone. Read the message from the bottom up \
                and check the last thing you changed."
            .to_string();
    }
    if lower.contains("game") {
        return "Learning works best when it feels like play. The quiz mode \
                gives you XP for every correct answer!"
            .to_string();
    }
    if lower.contains("help") {
        return "I can point you at flashcards, quizzes, the SQL console, or \
                your task board. What are you studying today?"
            .to_string();
    }
    if lower.contains("oi") || lower.contains("hello") || lower.contains("hi") || lower.contains("hey") {
        return "Hey there! Ready for a study session?".to_string();
    }

    "Interesting! Tell me more, or ask me about Python, SQL, or your tasks."
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_python_rule() {
        assert!(reply_to("how do I learn Python?").contains("Python"));
    }

    #[test]
    fn test_sql_rule() {
        assert!(reply_to("what about DATABASES").contains("SQL console"));
    }

    #[test]
    fn test_rule_order_python_beats_help() {
        // "python" appears before "help" in the rule list
        let reply = reply_to("help me with python");
        assert!(reply.contains("flashcards deck"));
    }

    #[test]
    fn test_greeting() {
        assert!(reply_to("hello!").contains("Hey there"));
    }

    #[test]
    fn test_fallback() {
        assert!(reply_to("quantum chromodynamics").contains("Tell me more"));
    }
}
