// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain-keyword intent gate.

use crate::lists::ALLOWED_KEYWORDS;

/// Returns true iff at least one domain keyword appears as a substring of
/// the lowercased text.
///
/// Substring matching (not whole-word) is intentional: the gate exists to
/// reduce false rejections of legitimate domain questions, not to catch
/// malicious input; that burden sits with the deny list and the SQL gate.
pub fn is_on_topic(text: &str) -> bool {
    let lower = text.to_lowercase();
    ALLOWED_KEYWORDS.iter().any(|kw| lower.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_domain_questions() {
        assert!(is_on_topic("Сколько всего видео есть в системе?"));
        assert!(is_on_topic("СКОЛЬКО ВИДЕО НАБРАЛО БОЛЬШЕ 100000 ПРОСМОТРОВ"));
        assert!(is_on_topic("прирост лайков за неделю"));
    }

    #[test]
    fn accepts_by_substring() {
        // "видеоролик" contains the keyword "видео".
        assert!(is_on_topic("покажи видеоролик"));
    }

    #[test]
    fn rejects_unrelated_small_talk() {
        assert!(!is_on_topic("Привет, как дела?"));
        assert!(!is_on_topic("hello there"));
        assert!(!is_on_topic(""));
    }
}
