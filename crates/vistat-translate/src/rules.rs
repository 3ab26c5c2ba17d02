// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Phrase templates and the [`RuleTranslator`].
//!
//! Five templates are recognized. Each emits one fixed SQL shape; an
//! unmatched question yields `None`, which tells the orchestrator to give
//! up on translation rather than signalling an error.

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;
use tracing::debug;
use vistat_core::types::{SanitizedQuery, TranslationSource};
use vistat_core::SqlTranslator;

use crate::dates::{find_dates, parse_date};

/// Creator id token: the word right after "id". Intentionally narrow: the
/// question must spell "… креатора с id <token> …"; rephrasings fall
/// through to the generative strategy.
static CREATOR_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bid\s+([a-zа-яё0-9_-]+)").expect("creator id regex must compile")
});

/// "с <date> по <date>" window over two full date phrases.
static DATE_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"с\s+(\d{1,2}\s+[а-яё]+\s+\d{4})\s+по\s+(\d{1,2}\s+[а-яё]+\s+\d{4})")
        .expect("date range regex must compile")
});

/// Views threshold, digit groups optionally space-separated ("100 000").
static THRESHOLD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"больше\s+(\d(?:[\d\s]*\d)?)\s+просмотров").expect("threshold regex must compile")
});

/// Translates a question using the fixed template set.
///
/// Works on the sanitized text; templates match against the lowercased
/// form, while the creator id is captured from the original so its case
/// survives into the SQL literal.
pub fn translate_text(text: &str) -> Option<String> {
    let lower = text.to_lowercase();
    total_video_count(&lower)
        .or_else(|| creator_window_count(text, &lower))
        .or_else(|| views_threshold_count(&lower))
        .or_else(|| growth_sum(&lower))
        .or_else(|| distinct_growth_count(&lower))
}

/// Template 1: total video count.
fn total_video_count(lower: &str) -> Option<String> {
    if lower.contains("сколько всего видео") {
        return Some("SELECT COUNT(*) FROM videos".to_string());
    }
    None
}

/// Template 2: per-creator count over a date window.
fn creator_window_count(text: &str, lower: &str) -> Option<String> {
    if !lower.contains("видео у креатора") {
        return None;
    }
    let id = CREATOR_ID_RE.captures(text)?.get(1)?.as_str().to_string();
    let range = DATE_RANGE_RE.captures(lower)?;
    let from = parse_date(range.get(1)?.as_str())?;
    let to = parse_date(range.get(2)?.as_str())?;
    Some(format!(
        "SELECT COUNT(*) FROM videos WHERE creator_id = '{id}' \
         AND DATE(video_created_at) BETWEEN '{from}' AND '{to}'"
    ))
}

/// Template 3: videos above a views threshold.
fn views_threshold_count(lower: &str) -> Option<String> {
    if !lower.contains("набрало больше") {
        return None;
    }
    let raw = THRESHOLD_RE.captures(lower)?.get(1)?.as_str().to_string();
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    let threshold: u64 = digits.parse().ok()?;
    Some(format!(
        "SELECT COUNT(*) FROM videos WHERE views_count > {threshold}"
    ))
}

/// Template 4: total view growth on a date.
fn growth_sum(lower: &str) -> Option<String> {
    let growth_wording =
        lower.contains("выросли") || lower.contains("выросло") || lower.contains("прирост");
    if !growth_wording || !lower.contains("просмотров") {
        return None;
    }
    let date = find_dates(lower).into_iter().next()?;
    Some(format!(
        "SELECT SUM(delta_views_count) FROM video_snapshots WHERE DATE(created_at) = '{date}'"
    ))
}

/// Template 5: distinct videos with positive view growth on a date.
fn distinct_growth_count(lower: &str) -> Option<String> {
    if !lower.contains("разных видео") || !lower.contains("просмотры") {
        return None;
    }
    let date = find_dates(lower).into_iter().next()?;
    Some(format!(
        "SELECT COUNT(DISTINCT video_id) FROM video_snapshots \
         WHERE DATE(created_at) = '{date}' AND delta_views_count > 0"
    ))
}

/// The rule-based translation strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleTranslator;

impl RuleTranslator {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SqlTranslator for RuleTranslator {
    fn source(&self) -> TranslationSource {
        TranslationSource::RuleBased
    }

    async fn translate(&self, query: &SanitizedQuery) -> Option<String> {
        let sql = translate_text(query.text());
        if let Some(ref sql) = sql {
            debug!(sql, "rule template matched");
        }
        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_count_template() {
        assert_eq!(
            translate_text("Сколько всего видео есть в системе?").as_deref(),
            Some("SELECT COUNT(*) FROM videos")
        );
        assert_eq!(
            translate_text("сколько всего видео").as_deref(),
            Some("SELECT COUNT(*) FROM videos")
        );
    }

    #[test]
    fn creator_window_template() {
        let q = "Сколько видео у креатора с id abc123 вышло с 1 ноября 2025 по 5 ноября 2025?";
        assert_eq!(
            translate_text(q).as_deref(),
            Some(
                "SELECT COUNT(*) FROM videos WHERE creator_id = 'abc123' \
                 AND DATE(video_created_at) BETWEEN '2025-11-01' AND '2025-11-05'"
            )
        );
    }

    #[test]
    fn creator_id_case_survives() {
        let q = "Сколько видео у креатора с id AbC9 вышло с 1 ноября 2025 по 5 ноября 2025?";
        let sql = translate_text(q).unwrap();
        assert!(sql.contains("creator_id = 'AbC9'"), "got: {sql}");
    }

    #[test]
    fn creator_template_requires_both_dates() {
        let q = "Сколько видео у креатора с id abc123 вышло с 1 ноября 2025?";
        assert_eq!(translate_text(q), None);
        let q = "Сколько видео у креатора с id abc123 вышло с 1 мартобря 2025 по 5 ноября 2025?";
        assert_eq!(translate_text(q), None);
    }

    #[test]
    fn views_threshold_template() {
        assert_eq!(
            translate_text("Сколько видео набрало больше 100000 просмотров?").as_deref(),
            Some("SELECT COUNT(*) FROM videos WHERE views_count > 100000")
        );
    }

    #[test]
    fn views_threshold_joins_digit_groups() {
        assert_eq!(
            translate_text("Сколько видео набрало больше 100 000 просмотров за всё время?")
                .as_deref(),
            Some("SELECT COUNT(*) FROM videos WHERE views_count > 100000")
        );
    }

    #[test]
    fn growth_sum_template() {
        assert_eq!(
            translate_text("На сколько просмотров в сумме выросли все видео 28 ноября 2025?")
                .as_deref(),
            Some(
                "SELECT SUM(delta_views_count) FROM video_snapshots \
                 WHERE DATE(created_at) = '2025-11-28'"
            )
        );
    }

    #[test]
    fn distinct_growth_template() {
        assert_eq!(
            translate_text("Сколько разных видео получали новые просмотры 27 ноября 2025?")
                .as_deref(),
            Some(
                "SELECT COUNT(DISTINCT video_id) FROM video_snapshots \
                 WHERE DATE(created_at) = '2025-11-27' AND delta_views_count > 0"
            )
        );
    }

    #[test]
    fn unmatched_questions_yield_none() {
        assert_eq!(translate_text("Сколько лайков у самого популярного видео?"), None);
        assert_eq!(translate_text("Привет!"), None);
        assert_eq!(translate_text(""), None);
    }

    #[tokio::test]
    async fn trait_impl_reports_rule_based_source() {
        let t = RuleTranslator::new();
        assert_eq!(t.source(), TranslationSource::RuleBased);
        let q = SanitizedQuery::new(19, "сколько всего видео".into());
        assert_eq!(
            t.translate(&q).await.as_deref(),
            Some("SELECT COUNT(*) FROM videos")
        );
    }
}
