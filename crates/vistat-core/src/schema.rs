// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static description of the video-statistics schema.
//!
//! The two tables live in PostgreSQL and are owned by the ingestion side of
//! the system, not by this bot. The descriptor text is embedded verbatim
//! into the generative prompt; the rule-based translator assumes the same
//! tables and columns. Neither is mutated at runtime.

/// Human-readable schema text for the generative prompt.
///
/// Timestamp columns are `TIMESTAMP WITH TIME ZONE`; date filters operate on
/// the date portion via `DATE(column)`.
pub const DESCRIPTOR: &str = "\
Таблица videos: id, creator_id, video_created_at, views_count, likes_count, comments_count, reports_count
Таблица video_snapshots: id, video_id, views_count, likes_count, comments_count, reports_count, delta_views_count, delta_likes_count, delta_comments_count, delta_reports_count, created_at
";

/// Fixed few-shot block for the generative prompt.
pub const FEW_SHOT: &str = "\
Вопрос: Сколько всего видео?
SQL: SELECT COUNT(*) FROM videos;

Вопрос: Сколько видео у креатора с id abc123 вышло с 1 ноября 2025 по 5 ноября 2025?
SQL: SELECT COUNT(*) FROM videos WHERE creator_id = 'abc123' AND DATE(video_created_at) BETWEEN '2025-11-01' AND '2025-11-05';

Вопрос: На сколько просмотров в сумме выросли все видео 28 ноября 2025?
SQL: SELECT SUM(delta_views_count) FROM video_snapshots WHERE DATE(created_at) = '2025-11-28';

Вопрос: Сколько видео набрало больше 100000 просмотров?
SQL: SELECT COUNT(*) FROM videos WHERE views_count > 100000;

Вопрос: Сколько разных видео получали новые просмотры 27 ноября 2025?
SQL: SELECT COUNT(DISTINCT video_id) FROM video_snapshots WHERE DATE(created_at) = '2025-11-27' AND delta_views_count > 0;
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptor_names_both_tables() {
        assert!(DESCRIPTOR.contains("videos"));
        assert!(DESCRIPTOR.contains("video_snapshots"));
        assert!(DESCRIPTOR.contains("delta_views_count"));
    }

    #[test]
    fn few_shot_examples_are_select_only() {
        for line in FEW_SHOT.lines().filter(|l| l.starts_with("SQL:")) {
            let sql = line.trim_start_matches("SQL:").trim();
            assert!(sql.to_uppercase().starts_with("SELECT"), "bad example: {sql}");
        }
    }
}
