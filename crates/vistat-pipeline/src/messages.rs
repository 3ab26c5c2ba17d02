// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Fixed user-facing reply texts.
//!
//! One fixed string per failure kind; none of them ever carries SQL,
//! backend error bodies, or stack detail.

use vistat_core::types::QueryFailure;

/// The question exceeded the length limit.
pub const TOO_LONG: &str = "Вопрос слишком длинный. Сформулируйте короче.";

/// The question is off topic or contains deny-listed words.
pub const OFF_TOPIC: &str =
    "Я отвечаю только на вопросы о статистике видео. Попробуйте переформулировать вопрос.";

/// Translation or SQL vetting failed.
pub const CANNOT_ANSWER: &str = "Не удалось обработать запрос. Попробуйте другой вопрос.";

/// Execution against the database failed.
pub const EXECUTION_ERROR: &str = "Произошла ошибка. Попробуйте позже.";

/// The fixed reply text for a failure kind.
pub fn for_failure(failure: &QueryFailure) -> &'static str {
    match failure {
        QueryFailure::TooLong => TOO_LONG,
        QueryFailure::ForbiddenContent | QueryFailure::UnrecognizedIntent => OFF_TOPIC,
        QueryFailure::TranslationFailed | QueryFailure::UnsafeSql(_) => CANNOT_ANSWER,
        QueryFailure::ExecutionError => EXECUTION_ERROR,
    }
}
