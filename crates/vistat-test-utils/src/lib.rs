// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test doubles for the Vistat pipeline seams.
//!
//! `MockTranslator` and `MockExecutor` implement the core traits with
//! pre-configured responses, enabling fast, CI-runnable end-to-end tests
//! without a DeepSeek key or a PostgreSQL instance.

pub mod mock_executor;
pub mod mock_translator;

pub use mock_executor::MockExecutor;
pub use mock_translator::MockTranslator;
