// SPDX-FileCopyrightText: 2026 Vistat Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams of the query pipeline.
//!
//! Both seams use `#[async_trait]` for dynamic dispatch: the pipeline holds
//! translators and the executor behind `Arc<dyn …>` handles acquired once at
//! startup and lent immutably to each request.

pub mod executor;
pub mod translator;

pub use executor::ScalarExecutor;
pub use translator::SqlTranslator;
