// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
// SPDX-License-Identifier: GPL-3.0-only

use async_trait::async_trait;

pub mod rest;

pub use rest::RestStore;

use crate::domain::{NewSubmission, Problem, ProblemSummary, SubmissionReceipt};
use crate::error::Result;

/// Read side of the remote document store.
#[async_trait]
pub trait ProblemStore: Send + Sync {
    async fn list_problems(&self) -> Result<Vec<ProblemSummary>>;

    async fn fetch_problem(&self, id: &str) -> Result<Problem>;
}

/// Write side of the remote document store: one append, no read-back.
/// The creation timestamp is assigned by the server.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn append_submission(&self, submission: &NewSubmission) -> Result<SubmissionReceipt>;
}
