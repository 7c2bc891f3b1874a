// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use tracing::{debug, warn};

use crate::domain::{NewSubmission, Problem, SubmissionReceipt, UserId};
use crate::error::{Error, Result};
use crate::services::store::SubmissionStore;
use crate::services::{safety, sanitizer};

/// Fixed warning surfaced whenever the verdict is false.
pub const UNSAFE_WARNING: &str =
    "This code contains blocked patterns and cannot be previewed or submitted.";

/// Outcome surface of the submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitStatus {
    Idle,
    InFlight,
    Accepted { submission_id: String },
    Failed { message: String },
}

/// Per-problem editing session: the state record behind one open editor.
///
/// Every edit re-runs sanitize then classify synchronously, within the
/// event turn. The verdict gates both the preview feed and the submit
/// action, and is evaluated against the sanitized text, not the raw text:
/// a marker that still contains a blocked token keeps the preview dark.
///
/// At most one submission is outstanding at a time, enforced by the
/// in-flight flag rather than a lock; sessions share nothing mutable.
pub struct ProblemSession {
    problem_id: String,
    raw: String,
    sanitized: String,
    safe: bool,
    submitting: bool,
    status: SubmitStatus,
}

impl ProblemSession {
    /// Open a session seeded with the problem's starter code.
    pub fn new(problem: &Problem) -> Self {
        let mut session = Self {
            problem_id: problem.id.clone(),
            raw: String::new(),
            sanitized: String::new(),
            safe: true,
            submitting: false,
            status: SubmitStatus::Idle,
        };
        session.on_change(&problem.initial_code);
        session
    }

    /// Editor change event: recompute the pipeline for the new text.
    pub fn on_change(&mut self, raw: &str) {
        self.raw = raw.to_string();
        self.sanitized = sanitizer::sanitize(raw);
        let was_safe = self.safe;
        self.safe = safety::is_safe(&self.sanitized);
        if self.safe != was_safe {
            debug!(safe = self.safe, problem = %self.problem_id, "verdict changed");
        }
        // A finished submission outcome is stale once the user edits again;
        // an in-flight one is not ours to clear.
        if !self.submitting {
            self.status = SubmitStatus::Idle;
        }
    }

    pub fn raw_code(&self) -> &str {
        &self.raw
    }

    pub fn sanitized_code(&self) -> &str {
        &self.sanitized
    }

    pub fn is_safe(&self) -> bool {
        self.safe
    }

    /// Text fed to the live-preview renderer: empty whenever unsafe.
    pub fn preview_code(&self) -> &str {
        if self.safe { &self.sanitized } else { "" }
    }

    pub fn warning(&self) -> Option<&'static str> {
        if self.safe { None } else { Some(UNSAFE_WARNING) }
    }

    pub fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Whether the submit action is enabled right now.
    pub fn can_submit(&self, user: Option<&UserId>) -> bool {
        self.safe && !self.submitting && user.is_some()
    }

    /// Validate and open a submission attempt.
    ///
    /// On success the session is marked in-flight and the sanitized code
    /// is snapshotted into the record; edits made while the store call is
    /// pending do not leak into it. A second attempt cannot open until
    /// [`finish_submit`](Self::finish_submit) closes the first.
    pub fn begin_submit(&mut self, user: Option<&UserId>) -> Result<NewSubmission> {
        if self.submitting {
            return Err(Error::SubmissionInFlight);
        }
        if !self.safe {
            let categories = safety::violations(&self.sanitized);
            warn!(
                problem = %self.problem_id,
                ?categories,
                "submit attempted with unsafe code"
            );
            return Err(Error::CodeRejected {
                categories: categories.iter().map(|c| c.to_string()).collect(),
            });
        }
        let Some(user) = user else {
            return Err(Error::NotLoggedIn);
        };

        self.submitting = true;
        self.status = SubmitStatus::InFlight;
        Ok(NewSubmission {
            user_id: user.clone(),
            problem_id: self.problem_id.clone(),
            code: self.sanitized.clone(),
        })
    }

    /// Close the open submission attempt with the store's outcome.
    ///
    /// Failure surfaces as a generic status string and re-enables the
    /// submit action; retry is user-initiated, never scheduled here.
    pub fn finish_submit(&mut self, outcome: &Result<SubmissionReceipt>) {
        self.submitting = false;
        self.status = match outcome {
            Ok(receipt) => SubmitStatus::Accepted {
                submission_id: receipt.id.clone(),
            },
            Err(e) => SubmitStatus::Failed {
                message: e.to_string(),
            },
        };
    }

    /// Submit the current sanitized code to the store.
    pub async fn submit(
        &mut self,
        store: &dyn SubmissionStore,
        user: Option<&UserId>,
    ) -> Result<SubmissionReceipt> {
        let record = self.begin_submit(user)?;
        debug!(problem = %record.problem_id, user = %record.user_id, "submitting");
        let outcome = store.append_submission(&record).await;
        self.finish_submit(&outcome);
        outcome
    }
}
