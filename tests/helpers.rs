// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Mutex;

use async_trait::async_trait;

use katapad::domain::{Difficulty, NewSubmission, Problem, ProblemSummary, SubmissionReceipt};
use katapad::error::{Error, Result};
use katapad::services::store::{ProblemStore, SubmissionStore};

/// Create a minimal Problem for testing
#[allow(dead_code)]
pub fn make_problem(id: &str, initial_code: &str) -> Problem {
    Problem {
        id: id.to_string(),
        title: format!("Problem {id}"),
        difficulty: Difficulty::Easy,
        description: "Return the sum of two numbers.".to_string(),
        initial_code: initial_code.to_string(),
    }
}

/// In-memory document store; counts every append
#[allow(dead_code)]
pub struct MemoryStore {
    pub problems: Vec<Problem>,
    pub submissions: Mutex<Vec<NewSubmission>>,
}

#[allow(dead_code)]
impl MemoryStore {
    pub fn empty() -> Self {
        Self {
            problems: Vec::new(),
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn with_problems(problems: Vec<Problem>) -> Self {
        Self {
            problems,
            submissions: Mutex::new(Vec::new()),
        }
    }

    pub fn submission_count(&self) -> usize {
        self.submissions.lock().unwrap().len()
    }

    pub fn last_submission(&self) -> Option<NewSubmission> {
        self.submissions.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl ProblemStore for MemoryStore {
    async fn list_problems(&self) -> Result<Vec<ProblemSummary>> {
        Ok(self
            .problems
            .iter()
            .map(|p| ProblemSummary {
                id: p.id.clone(),
                title: p.title.clone(),
                difficulty: p.difficulty,
                description: p.description.clone(),
            })
            .collect())
    }

    async fn fetch_problem(&self, id: &str) -> Result<Problem> {
        self.problems
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| Error::ProblemNotFound { id: id.to_string() })
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn append_submission(&self, submission: &NewSubmission) -> Result<SubmissionReceipt> {
        let mut submissions = self.submissions.lock().unwrap();
        submissions.push(submission.clone());
        Ok(SubmissionReceipt {
            id: format!("sub-{}", submissions.len()),
            created_at: "2026-08-07T12:00:00Z".to_string(),
        })
    }
}

/// Store whose append always fails with a transport-style error
#[allow(dead_code)]
pub struct FailingStore;

#[async_trait]
impl SubmissionStore for FailingStore {
    async fn append_submission(&self, _submission: &NewSubmission) -> Result<SubmissionReceipt> {
        Err(Error::Store {
            message: "HTTP 503 Service Unavailable: try again later".to_string(),
        })
    }
}
