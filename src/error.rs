// SPDX-FileCopyrightText: 2026 Sephyi <me@sephy.io>
//
// SPDX-License-Identifier: PolyForm-Noncommercial-1.0.0

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Code contains blocked patterns and cannot be submitted")]
    #[diagnostic(
        code(katapad::session::rejected),
        help("Remove the blocked constructs; the sanitized view shows what was neutralized")
    )]
    CodeRejected { categories: Vec<String> },

    #[error("You must be logged in to submit")]
    #[diagnostic(code(katapad::session::not_logged_in), help("Sign in and try again"))]
    NotLoggedIn,

    #[error("A submission is already in progress")]
    #[diagnostic(code(katapad::session::in_flight))]
    SubmissionInFlight,

    #[error("Cannot reach the problem store at {host}")]
    #[diagnostic(
        code(katapad::store::unreachable),
        help("Check your network connection and the configured api_base")
    )]
    StoreUnreachable { host: String },

    #[error("Problem '{id}' not found")]
    #[diagnostic(code(katapad::store::problem_not_found))]
    ProblemNotFound { id: String },

    #[error("Store error: {message}")]
    #[diagnostic(code(katapad::store::error))]
    Store { message: String },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(katapad::config::error))]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
