pub mod config;
pub mod domain;
pub mod error;
pub mod services;

pub use config::Config;
pub use error::{Error, Result};
pub use services::session::ProblemSession;
