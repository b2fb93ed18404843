//! Password rule checking service
//!
//! This library checks a candidate password against a fixed, ordered set of
//! rules and reports every rule it fails. With the `server` feature it also
//! exposes the HTTP service built on top of the evaluator.
//!
//! # Rules
//!
//! 1. At least 8 characters (UTF-16 code units)
//! 2. At least one uppercase letter `A-Z`
//! 3. At least one digit `0-9`
//! 4. At least one of `!@#$%^&*`
//!
//! # Features
//!
//! - `server` (default): axum HTTP server, env configuration and logging setup
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use senha_validator::evaluate;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Abcdefg1!".into());
//! let verdict = evaluate(&password);
//! assert!(verdict.is_valid());
//!
//! let verdict = senha_validator::evaluate_str("ABCDEFGH");
//! assert_eq!(verdict.errors.len(), 2);
//! ```

// Internal modules
mod evaluator;
mod verdict;

pub mod error;
pub mod rules;

#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod server;

// Public API
pub use error::RequestError;
pub use evaluator::{evaluate, evaluate_str};
pub use rules::{Rule, RULES};
pub use verdict::Verdict;

#[cfg(feature = "server")]
pub use config::Config;
#[cfg(feature = "server")]
pub use error::ServerError;
