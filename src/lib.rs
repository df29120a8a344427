//! A console study guide on database concepts.
//!
//! # Intention
//!
//! - Hold the guide's lessons, quizzes, exercises and projects as fixed data.
//! - Print that data in one deterministic layout.
//! - Back the two small SQLite example programs.
//!
//! # Architectural Boundaries
//!
//! - Content is literal and never mutated.
//! - SQLite code lives in [`sqlite`]; nothing else touches a database.

pub mod config;
pub mod content;
pub mod error;
pub mod printer;
pub mod sqlite;

pub use config::ExampleConfig;
pub use error::{Result, TutorError};
