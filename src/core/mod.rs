//! Core error types and the library-wide result alias.

pub mod error;

pub use error::{PdeError, PdeResult};
