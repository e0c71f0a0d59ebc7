pub mod cli;
pub mod command;
mod error;
pub mod utils;

pub use command::N8rOutput;
pub use error::{N8rError, N8rErrorCode, N8rErrorSuggestion, N8rResult};

pub use anyhow::anyhow;

pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
