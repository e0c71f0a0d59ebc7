mod metadata;

pub use metadata::{N8rErrorCode, N8rErrorMetadata, N8rErrorSuggestion};

pub type N8rResult<T> = std::result::Result<T, N8rError>;

use calm_io::stderr;
use n8r_std::Style;

use std::borrow::BorrowMut;
use std::fmt::{self, Display};
use std::io;

/// A specialized `Error` type for n8r that wraps `anyhow`
/// and provides some extra `Metadata` for end users depending
/// on the specific error they encountered.
#[derive(Debug)]
pub struct N8rError {
    error: anyhow::Error,
    metadata: N8rErrorMetadata,
}

impl N8rError {
    pub fn new<E>(error: E) -> Self
    where
        E: Into<anyhow::Error>,
    {
        let mut error = error.into();
        let metadata = N8rErrorMetadata::from(error.borrow_mut());

        Self { error, metadata }
    }

    pub fn suggestion(&self) -> Option<N8rErrorSuggestion> {
        self.metadata.suggestion.clone()
    }

    pub fn message(&self) -> String {
        self.error.to_string()
    }

    pub fn code(&self) -> Option<N8rErrorCode> {
        self.metadata.code.clone()
    }

    pub fn print(&self) -> io::Result<()> {
        stderr!("{}", self)?;
        Ok(())
    }
}

impl Display for N8rError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let error_descriptor_message = if let Some(code) = &self.metadata.code {
            format!("error[{}]:", code)
        } else {
            "error:".to_string()
        };
        let error_descriptor = Style::ErrorPrefix.paint(&error_descriptor_message);

        if self.metadata.skip_printing_cause {
            writeln!(formatter, "{} {}", error_descriptor, &self.error)?;
        } else {
            writeln!(formatter, "{} {:?}", error_descriptor, &self.error)?;
        }

        if let Some(suggestion) = &self.metadata.suggestion {
            writeln!(formatter, "        {}", suggestion)?;
        }
        Ok(())
    }
}

impl<E: Into<anyhow::Error>> From<E> for N8rError {
    fn from(error: E) -> Self {
        Self::new(error)
    }
}
