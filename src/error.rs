use thiserror::Error;

/// Unified error type for schema-constrained completions.
///
/// Transport failures carry the HTTP client's native error unmodified, so
/// callers can still inspect status codes and connection details. A response
/// that arrived but held no content is a distinct [`Error::GenerationFailed`].
#[derive(Debug, Error)]
pub enum Error {
    /// Network or HTTP-level failure from the underlying client: connection
    /// errors, non-2xx statuses, malformed response bodies.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered, but the first choice carried no content.
    #[error("Failed to generate a response.")]
    GenerationFailed,
}

impl Error {
    /// True when the backend responded but produced no usable content.
    ///
    /// Lets callers branch on failure cause without matching the enum.
    pub fn is_generation_failure(&self) -> bool {
        matches!(self, Error::GenerationFailed)
    }

    /// HTTP status of the failed request, when the transport reported one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            Error::GenerationFailed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_failure_has_fixed_message() {
        assert_eq!(
            Error::GenerationFailed.to_string(),
            "Failed to generate a response."
        );
    }

    #[test]
    fn generation_failure_carries_no_status() {
        assert!(Error::GenerationFailed.is_generation_failure());
        assert_eq!(Error::GenerationFailed.status(), None);
    }
}
