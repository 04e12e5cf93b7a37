use std::error::Error as StdError;
use std::fmt;

/// Error for every stage of a run: fetch, page parse, roster read, report write.
#[derive(Debug)]
pub struct FinalsError {
    pub message: String,
    source: Option<Box<dyn StdError + 'static>>,
}

impl FinalsError {
    pub fn new(message: &str) -> Self {
        FinalsError {
            message: message.to_string(),
            source: None,
        }
    }

    /// Wraps a library error under a message naming what was being attempted.
    pub fn context<E: StdError + 'static>(message: String, err: E) -> Self {
        FinalsError {
            message: format!("{}: {}", message, err),
            source: Some(Box::new(err)),
        }
    }

    pub fn source_error(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_deref()
    }
}

impl fmt::Display for FinalsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FinalsError: {}", self.message)
    }
}

// Any library error converts, so `?` works across reqwest, csv, io and url.
impl<E: StdError + 'static> From<E> for FinalsError {
    fn from(err: E) -> Self {
        FinalsError {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn domain_errors_have_no_source() {
        let err = FinalsError::new("no finals tables found");
        assert_eq!(err.to_string(), "FinalsError: no finals tables found");
        assert!(err.source_error().is_none());
    }

    #[test]
    fn library_errors_keep_their_source() {
        let err: FinalsError = io::Error::new(io::ErrorKind::NotFound, "class_schedule.csv").into();
        assert_eq!(err.message, "class_schedule.csv");
        assert!(err.source_error().is_some());
    }

    #[test]
    fn context_prefixes_message_and_keeps_source() {
        let io = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = FinalsError::context("cannot create finals_schedule.csv".to_string(), io);
        assert_eq!(err.message, "cannot create finals_schedule.csv: denied");
        let source = err.source_error().and_then(|e| e.downcast_ref::<io::Error>());
        assert_eq!(source.map(|e| e.kind()), Some(io::ErrorKind::PermissionDenied));
    }
}
