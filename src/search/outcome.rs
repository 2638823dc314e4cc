use super::SearchError;

const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// State of one asynchronous fetch as seen by its consumer.
///
/// A fetch always reports `Loading` first and then exactly one terminal
/// value, either `Success` or `Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Loading,
    Success(T),
    /// `code` is the HTTP status, or `0` for local and transport failures
    Error { message: String, code: u16 },
}

impl<T> Outcome<T> {
    /// Build an error outcome, substituting a generic message for a blank one
    pub fn error(message: impl Into<String>, code: u16) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            UNKNOWN_ERROR.to_string()
        } else {
            message
        };

        Self::Error { message, code }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Loading => Outcome::Loading,
            Self::Success(data) => Outcome::Success(f(data)),
            Self::Error { message, code } => Outcome::Error { message, code },
        }
    }
}

impl<T> From<crate::search::Result<T>> for Outcome<T> {
    fn from(result: crate::search::Result<T>) -> Self {
        match result {
            Ok(data) => Self::Success(data),
            Err(e) => Self::from(&e),
        }
    }
}

impl<T> From<&SearchError> for Outcome<T> {
    fn from(error: &SearchError) -> Self {
        let message = match error {
            SearchError::Api { message, .. } if !message.trim().is_empty() => message.clone(),
            SearchError::Api { .. } => UNKNOWN_ERROR.to_string(),
            other => other.to_string(),
        };

        Self::error(message, error.status_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_message_is_replaced() {
        let outcome: Outcome<()> = Outcome::error("   ", 0);
        assert_eq!(
            outcome,
            Outcome::Error {
                message: UNKNOWN_ERROR.to_string(),
                code: 0
            }
        );
    }

    #[test]
    fn api_error_keeps_status() {
        let err = SearchError::Api {
            status: 404,
            message: "The resource you requested could not be found.".to_string(),
        };
        let outcome: Outcome<()> = Outcome::from(&err);

        match outcome {
            Outcome::Error { message, code } => {
                assert_eq!(code, 404);
                assert!(message.contains("could not be found"));
            }
            other => panic!("expected error, got {other:?}"),
        }
    }

    #[test]
    fn local_failures_use_code_zero() {
        let outcome: Outcome<()> = Outcome::from(&SearchError::EmptyBody);
        assert!(matches!(outcome, Outcome::Error { code: 0, .. }));

        let outcome: Outcome<()> = Outcome::from(&SearchError::Parse("bad json".into()));
        assert!(matches!(outcome, Outcome::Error { code: 0, ref message } if message.contains("bad json")));
    }

    #[test]
    fn map_preserves_variant() {
        assert_eq!(Outcome::Success(2).map(|n| n * 2), Outcome::Success(4));
        assert_eq!(Outcome::<i32>::Loading.map(|n| n * 2), Outcome::Loading);
        assert!(!Outcome::<i32>::Loading.is_terminal());
        assert!(Outcome::Success(1).is_terminal());
    }
}
