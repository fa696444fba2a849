/// Every error mailmatch can produce. Matching itself never fails; these
/// are startup and output faults only.
#[derive(Debug)]
pub enum MailmatchError {
    InvalidPattern {
        pattern: String,
        reason: String,
    },
    Output {
        source: std::io::Error,
    },
}

impl std::fmt::Display for MailmatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPattern { pattern, reason } => {
                write!(f, "invalid pattern \"{pattern}\": {reason}")
            }
            Self::Output { source } => write!(f, "stdout: {source}"),
        }
    }
}

impl std::error::Error for MailmatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { .. } => None,
            Self::Output { source } => Some(source),
        }
    }
}

impl From<std::io::Error> for MailmatchError {
    fn from(source: std::io::Error) -> Self {
        Self::Output { source }
    }
}

impl MailmatchError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Output { .. } => 1,
            Self::InvalidPattern { .. } => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_pattern_display_names_pattern() {
        let err = MailmatchError::InvalidPattern {
            pattern: "[a-".into(),
            reason: "unclosed class".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("[a-"), "should contain pattern: {msg}");
        assert!(msg.contains("unclosed class"), "should contain reason: {msg}");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn io_error_converts_to_output() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err = MailmatchError::from(io);
        assert!(matches!(err, MailmatchError::Output { .. }));
        assert_eq!(err.exit_code(), 1);
        assert!(std::error::Error::source(&err).is_some());
    }
}
