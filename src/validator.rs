use std::sync::LazyLock;

use regex::Regex;

use crate::error::MailmatchError;

/// Loose address shape: `local@label.tld`, word-bounded, unanchored.
///
/// ASCII mode keeps both the case folding and `\b` to ASCII word characters.
/// The domain label admits no `-` and no sub-domains, and the top-level
/// segment is 2 or 3 letters, so `.info` and `my-domain.tv` do not match.
pub const PATTERN: &str = r"(?i-u)\b[a-z0-9#$_-]+@[a-z0-9]+\.[a-z]{2,3}\b";

static EMAIL_RE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(PATTERN));

/// Holds the compiled pattern. Cheap to clone; all clones share one program.
#[derive(Debug, Clone)]
pub struct Validator {
    re: Regex,
}

impl Validator {
    /// Borrow the process-wide compiled pattern.
    pub fn new() -> Result<Self, MailmatchError> {
        match &*EMAIL_RE {
            Ok(re) => Ok(Self { re: re.clone() }),
            Err(e) => Err(invalid(PATTERN, e)),
        }
    }

    /// True if any word-bounded run of `candidate` has the address shape.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        self.re.is_match(candidate)
    }

    /// The leftmost run that satisfied the pattern, if any.
    #[must_use]
    pub fn find<'a>(&self, candidate: &'a str) -> Option<&'a str> {
        self.re.find(candidate).map(|m| m.as_str())
    }

    /// Source text of the compiled pattern.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.re.as_str()
    }
}

fn invalid(pattern: &str, e: &regex::Error) -> MailmatchError {
    MailmatchError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    }
}
