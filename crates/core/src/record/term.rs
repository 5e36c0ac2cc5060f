use std::fmt;

use thiserror::Error;

/// The user gave no search text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("You must enter at least one character to search!")]
pub struct EmptySearchTerm;

/// A trimmed, non-empty search string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Trim `input` and reject it if nothing is left.
    pub fn parse(input: &str) -> Result<Self, EmptySearchTerm> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(EmptySearchTerm);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let term = SearchTerm::parse("  The Matrix \n").unwrap();
        assert_eq!(term.as_str(), "The Matrix");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert_eq!(SearchTerm::parse(""), Err(EmptySearchTerm));
        assert_eq!(SearchTerm::parse("   \t\n"), Err(EmptySearchTerm));
    }
}
