use std::fmt;

/// Codes for every diagnostic the checker can emit.
///
/// Format: `W####` for warnings. The first digit groups related checks:
/// - W3xxx: pattern-match checks
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum ErrorCode {
    // Pattern Warnings (W3xxx)
    /// Type switch does not handle every implementor of its interface
    W3001,
}

impl ErrorCode {
    /// Get the code as a string (e.g., "W3001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::W3001 => "W3001",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::W3001.to_string(), "W3001");
        assert_eq!(format!("[{}]", ErrorCode::W3001), "[W3001]");
    }
}
