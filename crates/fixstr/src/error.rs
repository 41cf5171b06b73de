//! Error types for fixed-capacity strings.

use thiserror::Error;

/// Status of a failed string operation.
///
/// Successful operations return `Ok(..)`; these are the only two ways an
/// operation can fall short. Both are local and recoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FixedStringError {
    /// The requested content does not fit.
    ///
    /// `set` has already stored the truncated prefix when it returns this;
    /// `append` has left the string untouched.
    #[error("capacity exceeded: requested {requested} bytes, capacity is {capacity}")]
    BadAlloc { requested: usize, capacity: usize },

    /// A removal was requested on a string with no content.
    #[error("string is empty")]
    Empty,
}

impl FixedStringError {
    /// Check if this is a capacity overflow.
    pub fn is_bad_alloc(&self) -> bool {
        matches!(self, FixedStringError::BadAlloc { .. })
    }

    /// Check if this is an empty-string removal.
    pub fn is_empty(&self) -> bool {
        matches!(self, FixedStringError::Empty)
    }
}

/// Result type for string operations.
pub type Result<T> = std::result::Result<T, FixedStringError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bad_alloc_display() {
        let err = FixedStringError::BadAlloc {
            requested: 3,
            capacity: 2,
        };
        assert_eq!(
            err.to_string(),
            "capacity exceeded: requested 3 bytes, capacity is 2"
        );
        assert!(err.is_bad_alloc());
        assert!(!err.is_empty());
    }

    #[test]
    fn test_empty_display() {
        let err = FixedStringError::Empty;
        assert_eq!(err.to_string(), "string is empty");
        assert!(err.is_empty());
    }
}
