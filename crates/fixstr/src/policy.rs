//! Overflow policy for constructing strings from oversized input.

use serde::{Deserialize, Serialize};

/// What to do when construction input is longer than the capacity.
///
/// `From` conversions always truncate; this is for callers that want to
/// choose at runtime, e.g. from their own configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowPolicy {
    /// Keep the first `N` bytes and drop the rest.
    #[default]
    Truncate,
    /// Fail with `BadAlloc` and build nothing.
    Reject,
}

impl OverflowPolicy {
    /// Check if oversized input is truncated.
    pub fn truncates(&self) -> bool {
        matches!(self, OverflowPolicy::Truncate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_truncates() {
        assert_eq!(OverflowPolicy::default(), OverflowPolicy::Truncate);
        assert!(OverflowPolicy::default().truncates());
        assert!(!OverflowPolicy::Reject.truncates());
    }

    #[test]
    fn test_policy_serde_names() {
        let json = serde_json::to_string(&OverflowPolicy::Reject).unwrap();
        assert_eq!(json, "\"reject\"");

        let policy: OverflowPolicy = serde_json::from_str("\"truncate\"").unwrap();
        assert_eq!(policy, OverflowPolicy::Truncate);
    }
}
