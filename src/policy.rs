//! Retry budget configuration

use serde::{Deserialize, Serialize};

/// Retry budget for a [`Retrier`](crate::Retrier).
///
/// `attempts` counts *additional* invocations permitted after an initial
/// failure; the first invocation is always free. `attempts = 0` means the
/// operation runs once and is never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Maximum number of additional attempts after the first failure
    pub attempts: u32,
}

impl RetryPolicy {
    /// Create a policy permitting `attempts` additional invocations
    pub fn new(attempts: u32) -> Self {
        Self { attempts }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self { attempts: 3 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_policy() {
        assert_eq!(RetryPolicy::default().attempts, 3);
    }

    #[test]
    fn test_policy_deserializes_from_config() {
        let policy: RetryPolicy = serde_json::from_str(r#"{"attempts": 5}"#).unwrap();
        assert_eq!(policy, RetryPolicy::new(5));
    }
}
