use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identifier of a model entity (building, zone, space, surface, sub-surface).
///
/// Adjacency between surfaces is expressed by UID, never by name, because
/// names are optional from the airflow builder's point of view.
#[derive(Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Clone, Serialize, Deserialize)]
pub struct UID(String);

impl From<&str> for UID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for UID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Default for UID {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl UID {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Order-independent key for an unordered pair of UIDs.
    pub fn pair_key(a: &UID, b: &UID) -> (UID, UID) {
        if a <= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uids_are_unique() {
        assert_ne!(UID::new(), UID::new());
    }

    #[test]
    fn test_pair_key_is_order_independent() {
        let a = UID::from("a");
        let b = UID::from("b");
        assert_eq!(UID::pair_key(&a, &b), UID::pair_key(&b, &a));
        assert_eq!(UID::pair_key(&b, &a).0.as_str(), "a");
    }
}
