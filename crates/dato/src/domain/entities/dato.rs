//! Dato - the persisted record
//!
//! Pure domain entity without infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Dato - an identifier plus an opaque information payload
///
/// `id` is `None` only until the repository has saved the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dato {
    pub id: Option<String>,
    pub information: String,
}

impl Dato {
    /// Create an unsaved Dato; storage assigns the id
    pub fn new(information: impl Into<String>) -> Self {
        Self {
            id: None,
            information: information.into(),
        }
    }

    /// Create a Dato with a known id
    pub fn with_id(id: impl Into<String>, information: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            information: information.into(),
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_dato_has_no_id() {
        let dato = Dato::new("hello");
        assert_eq!(dato.id, None);
        assert_eq!(dato.information, "hello");
        assert!(!dato.is_persisted());
    }

    #[test]
    fn test_with_id() {
        let dato = Dato::with_id("abc", "hello");
        assert_eq!(dato.id.as_deref(), Some("abc"));
        assert!(dato.is_persisted());
    }
}
