//! Dato transport models

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use dato::Dato;

/// Dato transport object
///
/// Mirrors the stored Dato so the wire format stays independent of the entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatoDto {
    #[serde(default)]
    pub id: Option<String>,
    pub information: String,
}

impl DatoDto {
    pub fn new(id: Option<String>, information: impl Into<String>) -> Self {
        Self {
            id,
            information: information.into(),
        }
    }
}

impl From<Dato> for DatoDto {
    fn from(dato: Dato) -> Self {
        Self::new(dato.id, dato.information)
    }
}

/// Create Dato response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateDatoResponse {
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_optional_on_input() {
        let dto: DatoDto = serde_json::from_str(r#"{"information":"hello"}"#).unwrap();
        assert_eq!(dto, DatoDto::new(None, "hello"));
    }

    #[test]
    fn test_serializes_both_fields() {
        let dto = DatoDto::new(Some("abc".to_string()), "hello");
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json, serde_json::json!({"id": "abc", "information": "hello"}));
    }

    #[test]
    fn test_missing_information_is_rejected() {
        let result = serde_json::from_str::<DatoDto>(r#"{"id":"abc"}"#);
        assert!(result.is_err());
    }
}
