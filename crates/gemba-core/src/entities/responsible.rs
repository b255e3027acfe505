use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The person who performed an audit.
///
/// Wire field names stay Spanish (`nombre`, `cargo`, ...) for compatibility
/// with existing clients of the audit API; only `name` and `role` are
/// mandatory. Validation rules live in [`crate::validate`].
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Responsible {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "apellido", default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,
    #[serde(rename = "documento", default, skip_serializing_if = "Option::is_none")]
    pub document: Option<String>,
    #[serde(rename = "cargo")]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Responsible {
    /// Name and surname joined, surname omitted when absent.
    #[must_use]
    pub fn full_name(&self) -> String {
        match self.surname.as_deref() {
            Some(surname) if !surname.trim().is_empty() => {
                format!("{} {surname}", self.name)
            }
            _ => self.name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::Responsible;

    fn minimal() -> Responsible {
        Responsible {
            name: String::from("Ana"),
            surname: None,
            document: None,
            role: String::from("QA"),
            area: None,
            email: None,
        }
    }

    #[test]
    fn full_name_without_surname() {
        assert_eq!(minimal().full_name(), "Ana");
    }

    #[test]
    fn full_name_with_surname() {
        let responsible = Responsible {
            surname: Some(String::from("García")),
            ..minimal()
        };
        assert_eq!(responsible.full_name(), "Ana García");
    }

    #[test]
    fn wire_names_are_spanish() {
        let json = serde_json::to_value(minimal()).unwrap();
        assert_eq!(json["nombre"], "Ana");
        assert_eq!(json["cargo"], "QA");
        assert!(json.get("apellido").is_none());
    }
}
