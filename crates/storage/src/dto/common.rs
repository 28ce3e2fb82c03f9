use serde::{Deserialize, Deserializer};
use validator::ValidationError;

/// Lets update payloads tell "field absent" (`None`) apart from an explicit
/// `null` (`Some(None)`), so nullable columns can be cleared.
///
/// Use together with `#[serde(default)]`.
pub fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Strips surrounding whitespace from a text field as it is read.
pub fn deserialize_trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|value| value.trim().to_string())
}

/// Optional variant of [`deserialize_trimmed`]. Use together with `#[serde(default)]`.
pub fn deserialize_trimmed_option<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
        .map(|value| value.map(|value| value.trim().to_string()))
}

/// Rejects values made only of whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some("Value must not be blank.".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;
    use uuid::Uuid;

    use super::*;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "deserialize_some")]
        team_id: Option<Option<Uuid>>,
    }

    #[test]
    fn absent_field_means_unchanged() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.team_id, None);
    }

    #[test]
    fn explicit_null_means_clear() {
        let patch: Patch = serde_json::from_str(r#"{"team_id": null}"#).unwrap();
        assert_eq!(patch.team_id, Some(None));
    }

    #[test]
    fn value_means_set() {
        let id = Uuid::new_v4();
        let patch: Patch = serde_json::from_str(&format!(r#"{{"team_id": "{id}"}}"#)).unwrap();
        assert_eq!(patch.team_id, Some(Some(id)));
    }

    #[derive(Deserialize)]
    struct Named {
        #[serde(deserialize_with = "deserialize_trimmed")]
        name: String,
        #[serde(default, deserialize_with = "deserialize_trimmed_option")]
        nickname: Option<String>,
    }

    #[test]
    fn text_fields_are_trimmed_on_read() {
        let named: Named =
            serde_json::from_str(r#"{"name": "  Red  ", "nickname": " R "}"#).unwrap();
        assert_eq!(named.name, "Red");
        assert_eq!(named.nickname.as_deref(), Some("R"));

        let named: Named = serde_json::from_str(r#"{"name": "Red"}"#).unwrap();
        assert_eq!(named.nickname, None);
    }

    #[test]
    fn whitespace_only_is_blank() {
        assert!(not_blank("   ").is_err());
        assert!(not_blank("").is_err());
        assert!(not_blank(" Red ").is_ok());
    }
}
