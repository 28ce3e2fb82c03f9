use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::common::{deserialize_trimmed, deserialize_trimmed_option, not_blank};

/// Request payload for creating a team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateTeamRequest {
    #[serde(deserialize_with = "deserialize_trimmed")]
    #[validate(length(
        min = 2,
        max = 255,
        message = "Team name must be at least 2 characters."
    ))]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
}

/// Request payload for renaming a team
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateTeamRequest {
    #[serde(default, deserialize_with = "deserialize_trimmed_option")]
    #[validate(length(min = 2, max = 255))]
    #[validate(custom(function = "not_blank"))]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_name_fails_validation() {
        let req = CreateTeamRequest {
            name: "   ".to_string(),
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));

        let req = UpdateTeamRequest {
            name: Some("    ".to_string()),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn padded_name_is_trimmed_before_length_check() {
        let req: CreateTeamRequest = serde_json::from_str(r#"{"name": "  R  "}"#).unwrap();
        assert_eq!(req.name, "R");
        assert!(req.validate().is_err());

        let req: CreateTeamRequest = serde_json::from_str(r#"{"name": " Red "}"#).unwrap();
        assert_eq!(req.name, "Red");
        assert!(req.validate().is_ok());
    }
}
