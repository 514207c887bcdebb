use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::utils::string_utils::deserialize_optional_string;

/// 로그인 요청 DTO
///
/// 사용자명과 이메일 중 하나 이상이 필요합니다. 빈 문자열은 제공되지 않은 것으로 봅니다.
#[derive(Debug, Clone, Deserialize, Validate)]
#[validate(schema(function = "validate_identifier_present"))]
pub struct LoginRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub username: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    #[serde(default)]
    pub password: String,
}

fn validate_identifier_present(req: &LoginRequest) -> Result<(), ValidationError> {
    if req.username.is_none() && req.email.is_none() {
        return Err(ValidationError::new("identifier_required")
            .with_message("사용자명 또는 이메일이 필요합니다".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_either_identifier_is_enough() {
        let by_name: LoginRequest =
            serde_json::from_str(r#"{"username": "alice", "password": "pw"}"#).unwrap();
        let by_email: LoginRequest =
            serde_json::from_str(r#"{"email": "alice@example.com", "password": "pw"}"#).unwrap();

        assert!(by_name.validate().is_ok());
        assert!(by_email.validate().is_ok());
    }

    #[test]
    fn test_blank_identifiers_are_rejected() {
        let req: LoginRequest =
            serde_json::from_str(r#"{"username": " ", "email": "", "password": "pw"}"#).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_missing_password_defaults_to_empty() {
        let req: LoginRequest = serde_json::from_str(r#"{"username": "alice"}"#).unwrap();
        assert_eq!(req.password, "");
    }
}
