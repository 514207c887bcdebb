//! 문자열 정규화 유틸리티
//!
//! 사용자명과 이메일은 저장할 때와 조회할 때 모두 같은 규칙
//! (앞뒤 공백 제거 + 소문자)으로 정규화합니다. 비밀번호에는 사용하지 않습니다.

use serde::Deserialize;

/// 사용자명/이메일 정규화: 앞뒤 공백 제거 후 소문자
pub fn normalize_identifier(value: &str) -> String {
    value.trim().to_lowercase()
}

/// 비밀 값(리프레시 토큰 등) 비교. 길이가 같으면 내용과 무관하게 모든 바이트를 비교합니다.
pub fn constant_time_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }

    a.iter().zip(b).fold(0u8, |diff, (x, y)| diff | (x ^ y)) == 0
}

/// 빈 문자열과 공백만 있는 문자열을 `None`으로 바꿉니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// `Option<String>` 필드용 serde 역직렬화 함수
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_identifier() {
        assert_eq!(normalize_identifier("  Alice "), "alice");
        assert_eq!(normalize_identifier("Alice@Example.COM"), "alice@example.com");
        assert_eq!(normalize_identifier("bob"), "bob");
    }

    #[test]
    fn test_constant_time_eq() {
        assert!(constant_time_eq("token.abc", "token.abc"));
        assert!(!constant_time_eq("token.abc", "token.abd"));
        assert!(!constant_time_eq("token", "token.abc"));
        assert!(constant_time_eq("", ""));
    }

    #[test]
    fn test_clean_optional_string() {
        assert_eq!(clean_optional_string(Some("  World  ".to_string())), Some("World".to_string()));
        assert_eq!(clean_optional_string(Some("   ".to_string())), None);
        assert_eq!(clean_optional_string(None), None);
    }

    #[test]
    fn test_deserialize_optional_string() {
        #[derive(Deserialize)]
        struct Form {
            #[serde(default, deserialize_with = "deserialize_optional_string")]
            field: Option<String>,
        }

        let form: Form = serde_json::from_str(r#"{"field": "  안녕하세요  "}"#).unwrap();
        assert_eq!(form.field, Some("안녕하세요".to_string()));

        let form: Form = serde_json::from_str(r#"{"field": "\t\n  "}"#).unwrap();
        assert_eq!(form.field, None);

        let form: Form = serde_json::from_str(r#"{"field": null}"#).unwrap();
        assert_eq!(form.field, None);

        let form: Form = serde_json::from_str("{}").unwrap();
        assert_eq!(form.field, None);
    }
}
