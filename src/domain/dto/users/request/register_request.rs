use validator::{Validate, ValidationError};

use crate::domain::models::media::MediaFile;

/// 회원가입 요청
///
/// 멀티파트 폼(`username`, `email`, `fullName`, `password`, `avatar`, `coverImage`)에서
/// 조립됩니다. 파일을 포함하므로 JSON으로 역직렬화하지 않습니다.
#[derive(Debug, Default, Validate)]
pub struct RegisterUserRequest {
    #[validate(custom(function = "not_blank", message = "사용자명은(는) 필수입니다"))]
    pub username: String,

    #[validate(custom(function = "not_blank", message = "이메일은(는) 필수입니다"))]
    pub email: String,

    #[validate(custom(function = "not_blank", message = "이름은(는) 필수입니다"))]
    pub full_name: String,

    #[validate(custom(function = "not_blank", message = "비밀번호은(는) 필수입니다"))]
    pub password: String,

    #[validate(required(message = "아바타 이미지는 필수입니다"))]
    pub avatar: Option<MediaFile>,

    pub cover_image: Option<MediaFile>,
}

/// 비어 있거나 공백만 있는 문자열 거부
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> RegisterUserRequest {
        RegisterUserRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            full_name: "Alice Kim".to_string(),
            password: "hunter2!".to_string(),
            avatar: Some(MediaFile::new("a.png", "image/png", vec![0x89, 0x50])),
            cover_image: None,
        }
    }

    #[test]
    fn test_complete_request_is_valid() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn test_each_blank_field_is_rejected() {
        let blanks: [fn(&mut RegisterUserRequest); 4] = [
            |r| r.username = String::new(),
            |r| r.email = "   ".to_string(),
            |r| r.full_name = "\t".to_string(),
            |r| r.password = String::new(),
        ];

        for blank in blanks {
            let mut request = complete();
            blank(&mut request);
            assert!(request.validate().is_err());
        }
    }

    #[test]
    fn test_missing_avatar_is_rejected() {
        let mut request = complete();
        request.avatar = None;

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        let avatar = fields["avatar"];
        assert_eq!(avatar[0].code, "required");
        assert_eq!(
            avatar[0].message.as_deref(),
            Some("아바타 이미지는 필수입니다")
        );
    }
}
