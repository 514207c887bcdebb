//! 에러 타입과 실패 응답 변환
//!
//! 서비스와 핸들러는 [`AppError`]를 반환하고, `actix_web::ResponseError` 구현이
//! 유일한 변환 지점으로서 HTTP 상태 코드와 실패 엔벨로프를 결정합니다.
//!
//! 모든 실패 응답은 아래 형식의 엔벨로프로 변환됩니다.
//!
//! ```json
//! { "statusCode": 401, "message": "유효하지 않은 리프레시 토큰입니다", "success": false }
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! async fn register(form: RegisterUserRequest) -> Result<UserResponse, AppError> {
//!     if form.avatar.is_none() {
//!         return Err(AppError::ValidationError("아바타 이미지는 필수입니다".to_string()));
//!     }
//!     // ...
//! }
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

use crate::domain::dto::api_response::ErrorEnvelope;

/// 인증 실패의 세부 종류
///
/// 모두 401 Unauthorized로 응답되지만, 흐름과 테스트에서 원인을 구분할 수 있도록
/// 별도 열거형으로 표현합니다.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthFailure {
    /// 토큰이 쿠키/헤더/본문 어디에도 없음
    #[error("인증 토큰이 제공되지 않았습니다")]
    MissingToken,

    /// 비밀번호 불일치
    #[error("비밀번호가 올바르지 않습니다")]
    InvalidCredentials,

    /// 서명, 형식, 만료 등 검증 실패 (리프레시 흐름에서는 만료도 여기에 포함)
    #[error("유효하지 않은 토큰입니다")]
    InvalidToken,

    /// 액세스 토큰 만료
    #[error("토큰이 만료되었습니다")]
    ExpiredToken,

    /// 저장된 리프레시 토큰과 일치하지 않음 (이미 회전되었거나 로그아웃됨)
    #[error("리프레시 토큰이 만료되었거나 이미 사용되었습니다")]
    StaleToken,
}

/// 서비스 전역 에러 타입
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    ///
    /// 드라이버 메시지는 로그에만 남고 클라이언트에는 노출되지 않습니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("{0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("{0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("{0}")]
    AuthenticationError(AuthFailure),

    /// 필수 미디어 업로드 실패 (400 Bad Request)
    #[error("{0}")]
    UploadError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    ///
    /// 외부 라이브러리 메시지를 포함할 수 있으므로 클라이언트에는 일반 메시지만 전달됩니다.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 전달할 메시지
    ///
    /// 데이터베이스 에러는 내부 정보를 감추고 일반 메시지로 대체합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                "서버 내부 오류가 발생했습니다".to_string()
            }
            other => other.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) | AppError::UploadError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 실패 엔벨로프로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("요청 처리 실패 ({}): {}", status.as_u16(), self);
        } else {
            log::debug!("요청 거부 ({}): {}", status.as_u16(), self);
        }

        actix_web::HttpResponse::build(status)
            .json(ErrorEnvelope::new(status, self.public_message()))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 에러(`bcrypt`, 블로킹 작업 취소 등)에 설명을 붙여 `InternalError`로 바꿉니다.
///
/// ```rust,ignore
/// let hash = bcrypt::hash(password, cost).context("비밀번호 해싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;

    fn body_json(error: &AppError) -> serde_json::Value {
        let bytes = error
            .error_response()
            .into_body()
            .try_into_bytes()
            .expect("고정 크기 본문이어야 합니다");
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("이메일은(는) 필수입니다".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upload_error_is_bad_request() {
        let error = AppError::UploadError("아바타 업로드 실패".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_conflict_and_not_found_status() {
        assert_eq!(
            AppError::ConflictError("중복".to_string()).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::NotFound("없음".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError(AuthFailure::StaleToken);
        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            error.to_string(),
            "리프레시 토큰이 만료되었거나 이미 사용되었습니다"
        );
    }

    #[test]
    fn test_failure_envelope_shape() {
        let json = body_json(&AppError::AuthenticationError(AuthFailure::MissingToken));

        assert_eq!(json["statusCode"], 401);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "인증 토큰이 제공되지 않았습니다");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_database_error_hides_driver_detail() {
        let error = AppError::DatabaseError("E11000 duplicate key on users.email".to_string());
        let json = body_json(&error);

        assert_eq!(json["statusCode"], 500);
        assert!(!json["message"].as_str().unwrap().contains("E11000"));
    }

    #[test]
    fn test_internal_error_hides_foreign_detail() {
        let verified: Result<bool, &str> = Err("Invalid hash: $2b$99$storedhash");
        let error = verified.context("저장된 비밀번호 해시를 해석할 수 없습니다").unwrap_err();
        let json = body_json(&error);

        assert_eq!(json["statusCode"], 500);
        assert_eq!(json["message"], "서버 내부 오류가 발생했습니다");
        assert!(!json.to_string().contains("storedhash"));
    }

    #[test]
    fn test_context_wraps_foreign_error() {
        let hashed: Result<String, &str> = Err("invalid cost");

        match hashed.context("비밀번호 해싱 실패") {
            Err(AppError::InternalError(msg)) => {
                assert_eq!(msg, "비밀번호 해싱 실패: invalid cost");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
