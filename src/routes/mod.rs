//! 라우트 설정
//!
//! | Method | Path | 인증 |
//! |--------|------|------|
//! | POST | `/api/v1/users/register` | - |
//! | POST | `/api/v1/users/login` | - |
//! | POST | `/api/v1/users/logout` | 필요 |
//! | POST | `/api/v1/users/refresh-token` | - (리프레시 토큰) |
//! | GET | `/api/v1/users/current-user` | 필요 |
//! | GET | `/health` | - |

use actix_web::error::JsonPayloadError;
use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::errors::AppError;
use crate::handlers;

/// JSON 요청 본문 최대 크기
pub const JSON_LIMIT_BYTES: usize = 16 * 1024;

/// 모든 라우트를 설정합니다
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .app_data(sessions.clone())
///     .app_data(tokens.clone())
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
    configure_user_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .app_data(json_config())
            .service(handlers::users::register)
            .service(handlers::auth::login)
            .service(handlers::auth::logout)
            .service(handlers::auth::refresh_token)
            .service(handlers::auth::current_user),
    );
}

/// 본문 크기 제한과 실패 엔벨로프를 적용한 JSON 추출 설정
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(JSON_LIMIT_BYTES)
        .error_handler(|err, req| {
            log::debug!("JSON 본문 처리 실패 ({}): {}", req.path(), err);
            let message = match err {
                JsonPayloadError::Overflow { .. } | JsonPayloadError::OverflowKnownLength { .. } => {
                    format!("요청 본문은 {} bytes를 넘을 수 없습니다", JSON_LIMIT_BYTES)
                }
                JsonPayloadError::ContentType => "Content-Type은 application/json이어야 합니다".to_string(),
                other => format!("잘못된 JSON 요청입니다: {}", other),
            };
            AppError::ValidationError(message).into()
        })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8000/health
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
