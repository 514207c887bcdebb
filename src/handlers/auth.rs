//! 세션 핸들러: 로그인, 로그아웃, 토큰 갱신, 현재 사용자 조회
//!
//! 토큰은 응답 본문과 함께 `HttpOnly` 쿠키(`accessToken`, `refreshToken`)로도 전달됩니다.

use actix_web::cookie::{Cookie, time::Duration};
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use serde_json::json;

use crate::config::CookieConfig;
use crate::domain::dto::ApiResponse;
use crate::domain::dto::tokens::{RefreshTokenRequest, TokenPair};
use crate::domain::dto::users::request::LoginRequest;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::AppError;
use crate::middlewares::AuthMiddleware;
use crate::services::auth::SessionService;

/// 로그인 핸들러
///
/// # Endpoint
/// `POST /api/v1/users/login`
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
    sessions: web::Data<SessionService>,
) -> Result<HttpResponse, AppError> {
    let login = sessions.login(payload.into_inner()).await?;
    let (access, refresh) = token_cookies(&login.tokens);

    Ok(HttpResponse::Ok()
        .cookie(access)
        .cookie(refresh)
        .json(ApiResponse::ok(login, "로그인되었습니다")))
}

/// 로그아웃 핸들러
///
/// 저장된 리프레시 토큰을 제거하고 두 쿠키를 만료시킵니다.
///
/// # Endpoint
/// `POST /api/v1/users/logout` (인증 필요)
#[post("/logout", wrap = "AuthMiddleware::required()")]
pub async fn logout(
    user: AuthenticatedUser,
    sessions: web::Data<SessionService>,
) -> Result<HttpResponse, AppError> {
    sessions.logout(&user.user_id).await?;

    Ok(HttpResponse::Ok()
        .cookie(removal_cookie(CookieConfig::ACCESS_TOKEN))
        .cookie(removal_cookie(CookieConfig::REFRESH_TOKEN))
        .json(ApiResponse::ok(json!({}), "로그아웃되었습니다")))
}

/// 토큰 갱신 핸들러
///
/// 리프레시 토큰은 `refreshToken` 쿠키에서 먼저 찾고, 없으면 JSON 본문을 사용합니다.
///
/// # Endpoint
/// `POST /api/v1/users/refresh-token`
#[post("/refresh-token")]
pub async fn refresh_token(
    req: HttpRequest,
    body: Option<web::Json<RefreshTokenRequest>>,
    sessions: web::Data<SessionService>,
) -> Result<HttpResponse, AppError> {
    let incoming = req
        .cookie(CookieConfig::REFRESH_TOKEN)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.trim().is_empty())
        .or_else(|| body.and_then(|body| body.into_inner().refresh_token));

    let tokens = sessions.refresh(incoming.as_deref()).await?;
    let (access, refresh) = token_cookies(&tokens);

    Ok(HttpResponse::Ok()
        .cookie(access)
        .cookie(refresh)
        .json(ApiResponse::ok(tokens, "액세스 토큰이 갱신되었습니다")))
}

/// 현재 사용자 조회 핸들러
///
/// # Endpoint
/// `GET /api/v1/users/current-user` (인증 필요)
#[get("/current-user", wrap = "AuthMiddleware::required()")]
pub async fn current_user(
    user: AuthenticatedUser,
    sessions: web::Data<SessionService>,
) -> Result<HttpResponse, AppError> {
    let profile = sessions.current_user(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(profile, "현재 사용자 정보를 조회했습니다")))
}

fn token_cookies(tokens: &TokenPair) -> (Cookie<'static>, Cookie<'static>) {
    (
        session_cookie(CookieConfig::ACCESS_TOKEN, tokens.access_token.clone(), tokens.expires_in),
        session_cookie(
            CookieConfig::REFRESH_TOKEN,
            tokens.refresh_token.clone(),
            tokens.refresh_expires_in,
        ),
    )
}

fn session_cookie(name: &'static str, value: String, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build(name, value)
        .path("/")
        .http_only(true)
        .secure(CookieConfig::secure())
        .max_age(Duration::seconds(max_age_secs))
        .finish()
}

fn removal_cookie(name: &'static str) -> Cookie<'static> {
    let mut cookie = Cookie::build(name, "")
        .path("/")
        .http_only(true)
        .secure(CookieConfig::secure())
        .finish();
    cookie.make_removal();
    cookie
}
