//! 액세스 토큰 인증 미들웨어
//!
//! 라우트 단위로 적용합니다.
//!
//! ```rust,ignore
//! #[post("/logout", wrap = "AuthMiddleware::required()")]
//! pub async fn logout(user: AuthenticatedUser, ...) -> Result<HttpResponse, AppError> { ... }
//! ```
//!
//! 토큰은 `accessToken` 쿠키에서 먼저 찾고, 없으면 `Authorization: Bearer` 헤더를 사용합니다.
//! 검증에 성공하면 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)를
//! 요청 확장에 넣습니다. 실패하면 표준 실패 엔벨로프로 401을 응답합니다.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 유효한 액세스 토큰이 없으면 요청을 거부합니다.
    pub fn required() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
