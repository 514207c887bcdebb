//! HTTP 요청 핸들러
//!
//! 핸들러는 요청을 DTO로 변환하고 [`SessionService`](crate::services::auth::SessionService)를
//! 호출한 뒤 결과를 엔벨로프로 감쌉니다. 에러는 `AppError`로 반환하면
//! `ResponseError` 구현이 실패 엔벨로프로 변환합니다.

pub mod users;
pub mod auth;
