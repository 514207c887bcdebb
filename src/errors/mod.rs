//! 에러 타입 모듈
//!
//! [`errors::AppError`]와 인증 실패 세부 종류 [`errors::AuthFailure`]를 제공합니다.

pub mod errors;

pub use errors::{AppError, AppResult, AuthFailure, ErrorContext};
