//! 계정 세션 백엔드
//!
//! 사용자 계정과 로그인 세션을 관리하는 Rust 기반 REST API 서비스입니다.
//! 회원가입 시 아바타/커버 이미지를 미디어 저장소에 업로드하고,
//! JWT 액세스/리프레시 토큰으로 세션을 유지합니다.
//!
//! # Features
//!
//! - **회원가입**: 멀티파트 폼 + 이미지 업로드 (Cloudinary)
//! - **JWT 인증**: 액세스/리프레시 토큰, 리프레시 토큰 회전
//! - **쿠키 세션**: `HttpOnly` 쿠키 또는 `Authorization: Bearer` 헤더
//! - **MongoDB**: 사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답, 쿠키 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 세션, 토큰, 비밀번호, 미디어 업로드
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore 트레이트 + MongoDB 구현
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use account_session_backend::services::auth::{PasswordService, SessionService, TokenService};
//!
//! let sessions = SessionService::new(store, uploader, Arc::new(TokenService::from_env()), PasswordService::from_env());
//! let login = sessions.login(request).await?;
//! println!("{}", login.tokens.access_token);
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

#[cfg(test)]
pub mod test_support;
