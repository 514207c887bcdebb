//! # Domain Layer Module
//!
//! 도메인 계층을 구성하는 핵심 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB에 저장되는 문서 (User)
//! ├── DTOs      - API 요청/응답 계약 (엔벨로프, 사용자, 토큰)
//! └── Models    - 요청 처리 중 사용되는 값 객체 (클레임, 인증 사용자, 업로드 파일)
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## 사용자 등록 흐름
//!
//! ```rust,ignore
//! use crate::domain::dto::users::request::RegisterUserRequest;
//! use crate::domain::dto::users::response::UserResponse;
//!
//! // 1. 멀티파트 폼에서 요청 조립 후 검증
//! request.validate()?;
//!
//! // 2. 세션 서비스가 업로드, 해싱, 저장을 수행
//! let user: UserResponse = session_service.register(request).await?;
//! ```

pub mod entities;
pub mod dto;
pub mod models;
