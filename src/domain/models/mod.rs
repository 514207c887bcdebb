//! # Domain Models Module
//!
//! 영속되지 않는 값 객체들을 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! - **Entities** (`../entities/`): 데이터베이스에 저장되고 고유 ID를 가지는 객체 (`User`)
//! - **Models** (`./`): 요청 처리 중에만 존재하는 값 객체
//!
//! ```text
//! models/
//! ├── auth/     ← AuthenticatedUser (미들웨어가 요청에 첨부)
//! ├── token/    ← AccessClaims, RefreshClaims (JWT 페이로드)
//! └── media/    ← MediaFile, UploadedMedia (미디어 업로드 입출력)
//! ```

pub mod auth;
pub mod token;
pub mod media;
