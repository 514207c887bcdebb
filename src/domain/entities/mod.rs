//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 엔티티들을 정의합니다.
//!
//! - **BSON 직렬화**: `serde`를 통한 자동 변환
//! - **ObjectId 지원**: MongoDB의 `_id` 필드와 매핑
//! - **민감 정보 분리**: 엔티티는 저장 전용이며, 응답에는 DTO를 사용
//!
//! ```text
//! entities/
//! └── users/
//!     └── user.rs     ← User 엔티티
//! ```

pub mod users;
