//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let user = User::new(
//!     "alice".to_string(),
//!     "alice@example.com".to_string(),
//!     "Alice Kim".to_string(),
//!     avatar_url,
//!     String::new(),
//!     password_hash,
//! );
//! ```

pub mod user;

pub use user::User;
