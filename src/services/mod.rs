//! 비즈니스 로직 계층
//!
//! 서비스는 `main`에서 명시적으로 생성되어 `web::Data`로 핸들러에 주입됩니다.

pub mod auth;
pub mod media;
