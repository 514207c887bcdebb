//! 인증 관련 서비스
//!
//! - [`token_service`] - JWT 발급/검증
//! - [`password_service`] - bcrypt 해싱/검증
//! - [`session_service`] - 회원가입, 로그인, 로그아웃, 토큰 회전 흐름

pub mod token_service;
pub mod password_service;
pub mod session_service;

pub use password_service::PasswordService;
pub use session_service::SessionService;
pub use token_service::{TokenError, TokenService, TokenSettings};
