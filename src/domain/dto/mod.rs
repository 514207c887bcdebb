//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//! 요청 DTO는 `validator`로 입력값을 검증하고, 응답 DTO는 민감 정보를 포함하지 않습니다.
//!
//! ```text
//! dto/
//! ├── api_response.rs   # 성공/실패 엔벨로프
//! ├── users/
//! │   ├── request/      # RegisterUserRequest, LoginRequest
//! │   └── response/     # UserResponse
//! └── tokens/           # RefreshTokenRequest, TokenPair, LoginResponse
//! ```
//!
//! 모든 JSON 필드는 camelCase로 직렬화됩니다.

pub mod api_response;
pub mod users;
pub mod tokens;

pub use api_response::{ApiResponse, ErrorEnvelope};
