//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 데이터베이스, CORS, 속도 제한 설정
//! - [`auth_config`] - JWT 토큰, 인증 쿠키 설정
//! - [`media_config`] - Cloudinary, 업로드 제한 설정
//!
//! 환경 변수는 `main`에서 `dotenv`로 로드됩니다. `PROFILE=dev`이면 `.env.dev`,
//! `PROFILE=prod`이면 `.env.prod`, 그 외에는 `.env`를 읽습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ServerConfig, JwtConfig};
//!
//! let bind = (ServerConfig::host(), ServerConfig::port());
//! let access_ttl = JwtConfig::access_expiry_seconds();
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8000"
//! export CORS_ORIGIN="http://localhost:3000"
//!
//! # 데이터베이스
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="account_session"
//!
//! # 보안 설정
//! export BCRYPT_COST="12"          # 4-15 범위
//! export RATE_LIMIT_PER_SECOND="10"
//! export RATE_LIMIT_BURST_SIZE="30"
//! ```

pub mod data_config;
pub mod auth_config;
pub mod media_config;

pub use data_config::*;
pub use auth_config::*;
pub use media_config::*;
