//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`users::UserStore`] trait에 의존하며,
//! 운영 환경에서는 MongoDB 구현인 [`users::UserRepository`]가 주입됩니다.

pub mod users;
