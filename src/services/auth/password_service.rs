//! 비밀번호 해싱/검증 서비스 (bcrypt)
//!
//! bcrypt는 CPU를 오래 점유하므로 actix 블로킹 스레드 풀에서 실행합니다.

use actix_web::web;

use crate::config::PasswordConfig;
use crate::errors::{AppError, ErrorContext};

pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 환경별 bcrypt cost(`BCRYPT_COST` 또는 실행 환경 기본값)를 사용합니다.
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    pub async fn hash(&self, plain: &str) -> Result<String, AppError> {
        let plain = plain.to_owned();
        let cost = self.cost;
        let started = std::time::Instant::now();

        let hashed = web::block(move || bcrypt::hash(plain, cost))
            .await
            .context("비밀번호 해싱 작업 실행 실패")?
            .context("비밀번호 해싱 실패")?;

        log::debug!("Password hashing took: {:?}", started.elapsed());
        Ok(hashed)
    }

    /// 평문과 저장된 해시가 일치하는지 확인합니다.
    pub async fn verify(&self, plain: &str, hashed: &str) -> Result<bool, AppError> {
        let plain = plain.to_owned();
        let hashed = hashed.to_owned();

        web::block(move || bcrypt::verify(plain, &hashed))
            .await
            .context("비밀번호 검증 작업 실행 실패")?
            .context("저장된 비밀번호 해시를 해석할 수 없습니다")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_hash_then_verify() {
        let service = PasswordService::new(4);
        let hashed = service.hash("Sup3r secret").await.unwrap();

        assert_ne!(hashed, "Sup3r secret");
        assert!(service.verify("Sup3r secret", &hashed).await.unwrap());
        assert!(!service.verify("sup3r secret", &hashed).await.unwrap());
    }

    #[actix_web::test]
    async fn test_password_is_not_trimmed() {
        let service = PasswordService::new(4);
        let hashed = service.hash(" padded ").await.unwrap();

        assert!(!service.verify("padded", &hashed).await.unwrap());
        assert!(service.verify(" padded ", &hashed).await.unwrap());
    }

    #[actix_web::test]
    async fn test_malformed_hash_is_internal_error() {
        let service = PasswordService::new(4);
        let result = service.verify("anything", "not-a-bcrypt-hash").await;

        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[actix_web::test]
    async fn test_stored_hash_never_reaches_response() {
        use actix_web::ResponseError;

        let service = PasswordService::new(4);
        let error = service
            .verify("x", "$2b$99$storedhashSECRETMATERIAL")
            .await
            .unwrap_err();

        let body = actix_web::body::to_bytes(error.error_response().into_body())
            .await
            .unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();

        assert!(!body.contains("SECRETMATERIAL"));
        assert!(body.contains("\"statusCode\":500"));
    }
}
