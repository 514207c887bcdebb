//! JWT 토큰 발급 및 검증 서비스
//!
//! 액세스 토큰과 리프레시 토큰은 서로 다른 비밀키로 HS256 서명됩니다.
//! 모든 토큰에는 무작위 `jti`가 들어가므로 같은 사용자에게 같은 초에 발급된
//! 토큰도 서로 다른 문자열이 됩니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::domain::dto::tokens::TokenPair;
use crate::domain::entities::users::User;
use crate::domain::models::token::{AccessClaims, RefreshClaims};
use crate::errors::{AppError, AuthFailure};

/// 토큰 검증 실패 원인
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("토큰이 만료되었습니다")]
    Expired,
    #[error("유효하지 않은 토큰입니다")]
    Invalid,
}

impl From<TokenError> for AppError {
    fn from(error: TokenError) -> Self {
        match error {
            TokenError::Expired => AppError::AuthenticationError(AuthFailure::ExpiredToken),
            TokenError::Invalid => AppError::AuthenticationError(AuthFailure::InvalidToken),
        }
    }
}

/// 서명 키와 만료 시간
#[derive(Clone)]
pub struct TokenSettings {
    pub access_secret: String,
    pub refresh_secret: String,
    /// 초 단위
    pub access_ttl: i64,
    /// 초 단위
    pub refresh_ttl: i64,
}

impl TokenSettings {
    pub fn from_env() -> Self {
        Self {
            access_secret: JwtConfig::access_secret(),
            refresh_secret: JwtConfig::refresh_secret(),
            access_ttl: JwtConfig::access_expiry_seconds(),
            refresh_ttl: JwtConfig::refresh_expiry_seconds(),
        }
    }
}

pub struct TokenService {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_ttl: i64,
    refresh_ttl: i64,
    validation: Validation,
}

impl TokenService {
    pub fn new(settings: TokenSettings) -> Self {
        Self {
            access_encoding: EncodingKey::from_secret(settings.access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(settings.access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(settings.refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(settings.refresh_secret.as_bytes()),
            access_ttl: settings.access_ttl,
            refresh_ttl: settings.refresh_ttl,
            validation: Validation::new(Algorithm::HS256),
        }
    }

    pub fn from_env() -> Self {
        Self::new(TokenSettings::from_env())
    }

    pub fn issue_access(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = AccessClaims {
            sub: user_id(user)?,
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.access_ttl)).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        sign(&claims, &self.access_encoding)
            .map_err(|e| AppError::InternalError(format!("액세스 토큰 생성 실패: {}", e)))
    }

    pub fn issue_refresh(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = RefreshClaims {
            sub: user_id(user)?,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.refresh_ttl)).timestamp(),
            jti: Uuid::new_v4().to_string(),
        };

        sign(&claims, &self.refresh_encoding)
            .map_err(|e| AppError::InternalError(format!("리프레시 토큰 생성 실패: {}", e)))
    }

    pub fn issue_pair(&self, user: &User) -> Result<TokenPair, AppError> {
        Ok(TokenPair {
            access_token: self.issue_access(user)?,
            refresh_token: self.issue_refresh(user)?,
            expires_in: self.access_ttl,
            refresh_expires_in: self.refresh_ttl,
        })
    }

    pub fn verify_access(&self, token: &str) -> Result<AccessClaims, TokenError> {
        verify(token, &self.access_decoding, &self.validation)
    }

    pub fn verify_refresh(&self, token: &str) -> Result<RefreshClaims, TokenError> {
        verify(token, &self.refresh_decoding, &self.validation)
    }
}

fn user_id(user: &User) -> Result<String, AppError> {
    user.id_string()
        .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))
}

fn sign<C: Serialize>(claims: &C, key: &EncodingKey) -> jsonwebtoken::errors::Result<String> {
    encode(&Header::new(Algorithm::HS256), claims, key)
}

fn verify<C: DeserializeOwned>(
    token: &str,
    key: &DecodingKey,
    validation: &Validation,
) -> Result<C, TokenError> {
    decode::<C>(token, key, validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => {
                log::debug!("토큰 검증 실패: {}", e);
                TokenError::Invalid
            }
        })
}
