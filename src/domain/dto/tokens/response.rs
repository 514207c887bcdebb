use serde::{Deserialize, Serialize};

use crate::domain::dto::users::response::UserResponse;

/// 클라이언트에게 전달되는 토큰 쌍
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    /// 액세스 토큰 만료 시간 (초)
    pub expires_in: i64,
    /// 리프레시 토큰 만료 시간 (초). 쿠키 Max-Age에 사용됩니다.
    #[serde(skip)]
    pub refresh_expires_in: i64,
}

/// 로그인 응답 `{user, accessToken, refreshToken, expiresIn}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub user: UserResponse,
    #[serde(flatten)]
    pub tokens: TokenPair,
}
