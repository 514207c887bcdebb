use serde::Deserialize;

use crate::utils::string_utils::deserialize_optional_string;

/// 토큰 갱신 요청 DTO
///
/// 쿠키가 없는 클라이언트(모바일 등)를 위한 본문 경로입니다.
/// 빈 문자열은 값이 없는 것으로 취급합니다.
#[derive(Debug, Default, Deserialize)]
pub struct RefreshTokenRequest {
    #[serde(
        rename = "refreshToken",
        default,
        deserialize_with = "deserialize_optional_string"
    )]
    pub refresh_token: Option<String>,
}
