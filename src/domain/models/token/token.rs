use serde::{Deserialize, Serialize};

/// 액세스 토큰의 클레임(Payload) 구조체
///
/// 보호된 요청을 처리할 때 데이터베이스 조회 없이 사용자를 식별할 수 있도록
/// 기본 프로필 정보를 함께 담습니다.
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `iat`, `exp`: 발급/만료 시간 (Unix timestamp)
/// - `jti`: 토큰 고유 ID. 같은 초에 발급된 토큰도 서로 다르게 만듭니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: String,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}

/// 리프레시 토큰의 클레임
///
/// 사용자 ID만 담습니다. 유효성은 서명과 만료 외에도
/// 저장된 값과의 일치 여부로 판단됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
}
