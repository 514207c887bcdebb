//! # Authentication Configuration Module
//!
//! JWT 토큰과 인증 쿠키 관련 설정을 관리하는 모듈입니다.
//!
//! 액세스 토큰과 리프레시 토큰은 서로 다른 비밀키로 서명됩니다.
//! 한쪽 비밀키가 노출되더라도 다른 종류의 토큰을 위조할 수 없습니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export ACCESS_TOKEN_SECRET="your-access-token-secret"
//! export ACCESS_TOKEN_EXPIRY="1d"
//! export REFRESH_TOKEN_SECRET="your-refresh-token-secret"
//! export REFRESH_TOKEN_EXPIRY="10d"
//! export COOKIE_SECURE="true"
//! ```
//!
//! 만료 시간은 `30s`, `15m`, `2h`, `1d` 형식 또는 초 단위 정수로 지정합니다.

use std::env;

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
pub struct JwtConfig;

impl JwtConfig {
    /// 액세스 토큰 서명용 비밀키를 반환합니다.
    ///
    /// 환경 변수가 없으면 개발용 기본값을 사용하며 경고 로그를 남깁니다.
    pub fn access_secret() -> String {
        env::var("ACCESS_TOKEN_SECRET").unwrap_or_else(|_| {
            log::warn!("ACCESS_TOKEN_SECRET not set, using default (not secure for production!)");
            "dev-access-token-secret".to_string()
        })
    }

    /// 리프레시 토큰 서명용 비밀키를 반환합니다.
    pub fn refresh_secret() -> String {
        env::var("REFRESH_TOKEN_SECRET").unwrap_or_else(|_| {
            log::warn!("REFRESH_TOKEN_SECRET not set, using default (not secure for production!)");
            "dev-refresh-token-secret".to_string()
        })
    }

    /// 액세스 토큰 만료 시간(초). 기본값: 1일
    pub fn access_expiry_seconds() -> i64 {
        Self::expiry_from_env("ACCESS_TOKEN_EXPIRY", 24 * 60 * 60)
    }

    /// 리프레시 토큰 만료 시간(초). 기본값: 10일
    pub fn refresh_expiry_seconds() -> i64 {
        Self::expiry_from_env("REFRESH_TOKEN_EXPIRY", 10 * 24 * 60 * 60)
    }

    fn expiry_from_env(key: &str, default_seconds: i64) -> i64 {
        match env::var(key) {
            Ok(raw) => parse_duration_seconds(&raw).unwrap_or_else(|| {
                log::warn!("{} 값 '{}'을(를) 해석할 수 없어 기본값 {}초를 사용합니다", key, raw, default_seconds);
                default_seconds
            }),
            Err(_) => default_seconds,
        }
    }
}

/// `15m`, `1d`, `10d`, `3600` 같은 기간 문자열을 초 단위로 변환합니다.
///
/// 단위 없는 정수는 초로 해석합니다. 0 이하이거나 해석할 수 없으면 `None`.
pub fn parse_duration_seconds(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let split_at = raw
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(raw.len());
    let (amount, unit) = raw.split_at(split_at);

    let amount: i64 = amount.parse().ok()?;
    let multiplier = match unit.trim().to_lowercase().as_str() {
        "" | "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        "d" => 24 * 60 * 60,
        "w" => 7 * 24 * 60 * 60,
        _ => return None,
    };

    amount.checked_mul(multiplier).filter(|seconds| *seconds > 0)
}

/// 인증 쿠키 설정
pub struct CookieConfig;

impl CookieConfig {
    pub const ACCESS_TOKEN: &'static str = "accessToken";
    pub const REFRESH_TOKEN: &'static str = "refreshToken";

    /// `Secure` 속성 부여 여부 (`COOKIE_SECURE`). 기본값: true
    ///
    /// HTTPS 없이 로컬에서 테스트할 때만 false로 설정합니다.
    pub fn secure() -> bool {
        env::var("COOKIE_SECURE")
            .map(|raw| !matches!(raw.trim().to_lowercase().as_str(), "false" | "0" | "no"))
            .unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration_seconds("30s"), Some(30));
        assert_eq!(parse_duration_seconds("15m"), Some(900));
        assert_eq!(parse_duration_seconds("2h"), Some(7200));
        assert_eq!(parse_duration_seconds("1d"), Some(86_400));
        assert_eq!(parse_duration_seconds("10d"), Some(864_000));
        assert_eq!(parse_duration_seconds("3600"), Some(3600));
        assert_eq!(parse_duration_seconds(" 1D "), Some(86_400));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert_eq!(parse_duration_seconds(""), None);
        assert_eq!(parse_duration_seconds("d"), None);
        assert_eq!(parse_duration_seconds("10y"), None);
        assert_eq!(parse_duration_seconds("0m"), None);
        assert_eq!(parse_duration_seconds("-5m"), None);
    }

    #[test]
    fn test_cookie_names() {
        assert_eq!(CookieConfig::ACCESS_TOKEN, "accessToken");
        assert_eq!(CookieConfig::REFRESH_TOKEN, "refreshToken");
    }
}
