//! 미디어 업로드 설정
//!
//! Cloudinary 계정 정보와 업로드 크기/시간 제한을 관리합니다.
//!
//! ```bash
//! export CLOUDINARY_CLOUD_NAME="my-cloud"
//! export CLOUDINARY_API_KEY="123456789012345"
//! export CLOUDINARY_API_SECRET="abcdefg"
//! export MAX_UPLOAD_BYTES="5242880"
//! export UPLOAD_TIMEOUT_SECS="30"
//! ```

use std::env;

/// Cloudinary 접속 정보
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    pub base_url: String,
}

impl CloudinaryConfig {
    /// 환경 변수에서 Cloudinary 설정을 읽습니다.
    ///
    /// 계정 정보가 비어 있어도 서버는 기동되며, 업로드 시점에 실패가 로그로 남습니다.
    pub fn from_env() -> Self {
        let config = Self {
            cloud_name: env::var("CLOUDINARY_CLOUD_NAME").unwrap_or_default(),
            api_key: env::var("CLOUDINARY_API_KEY").unwrap_or_default(),
            api_secret: env::var("CLOUDINARY_API_SECRET").unwrap_or_default(),
            base_url: env::var("CLOUDINARY_BASE_URL")
                .unwrap_or_else(|_| "https://api.cloudinary.com".to_string()),
        };

        if !config.is_configured() {
            log::warn!("Cloudinary 설정이 완전하지 않습니다. 미디어 업로드가 실패합니다");
        }

        config
    }

    pub fn is_configured(&self) -> bool {
        !self.cloud_name.is_empty() && !self.api_key.is_empty() && !self.api_secret.is_empty()
    }

    /// 리소스 타입 자동 감지 업로드 엔드포인트
    pub fn upload_url(&self) -> String {
        format!(
            "{}/v1_1/{}/auto/upload",
            self.base_url.trim_end_matches('/'),
            self.cloud_name
        )
    }
}

/// 업로드 제한 설정
pub struct UploadConfig;

impl UploadConfig {
    /// 파일 하나의 최대 크기(바이트). 기본값: 5 MiB
    pub fn max_file_bytes() -> usize {
        env::var("MAX_UPLOAD_BYTES")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .filter(|value| *value > 0)
            .unwrap_or(5 * 1024 * 1024)
    }

    /// 업로드 요청 타임아웃(초). 기본값: 30
    pub fn timeout_secs() -> u64 {
        env::var("UPLOAD_TIMEOUT_SECS")
            .ok()
            .and_then(|raw| raw.parse().ok())
            .filter(|value| *value > 0)
            .unwrap_or(30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_url_building() {
        let config = CloudinaryConfig {
            cloud_name: "demo".to_string(),
            api_key: "key".to_string(),
            api_secret: "secret".to_string(),
            base_url: "https://api.cloudinary.com/".to_string(),
        };

        assert!(config.is_configured());
        assert_eq!(
            config.upload_url(),
            "https://api.cloudinary.com/v1_1/demo/auto/upload"
        );
    }

    #[test]
    fn test_missing_credentials_are_detected() {
        let config = CloudinaryConfig {
            cloud_name: "demo".to_string(),
            api_key: String::new(),
            api_secret: "secret".to_string(),
            base_url: "https://api.cloudinary.com".to_string(),
        };

        assert!(!config.is_configured());
    }
}
