//! Cloudinary 서명 업로드 클라이언트
//!
//! 파일을 base64 data URI로 인코딩해 `{base}/v1_1/{cloud}/auto/upload`에 전송합니다.
//! 리소스 타입은 Cloudinary가 자동으로 판별합니다.

use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::Utc;
use serde::Deserialize;
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::config::{CloudinaryConfig, UploadConfig};
use crate::domain::models::media::{MediaFile, UploadedMedia};
use crate::services::media::media_uploader::MediaUploader;

#[derive(Error, Debug)]
enum UploadFailure {
    #[error("Cloudinary 계정 정보가 설정되지 않았습니다")]
    NotConfigured,
    #[error("빈 파일은 업로드할 수 없습니다")]
    EmptyFile,
    #[error("Cloudinary 요청 실패: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Cloudinary 업로드 거부 ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("Cloudinary 응답에 URL이 없습니다")]
    MissingUrl,
}

#[derive(Debug, Deserialize)]
struct CloudinaryUploadResponse {
    secure_url: Option<String>,
    url: Option<String>,
    public_id: Option<String>,
}

impl CloudinaryUploadResponse {
    /// HTTPS URL 우선
    fn into_media(self) -> Option<UploadedMedia> {
        let url = self
            .secure_url
            .filter(|url| !url.is_empty())
            .or(self.url.filter(|url| !url.is_empty()))?;

        Some(UploadedMedia {
            url,
            public_id: self.public_id,
        })
    }
}

pub struct CloudinaryService {
    config: CloudinaryConfig,
    client: reqwest::Client,
}

impl CloudinaryService {
    pub fn new(config: CloudinaryConfig, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { config, client })
    }

    pub fn from_env() -> Result<Self, reqwest::Error> {
        Self::new(
            CloudinaryConfig::from_env(),
            Duration::from_secs(UploadConfig::timeout_secs()),
        )
    }

    async fn try_upload(&self, file: &MediaFile) -> Result<UploadedMedia, UploadFailure> {
        if !self.config.is_configured() {
            return Err(UploadFailure::NotConfigured);
        }
        if file.is_empty() {
            return Err(UploadFailure::EmptyFile);
        }

        let timestamp = Utc::now().timestamp().to_string();
        let signature = sign(&timestamp, &self.config.api_secret);

        let params = [
            ("file", data_uri(file)),
            ("api_key", self.config.api_key.clone()),
            ("timestamp", timestamp),
            ("signature", signature),
            ("signature_algorithm", "sha256".to_string()),
        ];

        let response = self
            .client
            .post(self.config.upload_url())
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadFailure::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<CloudinaryUploadResponse>()
            .await?
            .into_media()
            .ok_or(UploadFailure::MissingUrl)
    }
}

#[async_trait]
impl MediaUploader for CloudinaryService {
    async fn upload(&self, file: &MediaFile) -> Option<UploadedMedia> {
        match self.try_upload(file).await {
            Ok(media) => {
                log::info!("미디어 업로드 완료: {} -> {}", file.file_name, media.url);
                Some(media)
            }
            Err(e) => {
                log::error!("미디어 업로드 실패 ({}): {}", file.file_name, e);
                None
            }
        }
    }
}

/// `timestamp={ts}{secret}`의 SHA-256 hex
fn sign(timestamp: &str, api_secret: &str) -> String {
    let digest = Sha256::digest(format!("timestamp={}{}", timestamp, api_secret).as_bytes());
    format!("{:x}", digest)
}

fn data_uri(file: &MediaFile) -> String {
    format!("data:{};base64,{}", file.content_type, STANDARD.encode(&file.bytes))
}
