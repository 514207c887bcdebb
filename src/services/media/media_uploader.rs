use async_trait::async_trait;

use crate::domain::models::media::{MediaFile, UploadedMedia};

/// 외부 미디어 호스트 업로드 추상화
///
/// 실패를 에러로 전파하지 않습니다. 구현체는 원인을 로그로 남기고 `None`을 반환하며,
/// 업로드 실패가 치명적인지는 호출자가 결정합니다.
#[async_trait]
pub trait MediaUploader: Send + Sync {
    async fn upload(&self, file: &MediaFile) -> Option<UploadedMedia>;
}
