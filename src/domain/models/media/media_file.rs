//! 업로드 대상 파일과 업로드 결과

use std::fmt;

use serde::{Serialize, Serializer};

/// 멀티파트 요청에서 읽어 들인 파일
///
/// 디스크를 거치지 않고 메모리에 보관한 채로 미디어 호스트에 전달됩니다.
#[derive(Clone)]
pub struct MediaFile {
    /// 클라이언트가 보낸 원본 파일 이름
    pub file_name: String,
    /// MIME 타입 (알 수 없으면 `application/octet-stream`)
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl MediaFile {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for MediaFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// 검증 에러 파라미터 등에 기록될 때는 파일 이름만 남깁니다.
impl Serialize for MediaFile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.file_name)
    }
}

/// 미디어 호스트에 저장된 파일 정보
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    /// 공개 접근 URL
    pub url: String,
    pub public_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_hides_payload() {
        let file = MediaFile::new("a.png", "image/png", vec![1, 2, 3]);
        let printed = format!("{:?}", file);

        assert!(printed.contains("a.png"));
        assert!(printed.contains("len: 3"));
        assert!(!printed.contains("[1, 2, 3]"));
    }

    #[test]
    fn test_serializes_as_file_name_only() {
        let file = MediaFile::new("cover.jpg", "image/jpeg", vec![9; 32]);
        let json = serde_json::to_value(&file).unwrap();

        assert_eq!(json, serde_json::json!("cover.jpg"));
    }
}
