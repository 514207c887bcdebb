//! User Entity Implementation
//!
//! `users` 컬렉션에 저장되는 사용자 문서입니다.
//! 비밀번호 해시와 리프레시 토큰을 포함하므로 API 응답에 직접 사용하지 않고
//! 반드시 [`UserResponse`](crate::domain::dto::users::response::UserResponse)로 변환합니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자명 (소문자로 정규화, unique)
    pub username: String,
    /// 이메일 (소문자로 정규화, unique)
    pub email: String,
    /// 표시 이름
    pub full_name: String,
    /// 아바타 이미지 URL (필수)
    pub avatar: String,
    /// 커버 이미지 URL (없으면 빈 문자열)
    #[serde(default)]
    pub cover_image: String,
    /// bcrypt 해시
    pub password_hash: String,
    /// 현재 유효한 리프레시 토큰. 로그아웃 시 필드가 제거됩니다.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl User {
    /// 저장 전의 새 사용자를 생성합니다.
    ///
    /// 식별자 정규화와 비밀번호 해싱은 호출자가 끝낸 상태여야 합니다.
    pub fn new(
        username: String,
        email: String,
        full_name: String,
        avatar: String,
        cover_image: String,
        password_hash: String,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            username,
            email,
            full_name,
            avatar,
            cover_image,
            password_hash,
            refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}
