//! MongoDB 기반 사용자 저장소

use async_trait::async_trait;
use mongodb::{
    Collection, IndexModel,
    bson::{DateTime, Document, doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
};

use crate::db::Database;
use crate::domain::entities::users::User;
use crate::errors::AppError;
use crate::repositories::users::user_store::UserStore;

const COLLECTION: &str = "users";
const DUPLICATE_KEY: i32 = 11000;

pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<User>(COLLECTION),
        }
    }

    /// 사용자명/이메일 유니크 인덱스를 생성합니다. 서버 시작 시 한 번 호출합니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        self.collection
            .create_indexes([email_index, username_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("users 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

fn parse_object_id(id: &str) -> Result<ObjectId, AppError> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY
    )
}

/// `$or` 조회 필터. 조건이 하나도 없으면 `None`.
fn identity_filter(username: Option<&str>, email: Option<&str>) -> Option<Document> {
    let mut conditions = Vec::new();
    if let Some(username) = username {
        conditions.push(doc! { "username": username });
    }
    if let Some(email) = email {
        conditions.push(doc! { "email": email });
    }

    if conditions.is_empty() {
        None
    } else {
        Some(doc! { "$or": conditions })
    }
}

fn refresh_token_update(token: Option<&str>) -> Document {
    let now = DateTime::now();
    match token {
        Some(token) => doc! { "$set": { "refresh_token": token, "updated_at": now } },
        None => doc! { "$unset": { "refresh_token": 1 }, "$set": { "updated_at": now } },
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_identity(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<User>, AppError> {
        let Some(filter) = identity_filter(username, email) else {
            return Ok(None);
        };

        self.collection
            .find_one(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection.insert_one(&user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::ConflictError("이미 사용 중인 사용자명 또는 이메일입니다".to_string())
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string())
        })?;
        user.id = Some(id);

        log::debug!("사용자 저장 완료: {}", id.to_hex());
        Ok(user)
    }

    async fn update_refresh_token(&self, id: &str, token: Option<&str>) -> Result<bool, AppError> {
        let object_id = parse_object_id(id)?;

        let result = self
            .collection
            .update_one(doc! { "_id": object_id }, refresh_token_update(token))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_filter_variants() {
        assert!(identity_filter(None, None).is_none());

        let both = identity_filter(Some("alice"), Some("alice@example.com")).unwrap();
        assert_eq!(both.get_array("$or").unwrap().len(), 2);

        let email_only = identity_filter(None, Some("alice@example.com")).unwrap();
        let conditions = email_only.get_array("$or").unwrap();
        assert_eq!(conditions.len(), 1);
        assert_eq!(
            conditions[0].as_document().unwrap().get_str("email").unwrap(),
            "alice@example.com"
        );
    }

    #[test]
    fn test_clearing_token_unsets_the_field() {
        let update = refresh_token_update(None);
        assert!(update.get_document("$unset").unwrap().contains_key("refresh_token"));
        assert!(!update.get_document("$set").unwrap().contains_key("refresh_token"));

        let update = refresh_token_update(Some("token"));
        assert_eq!(
            update.get_document("$set").unwrap().get_str("refresh_token").unwrap(),
            "token"
        );
        assert!(update.get("$unset").is_none());
    }

    #[test]
    fn test_invalid_object_id_is_validation_error() {
        assert!(matches!(
            parse_object_id("not-an-id"),
            Err(AppError::ValidationError(_))
        ));
    }
}
