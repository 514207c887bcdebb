//! 테스트 전용 협력 객체와 픽스처

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::domain::dto::users::request::{LoginRequest, RegisterUserRequest};
use crate::domain::entities::users::User;
use crate::domain::models::media::{MediaFile, UploadedMedia};
use crate::errors::AppError;
use crate::repositories::users::UserStore;
use crate::services::auth::{PasswordService, SessionService, TokenService, TokenSettings};
use crate::services::media::MediaUploader;

pub const PASSWORD: &str = "Secret pw 1";

/// 메모리 기반 `UserStore`
#[derive(Default)]
pub struct InMemoryUserStore {
    users: Mutex<Vec<User>>,
    lookups: AtomicUsize,
    forget_created: bool,
}

impl InMemoryUserStore {
    /// 저장에 성공한 것처럼 응답하지만 실제로는 보관하지 않는 저장소
    pub fn forgetful() -> Self {
        Self {
            forget_created: true,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    /// 조회 호출 횟수
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn get(&self, id: &str) -> Option<User> {
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id_string().as_deref() == Some(id))
            .cloned()
    }

    pub fn remove(&self, id: &str) {
        self.users
            .lock()
            .unwrap()
            .retain(|u| u.id_string().as_deref() != Some(id));
    }
}

fn check_id(id: &str) -> Result<(), AppError> {
    ObjectId::parse_str(id)
        .map(|_| ())
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_identity(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<User>, AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if username.is_none() && email.is_none() {
            return Ok(None);
        }

        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| Some(u.username.as_str()) == username || Some(u.email.as_str()) == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        check_id(id)?;
        Ok(self.get(id))
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|u| u.username == user.username || u.email == user.email)
        {
            return Err(AppError::ConflictError("duplicate".to_string()));
        }

        user.id = Some(ObjectId::new());
        if !self.forget_created {
            users.push(user.clone());
        }
        Ok(user)
    }

    async fn update_refresh_token(&self, id: &str, token: Option<&str>) -> Result<bool, AppError> {
        check_id(id)?;
        let mut users = self.users.lock().unwrap();

        match users.iter_mut().find(|u| u.id_string().as_deref() == Some(id)) {
            Some(user) => {
                user.refresh_token = token.map(str::to_string);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// 지정한 파일 이름만 실패시키는 업로더
#[derive(Default)]
pub struct ScriptedUploader {
    failing: Vec<String>,
    calls: AtomicUsize,
}

impl ScriptedUploader {
    pub fn failing_for(names: &[&str]) -> Self {
        Self {
            failing: names.iter().map(|n| n.to_string()).collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MediaUploader for ScriptedUploader {
    async fn upload(&self, file: &MediaFile) -> Option<UploadedMedia> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.failing.contains(&file.file_name) {
            return None;
        }

        Some(UploadedMedia {
            url: format!("https://media.test/{}", file.file_name),
            public_id: Some(file.file_name.clone()),
        })
    }
}

pub fn token_settings() -> TokenSettings {
    TokenSettings {
        access_secret: "test-access-secret".to_string(),
        refresh_secret: "test-refresh-secret".to_string(),
        access_ttl: 900,
        refresh_ttl: 864_000,
    }
}

pub fn token_service() -> TokenService {
    TokenService::new(token_settings())
}

pub fn session_service(
    store: Arc<InMemoryUserStore>,
    uploader: Arc<ScriptedUploader>,
) -> SessionService {
    SessionService::new(
        store,
        uploader,
        Arc::new(token_service()),
        PasswordService::new(4),
    )
}

pub fn register_request(username: &str, email: &str) -> RegisterUserRequest {
    RegisterUserRequest {
        username: username.to_string(),
        email: email.to_string(),
        full_name: "Test User".to_string(),
        password: PASSWORD.to_string(),
        avatar: Some(MediaFile::new("avatar.png", "image/png", vec![0x89, 0x50, 0x4e, 0x47])),
        cover_image: None,
    }
}

pub fn login_request(username: &str, password: &str) -> LoginRequest {
    LoginRequest {
        username: Some(username.to_string()),
        email: None,
        password: password.to_string(),
    }
}

/// `multipart/form-data` 요청 본문 작성기
pub struct MultipartBody {
    boundary: String,
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self {
            boundary: "----account-session-test-boundary".to_string(),
            body: Vec::new(),
        }
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                self.boundary, name, value
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                self.boundary, name, file_name, content_type
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// (Content-Type 헤더 값, 본문)
    pub fn finish(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{}--\r\n", self.boundary).as_bytes());
        (
            format!("multipart/form-data; boundary={}", self.boundary),
            self.body,
        )
    }
}
