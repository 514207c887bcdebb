//! # 세션 흐름 서비스
//!
//! 회원가입, 로그인, 로그아웃, 리프레시 토큰 회전을 조율합니다.
//!
//! ```text
//!            login                     refresh(tokenA)
//! Anonymous ───────▶ Authenticated(A) ─────────────────▶ Authenticated(B)
//!     ▲                    │                                   │
//!     └──────── logout ────┴───────────────────────────────────┘
//! ```
//!
//! 사용자당 저장되는 리프레시 토큰은 하나뿐입니다. 로그인이나 갱신이 일어나면
//! 이전 토큰은 즉시 무효가 되므로 동시에 여러 세션을 유지할 수 없습니다.
//!
//! 모든 협력 객체는 생성 시점에 주입됩니다.
//!
//! ```rust,ignore
//! let sessions = SessionService::new(store, uploader, tokens, PasswordService::from_env());
//! let login = sessions.login(request).await?;
//! let rotated = sessions.refresh(Some(&login.tokens.refresh_token)).await?;
//! ```

use std::sync::Arc;

use validator::Validate;

use crate::domain::dto::tokens::{LoginResponse, TokenPair};
use crate::domain::dto::users::request::{LoginRequest, RegisterUserRequest};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::User;
use crate::errors::{AppError, AuthFailure};
use crate::repositories::users::UserStore;
use crate::services::auth::password_service::PasswordService;
use crate::services::auth::token_service::TokenService;
use crate::services::media::MediaUploader;
use crate::utils::string_utils::{constant_time_eq, normalize_identifier};
use crate::utils::validation::into_app_error;

pub struct SessionService {
    store: Arc<dyn UserStore>,
    uploader: Arc<dyn MediaUploader>,
    tokens: Arc<TokenService>,
    passwords: PasswordService,
}

impl SessionService {
    pub fn new(
        store: Arc<dyn UserStore>,
        uploader: Arc<dyn MediaUploader>,
        tokens: Arc<TokenService>,
        passwords: PasswordService,
    ) -> Self {
        Self {
            store,
            uploader,
            tokens,
            passwords,
        }
    }

    /// 회원가입
    ///
    /// 입력 검증은 저장소 접근 전에 끝납니다. 아바타 업로드 실패는 `UploadError`,
    /// 커버 이미지 업로드 실패는 빈 URL로 저장됩니다.
    pub async fn register(&self, request: RegisterUserRequest) -> Result<UserResponse, AppError> {
        request.validate().map_err(into_app_error)?;

        let RegisterUserRequest {
            username,
            email,
            full_name,
            password,
            avatar,
            cover_image,
        } = request;

        let username = normalize_identifier(&username);
        let email = normalize_identifier(&email);
        let full_name = full_name.trim().to_string();

        if self
            .store
            .find_by_identity(Some(&username), Some(&email))
            .await?
            .is_some()
        {
            return Err(AppError::ConflictError(
                "이미 존재하는 사용자명 또는 이메일입니다".to_string(),
            ));
        }

        let avatar = avatar
            .ok_or_else(|| AppError::ValidationError("아바타 이미지는 필수입니다".to_string()))?;
        let avatar_url = self
            .uploader
            .upload(&avatar)
            .await
            .map(|media| media.url)
            .ok_or_else(|| AppError::UploadError("아바타 업로드에 실패했습니다".to_string()))?;

        let cover_image_url = match cover_image {
            Some(cover) => match self.uploader.upload(&cover).await {
                Some(media) => media.url,
                None => {
                    log::warn!("커버 이미지 업로드 실패, 빈 값으로 저장합니다: {}", username);
                    String::new()
                }
            },
            None => String::new(),
        };

        let password_hash = self.passwords.hash(&password).await?;

        let created = self
            .store
            .create(User::new(
                username,
                email,
                full_name,
                avatar_url,
                cover_image_url,
                password_hash,
            ))
            .await?;

        let id = created
            .id_string()
            .ok_or_else(|| AppError::InternalError("생성된 사용자에 ID가 없습니다".to_string()))?;

        let stored = self.store.find_by_id(&id).await?.ok_or_else(|| {
            AppError::InternalError("사용자 생성 후 조회에 실패했습니다".to_string())
        })?;

        log::info!("새 사용자 등록: {} ({})", stored.username, id);
        Ok(UserResponse::from(stored))
    }

    /// 로그인
    ///
    /// 비밀번호가 틀리면 리프레시 토큰을 저장하지 않습니다.
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        request.validate().map_err(into_app_error)?;

        let username = request.username.as_deref().map(normalize_identifier);
        let email = request.email.as_deref().map(normalize_identifier);

        let user = self
            .store
            .find_by_identity(username.as_deref(), email.as_deref())
            .await?
            .ok_or_else(|| AppError::NotFound("사용자가 존재하지 않습니다".to_string()))?;

        if !self.passwords.verify(&request.password, &user.password_hash).await? {
            log::info!("로그인 실패 (비밀번호 불일치): {}", user.username);
            return Err(AppError::AuthenticationError(AuthFailure::InvalidCredentials));
        }

        let tokens = self.rotate(&user).await?;

        log::info!("로그인 성공: {}", user.username);
        Ok(LoginResponse {
            user: UserResponse::from(user),
            tokens,
        })
    }

    /// 로그아웃
    ///
    /// 저장된 리프레시 토큰을 제거합니다. 사용자가 이미 없어도 성공으로 처리합니다.
    pub async fn logout(&self, user_id: &str) -> Result<(), AppError> {
        let matched = self.store.update_refresh_token(user_id, None).await?;

        if matched {
            log::info!("로그아웃: {}", user_id);
        } else {
            log::warn!("로그아웃 대상 사용자가 존재하지 않습니다: {}", user_id);
        }
        Ok(())
    }

    /// 리프레시 토큰 회전
    ///
    /// 서명과 만료가 유효해도 저장된 토큰과 다르면 거부합니다.
    /// 검증 실패 원인(서명, 만료, 형식)은 하나의 응답으로 합쳐집니다.
    pub async fn refresh(&self, refresh_token: Option<&str>) -> Result<TokenPair, AppError> {
        let incoming = refresh_token
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AppError::AuthenticationError(AuthFailure::MissingToken))?;

        let claims = self
            .tokens
            .verify_refresh(incoming)
            .map_err(|_| AppError::AuthenticationError(AuthFailure::InvalidToken))?;

        let user = self
            .store
            .find_by_id(&claims.sub)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자가 존재하지 않습니다".to_string()))?;

        let matches_stored = user
            .refresh_token
            .as_deref()
            .is_some_and(|stored| constant_time_eq(stored, incoming));
        if !matches_stored {
            log::warn!("저장된 값과 다른 리프레시 토큰 사용: {}", user.username);
            return Err(AppError::AuthenticationError(AuthFailure::StaleToken));
        }

        let tokens = self.rotate(&user).await?;
        log::debug!("리프레시 토큰 회전: {}", user.username);
        Ok(tokens)
    }

    /// 현재 인증된 사용자 조회
    pub async fn current_user(&self, user_id: &str) -> Result<UserResponse, AppError> {
        self.store
            .find_by_id(user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("사용자가 존재하지 않습니다".to_string()))
    }

    /// 새 토큰 쌍을 발급하고 리프레시 토큰을 저장합니다.
    async fn rotate(&self, user: &User) -> Result<TokenPair, AppError> {
        let id = user
            .id_string()
            .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?;

        let pair = self.tokens.issue_pair(user)?;

        if !self
            .store
            .update_refresh_token(&id, Some(&pair.refresh_token))
            .await?
        {
            return Err(AppError::NotFound("사용자가 존재하지 않습니다".to_string()));
        }

        Ok(pair)
    }
}
