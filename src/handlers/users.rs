//! 회원가입 핸들러
//!
//! `multipart/form-data` 요청을 받아 파일을 메모리로 읽은 뒤 세션 서비스에 넘깁니다.
//!
//! | 필드 | 종류 | 개수 |
//! |------|------|------|
//! | `avatar` | 파일 | 1 (필수) |
//! | `coverImage` | 파일 | 0..1 |
//! | `username`, `email`, `fullName`, `password` | 텍스트 | 1 |
//!
//! ```bash
//! curl -X POST http://localhost:8000/api/v1/users/register \
//!   -F username=alice -F email=alice@example.com -F fullName="Alice Kim" \
//!   -F password=secret -F avatar=@avatar.png -F coverImage=@cover.jpg
//! ```

use actix_multipart::{Field, Multipart};
use actix_web::{HttpResponse, post, web};
use futures_util::TryStreamExt;

use crate::config::UploadConfig;
use crate::domain::dto::ApiResponse;
use crate::domain::dto::users::request::RegisterUserRequest;
use crate::domain::models::media::MediaFile;
use crate::errors::AppError;
use crate::services::auth::SessionService;

const MAX_TEXT_FIELD_BYTES: usize = 16 * 1024;

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/v1/users/register`
#[post("/register")]
pub async fn register(
    mut payload: Multipart,
    sessions: web::Data<SessionService>,
) -> Result<HttpResponse, AppError> {
    let request = read_register_form(&mut payload, UploadConfig::max_file_bytes()).await?;
    let user = sessions.register(request).await?;

    Ok(ApiResponse::created(user, "회원가입이 완료되었습니다").into_response())
}

async fn read_register_form(
    payload: &mut Multipart,
    max_file_bytes: usize,
) -> Result<RegisterUserRequest, AppError> {
    let mut form = RegisterUserRequest::default();

    while let Some(mut field) = payload.try_next().await.map_err(malformed)? {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "avatar" | "coverImage" => {
                let Some(file) = read_file(&mut field, &name, max_file_bytes).await? else {
                    continue;
                };
                let slot = if name == "avatar" {
                    &mut form.avatar
                } else {
                    &mut form.cover_image
                };
                if slot.is_some() {
                    return Err(AppError::ValidationError(format!(
                        "{} 파일은 하나만 업로드할 수 있습니다",
                        name
                    )));
                }
                *slot = Some(file);
            }
            "username" => form.username = read_text(&mut field, &name).await?,
            "email" => form.email = read_text(&mut field, &name).await?,
            "fullName" => form.full_name = read_text(&mut field, &name).await?,
            "password" => form.password = read_text(&mut field, &name).await?,
            _ => {
                log::debug!("알 수 없는 폼 필드 무시: {}", name);
                read_bytes(&mut field, &name, MAX_TEXT_FIELD_BYTES).await?;
            }
        }
    }

    Ok(form)
}

/// 빈 파일 파트는 첨부되지 않은 것으로 봅니다.
async fn read_file(
    field: &mut Field,
    name: &str,
    max_bytes: usize,
) -> Result<Option<MediaFile>, AppError> {
    let file_name = field
        .content_disposition()
        .and_then(|cd| cd.get_filename())
        .unwrap_or(name)
        .to_string();
    let content_type = field
        .content_type()
        .map(|mime| mime.essence_str().to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string());

    let bytes = read_bytes(field, name, max_bytes).await?;
    if bytes.is_empty() {
        return Ok(None);
    }

    Ok(Some(MediaFile::new(file_name, content_type, bytes)))
}

async fn read_text(field: &mut Field, name: &str) -> Result<String, AppError> {
    let bytes = read_bytes(field, name, MAX_TEXT_FIELD_BYTES).await?;
    String::from_utf8(bytes)
        .map_err(|_| AppError::ValidationError(format!("{} 값이 올바른 UTF-8이 아닙니다", name)))
}

async fn read_bytes(field: &mut Field, name: &str, max_bytes: usize) -> Result<Vec<u8>, AppError> {
    let mut buffer = Vec::new();

    while let Some(chunk) = field.try_next().await.map_err(malformed)? {
        if buffer.len() + chunk.len() > max_bytes {
            return Err(AppError::ValidationError(format!(
                "{} 크기가 허용 한도({} bytes)를 초과했습니다",
                name, max_bytes
            )));
        }
        buffer.extend_from_slice(&chunk);
    }

    Ok(buffer)
}

fn malformed(e: actix_multipart::MultipartError) -> AppError {
    AppError::ValidationError(format!("잘못된 multipart 요청입니다: {}", e))
}
