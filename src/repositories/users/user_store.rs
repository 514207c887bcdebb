use async_trait::async_trait;

use crate::domain::entities::users::User;
use crate::errors::AppError;

/// 사용자 저장소 추상화
///
/// 세션 서비스는 이 trait에만 의존하므로 MongoDB 없이도 흐름을 테스트할 수 있습니다.
/// 식별자 인자는 호출자가 이미 정규화한 값이어야 합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 사용자명 또는 이메일 중 하나라도 일치하는 사용자를 찾습니다.
    ///
    /// 두 값이 모두 `None`이면 `Ok(None)`.
    async fn find_by_identity(
        &self,
        username: Option<&str>,
        email: Option<&str>,
    ) -> Result<Option<User>, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자를 저장하고 ID가 채워진 엔티티를 반환합니다.
    ///
    /// 사용자명 또는 이메일이 중복되면 `ConflictError`.
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// 리프레시 토큰 필드만 갱신합니다. `None`이면 필드를 제거합니다.
    ///
    /// 일치하는 사용자가 있었는지 여부를 반환합니다.
    async fn update_refresh_token(&self, id: &str, token: Option<&str>) -> Result<bool, AppError>;
}
