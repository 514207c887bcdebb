//! `validator` 검증 결과를 API 에러로 변환

use validator::ValidationErrors;

use crate::errors::AppError;

/// 검증 에러를 `AppError::ValidationError`로 변환합니다.
///
/// 필드 이름 순으로 정렬한 뒤 첫 번째 메시지를 사용하므로 결과가 항상 같습니다.
pub fn into_app_error(errors: ValidationErrors) -> AppError {
    AppError::ValidationError(first_message(&errors))
}

pub fn first_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, errs)| errs.iter().map(move |e| (field.clone(), e)))
        .map(|(field, error)| match &error.message {
            Some(message) => message.to_string(),
            None => format!("{} 값이 올바르지 않습니다", field),
        })
        .next()
        .unwrap_or_else(|| "입력값이 올바르지 않습니다".to_string())
}
