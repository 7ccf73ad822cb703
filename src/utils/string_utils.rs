//! # 문자열 유틸리티
//!
//! 문자열 처리와 관련된 공통 유틸리티 함수들입니다.

use crate::errors::{AppError, AppResult, ErrorCode};

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 주어진 코드의 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// # 인자
/// * `value` - 검증할 문자열
/// * `code` - 실패 시 사용할 에러 코드
/// * `field_name` - 필드명 (에러 메시지용)
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::validate_required_string;
///
/// assert_eq!(validate_required_string("  홍길동  ", ErrorCode::NameRequired, "이름").unwrap(), "홍길동");
/// assert!(validate_required_string("   ", ErrorCode::NameRequired, "이름").is_err());
/// ```
pub fn validate_required_string(value: &str, code: ErrorCode, field_name: &str) -> AppResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(code, format!("{}은(는) 필수입니다", field_name)));
    }
    Ok(trimmed.to_string())
}

/// 문자열이 비어 있거나 공백만으로 구성되었는지 확인
///
/// # 예제
/// ```rust,ignore
/// assert!(is_blank("   "));
/// assert!(!is_blank("a"));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
