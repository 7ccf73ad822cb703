use serde::{Deserialize, Serialize};

/// 비밀번호 변경 요청 DTO
///
/// 현재 비밀번호는 `X-Login-Pw` 헤더로 전달되고 본문에는 새 비밀번호만 담깁니다.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangePasswordRequest {
    pub new_password: Option<String>,
}

impl std::fmt::Debug for ChangePasswordRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ChangePasswordRequest { new_password: **** }")
    }
}
