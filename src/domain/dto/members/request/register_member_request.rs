use serde::{Deserialize, Serialize};

/// 회원 가입 요청 DTO
///
/// 누락된 필드는 `None`으로 들어오며, 해당 필드를 담당하는 값 객체가
/// 필드별 에러 코드로 거부합니다. 역직렬화 단계에서는 검증하지 않습니다.
///
/// ```json
/// {
///   "loginId": "testuser1",
///   "password": "Password1!",
///   "name": "홍길동",
///   "birthDate": "1990-01-15",
///   "email": "test@example.com"
/// }
/// ```
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegisterMemberRequest {
    pub login_id: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    /// `YYYY-MM-DD`
    pub birth_date: Option<String>,
    pub email: Option<String>,
}

impl std::fmt::Debug for RegisterMemberRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterMemberRequest")
            .field("login_id", &self.login_id)
            .field("password", &"****")
            .field("name", &self.name)
            .field("birth_date", &self.birth_date)
            .field("email", &self.email)
            .finish()
    }
}
