use serde::{Deserialize, Serialize};

use crate::domain::entities::members::Member;

/// 회원 정보 응답 DTO
///
/// 이름은 마지막 글자가 가려진 형태로 내려가며 비밀번호 관련 값은 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub login_id: String,
    pub name: String,
    pub birth_date: String,
    pub email: String,
}

impl From<&Member> for MemberResponse {
    fn from(member: &Member) -> Self {
        Self {
            login_id: member.login_id().as_str().to_string(),
            name: member.name().masked(),
            birth_date: member.birth_date().to_iso_string(),
            email: member.email().as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::members::MemberId;
    use crate::domain::value_objects::{BirthDate, Email, LoginId, Name, Password};
    use chrono::NaiveDate;

    #[test]
    fn test_projection_masks_name_and_hides_password() {
        let member = Member::reconstruct(
            MemberId::new("m-1"),
            LoginId::reconstruct("testuser1").unwrap(),
            Password::reconstruct("$2b$04$encodedvalue").unwrap(),
            Name::reconstruct("홍길동").unwrap(),
            BirthDate::reconstruct(NaiveDate::from_ymd_opt(1990, 1, 15).unwrap()),
            Email::reconstruct("test@example.com").unwrap(),
        );

        let response = MemberResponse::from(&member);
        assert_eq!(response.name, "홍길*");
        assert_eq!(response.birth_date, "1990-01-15");

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["loginId"], "testuser1");
        assert!(!json.to_string().contains("encodedvalue"));
    }
}
