//! 회원 식별 정보 값 객체
//!
//! 각 값 객체는 생성 시 스스로를 검증하며, 생성된 이후에는 항상 유효합니다.
//! 생성 경로는 두 가지입니다.
//!
//! - `create` - 사용자 입력을 [`ValidationPolicy`](crate::validation::ValidationPolicy)로 검증
//! - `reconstruct` - 저장소에서 읽은 신뢰할 수 있는 값 복원 (빈 값만 거부)

pub mod birth_date;
pub mod email;
pub mod login_id;
pub mod name;
pub mod password;

pub use birth_date::BirthDate;
pub use email::Email;
pub use login_id::LoginId;
pub use name::Name;
pub use password::Password;
