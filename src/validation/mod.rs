//! # Validation Module
//!
//! 회원 입력값 검증 규칙을 한곳에 모은 모듈입니다.
//!
//! - [`policy`] - 이름 붙은 임계값([`PolicySettings`])과 컴파일된 정규식을 가진 [`ValidationPolicy`]
//! - [`validators`] - 로그인 ID, 비밀번호, 이름, 이메일, 생년월일 형식 검증기
//! - [`birth_date_rule`] - 비밀번호에 생년월일이 포함되었는지 검사하는 교차 검증
//!
//! ```rust,ignore
//! use crate::validation::{PolicySettings, ValidationPolicy};
//!
//! let policy = ValidationPolicy::new(PolicySettings::default())?;
//! let login_id = policy.validate_login_id("TestUser1")?; // "testuser1"
//! ```

pub mod birth_date_rule;
pub mod policy;
pub mod validators;

pub use policy::{BirthDatePattern, PolicySettings, ValidationPolicy};
