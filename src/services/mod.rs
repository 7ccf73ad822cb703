//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 저장소, 인코더, 검증 정책을 생성자로 주입받는 일반 구조체이며
//! `main`에서 한 번 조립되어 `web::Data`로 핸들러에 공유됩니다.
//!
//! - [`members`] - 회원 가입, 조회, 비밀번호 변경
//! - [`auth`] - 비밀번호 인코딩, 헤더 자격 증명 인증

pub mod auth;
pub mod members;
