//! # Configuration Module
//!
//! 회원 서비스의 설정 관리를 담당하는 모듈입니다.
//! Spring Framework의 `@Configuration` 클래스와 유사한 역할을 수행하며,
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 비밀번호 인코딩, 저장소, 서버 관련 설정
//! - [`validation_config`] - 로그인 ID/비밀번호/생년월일 검증 정책 임계값
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//!
//! # 비밀번호 인코딩
//! export PASSWORD_ENCODER="bcrypt"  # bcrypt | sha256
//! export BCRYPT_COST="12"           # 4-15 범위
//!
//! # 저장소
//! export MEMBER_STORE="mongo"       # mongo | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="commerce_member"
//! ```

pub mod data_config;
pub mod validation_config;

pub use data_config::*;
pub use validation_config::*;
