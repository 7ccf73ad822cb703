//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 필수 문자열 검증, 공백 판별
//! - [`masking`] - 응답용 이름 마스킹
//! - [`blocking`] - 해싱 같은 CPU 집약 작업의 블로킹 풀 오프로딩

pub mod blocking;
pub mod masking;
pub mod string_utils;
