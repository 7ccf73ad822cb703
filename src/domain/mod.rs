//! # Domain Layer Module
//!
//! 회원 도메인의 비즈니스 규칙을 담당하는 계층입니다.
//! Domain-Driven Design (DDD) 원칙에 따라 값 객체와 애그리거트로 구성됩니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── ValueObjects - 스스로 검증하는 식별 정보 (LoginId, Password, Name, Email, BirthDate)
//! ├── Entities     - 회원 애그리거트 (Member)
//! ├── DTOs         - 요청/응답 데이터 전송 객체
//! └── Models       - 요청 헤더 기반 자격 증명
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Entity` | [`entities`] | 회원 애그리거트 |
//! | `@Embeddable` | [`value_objects`] | 자기 검증 값 객체 |
//! | `@RequestBody` / `@ResponseBody` | [`dto`] | API 계약 정의 |
//! | `HandlerMethodArgumentResolver` | [`models`] | 헤더 자격 증명 추출 |

pub mod dto;
pub mod entities;
pub mod models;
pub mod value_objects;
