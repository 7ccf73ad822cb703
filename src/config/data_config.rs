//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 비밀번호 인코딩, 저장소, 서버 바인딩 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 인코딩 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordEncoderKind {
    /// 솔트가 포함된 적응형 해시 (기본값)
    Bcrypt,
    /// SHA-256 + base64 결정적 해시 (레거시 호환용)
    Sha256,
}

impl PasswordEncoderKind {
    /// 문자열에서 인코딩 방식을 파싱합니다. 알 수 없는 값은 `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "bcrypt" => Some(PasswordEncoderKind::Bcrypt),
            "sha256" | "sha-256" => Some(PasswordEncoderKind::Sha256),
            _ => None,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 정수이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        Self::resolve_bcrypt_cost(env::var("BCRYPT_COST").ok().as_deref(), &Environment::current())
    }

    /// 환경 변수 값과 실행 환경으로부터 bcrypt cost를 결정합니다.
    pub fn resolve_bcrypt_cost(raw: Option<&str>, env: &Environment) -> u32 {
        if let Some(raw) = raw {
            match raw.trim().parse::<u32>() {
                Ok(cost) if (4..=15).contains(&cost) => return cost,
                _ => log::warn!("BCRYPT_COST 값 '{}'이(가) 유효하지 않아 환경 기본값을 사용합니다", raw),
            }
        }

        Self::bcrypt_cost_for_env(env)
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }

    /// 사용할 비밀번호 인코딩 방식 (`PASSWORD_ENCODER`, 기본값 bcrypt)
    pub fn encoder_kind() -> PasswordEncoderKind {
        Self::resolve_encoder_kind(env::var("PASSWORD_ENCODER").ok().as_deref())
    }

    /// 환경 변수 값으로부터 인코딩 방식을 결정합니다.
    pub fn resolve_encoder_kind(raw: Option<&str>) -> PasswordEncoderKind {
        match raw {
            None => PasswordEncoderKind::Bcrypt,
            Some(value) => PasswordEncoderKind::parse(value).unwrap_or_else(|| {
                log::warn!("PASSWORD_ENCODER 값 '{}'을(를) 알 수 없어 bcrypt를 사용합니다", value);
                PasswordEncoderKind::Bcrypt
            }),
        }
    }
}

/// 회원 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberStoreKind {
    Mongo,
    Memory,
}

/// 저장소 선택 설정
pub struct StoreConfig;

impl StoreConfig {
    /// `MEMBER_STORE=memory`이면 인메모리 저장소, 그 외에는 MongoDB
    pub fn kind() -> MemberStoreKind {
        match env::var("MEMBER_STORE").map(|v| v.to_lowercase()) {
            Ok(v) if v == "memory" => MemberStoreKind::Memory,
            _ => MemberStoreKind::Mongo,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트를 반환합니다. 기본값: 8080
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소를 반환합니다. 기본값: "127.0.0.1"
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Development),
            4
        );
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Staging),
            10
        );
        assert_eq!(
            PasswordConfig::bcrypt_cost_for_env(&Environment::Production),
            12
        );
    }

    #[test]
    fn test_bcrypt_cost_override_bounds() {
        let prod = Environment::Production;
        assert_eq!(PasswordConfig::resolve_bcrypt_cost(Some("6"), &prod), 6);
        assert_eq!(PasswordConfig::resolve_bcrypt_cost(Some("3"), &prod), 12);
        assert_eq!(PasswordConfig::resolve_bcrypt_cost(Some("16"), &prod), 12);
        assert_eq!(PasswordConfig::resolve_bcrypt_cost(Some("abc"), &prod), 12);
        assert_eq!(PasswordConfig::resolve_bcrypt_cost(None, &Environment::Test), 4);
    }

    #[test]
    fn test_encoder_kind_resolution() {
        assert_eq!(PasswordConfig::resolve_encoder_kind(None), PasswordEncoderKind::Bcrypt);
        assert_eq!(PasswordConfig::resolve_encoder_kind(Some("SHA256")), PasswordEncoderKind::Sha256);
        assert_eq!(PasswordConfig::resolve_encoder_kind(Some("md5")), PasswordEncoderKind::Bcrypt);
    }
}
