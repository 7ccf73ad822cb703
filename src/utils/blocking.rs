//! CPU 집약 작업 오프로딩
//!
//! bcrypt 해싱/검증처럼 비용이 큰 동기 작업을 actix 런타임의 블로킹 스레드 풀에서
//! 실행해 요청 처리 워커가 멈추지 않게 합니다.

use crate::errors::{AppResult, ErrorContext};

/// 동기 작업을 블로킹 스레드 풀에서 실행하고 결과를 기다립니다.
///
/// 작업 스레드가 패닉하거나 취소되면 `InternalError`로 변환합니다.
pub async fn run_blocking<F, T>(task: F) -> AppResult<T>
where
    F: FnOnce() -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    actix_web::rt::task::spawn_blocking(task)
        .await
        .context("블로킹 작업 실행 실패")?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;

    #[actix_web::test]
    async fn test_run_blocking_returns_value() {
        let value = run_blocking(|| Ok(21 * 2)).await.unwrap();
        assert_eq!(value, 42);
    }

    #[actix_web::test]
    async fn test_run_blocking_propagates_error() {
        let result: AppResult<()> = run_blocking(|| Err(AppError::InternalError("boom".to_string()))).await;
        assert!(matches!(result, Err(AppError::InternalError(_))));
    }

    #[actix_web::test]
    async fn test_run_blocking_maps_panic_to_internal_error() {
        let result: AppResult<()> = run_blocking(|| panic!("worker died")).await;

        match result {
            Err(AppError::InternalError(message)) => {
                assert!(message.starts_with("블로킹 작업 실행 실패: "));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
