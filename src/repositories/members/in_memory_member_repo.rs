//! 인메모리 회원 저장소
//!
//! 테스트와 `MEMBER_STORE=memory` 로컬 실행에 사용합니다. 프로세스가 끝나면 데이터가 사라집니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::members::{Member, MemberId};
use crate::errors::{AppError, AppResult};

use super::member_repo::MemberRepository;

#[derive(Default)]
pub struct InMemoryMemberRepository {
    members: RwLock<HashMap<String, Member>>,
}

impl InMemoryMemberRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned<E>(_: E) -> AppError {
        AppError::InternalError("회원 저장소 잠금이 손상되었습니다".to_string())
    }
}

#[async_trait]
impl MemberRepository for InMemoryMemberRepository {
    async fn find_by_login_id(&self, login_id: &str) -> AppResult<Option<Member>> {
        let members = self.members.read().map_err(Self::poisoned)?;
        Ok(members.get(login_id).cloned())
    }

    async fn exists_by_login_id(&self, login_id: &str) -> AppResult<bool> {
        let members = self.members.read().map_err(Self::poisoned)?;
        Ok(members.contains_key(login_id))
    }

    async fn insert(&self, member: Member) -> AppResult<Member> {
        let mut members = self.members.write().map_err(Self::poisoned)?;
        let key = member.login_id().as_str().to_string();

        if members.contains_key(&key) {
            return Err(AppError::ConflictError("이미 사용 중인 로그인 ID입니다".to_string()));
        }

        let saved = member.with_id(MemberId::new(Uuid::new_v4().to_string()));
        members.insert(key, saved.clone());
        Ok(saved)
    }

    async fn update_password(&self, member: &Member) -> AppResult<()> {
        let mut members = self.members.write().map_err(Self::poisoned)?;

        match members.get_mut(member.login_id().as_str()) {
            Some(stored) => {
                *stored = member.clone();
                Ok(())
            }
            None => Err(AppError::DatabaseError(format!(
                "비밀번호를 갱신할 회원이 없습니다: {}",
                member.login_id()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{BirthDate, Email, LoginId, Name, Password};
    use chrono::NaiveDate;

    fn member(login_id: &str, encoded: &str) -> Member {
        Member::register(
            LoginId::reconstruct(login_id).unwrap(),
            Password::reconstruct(encoded).unwrap(),
            Name::reconstruct("홍길동").unwrap(),
            BirthDate::reconstruct(NaiveDate::from_ymd_opt(1990, 1, 15).unwrap()),
            Email::reconstruct("test@example.com").unwrap(),
        )
    }

    #[actix_web::test]
    async fn test_insert_assigns_id_and_is_findable() {
        let repo = InMemoryMemberRepository::new();
        let saved = repo.insert(member("testuser1", "hash-a")).await.unwrap();

        assert!(saved.id().is_some());
        assert!(repo.exists_by_login_id("testuser1").await.unwrap());
        assert_eq!(repo.find_by_login_id("testuser1").await.unwrap(), Some(saved));
        assert!(repo.find_by_login_id("nobody").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_duplicate_insert_conflicts() {
        let repo = InMemoryMemberRepository::new();
        repo.insert(member("testuser1", "hash-a")).await.unwrap();

        let err = repo.insert(member("testuser1", "hash-b")).await.unwrap_err();
        assert!(matches!(err, AppError::ConflictError(_)));
    }

    #[actix_web::test]
    async fn test_update_password_is_read_your_writes() {
        let repo = InMemoryMemberRepository::new();
        let saved = repo.insert(member("testuser1", "hash-a")).await.unwrap();

        let changed = Member::reconstruct(
            saved.id().cloned().unwrap(),
            saved.login_id().clone(),
            Password::reconstruct("hash-b").unwrap(),
            saved.name().clone(),
            *saved.birth_date(),
            saved.email().clone(),
        );
        repo.update_password(&changed).await.unwrap();

        let found = repo.find_by_login_id("testuser1").await.unwrap().unwrap();
        assert_eq!(found.password().as_encoded(), "hash-b");
    }

    #[actix_web::test]
    async fn test_update_password_for_unknown_member_fails() {
        let repo = InMemoryMemberRepository::new();
        let err = repo.update_password(&member("ghost1", "hash")).await.unwrap_err();
        assert!(matches!(err, AppError::DatabaseError(_)));
    }
}
