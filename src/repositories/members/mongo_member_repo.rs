//! MongoDB 회원 저장소
//!
//! `members` 컬렉션에 회원 문서를 저장합니다. `login_id`에 유니크 인덱스를 두어
//! 동시에 같은 ID로 가입하는 경우도 데이터베이스가 거부하도록 합니다.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use mongodb::{
    Collection, IndexModel,
    bson::{DateTime, doc, oid::ObjectId},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
};
use serde::{Deserialize, Serialize};

use crate::db::Database;
use crate::domain::entities::members::{Member, MemberId};
use crate::domain::value_objects::birth_date::BIRTH_DATE_FORMAT;
use crate::domain::value_objects::{BirthDate, Email, LoginId, Name, Password};
use crate::errors::{AppError, AppResult};

use super::member_repo::MemberRepository;

const COLLECTION_NAME: &str = "members";
const DUPLICATE_KEY_CODE: i32 = 11000;

/// `members` 컬렉션 문서
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub login_id: String,
    pub password_hash: String,
    pub name: String,
    /// `YYYY-MM-DD`
    pub birth_date: String,
    pub email: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl MemberDocument {
    fn from_member(member: &Member) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            login_id: member.login_id().as_str().to_string(),
            password_hash: member.password().as_encoded().to_string(),
            name: member.name().as_str().to_string(),
            birth_date: member.birth_date().to_iso_string(),
            email: member.email().as_str().to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn into_member(self) -> AppResult<Member> {
        let corrupted = |e: AppError| AppError::DatabaseError(format!("저장된 회원 데이터가 올바르지 않습니다: {}", e));

        let id = self
            .id
            .ok_or_else(|| AppError::DatabaseError("회원 문서에 _id가 없습니다".to_string()))?;
        let birth_date = NaiveDate::parse_from_str(&self.birth_date, BIRTH_DATE_FORMAT)
            .map_err(|e| AppError::DatabaseError(format!("저장된 생년월일을 해석할 수 없습니다: {}", e)))?;

        Ok(Member::reconstruct(
            MemberId::new(id.to_hex()),
            LoginId::reconstruct(self.login_id).map_err(corrupted)?,
            Password::reconstruct(self.password_hash).map_err(corrupted)?,
            Name::reconstruct(self.name).map_err(corrupted)?,
            BirthDate::reconstruct(birth_date),
            Email::reconstruct(self.email).map_err(corrupted)?,
        ))
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

/// MongoDB 기반 [`MemberRepository`] 구현
pub struct MongoMemberRepository {
    db: Arc<Database>,
}

impl MongoMemberRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<MemberDocument> {
        self.db.get_database().collection(COLLECTION_NAME)
    }

    /// `login_id` 유니크 인덱스를 생성합니다. 시작 시 한 번 호출합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let login_id_index = IndexModel::builder()
            .keys(doc! { "login_id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("login_id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_index(login_id_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        log::info!("members 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

#[async_trait]
impl MemberRepository for MongoMemberRepository {
    async fn find_by_login_id(&self, login_id: &str) -> AppResult<Option<Member>> {
        self.collection()
            .find_one(doc! { "login_id": login_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
            .map(MemberDocument::into_member)
            .transpose()
    }

    async fn exists_by_login_id(&self, login_id: &str) -> AppResult<bool> {
        let count = self
            .collection()
            .count_documents(doc! { "login_id": login_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(count > 0)
    }

    async fn insert(&self, member: Member) -> AppResult<Member> {
        let document = MemberDocument::from_member(&member);

        let result = self.collection().insert_one(&document).await.map_err(|e| {
            if is_duplicate_key(&e) {
                AppError::ConflictError("이미 사용 중인 로그인 ID입니다".to_string())
            } else {
                AppError::DatabaseError(e.to_string())
            }
        })?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::DatabaseError("삽입된 문서의 _id가 ObjectId가 아닙니다".to_string()))?;

        Ok(member.with_id(MemberId::new(id.to_hex())))
    }

    async fn update_password(&self, member: &Member) -> AppResult<()> {
        let result = self
            .collection()
            .update_one(
                doc! { "login_id": member.login_id().as_str() },
                doc! { "$set": {
                    "password_hash": member.password().as_encoded(),
                    "updated_at": DateTime::now(),
                } },
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        if result.matched_count == 0 {
            return Err(AppError::DatabaseError(format!(
                "비밀번호를 갱신할 회원이 없습니다: {}",
                member.login_id()
            )));
        }

        Ok(())
    }
}
