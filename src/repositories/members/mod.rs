//! 회원 데이터 액세스 계층
//!
//! [`MemberRepository`] 트레이트를 포트로 두고 MongoDB와 인메모리 구현을 제공합니다.
//! 서비스는 `Arc<dyn MemberRepository>`로 구현체를 주입받습니다.
//!
//! ```rust,ignore
//! use crate::repositories::members::{MemberRepository, MongoMemberRepository};
//!
//! let repo: Arc<dyn MemberRepository> = Arc::new(MongoMemberRepository::new(database));
//! let member = repo.find_by_login_id("testuser1").await?;
//! ```

pub mod in_memory_member_repo;
pub mod member_repo;
pub mod mongo_member_repo;

pub use in_memory_member_repo::InMemoryMemberRepository;
pub use member_repo::MemberRepository;
pub use mongo_member_repo::{MemberDocument, MongoMemberRepository};
