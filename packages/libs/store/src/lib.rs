//! rowgate-store: MySQL 실행 계층
//!
//! `rowgate-sql`이 만든 문장을 sqlx 커넥션 풀로 실행하고, 결과 행을
//! 컬럼 순서를 유지한 JSON 맵으로 돌려줍니다.
//!
//! ```ignore
//! let store = Store::connect(&StoreConfig::from_env()?).await?;
//! let rows = store.search("Gamer", "2023").await?;
//! ```

mod bind;
pub mod config;
pub mod error;
mod rows;
mod store;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use store::Store;
