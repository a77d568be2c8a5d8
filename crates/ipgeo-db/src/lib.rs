pub mod connection;
pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::history_repository::HistoryRepository;
pub use repositories::user_repository::UserRepository;
