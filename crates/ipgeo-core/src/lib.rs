pub mod error;
pub mod ipv4;
pub mod models;

pub use error::error_location::ErrorLocation;
pub use error::{CoreError, Result};
pub use ipv4::is_valid_ipv4;
pub use models::geo_data::GeoData;
pub use models::history_record::HistoryRecord;
pub use models::principal::Principal;
pub use models::user::User;

#[cfg(test)]
mod tests;
