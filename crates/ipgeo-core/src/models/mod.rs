pub mod geo_data;
pub mod history_record;
pub mod principal;
pub mod user;
