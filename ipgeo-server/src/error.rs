use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] ipgeo_config::ConfigError),

    #[error("Auth error: {0}")]
    Auth(#[from] ipgeo_auth::AuthError),

    #[error("Database error: {0}")]
    Db(#[from] ipgeo_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },
}

pub type Result<T> = std::result::Result<T, ServerError>;
