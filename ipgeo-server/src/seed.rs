//! Startup seeding of the development account

use crate::error::Result as ServerErrorResult;

use ipgeo_auth::password;
use ipgeo_config::AuthConfig;
use ipgeo_core::User;
use ipgeo_db::UserRepository;

use sqlx::SqlitePool;

/// Insert the configured seed account unless its email already exists.
/// No-op when seeding is not configured.
pub async fn ensure_seed_user(pool: &SqlitePool, auth: &AuthConfig) -> ServerErrorResult<()> {
    let (Some(email), Some(seed_password)) = (&auth.seed_email, &auth.seed_password) else {
        return Ok(());
    };

    let user = User::new(email.clone(), password::hash(seed_password)?);

    if UserRepository::insert_if_absent(pool, &user).await? {
        log::info!("Created seed user {}", email);
    } else {
        log::debug!("Seed user {} already exists", email);
    }

    Ok(())
}
