use crate::User;

use uuid::Uuid;

/// Verified identity attached to a request after successful token
/// verification. Derived per request from the backing store; never persisted
/// and never cached across requests.
#[derive(Debug, Clone)]
pub struct Principal {
    pub id: Uuid,
    pub email: String,
}

impl From<User> for Principal {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
        }
    }
}
